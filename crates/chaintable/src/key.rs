//! Key normalization
//!
//! Every table key is resolved to a [`Key`] once at the API boundary, then
//! normalized to an `i64` used only for bucket selection:
//! - `Int` passes through unchanged
//! - `Str` sums its UTF-8 bytes (weak by design: "ab" and "ba" collide)
//! - `Float` takes the ceiling; non-finite values are rejected
//! - `Bool` maps to 1/0, `Null` to the true-sentinel 1
//! - `Composite` is flattened to a string and fed through the string path
//!
//! Entry identity inside a chain is the structural equality of the original
//! [`Key`], never the normalized integer, so normalization collisions stay
//! distinct entries.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Maximum nesting depth accepted when flattening a composite key
const MAX_COMPOSITE_DEPTH: usize = 32;

/// A dynamically-typed table key
#[derive(Debug, Clone)]
pub enum Key {
    /// Integer key, used as-is
    Int(i64),
    /// String key, normalized by byte summation
    Str(String),
    /// Boolean key
    Bool(bool),
    /// Floating-point key, normalized by ceiling
    Float(f64),
    /// Null key; collides with `Bool(true)` by design
    Null,
    /// Composite key of nested key/value pairs
    Composite(Vec<(Key, Key)>),
}

impl Key {
    /// Normalize this key to the integer form used for bucket selection
    pub fn normalize(&self) -> Result<i64> {
        match self {
            Key::Int(n) => Ok(*n),
            Key::Str(s) => Ok(byte_sum(s)),
            Key::Bool(b) => Ok(i64::from(*b)),
            Key::Float(f) if f.is_finite() => Ok(f.ceil() as i64),
            Key::Float(_) => Err(Error::UnsupportedKey("non-finite float")),
            Key::Null => Ok(1),
            Key::Composite(items) => {
                let mut flat = String::new();
                flatten(items, 0, &mut flat)?;
                Ok(byte_sum(&flat))
            }
        }
    }
}

/// Sum of the string's UTF-8 bytes
fn byte_sum(s: &str) -> i64 {
    s.bytes().map(i64::from).sum()
}

/// Flatten nested key/value pairs by concatenating each key and value
fn flatten(items: &[(Key, Key)], depth: usize, out: &mut String) -> Result<()> {
    if depth >= MAX_COMPOSITE_DEPTH {
        return Err(Error::InvalidKey(format!(
            "composite key nested deeper than {} levels",
            MAX_COMPOSITE_DEPTH
        )));
    }
    for (k, v) in items {
        flatten_one(k, depth, out)?;
        flatten_one(v, depth, out)?;
    }
    Ok(())
}

fn flatten_one(key: &Key, depth: usize, out: &mut String) -> Result<()> {
    match key {
        Key::Composite(items) => flatten(items, depth + 1, out),
        Key::Float(f) if !f.is_finite() => Err(Error::UnsupportedKey("non-finite float")),
        scalar => {
            use fmt::Write;
            // Scalars render through Display; infallible for String
            let _ = write!(out, "{}", scalar);
            Ok(())
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => write!(f, "{}", s),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Float(x) => write!(f, "{}", x),
            Key::Null => write!(f, "null"),
            Key::Composite(items) => {
                write!(f, "{{")?;
                for (i, (k, v)) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Structural equality; floats compare bitwise so equality stays reflexive
// and consistent with the Hash impl below.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Str(a), Key::Str(b)) => a == b,
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::Null, Key::Null) => true,
            (Key::Composite(a), Key::Composite(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Int(n) => n.hash(state),
            Key::Str(s) => s.hash(state),
            Key::Bool(b) => b.hash(state),
            Key::Float(f) => f.to_bits().hash(state),
            Key::Null => {}
            Key::Composite(items) => items.hash(state),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n.into())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        Key::Float(f)
    }
}

impl From<Vec<(Key, Key)>> for Key {
    fn from(items: Vec<(Key, Key)>) -> Self {
        Key::Composite(items)
    }
}
