use chaincache::{Key, LruCache, SharedCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_int_key_hot", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        let keys: Vec<Key> = (0..100i64).map(Key::from).collect();
        for key in &keys {
            cache.put(key.clone(), data.clone()).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.bench_function("get_string_key_hot", |b| {
        let mut cache = LruCache::new(1000);

        let keys: Vec<Key> = (0..100).map(|i| Key::from(format!("key-{}", i))).collect();
        for key in &keys {
            cache.put(key.clone(), 1u64).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        let keys: Vec<Key> = (0..100i64).map(Key::from).collect();
        for key in &keys {
            cache.put(key.clone(), data.clone()).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&keys[(counter as usize) % 100]).unwrap());
            } else {
                black_box(cache.put(counter as i64, data.clone()).unwrap());
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_at_capacity", |b| {
        let mut cache = LruCache::new(100);
        for i in 0..100i64 {
            cache.put(i, i).unwrap();
        }

        let mut counter = 100i64;
        b.iter(|| {
            // Every insert evicts the tail
            black_box(cache.put(counter, counter).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_shared_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_through_lock", |b| {
        let cache = SharedCache::new(1000);
        let keys: Vec<Key> = (0..100i64).map(Key::from).collect();
        for key in &keys {
            cache.put(key.clone(), 1u64).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_eviction_churn,
    bench_shared_handle
);
criterion_main!(benches);
