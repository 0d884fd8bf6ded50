use core::hint::black_box;
use core::time::Duration;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use subprov::{
    BatchDriver, Imsi, LogNotifier, MemoryStore, SubscriberData, SyncEngine, TenantId, decompose,
    next_identifier,
};

// Identifiers stepped per benchmark iteration.
const TOTAL_IDS: usize = 4096;

// Subscribers provisioned per batch iteration.
const BATCH_SIZE: usize = 64;

const START: &str = "imsi-208930000000001";
const PLMN: &str = "20893";

fn bench_next_identifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("identifier");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("string/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let mut id = START.to_string();
            for _ in 0..TOTAL_IDS {
                id = next_identifier(black_box(&id)).unwrap();
            }
            black_box(id)
        });
    });

    group.bench_function(format!("parsed/elems/{TOTAL_IDS}"), |b| {
        let start = Imsi::parse(START).unwrap();
        b.iter(|| {
            for id in start.iter().take(TOTAL_IDS) {
                black_box(id);
            }
        });
    });

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let template = SubscriberData::default_template();
    let tenant = TenantId::new("tenant-1");

    c.bench_function("decompose/default_template", |b| {
        b.iter(|| decompose(black_box(&template), START, PLMN, &tenant).unwrap());
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function(format!("memory/elems/{BATCH_SIZE}"), |b| {
        b.iter_batched(
            MemoryStore::new,
            |store| {
                let engine = SyncEngine::new(&store, LogNotifier, TenantId::new("tenant-1"));
                let summary = BatchDriver::new(engine, SubscriberData::default_template())
                    .with_delay(Duration::ZERO)
                    .run(BATCH_SIZE, START, PLMN)
                    .unwrap();
                black_box(summary)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_next_identifier, bench_decompose, bench_batch);
criterion_main!(benches);
