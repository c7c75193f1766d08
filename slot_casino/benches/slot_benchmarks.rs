use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use slot_casino::{
    CasinoManager,
    casino::Player,
    ledger::{LedgerStore, MemoryLedger},
    slots::{HouseEdge, SlotMachine, payout, play_with_bias, roll},
};
use std::sync::Arc;

/// Benchmark a single unbiased roll
fn bench_roll(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("roll", |b| {
        b.iter(|| roll(&mut rng));
    });
}

/// Benchmark the paytable alone
fn bench_payout(c: &mut Criterion) {
    c.bench_function("payout_triple", |b| {
        b.iter(|| payout(&[3, 3, 3]));
    });
}

/// Benchmark the re-roll policy in each balance band
fn bench_play_with_bias(c: &mut Criterion) {
    let edge = HouseEdge::default();
    let mut group = c.benchmark_group("play_with_bias");

    for balance in [10i64, 50, 100] {
        let mut rng = StdRng::seed_from_u64(2);
        group.bench_with_input(BenchmarkId::from_parameter(balance), &balance, |b, &balance| {
            b.iter(|| play_with_bias(&mut rng, &edge, balance));
        });
    }

    group.finish();
}

/// Benchmark a full play through the coordinator with an in-memory ledger
fn bench_coordinated_play(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let ledger = Arc::new(MemoryLedger::new());
    let casino = CasinoManager::new(ledger.clone())
        .with_machine(SlotMachine::seeded(3, HouseEdge::default()));

    c.bench_function("coordinated_play", |b| {
        b.iter(|| {
            runtime.block_on(async {
                // Keep the balance topped up so every iteration plays
                ledger
                    .upsert(&Player::with_balance("bench", 1_000))
                    .await
                    .unwrap();
                casino.play("bench", 1).await.unwrap()
            })
        });
    });
}

criterion_group!(
    benches,
    bench_roll,
    bench_payout,
    bench_play_with_bias,
    bench_coordinated_play
);
criterion_main!(benches);
