use apriori::{mine_rules, AprioriConfig, PruneStrategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

/// Generate synthetic basket data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: Chance that each drawn item is kept (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<String>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx =
                (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut basket = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    basket.push(format!("item{}", rng.gen_range(0..num_items)));
                }
            }
            basket
        })
        .collect()
}

fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine_rules(black_box(tx), AprioriConfig::new(0.1, 0.5)));
        });
    }

    group.finish();
}

fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| mine_rules(black_box(&transactions), AprioriConfig::new(sup, 0.5)));
            },
        );
    }

    group.finish();
}

fn bench_prune_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_prune_strategy");

    // dense enough to reach levels of size four and up
    let transactions = generate_transactions(1000, 30, 12, 0.9);

    for (name, prune) in [("full", PruneStrategy::Full), ("legacy", PruneStrategy::Legacy)] {
        let config = AprioriConfig::new(0.1, 0.5).with_prune(prune);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| mine_rules(black_box(&transactions), config.clone()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_apriori_min_support,
    bench_prune_strategy
);
criterion_main!(benches);
