use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sorted_merge::{MergeOptions, MergedIterator, SelectionStrategy, SortedSource, Value, VecSource};

const TOTAL_VALUES: usize = 100_000;

fn sorted_lists(k: usize, rng: &mut StdRng) -> Vec<Vec<Value>> {
    (0..k)
        .map(|_| {
            let mut list: Vec<Value> = (0..TOTAL_VALUES / k)
                .map(|_| rng.gen_range(0..1_000_000))
                .collect();
            list.sort();
            list
        })
        .collect()
}

fn drain(lists: &[Vec<Value>], strategy: SelectionStrategy) -> Value {
    let sources: Vec<Box<dyn SortedSource>> = lists
        .iter()
        .map(|l| Box::new(VecSource::new(l.clone())) as Box<dyn SortedSource>)
        .collect();
    let options = MergeOptions::default().with_strategy(strategy);
    let mut merged = MergedIterator::with_options(sources, options).unwrap();

    let mut last = 0;
    while merged.has_next() {
        last = merged.next_value().unwrap();
    }
    last
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("merge");

    for k in [2usize, 8, 64, 512] {
        let lists = sorted_lists(k, &mut rng);
        group.bench_with_input(BenchmarkId::new("linear_scan", k), &lists, |b, lists| {
            b.iter(|| drain(lists, SelectionStrategy::LinearScan))
        });
        group.bench_with_input(BenchmarkId::new("min_heap", k), &lists, |b, lists| {
            b.iter(|| drain(lists, SelectionStrategy::MinHeap))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
