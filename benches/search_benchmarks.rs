use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linked_bst::LinkedBst;

const N: usize = 2_000;
const PROBES: usize = 1_000;

// ─── Helper functions to generate the word list ─────────────────────────────

/// A simple LCG for deterministic pseudo-random sequences.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 33
    }
}

/// Distinct lowercase words in ascending order, like a dictionary file.
fn sorted_words(n: usize) -> Vec<String> {
    let mut rng = Lcg(12345);
    let mut words: Vec<String> = (0..n)
        .map(|i| {
            let len = 3 + (rng.next_u64() % 6) as usize;
            let mut word: String = (0..len).map(|_| char::from(b'a' + (rng.next_u64() % 26) as u8)).collect();
            // Suffix keeps every word distinct.
            word.push_str(&i.to_string());
            word
        })
        .collect();
    words.sort();
    words
}

/// Fisher-Yates shuffle driven by the LCG.
fn shuffled(words: &[String]) -> Vec<String> {
    let mut rng = Lcg(67890);
    let mut words = words.to_vec();
    for i in (1..words.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        words.swap(i, j);
    }
    words
}

/// Words to look up, sampled with replacement.
fn probes(words: &[String]) -> Vec<String> {
    let mut rng = Lcg(424242);
    (0..PROBES).map(|_| words[(rng.next_u64() % words.len() as u64) as usize].clone()).collect()
}

// ─── Search Benchmarks ──────────────────────────────────────────────────────

fn bench_search(c: &mut Criterion) {
    let words = sorted_words(N);
    let probes = probes(&words);
    let mut group = c.benchmark_group("word_search");

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(words.iter().position(|w| w == probe));
            }
        });
    });

    let mut tree = LinkedBst::new();
    for word in &words {
        tree.add(word.clone());
    }
    group.bench_function(BenchmarkId::new("LinkedBst/sorted", N), |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(tree.find(probe));
            }
        });
    });

    tree.clear();
    for word in shuffled(&words) {
        tree.add(word);
    }
    group.bench_function(BenchmarkId::new("LinkedBst/shuffled", N), |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(tree.find(probe));
            }
        });
    });

    tree.rebalance();
    group.bench_function(BenchmarkId::new("LinkedBst/rebalanced", N), |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(tree.find(probe));
            }
        });
    });

    group.finish();
}

// ─── Maintenance Benchmarks ─────────────────────────────────────────────────

fn bench_rebalance(c: &mut Criterion) {
    let words = sorted_words(N);
    let mut group = c.benchmark_group("rebalance");

    group.bench_function(BenchmarkId::new("LinkedBst/sorted", N), |b| {
        b.iter_batched(
            || words.iter().cloned().collect::<LinkedBst<_>>(),
            |mut tree| {
                tree.rebalance();
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("LinkedBst/iter", N), |b| {
        let tree: LinkedBst<_> = shuffled(&words).into_iter().collect();
        b.iter(|| tree.iter().count());
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_rebalance);
criterion_main!(benches);
