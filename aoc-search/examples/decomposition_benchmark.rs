//! Benchmark for counting vocabulary decompositions.
//!
//! Run with: cargo run --example decomposition_benchmark --release
//!
//! Generates a random vocabulary over a five-letter alphabet and a batch of
//! targets, then compares:
//! - A fresh DpCache per target (count_decompositions)
//! - One shared DecompositionSession for the whole batch
//! - par_count_each (one session per rayon worker)
//! - The unmemoized feasibility check

use aoc_search::sequence_search::{
    DecompositionSession, Vocabulary, count_decompositions, is_decomposable, par_count_each,
};
use std::time::Instant;

const ALPHABET: &[u8] = b"wubrg";
const NUM_TOKENS: usize = 400;
const NUM_TARGETS: usize = 400;
const TARGET_LEN: usize = 60;

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % bound as u64) as usize
    }

    fn word(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABET[self.next(ALPHABET.len())] as char)
            .collect()
    }
}

/// Tokens of length 1 to 8, skewed towards short ones
fn generate_vocabulary(rng: &mut Lcg) -> Vocabulary {
    let tokens: Vec<String> = (0..NUM_TOKENS)
        .map(|_| {
            let len = 1 + rng.next(3) + rng.next(3) + rng.next(3);
            rng.word(len)
        })
        .collect();
    Vocabulary::new(tokens).expect("generated tokens are never empty")
}

fn main() {
    println!("Decomposition Counting Benchmark");
    println!("================================\n");

    let mut rng = Lcg(42);
    let vocab = generate_vocabulary(&mut rng);
    let targets: Vec<String> = (0..NUM_TARGETS).map(|_| rng.word(TARGET_LEN)).collect();

    println!(
        "{} tokens (max length {}), {} targets of length {}",
        vocab.len(),
        vocab.max_len(),
        targets.len(),
        TARGET_LEN
    );
    println!("{} atomic tokens", vocab.atomic_tokens().len());

    // =========================================================================
    // Counting
    // =========================================================================
    println!("\n=== Counting ===");

    println!("Running fresh cache per target...");
    let start = Instant::now();
    let fresh_results: Vec<u64> = targets
        .iter()
        .map(|target| count_decompositions(target, &vocab))
        .collect();
    let fresh_time = start.elapsed();
    println!("Fresh cache per target:      {:?}", fresh_time);

    println!("Running shared session...");
    let start = Instant::now();
    let session = DecompositionSession::new(vocab.clone());
    let shared_results: Vec<u64> = targets.iter().map(|target| session.count(target)).collect();
    let shared_time = start.elapsed();
    println!("Shared session:              {:?}", shared_time);
    println!("  cached suffixes:           {}", session.cache_len());

    println!("Running par_count_each...");
    let start = Instant::now();
    let par_results = par_count_each(&targets, &vocab);
    let par_time = start.elapsed();
    println!("par_count_each:              {:?}", par_time);

    // =========================================================================
    // Feasibility
    // =========================================================================
    println!("\n=== Feasibility ===");

    println!("Running is_decomposable (unmemoized)...");
    let start = Instant::now();
    let feasible: Vec<bool> = targets
        .iter()
        .map(|target| is_decomposable(target, &vocab))
        .collect();
    let feasible_time = start.elapsed();
    println!("is_decomposable:             {:?}", feasible_time);

    // =========================================================================
    // Verification
    // =========================================================================
    println!("\nVerifying results...");

    let mismatches = (0..NUM_TARGETS)
        .filter(|&i| {
            fresh_results[i] != shared_results[i]
                || fresh_results[i] != par_results[i]
                || feasible[i] != (fresh_results[i] > 0)
        })
        .count();

    if mismatches == 0 {
        println!("✓ All strategies produce identical results!");
    } else {
        println!("✗ {} mismatches found!", mismatches);
    }

    let total = fresh_results.iter().fold(0u64, |acc, &n| acc.saturating_add(n));
    println!("\nDecomposable targets: {}", feasible.iter().filter(|&&f| f).count());
    println!("Total decompositions: {}", total);

    // =========================================================================
    // Summary
    // =========================================================================
    println!("\n=== Performance Summary ===");
    println!("  Fresh cache per target:     {:?}", fresh_time);
    println!("  Shared session:             {:?}", shared_time);
    println!("  par_count_each:             {:?}", par_time);
    println!("  is_decomposable:            {:?}", feasible_time);
    println!(
        "\nShared session vs fresh caches: {:.2}x faster",
        fresh_time.as_secs_f64() / shared_time.as_secs_f64()
    );
}
