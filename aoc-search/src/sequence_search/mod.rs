//! Splitting strings into vocabulary tokens
//!
//! Given a [`Vocabulary`] and a target string, answers two questions:
//!
//! - [`is_decomposable`]: can the target be written as a concatenation of
//!   tokens (with repetition)? Plain recursion, stops at the first success.
//! - [`count_decompositions`]: how many distinct ordered token sequences
//!   concatenate to the target? Memoized on the remaining suffix through a
//!   [`DpCache`](crate::utils::dp_cache::DpCache).
//!
//! Use a [`DecompositionSession`] to count many targets against the same
//! vocabulary with a shared cache, or [`par_count_each`] to spread them over
//! a rayon pool.
//!
//! # Example
//!
//! ```rust
//! use aoc_search::sequence_search::{count_decompositions, is_decomposable, Vocabulary};
//!
//! let vocab = Vocabulary::new(["r", "wr", "b", "g", "bwu", "rb", "gb", "br"]).unwrap();
//!
//! assert!(is_decomposable("brwrr", &vocab));
//! assert_eq!(count_decompositions("brwrr", &vocab), 2);
//!
//! assert!(!is_decomposable("bbrgwb", &vocab));
//! assert_eq!(count_decompositions("bbrgwb", &vocab), 0);
//! ```

mod session;
mod vocabulary;

use rayon::prelude::*;

use session::suffix_counts;

pub use session::DecompositionSession;
pub use vocabulary::Vocabulary;

/// Whether `target` is a concatenation of vocabulary tokens.
///
/// The empty target always is. Not memoized: adversarial inputs can take
/// exponential time, use [`count_decompositions`] for those.
pub fn is_decomposable(target: &str, vocabulary: &Vocabulary) -> bool {
    vocabulary.contains(target) || vocabulary.can_build(target)
}

/// Number of distinct ordered token sequences concatenating to `target`.
///
/// Runs in `O(len(target) * max_len)` prefix lookups thanks to per-suffix
/// memoization; the vocabulary's atomic tokens were worked out when it was
/// built. The empty target counts 1.
pub fn count_decompositions(target: &str, vocabulary: &Vocabulary) -> u64 {
    suffix_counts(vocabulary).get(&target.to_owned())
}

/// Total decomposition count over all `targets`, sharing one cache.
pub fn count_all<I, T>(targets: I, vocabulary: &Vocabulary) -> u64
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let counts = suffix_counts(vocabulary);
    targets
        .into_iter()
        .map(|target| counts.get(&target.as_ref().to_owned()))
        .fold(0, u64::saturating_add)
}

/// Decomposition count of each target, computed in parallel.
///
/// Every rayon worker owns its own suffix cache; results come back in input
/// order and match sequential counting.
pub fn par_count_each<T>(targets: &[T], vocabulary: &Vocabulary) -> Vec<u64>
where
    T: AsRef<str> + Sync,
{
    targets
        .par_iter()
        .map_init(
            || suffix_counts(vocabulary),
            |counts, target| counts.get(&target.as_ref().to_owned()),
        )
        .collect()
}
