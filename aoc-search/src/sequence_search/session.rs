//! Memoized decomposition counting bound to one vocabulary.

use std::borrow::Borrow;

use log::{debug, trace};

use super::vocabulary::Vocabulary;
use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

/// Suffix-count cache over a borrowed or owned vocabulary.
pub(crate) type SuffixCounts<V> =
    DpCache<String, u64, HashMapBackend<String, u64>, Decomposition<V>>;

/// Fresh suffix-count cache borrowing `vocabulary`.
pub(crate) fn suffix_counts(vocabulary: &Vocabulary) -> SuffixCounts<&Vocabulary> {
    DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(Decomposition { vocabulary })
        .build()
}

/// Counting recurrence over target suffixes.
///
/// `count("") = 1`, an atomic token counts 1 on its own, and every other
/// suffix sums the counts of what remains after each matching token prefix.
#[derive(Debug, Clone)]
pub(crate) struct Decomposition<V> {
    vocabulary: V,
}

impl<V: Borrow<Vocabulary>> Decomposition<V> {
    fn is_leaf(&self, suffix: &str) -> bool {
        suffix.is_empty() || self.vocabulary.borrow().is_atomic(suffix)
    }
}

impl<V: Borrow<Vocabulary>> DpProblem<String, u64> for Decomposition<V> {
    fn deps(&self, suffix: &String) -> Vec<String> {
        if self.is_leaf(suffix) {
            return Vec::new();
        }
        self.vocabulary
            .borrow()
            .splits(suffix)
            .map(str::to_owned)
            .collect()
    }

    fn compute(&self, suffix: &String, deps: Vec<u64>) -> u64 {
        if self.is_leaf(suffix) {
            return 1;
        }
        deps.into_iter().fold(0, u64::saturating_add)
    }
}

/// A vocabulary plus the suffix counts computed against it.
///
/// Counting many targets through one session shares sub-results between
/// them. The cache only ever holds counts for the current vocabulary:
/// [`replace_vocabulary`](Self::replace_vocabulary) discards it.
///
/// # Example
///
/// ```rust
/// use aoc_search::sequence_search::{DecompositionSession, Vocabulary};
///
/// let vocab = Vocabulary::new(["r", "wr", "b", "g", "bwu", "rb", "gb", "br"]).unwrap();
/// let session = DecompositionSession::new(vocab);
/// assert_eq!(session.count("rrbgbr"), 6);
/// assert_eq!(session.count("ubwu"), 0);
/// assert!(session.cache_len() > 0);
/// ```
pub struct DecompositionSession {
    cache: SuffixCounts<Vocabulary>,
}

impl DecompositionSession {
    pub fn new(vocabulary: Vocabulary) -> Self {
        debug!(
            "decomposition session: {} tokens, {} atomic, max length {}",
            vocabulary.len(),
            vocabulary.atomic_tokens().len(),
            vocabulary.max_len()
        );
        let cache = DpCache::builder()
            .backend(HashMapBackend::new())
            .problem(Decomposition { vocabulary })
            .build();
        Self { cache }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.cache.problem().vocabulary
    }

    /// Number of ordered token sequences whose concatenation is `target`.
    ///
    /// The empty target has exactly one (the empty sequence). Saturates at
    /// `u64::MAX`.
    pub fn count(&self, target: &str) -> u64 {
        let count = self.cache.get(&target.to_owned());
        trace!("count({target:?}) = {count}, {} cached", self.cache.len());
        count
    }

    /// Whether `target` has at least one decomposition.
    ///
    /// Reuses a cached count when one exists, otherwise runs the
    /// short-circuiting search without touching the cache, so a later
    /// [`count`](Self::count) of the same target starts cold.
    pub fn is_decomposable(&self, target: &str) -> bool {
        let key = target.to_owned();
        if self.cache.is_cached(&key) {
            return self.cache.get(&key) > 0;
        }
        let vocabulary = self.vocabulary();
        vocabulary.contains(target) || vocabulary.can_build(target)
    }

    /// Number of suffixes with a memoized count.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Swaps in a new vocabulary, dropping every cached count, and returns the
    /// old one.
    pub fn replace_vocabulary(&mut self, vocabulary: Vocabulary) -> Vocabulary {
        let old = std::mem::replace(self, Self::new(vocabulary));
        old.cache.into_problem().vocabulary
    }
}
