//! Trait-based DP problem definition.

use std::marker::PhantomData;

/// A memoizable recursive problem.
///
/// Implement this trait to describe which sub-problems an index depends on
/// and how its value is combined from theirs. [`DpCache`](super::DpCache)
/// takes care of resolving dependencies and storing every value once.
///
/// # Type Parameters
///
/// - `I`: Index type (the sub-problem key)
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// Ways to climb `n` stairs taking 1 or 2 steps at a time:
///
/// ```rust
/// use aoc_search::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Stairs;
///
/// impl DpProblem<usize, u64> for Stairs {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         (1..=2).filter(|step| step <= n).map(|step| n - step).collect()
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { deps.iter().sum() }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(VecBackend::new())
///     .problem(Stairs)
///     .build();
/// assert_eq!(cache.get(&10), 89);
/// ```
pub trait DpProblem<I, K> {
    /// Returns the sub-problems `index` depends on.
    ///
    /// Base cases return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Combines the resolved dependency values into the value for `index`.
    ///
    /// `deps` holds one value per index returned by [`deps`](Self::deps), in
    /// the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a pair of closures to [`DpProblem`].
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<fn(&I, Vec<K>) -> K>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}
