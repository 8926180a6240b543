//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A memoization cache with lazy, recursive dependency resolution.
///
/// Each value is computed at most once per cache (unless the backend drops
/// it, see [`NoCacheBackend`](super::NoCacheBackend)). The cache is owned by
/// whoever owns the problem, so its lifetime is exactly the lifetime of the
/// problem definition: there is no process-wide memo table.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack overflows.
///
/// `DpCache` uses a `RefCell` and is therefore not `Sync`: give each thread
/// its own cache.
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K> DpCache<I, K, (), ()> {
    /// Starts building a cache. Both a backend and a problem are required
    /// before [`DpCacheBuilder::build`] becomes available.
    pub fn builder() -> DpCacheBuilder<I, K, (), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
            _phantom: PhantomData,
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Returns the value for `index`, computing it and its dependencies if
    /// they are not cached yet.
    pub fn get(&self, index: &I) -> K {
        let cached = self.backend.borrow().get(index).cloned();
        if let Some(value) = cached {
            return value;
        }

        // No borrow is held while recursing.
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        value
    }

    /// Returns whether `index` already has a cached value.
    pub fn is_cached(&self, index: &I) -> bool {
        self.backend.borrow().get(index).is_some()
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.borrow().is_empty()
    }

    /// Drops every cached value, keeping the problem.
    pub fn clear(&self) {
        self.backend.borrow_mut().clear();
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consumes the cache, returning the problem definition.
    pub fn into_problem(self) -> P {
        self.problem
    }
}

/// Builder for [`DpCache`], see [`DpCache::builder`].
pub struct DpCacheBuilder<I, K, B, P> {
    backend: B,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<I, K, B2, P>
    where
        B2: Backend<I, K>,
    {
        DpCacheBuilder {
            backend,
            problem: self.problem,
            _phantom: PhantomData,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<I, K, B, P2>
    where
        P2: DpProblem<I, K>,
    {
        DpCacheBuilder {
            backend: self.backend,
            problem,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn build(self) -> DpCache<I, K, B, P> {
        DpCache::with_problem(self.backend, self.problem)
    }
}
