//! Memoization cache for recursive problems
//!
//! This module provides a cache for problems whose values depend on other
//! values in a directed acyclic graph: decomposition counts keyed by the
//! remaining suffix, path counts over a predecessor DAG, and so on.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Arbitrary hashable indices
//! - [`NoCacheBackend`]: Stores nothing; plain recursion for reference runs
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** A cyclic dependency graph recurses
//! until the stack overflows. Callers must make sure dependencies form a DAG.
//!
//! # Example: Trait-based API with Builder
//!
//! Monotone lattice paths to `(row, col)` moving only down or right:
//!
//! ```rust
//! use aoc_search::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct LatticePaths;
//!
//! impl DpProblem<(usize, usize), u64> for LatticePaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(LatticePaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4) = 70 paths
//! ```
//!
//! # Example: Closure-based API with ClosureProblem
//!
//! ```rust
//! use aoc_search::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
//!
//! let stairs = ClosureProblem::new(
//!     |n: &usize| (1..=3).filter(|s| s <= n).map(|s| n - s).collect(),
//!     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { deps.iter().sum() },
//! );
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(stairs)
//!     .build();
//! assert_eq!(cache.get(&4), 7);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, NoCacheBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};
