//! Search toolkit for grid and string puzzles
//!
//! - [`grid_search`]: Dijkstra over implicit state spaces, with
//!   interchangeable frontiers, early exit, and all-optimal-path tracking
//! - [`sequence_search`]: Whether, and in how many ways, a string splits into
//!   tokens from a fixed vocabulary
//! - [`utils::dp_cache`]: Memoized top-down dynamic programming with
//!   pluggable storage backends, used by both of the above
//!
//! Both searches log progress through the `log` facade at `debug` and
//! `trace` level; install any logger to see it.

pub mod error;
pub mod grid_search;
pub mod sequence_search;
pub mod utils;

pub use error::VocabularyError;
