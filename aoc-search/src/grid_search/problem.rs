//! Caller-supplied description of a state space.

use std::marker::PhantomData;

use super::Cost;

/// An implicit weighted graph.
///
/// The engine knows nothing about grids, walls or facings: bounds checks,
/// obstacles and cost rules (say 1 for a step, 1000 for a turn) all live in
/// [`neighbors`](Self::neighbors).
///
/// # Example
///
/// ```rust
/// use aoc_search::grid_search::{Cost, Point, SearchProblem};
///
/// struct OpenGrid {
///     size: i32,
/// }
///
/// impl SearchProblem<Point> for OpenGrid {
///     fn neighbors(&self, p: &Point) -> Vec<(Point, Cost)> {
///         p.neighbors4()
///             .into_iter()
///             .filter(|n| n.in_bounds(self.size, self.size))
///             .map(|n| (n, 1))
///             .collect()
///     }
/// }
/// ```
pub trait SearchProblem<S> {
    /// Every transition out of `state` with its non-negative cost.
    ///
    /// Must return a finite list. Duplicate targets are allowed; the cheapest
    /// wins.
    fn neighbors(&self, state: &S) -> Vec<(S, Cost)>;
}

/// Adapts a closure to [`SearchProblem`].
pub struct ClosureProblem<S, N>
where
    N: Fn(&S) -> Vec<(S, Cost)>,
{
    neighbor_fn: N,
    _phantom: PhantomData<fn(&S)>,
}

impl<S, N> ClosureProblem<S, N>
where
    N: Fn(&S) -> Vec<(S, Cost)>,
{
    pub fn new(neighbor_fn: N) -> Self {
        Self {
            neighbor_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S, N> SearchProblem<S> for ClosureProblem<S, N>
where
    N: Fn(&S) -> Vec<(S, Cost)>,
{
    fn neighbors(&self, state: &S) -> Vec<(S, Cost)> {
        (self.neighbor_fn)(state)
    }
}

impl<S, P> SearchProblem<S> for &P
where
    P: SearchProblem<S> + ?Sized,
{
    fn neighbors(&self, state: &S) -> Vec<(S, Cost)> {
        (**self).neighbors(state)
    }
}
