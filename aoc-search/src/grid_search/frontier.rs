//! Frontier backends for the search engine.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::Cost;
use super::state::SearchState;

/// Discovered-but-not-finalized states.
///
/// Both backends pop the entry with the smallest `(cost, state)`, so they
/// settle states in the same order and produce identical distance maps.
///
/// # Contract
///
/// - `push` may be called again for a state already in the frontier; the
///   engine only ever does so with a strictly lower cost
/// - `pop_min` may return stale entries (a state with a cost higher than
///   one already popped); the engine skips those
pub trait Frontier<S> {
    fn push(&mut self, state: S, cost: Cost);

    /// Removes and returns the cheapest entry, ties broken by state order.
    fn pop_min(&mut self) -> Option<(S, Cost)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Short label used in log lines.
    fn name(&self) -> &'static str;
}

/// Binary heap with lazy deletion. The default backend.
#[derive(Debug)]
pub struct HeapFrontier<S> {
    heap: BinaryHeap<Reverse<(Cost, S)>>,
}

impl<S: Ord> HeapFrontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<S: Ord> Default for HeapFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> Frontier<S> for HeapFrontier<S> {
    fn push(&mut self, state: S, cost: Cost) {
        self.heap.push(Reverse((cost, state)));
    }

    fn pop_min(&mut self) -> Option<(S, Cost)> {
        self.heap.pop().map(|Reverse((cost, state))| (state, cost))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn name(&self) -> &'static str {
        "heap"
    }
}

/// Unordered set of states with a linear scan for the minimum.
///
/// O(n) per pop. Kept as a reference backend: small inputs, and a check that
/// the heap changes nothing observable.
#[derive(Debug)]
pub struct ScanFrontier<S> {
    costs: HashMap<S, Cost>,
}

impl<S: SearchState> ScanFrontier<S> {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }
}

impl<S: SearchState> Default for ScanFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> Frontier<S> for ScanFrontier<S> {
    fn push(&mut self, state: S, cost: Cost) {
        self.costs
            .entry(state)
            .and_modify(|known| *known = (*known).min(cost))
            .or_insert(cost);
    }

    fn pop_min(&mut self) -> Option<(S, Cost)> {
        let state = self
            .costs
            .iter()
            .min_by(|(s1, c1), (s2, c2)| c1.cmp(c2).then_with(|| s1.cmp(s2)))
            .map(|(state, _)| state.clone())?;
        let cost = self.costs.remove(&state)?;
        Some((state, cost))
    }

    fn len(&self) -> usize {
        self.costs.len()
    }

    fn clear(&mut self) {
        self.costs.clear();
    }

    fn name(&self) -> &'static str {
        "scan"
    }
}
