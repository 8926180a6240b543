//! Enumeration of all optimal paths.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

use super::Cost;
use super::distance::DistanceMap;
use super::state::SearchState;

/// Distances plus every optimal predecessor of every finalized state.
///
/// A strictly cheaper relaxation replaces a state's predecessor set; an
/// equally cheap one joins it, including one arriving over a zero-cost edge
/// after the state was finalized. Zero-cost cycles therefore show up as
/// cycles in the predecessor graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths<S: SearchState> {
    start: S,
    distances: DistanceMap<S>,
    preds: HashMap<S, Vec<S>>,
}

impl<S: SearchState> ShortestPaths<S> {
    pub(crate) fn new(start: S, distances: DistanceMap<S>, mut preds: HashMap<S, Vec<S>>) -> Self {
        preds.retain(|state, _| distances.contains(state));
        Self {
            start,
            distances,
            preds,
        }
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn distances(&self) -> &DistanceMap<S> {
        &self.distances
    }

    /// Every state that reaches `state` on some optimal path in one step.
    pub fn predecessors(&self, state: &S) -> &[S] {
        self.preds.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// States lying on at least one optimal path to the cheapest of
    /// `targets`.
    ///
    /// Targets that are unreachable or more expensive than the best one are
    /// ignored, so passing "the exit tile with every facing" picks the
    /// optimal facings only. Returns an empty set when no target is
    /// reachable.
    pub fn states_on_optimal_paths<I>(&self, targets: I) -> HashSet<S>
    where
        I: IntoIterator<Item = S>,
    {
        let reached: Vec<(S, Cost)> = targets
            .into_iter()
            .filter_map(|target| self.distances.get(&target).map(|cost| (target, cost)))
            .collect();
        let Some(best) = reached.iter().map(|(_, cost)| *cost).min() else {
            return HashSet::new();
        };

        let mut seen: HashSet<S> = HashSet::new();
        let mut stack: Vec<S> = reached
            .into_iter()
            .filter(|(_, cost)| *cost == best)
            .map(|(target, _)| target)
            .collect();

        while let Some(state) = stack.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            stack.extend(
                self.predecessors(&state)
                    .iter()
                    .filter(|prev| !seen.contains(*prev))
                    .cloned(),
            );
        }
        seen
    }

    /// Like [`states_on_optimal_paths`](Self::states_on_optimal_paths) but
    /// projected, typically onto positions so that facings collapse.
    pub fn positions_on_optimal_paths<I, Q, F>(&self, targets: I, project: F) -> HashSet<Q>
    where
        I: IntoIterator<Item = S>,
        Q: Hash + Eq,
        F: Fn(&S) -> Q,
    {
        self.states_on_optimal_paths(targets)
            .iter()
            .map(project)
            .collect()
    }

    /// Number of distinct optimal paths from the start to `target`.
    ///
    /// A path ends as soon as it reaches the start. Zero when `target` is
    /// unreachable. Saturates at `u64::MAX`, which is also the answer when a
    /// zero-cost cycle lies on an optimal path (there are then infinitely
    /// many).
    pub fn count_optimal_paths(&self, target: &S) -> u64 {
        if !self.distances.contains(target) {
            return 0;
        }
        if self.has_cycle_behind(target) {
            return u64::MAX;
        }
        let cache = DpCache::builder()
            .backend(HashMapBackend::new())
            .problem(PathCount { paths: self })
            .build();
        cache.get(target)
    }

    /// Whether walking predecessors back from `target` (stopping at the
    /// start) can loop.
    fn has_cycle_behind(&self, target: &S) -> bool {
        let mut done: HashSet<S> = HashSet::new();
        let mut on_stack: HashSet<S> = HashSet::new();
        let mut stack: Vec<(S, usize)> = vec![(target.clone(), 0)];
        on_stack.insert(target.clone());

        while let Some((state, next)) = stack.pop() {
            let preds = self.optimal_steps_into(&state);
            let Some(prev) = preds.get(next) else {
                on_stack.remove(&state);
                done.insert(state);
                continue;
            };
            let prev = prev.clone();
            stack.push((state, next + 1));
            if on_stack.contains(&prev) {
                return true;
            }
            if !done.contains(&prev) {
                on_stack.insert(prev.clone());
                stack.push((prev, 0));
            }
        }
        false
    }

    /// Predecessors of `state`, none for the start.
    fn optimal_steps_into(&self, state: &S) -> &[S] {
        if *state == self.start {
            &[]
        } else {
            self.predecessors(state)
        }
    }
}

/// Path counts over an acyclic predecessor graph.
struct PathCount<'a, S: SearchState> {
    paths: &'a ShortestPaths<S>,
}

impl<S: SearchState> DpProblem<S, u64> for PathCount<'_, S> {
    fn deps(&self, state: &S) -> Vec<S> {
        self.paths.optimal_steps_into(state).to_vec()
    }

    fn compute(&self, state: &S, deps: Vec<u64>) -> u64 {
        if *state == self.paths.start {
            1
        } else {
            deps.into_iter().fold(0, u64::saturating_add)
        }
    }
}
