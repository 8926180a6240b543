//! Result of a shortest-distance search.

use std::collections::HashMap;
use std::collections::hash_map;

use super::Cost;
use super::state::SearchState;

/// Final distances from the start state.
///
/// Only finalized states are recorded, so every stored distance is exact.
/// A state missing from the map is unreachable (or, after an early exit or a
/// cost ceiling, simply not finalized); that is not an error.
#[derive(Debug, Clone)]
pub struct DistanceMap<S: SearchState> {
    dist: HashMap<S, Cost>,
    parent: HashMap<S, S>,
    order: Vec<S>,
    goal: Option<S>,
}

impl<S: SearchState> DistanceMap<S> {
    pub(crate) fn new(
        dist: HashMap<S, Cost>,
        parent: HashMap<S, S>,
        order: Vec<S>,
        goal: Option<S>,
    ) -> Self {
        Self {
            dist,
            parent,
            order,
            goal,
        }
    }

    pub fn get(&self, state: &S) -> Option<Cost> {
        self.dist.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.dist.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, S, Cost> {
        self.dist.iter()
    }

    /// States in the order they were finalized. Their costs never decrease.
    pub fn settle_order(&self) -> &[S] {
        &self.order
    }

    /// The goal state that stopped the search, if a goal predicate matched.
    pub fn goal(&self) -> Option<&S> {
        self.goal.as_ref()
    }

    /// Cheapest distance over all states matching `pred`.
    ///
    /// Useful when several states share a position, e.g. reaching the exit
    /// tile with any facing.
    pub fn min_over<F>(&self, mut pred: F) -> Option<Cost>
    where
        F: FnMut(&S) -> bool,
    {
        self.dist
            .iter()
            .filter(|&(state, _)| pred(state))
            .map(|(_, &cost)| cost)
            .min()
    }

    /// One optimal path from the start to `target`, start first.
    pub fn path_to(&self, target: &S) -> Option<Vec<S>> {
        if !self.contains(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.parent.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    pub fn into_map(self) -> HashMap<S, Cost> {
        self.dist
    }
}

impl<'a, S: SearchState> IntoIterator for &'a DistanceMap<S> {
    type Item = (&'a S, &'a Cost);
    type IntoIter = hash_map::Iter<'a, S, Cost>;

    fn into_iter(self) -> Self::IntoIter {
        self.dist.iter()
    }
}
