//! Dijkstra over an implicit state space.

use std::collections::HashMap;
use std::marker::PhantomData;

use log::{debug, trace};

use super::Cost;
use super::distance::DistanceMap;
use super::frontier::{Frontier, HeapFrontier};
use super::paths::ShortestPaths;
use super::problem::{ClosureProblem, SearchProblem};
use super::state::SearchState;

/// How a relaxation changed the best known cost of the target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relaxation {
    /// Strictly cheaper than anything seen before.
    Improved,
    /// Equal to the best known cost.
    Tied,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: Cost,
    settled: bool,
}

/// Configurable shortest-path engine.
///
/// Built with [`Dijkstra::builder`]. The frontier backend is reset on every
/// call, so one engine can run any number of independent searches.
///
/// # Example
///
/// ```rust
/// use aoc_search::grid_search::{Dijkstra, Point, ScanFrontier};
///
/// let mut engine = Dijkstra::builder()
///     .neighbors(|p: &Point| {
///         p.neighbors4()
///             .into_iter()
///             .filter(|n| n.in_bounds(3, 3))
///             .map(|n| (n, 1))
///             .collect()
///     })
///     .frontier(ScanFrontier::new())
///     .build();
///
/// let dist = engine.shortest_distances(Point::new(0, 0));
/// assert_eq!(dist.get(&Point::new(2, 2)), Some(4));
/// ```
pub struct Dijkstra<S, P, F> {
    problem: P,
    frontier: F,
    max_cost: Option<Cost>,
    _phantom: PhantomData<fn(S)>,
}

impl<S: SearchState> Dijkstra<S, (), HeapFrontier<S>> {
    /// Starts building an engine. A problem is required; the frontier
    /// defaults to [`HeapFrontier`] and there is no cost ceiling.
    pub fn builder() -> DijkstraBuilder<S, (), HeapFrontier<S>> {
        DijkstraBuilder {
            problem: (),
            frontier: HeapFrontier::new(),
            max_cost: None,
            _phantom: PhantomData,
        }
    }
}

impl<S, P, F> Dijkstra<S, P, F>
where
    S: SearchState,
    P: SearchProblem<S>,
    F: Frontier<S>,
{
    /// Distances to every state reachable from `start`.
    pub fn shortest_distances(&mut self, start: S) -> DistanceMap<S> {
        self.explore(start, |_| false, |_, _, _| {})
    }

    /// Like [`shortest_distances`](Self::shortest_distances) but stops as soon
    /// as a state matching `is_goal` is finalized.
    ///
    /// The returned map holds only finalized states; the goal that stopped
    /// the search is available through [`DistanceMap::goal`].
    pub fn shortest_distances_until<G>(&mut self, start: S, is_goal: G) -> DistanceMap<S>
    where
        G: Fn(&S) -> bool,
    {
        self.explore(start, is_goal, |_, _, _| {})
    }

    /// Full exploration that also keeps every optimal predecessor of each
    /// state, so all optimal paths can be enumerated afterwards.
    pub fn shortest_paths(&mut self, start: S) -> ShortestPaths<S> {
        let mut preds: HashMap<S, Vec<S>> = HashMap::new();
        let distances = self.explore(start.clone(), |_| false, |from, to, relaxation| {
            match relaxation {
                Relaxation::Improved => {
                    preds.insert(to.clone(), vec![from.clone()]);
                }
                Relaxation::Tied => {
                    let known = preds.entry(to.clone()).or_default();
                    if !known.contains(from) {
                        known.push(from.clone());
                    }
                }
            }
        });
        ShortestPaths::new(start, distances, preds)
    }

    fn explore<G, R>(&mut self, start: S, is_goal: G, mut record: R) -> DistanceMap<S>
    where
        G: Fn(&S) -> bool,
        R: FnMut(&S, &S, Relaxation),
    {
        self.frontier.clear();

        let mut entries: HashMap<S, Entry> = HashMap::new();
        let mut parent: HashMap<S, S> = HashMap::new();
        let mut order: Vec<S> = Vec::new();
        let mut goal = None;

        entries.insert(
            start.clone(),
            Entry {
                cost: 0,
                settled: false,
            },
        );
        self.frontier.push(start, 0);

        while let Some((state, cost)) = self.frontier.pop_min() {
            let Some(entry) = entries.get_mut(&state) else {
                continue;
            };
            if entry.settled || cost > entry.cost {
                continue;
            }
            entry.settled = true;
            order.push(state.clone());

            if is_goal(&state) {
                trace!("goal finalized at cost {}", cost);
                goal = Some(state);
                break;
            }

            for (next, edge_cost) in self.problem.neighbors(&state) {
                let Some(next_cost) = cost.checked_add(edge_cost) else {
                    continue;
                };
                if self.max_cost.is_some_and(|max| next_cost > max) {
                    continue;
                }

                match entries.get_mut(&next) {
                    Some(known) if known.settled => {
                        debug_assert!(
                            next_cost >= known.cost,
                            "finalized distance would decrease"
                        );
                        // zero-cost edge into an equally cheap, already
                        // finalized state
                        if next_cost == known.cost && next != state {
                            record(&state, &next, Relaxation::Tied);
                        }
                    }
                    Some(known) if next_cost > known.cost => {}
                    Some(known) if next_cost == known.cost => {
                        record(&state, &next, Relaxation::Tied);
                    }
                    Some(known) => {
                        known.cost = next_cost;
                        parent.insert(next.clone(), state.clone());
                        record(&state, &next, Relaxation::Improved);
                        self.frontier.push(next, next_cost);
                    }
                    None => {
                        entries.insert(
                            next.clone(),
                            Entry {
                                cost: next_cost,
                                settled: false,
                            },
                        );
                        parent.insert(next.clone(), state.clone());
                        record(&state, &next, Relaxation::Improved);
                        self.frontier.push(next, next_cost);
                    }
                }
            }
        }

        debug!(
            "dijkstra ({} frontier) settled {} of {} discovered states",
            self.frontier.name(),
            order.len(),
            entries.len()
        );

        let dist: HashMap<S, Cost> = entries
            .into_iter()
            .filter(|(_, entry)| entry.settled)
            .map(|(state, entry)| (state, entry.cost))
            .collect();
        parent.retain(|state, _| dist.contains_key(state));

        DistanceMap::new(dist, parent, order, goal)
    }
}

/// Builder for [`Dijkstra`], see [`Dijkstra::builder`].
pub struct DijkstraBuilder<S, P, F> {
    problem: P,
    frontier: F,
    max_cost: Option<Cost>,
    _phantom: PhantomData<fn(S)>,
}

impl<S, P, F> DijkstraBuilder<S, P, F> {
    pub fn problem<P2>(self, problem: P2) -> DijkstraBuilder<S, P2, F>
    where
        P2: SearchProblem<S>,
    {
        DijkstraBuilder {
            problem,
            frontier: self.frontier,
            max_cost: self.max_cost,
            _phantom: PhantomData,
        }
    }

    /// Shorthand for `.problem(ClosureProblem::new(neighbor_fn))`.
    pub fn neighbors<N>(self, neighbor_fn: N) -> DijkstraBuilder<S, ClosureProblem<S, N>, F>
    where
        N: Fn(&S) -> Vec<(S, Cost)>,
    {
        self.problem(ClosureProblem::new(neighbor_fn))
    }

    pub fn frontier<F2>(self, frontier: F2) -> DijkstraBuilder<S, P, F2>
    where
        F2: Frontier<S>,
    {
        DijkstraBuilder {
            problem: self.problem,
            frontier,
            max_cost: self.max_cost,
            _phantom: PhantomData,
        }
    }

    /// States whose cost would exceed `max_cost` are never discovered.
    pub fn max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = Some(max_cost);
        self
    }
}

impl<S, P, F> DijkstraBuilder<S, P, F>
where
    S: SearchState,
    P: SearchProblem<S>,
    F: Frontier<S>,
{
    pub fn build(self) -> Dijkstra<S, P, F> {
        Dijkstra {
            problem: self.problem,
            frontier: self.frontier,
            max_cost: self.max_cost,
            _phantom: PhantomData,
        }
    }
}

/// Distances from `start` to every reachable state.
///
/// # Example
///
/// ```rust
/// use aoc_search::grid_search::{shortest_distances, Point};
///
/// let wall = Point::new(1, 1);
/// let dist = shortest_distances(Point::new(0, 0), |p: &Point| {
///     p.neighbors4()
///         .into_iter()
///         .filter(|n| n.in_bounds(3, 3) && *n != wall)
///         .map(|n| (n, 1))
///         .collect()
/// });
/// assert_eq!(dist.get(&Point::new(2, 2)), Some(4));
/// assert_eq!(dist.get(&wall), None);
/// ```
pub fn shortest_distances<S, N>(start: S, neighbors: N) -> DistanceMap<S>
where
    S: SearchState,
    N: Fn(&S) -> Vec<(S, Cost)>,
{
    Dijkstra::builder()
        .neighbors(neighbors)
        .build()
        .shortest_distances(start)
}

/// Distances from `start`, stopping once a state matching `is_goal` is
/// finalized.
pub fn shortest_distances_until<S, N, G>(start: S, neighbors: N, is_goal: G) -> DistanceMap<S>
where
    S: SearchState,
    N: Fn(&S) -> Vec<(S, Cost)>,
    G: Fn(&S) -> bool,
{
    Dijkstra::builder()
        .neighbors(neighbors)
        .build()
        .shortest_distances_until(start, is_goal)
}
