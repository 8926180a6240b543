//! Property-based tests for the grid shortest-path engine
//!
//! **Feature: grid-search**

use aoc_search::grid_search::{
    Cost, Dijkstra, DistanceMap, HeapFrontier, Point, ScanFrontier, shortest_distances,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Grid where entering an open cell costs its weight (possibly zero).
#[derive(Debug, Clone)]
struct WeightedGrid {
    rows: i32,
    cols: i32,
    open: Vec<bool>,
    weight: Vec<Cost>,
}

impl WeightedGrid {
    fn index(&self, p: Point) -> usize {
        (p.row * self.cols + p.col) as usize
    }

    fn is_open(&self, p: Point) -> bool {
        p.in_bounds(self.rows, self.cols) && self.open[self.index(p)]
    }

    fn neighbors(&self, p: &Point) -> Vec<(Point, Cost)> {
        p.neighbors4()
            .into_iter()
            .filter(|&n| self.is_open(n))
            .map(|n| (n, self.weight[self.index(n)]))
            .collect()
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Point::new(row, col)))
    }

    /// Relaxes every edge until nothing changes.
    fn bellman_ford(&self, start: Point) -> HashMap<Point, Cost> {
        let mut dist = HashMap::from([(start, 0)]);
        let mut changed = true;
        while changed {
            changed = false;
            for p in self.points() {
                let Some(&d) = dist.get(&p) else { continue };
                for (n, w) in self.neighbors(&p) {
                    let candidate = d + w;
                    if dist.get(&n).is_none_or(|&old| candidate < old) {
                        dist.insert(n, candidate);
                        changed = true;
                    }
                }
            }
        }
        dist
    }
}

/// Random grid up to `max_side - 1` cells a side, about half of the open
/// cells free to enter.
fn weighted_grid_within(max_side: i32) -> impl Strategy<Value = WeightedGrid> {
    (2..max_side, 2..max_side).prop_flat_map(|(rows, cols)| {
        let cells = (rows * cols) as usize;
        (
            prop::collection::vec(prop::bool::weighted(0.75), cells),
            prop::collection::vec(prop_oneof![Just(0u64), 1u64..5], cells),
        )
            .prop_map(move |(mut open, weight)| {
                open[0] = true;
                WeightedGrid {
                    rows,
                    cols,
                    open,
                    weight,
                }
            })
    })
}

fn weighted_grid() -> impl Strategy<Value = WeightedGrid> {
    weighted_grid_within(7)
}

fn heap_run(grid: &WeightedGrid) -> DistanceMap<Point> {
    Dijkstra::builder()
        .neighbors(|p: &Point| grid.neighbors(p))
        .frontier(HeapFrontier::new())
        .build()
        .shortest_distances(Point::new(0, 0))
}

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// States `s` with `dist(s) + d(s, target) == dist(target)`.
fn on_some_optimal_path(grid: &WeightedGrid, target: Point) -> HashSet<Point> {
    let from_start = grid.bellman_ford(Point::new(0, 0));
    let Some(&best) = from_start.get(&target) else {
        return HashSet::new();
    };
    from_start
        .iter()
        .filter(|&(&s, &d)| {
            grid.bellman_ford(s)
                .get(&target)
                .is_some_and(|&rest| d + rest == best)
        })
        .map(|(&s, _)| s)
        .collect()
}

/// Counts simple paths from the start to `target` costing exactly `best`.
fn count_simple_paths(grid: &WeightedGrid, target: Point, best: Cost) -> u64 {
    fn walk(
        grid: &WeightedGrid,
        at: Point,
        cost: Cost,
        target: Point,
        best: Cost,
        visited: &mut HashSet<Point>,
    ) -> u64 {
        if cost > best {
            return 0;
        }
        if at == target {
            return u64::from(cost == best);
        }
        let mut total = 0;
        for (next, w) in grid.neighbors(&at) {
            if visited.insert(next) {
                total += walk(grid, next, cost + w, target, best, visited);
                visited.remove(&next);
            }
        }
        total
    }

    let start = Point::new(0, 0);
    walk(grid, start, 0, target, best, &mut HashSet::from([start]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: grid-search, Property 1: Optimal distances**
    /// *For any* grid with non-negative weights, every reported distance
    /// equals the Bellman-Ford fixpoint and exactly the reachable states are
    /// reported.
    #[test]
    fn prop_distances_are_optimal(grid in weighted_grid()) {
        let dist = heap_run(&grid);
        let expected = grid.bellman_ford(Point::new(0, 0));
        prop_assert_eq!(dist.into_map(), expected);
    }

    /// **Feature: grid-search, Property 2: Frontier independence**
    /// *For any* grid, the heap and scan frontiers settle the same states in
    /// the same order with the same costs.
    #[test]
    fn prop_frontiers_agree(grid in weighted_grid()) {
        let heap = heap_run(&grid);
        let scan = Dijkstra::builder()
            .neighbors(|p: &Point| grid.neighbors(p))
            .frontier(ScanFrontier::new())
            .build()
            .shortest_distances(Point::new(0, 0));

        prop_assert_eq!(heap.settle_order(), scan.settle_order());
        prop_assert_eq!(heap.into_map(), scan.into_map());
    }

    /// **Feature: grid-search, Property 3: Monotone settle order**
    /// *For any* grid, costs along the settle order never decrease and the
    /// start is settled first at cost 0.
    #[test]
    fn prop_settle_order_monotone(grid in weighted_grid()) {
        let dist = heap_run(&grid);
        let order = dist.settle_order();
        prop_assert_eq!(order.first(), Some(&Point::new(0, 0)));
        prop_assert_eq!(dist.get(&Point::new(0, 0)), Some(0));
        for pair in order.windows(2) {
            prop_assert!(dist.get(&pair[0]) <= dist.get(&pair[1]));
        }
    }

    /// **Feature: grid-search, Property 4: Early exit agrees with full run**
    /// *For any* grid and goal, stopping at the goal reports the same goal
    /// cost as a full run, and every state it reports carries its final
    /// cost.
    #[test]
    fn prop_early_exit_agrees(grid in weighted_grid(), goal_row in 0i32..7, goal_col in 0i32..7) {
        let goal = Point::new(goal_row % grid.rows, goal_col % grid.cols);
        let full = heap_run(&grid);
        let partial = Dijkstra::builder()
            .neighbors(|p: &Point| grid.neighbors(p))
            .build()
            .shortest_distances_until(Point::new(0, 0), |p| *p == goal);

        prop_assert_eq!(partial.get(&goal), full.get(&goal));
        prop_assert_eq!(partial.goal().is_some(), full.contains(&goal));
        prop_assert!(partial.len() <= full.len());
        for (state, cost) in &partial {
            prop_assert_eq!(full.get(state), Some(*cost));
        }
    }

    /// **Feature: grid-search, Property 5: Cost ceiling**
    /// *For any* grid and ceiling, a capped run reports exactly the states of
    /// the full run whose cost is within the ceiling.
    #[test]
    fn prop_max_cost_filters(grid in weighted_grid(), ceiling in 0u64..12) {
        let full = heap_run(&grid);
        let capped = Dijkstra::builder()
            .neighbors(|p: &Point| grid.neighbors(p))
            .max_cost(ceiling)
            .build()
            .shortest_distances(Point::new(0, 0));

        let expected: HashMap<Point, Cost> = full
            .into_map()
            .into_iter()
            .filter(|&(_, cost)| cost <= ceiling)
            .collect();
        prop_assert_eq!(capped.into_map(), expected);
    }

    /// **Feature: grid-search, Property 6: Manhattan distances**
    /// *For any* open grid with unit moves, the distance to every cell is its
    /// Manhattan distance from the start.
    #[test]
    fn prop_open_grid_is_manhattan(rows in 1i32..9, cols in 1i32..9, row in 0i32..9, col in 0i32..9) {
        let start = Point::new(row % rows, col % cols);
        let dist = shortest_distances(start, |p: &Point| {
            p.neighbors4()
                .into_iter()
                .filter(|n| n.in_bounds(rows, cols))
                .map(|n| (n, 1))
                .collect()
        });

        prop_assert_eq!(dist.len(), (rows * cols) as usize);
        for (p, cost) in &dist {
            prop_assert_eq!(*cost, start.manhattan(*p));
        }
    }

    /// **Feature: grid-search, Property 7: Optimal path counting**
    /// *For any* open grid with unit moves, the number of optimal paths from
    /// one corner to a cell is the binomial coefficient of its offsets, and
    /// every cell in the spanned rectangle lies on one of them.
    #[test]
    fn prop_path_count_is_binomial(rows in 1i32..7, cols in 1i32..7) {
        let paths = Dijkstra::builder()
            .neighbors(|p: &Point| {
                p.neighbors4()
                    .into_iter()
                    .filter(|n| n.in_bounds(rows, cols))
                    .map(|n| (n, 1))
                    .collect()
            })
            .build()
            .shortest_paths(Point::new(0, 0));

        let corner = Point::new(rows - 1, cols - 1);
        let (r, c) = ((rows - 1) as u64, (cols - 1) as u64);
        prop_assert_eq!(paths.count_optimal_paths(&corner), binomial(r + c, r));
        prop_assert_eq!(
            paths.states_on_optimal_paths([corner]).len(),
            (rows * cols) as usize
        );
    }

    /// **Feature: grid-search, Property 8: States on optimal paths**
    /// *For any* grid with zero-cost moves allowed and any target, the states
    /// reported on optimal paths are exactly those whose distance plus their
    /// own distance to the target equals the target's distance.
    #[test]
    fn prop_states_on_optimal_paths_match(
        grid in weighted_grid_within(6),
        row in 0i32..6,
        col in 0i32..6,
    ) {
        let target = Point::new(row % grid.rows, col % grid.cols);
        let paths = Dijkstra::builder()
            .neighbors(|p: &Point| grid.neighbors(p))
            .build()
            .shortest_paths(Point::new(0, 0));

        prop_assert_eq!(
            paths.states_on_optimal_paths([target]),
            on_some_optimal_path(&grid, target)
        );
    }

    /// **Feature: grid-search, Property 9: Optimal path counts with zero-cost moves**
    /// *For any* small grid whose start cell costs something to re-enter, the
    /// optimal path count equals the number of simple paths of optimal cost,
    /// unless two adjacent free cells on optimal paths share a distance: that
    /// zero-cost cycle makes the count saturate.
    #[test]
    fn prop_path_count_matches_enumeration(
        mut grid in weighted_grid_within(5),
        row in 0i32..5,
        col in 0i32..5,
    ) {
        grid.weight[0] = 1;
        let target = Point::new(row % grid.rows, col % grid.cols);
        let paths = Dijkstra::builder()
            .neighbors(|p: &Point| grid.neighbors(p))
            .build()
            .shortest_paths(Point::new(0, 0));
        let count = paths.count_optimal_paths(&target);

        let Some(best) = paths.distances().get(&target) else {
            prop_assert_eq!(count, 0);
            return Ok(());
        };
        let on_paths = on_some_optimal_path(&grid, target);
        let free = |p: &Point| grid.weight[grid.index(*p)] == 0;
        let zero_cycle = on_paths.iter().filter(|p| free(*p)).any(|a| {
            a.neighbors4().into_iter().any(|b| {
                on_paths.contains(&b)
                    && free(&b)
                    && paths.distances().get(a) == paths.distances().get(&b)
            })
        });

        if zero_cycle {
            prop_assert_eq!(count, u64::MAX);
        } else {
            prop_assert_eq!(count, count_simple_paths(&grid, target, best));
        }
    }
}
