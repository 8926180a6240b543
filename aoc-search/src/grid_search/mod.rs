//! Shortest-path search over implicit state spaces
//!
//! A state is any hashable, ordered value, typically a [`Point`] or a
//! [`State`] pairing a position with a discriminator such as a
//! [`Direction`]. The caller describes the graph through a neighbor function
//! ([`SearchProblem`]); the engine runs Dijkstra and hands back a
//! [`DistanceMap`].
//!
//! # Frontier Backends
//!
//! - [`HeapFrontier`]: Binary heap with lazy deletion (default)
//! - [`ScanFrontier`]: Linear scan for the minimum; same results, O(n) pops
//!
//! Ties between equal-cost states are broken by state order, so results and
//! settle orders are deterministic whichever backend is used.
//!
//! # Example: Turning Maze
//!
//! Moving forward costs 1, turning 90 degrees in place costs 1000:
//!
//! ```rust
//! use aoc_search::grid_search::{shortest_distances, Direction, Point, State};
//!
//! let maze = ["#####", "#...#", "#.#.#", "#...#", "#####"];
//! let open = |p: Point| maze[p.row as usize].as_bytes()[p.col as usize] != b'#';
//!
//! let start = State::new(Point::new(3, 1), Direction::East);
//! let dist = shortest_distances(start, |s: &State<Direction>| {
//!     let mut next = vec![
//!         (State::new(s.pos, s.disc.turn_cw()), 1000),
//!         (State::new(s.pos, s.disc.turn_ccw()), 1000),
//!     ];
//!     let ahead = s.pos.step(s.disc);
//!     if open(ahead) {
//!         next.push((State::new(ahead, s.disc), 1));
//!     }
//!     next
//! });
//!
//! let end = Point::new(1, 3);
//! assert_eq!(dist.min_over(|s| s.pos == end), Some(1004));
//! ```
//!
//! # Example: All Optimal Paths
//!
//! ```rust
//! use aoc_search::grid_search::{Dijkstra, Point};
//!
//! let mut engine = Dijkstra::builder()
//!     .neighbors(|p: &Point| {
//!         p.neighbors4()
//!             .into_iter()
//!             .filter(|n| n.in_bounds(2, 2))
//!             .map(|n| (n, 1))
//!             .collect()
//!     })
//!     .build();
//!
//! let paths = engine.shortest_paths(Point::new(0, 0));
//! let corner = Point::new(1, 1);
//! assert_eq!(paths.count_optimal_paths(&corner), 2);
//! assert_eq!(paths.states_on_optimal_paths([corner]).len(), 4);
//! ```

mod analysis;
mod distance;
mod engine;
mod frontier;
mod paths;
mod problem;
mod state;

/// Edge and path cost. Non-negative by construction.
pub type Cost = u64;

pub use analysis::{count_shortcuts, first_blocking_prefix, shortcut_savings};
pub use distance::DistanceMap;
pub use engine::{Dijkstra, DijkstraBuilder, shortest_distances, shortest_distances_until};
pub use frontier::{Frontier, HeapFrontier, ScanFrontier};
pub use paths::ShortestPaths;
pub use problem::{ClosureProblem, SearchProblem};
pub use state::{Direction, Point, SearchState, State};
