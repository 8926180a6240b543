//! Value types for grid-shaped state spaces.

use std::fmt;
use std::hash::Hash;

/// Anything usable as a search state.
///
/// `Ord` gives the frontier a deterministic tie-break between states of
/// equal cost, so distance maps and settle orders are reproducible.
pub trait SearchState: Clone + Eq + Hash + Ord {}

impl<T> SearchState for T where T: Clone + Eq + Hash + Ord {}

/// An integer grid coordinate, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring point one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    pub fn neighbors4(self) -> [Point; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    pub fn manhattan(self, other: Point) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// Whether the point lies in `0..rows` x `0..cols`.
    pub fn in_bounds(self, rows: i32, cols: i32) -> bool {
        (0..rows).contains(&self.row) && (0..cols).contains(&self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A facing on the grid. Rows grow southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row, col)` offset of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub const fn turn_cw(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn turn_ccw(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn opposite(self) -> Self {
        self.turn_cw().turn_cw()
    }
}

/// A position plus a caller-defined discriminator such as a facing.
///
/// Equality, hashing and ordering are structural; ordering compares the
/// position first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State<D = ()> {
    pub pos: Point,
    pub disc: D,
}

impl<D> State<D> {
    pub const fn new(pos: Point, disc: D) -> Self {
        Self { pos, disc }
    }
}

impl State<()> {
    pub const fn at(pos: Point) -> Self {
        Self { pos, disc: () }
    }
}
