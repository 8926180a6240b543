//! Benchmark comparing Dijkstra frontier backends on random mazes.
//!
//! Run with: cargo run --example frontier_benchmark --release
//!
//! Each maze is a square grid where roughly a quarter of the cells are walls
//! and entering an open cell costs 1 to 9. The benchmark compares:
//! - HeapFrontier (binary heap, lazy deletion)
//! - ScanFrontier (linear scan for the minimum)
//! - Early exit at the far corner vs full exploration
//! - Sequential vs par_iter over many mazes

use aoc_search::grid_search::{Cost, Dijkstra, Frontier, HeapFrontier, Point, ScanFrontier};
use rayon::prelude::*;
use std::time::Instant;

// =============================================================================
// Maze Definition
// =============================================================================

struct Maze {
    size: i32,
    weights: Vec<Option<Cost>>,
}

impl Maze {
    /// Random maze with the two corners kept open
    fn generate(seed: u64, size: i32) -> Self {
        let mut rng = seed;
        let mut weights: Vec<Option<Cost>> = (0..size * size)
            .map(|_| {
                rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                let roll = (rng >> 33) % 100;
                (roll >= 25).then_some(1 + roll % 9)
            })
            .collect();
        weights[0] = Some(1);
        let last = weights.len() - 1;
        weights[last] = Some(1);
        Self { size, weights }
    }

    fn neighbors(&self, p: &Point) -> Vec<(Point, Cost)> {
        p.neighbors4()
            .into_iter()
            .filter(|n| n.in_bounds(self.size, self.size))
            .filter_map(|n| {
                self.weights[(n.row * self.size + n.col) as usize].map(|cost| (n, cost))
            })
            .collect()
    }

    fn exit(&self) -> Point {
        Point::new(self.size - 1, self.size - 1)
    }
}

/// Full exploration, returns the number of settled states and the exit cost
fn explore<F: Frontier<Point>>(maze: &Maze, frontier: F) -> (usize, Option<Cost>) {
    let dist = Dijkstra::builder()
        .neighbors(|p: &Point| maze.neighbors(p))
        .frontier(frontier)
        .build()
        .shortest_distances(Point::new(0, 0));
    (dist.len(), dist.get(&maze.exit()))
}

/// Stops once the exit is finalized
fn explore_until_exit<F: Frontier<Point>>(maze: &Maze, frontier: F) -> (usize, Option<Cost>) {
    let exit = maze.exit();
    let dist = Dijkstra::builder()
        .neighbors(|p: &Point| maze.neighbors(p))
        .frontier(frontier)
        .build()
        .shortest_distances_until(Point::new(0, 0), |p| *p == exit);
    (dist.len(), dist.get(&exit))
}

const MAZE_SIZE: i32 = 120;
const NUM_MAZES: usize = 40;
const SMALL_MAZE_SIZE: i32 = 40;

fn main() {
    println!("Dijkstra Frontier Benchmark");
    println!("===========================\n");

    let mazes: Vec<Maze> = (0..NUM_MAZES)
        .map(|i| Maze::generate(42 + i as u64, MAZE_SIZE))
        .collect();
    let small_mazes: Vec<Maze> = (0..NUM_MAZES)
        .map(|i| Maze::generate(42 + i as u64, SMALL_MAZE_SIZE))
        .collect();

    // =========================================================================
    // Big mazes - full exploration
    // =========================================================================
    println!("=== Big mazes ({}x{}, {} mazes) ===", MAZE_SIZE, MAZE_SIZE, NUM_MAZES);

    println!("Running HeapFrontier (full)...");
    let start = Instant::now();
    let heap_results: Vec<(usize, Option<Cost>)> = mazes
        .iter()
        .map(|maze| explore(maze, HeapFrontier::new()))
        .collect();
    let heap_time = start.elapsed();
    println!("HeapFrontier (full):         {:?}", heap_time);

    println!("Running HeapFrontier (early exit)...");
    let start = Instant::now();
    let heap_exit_results: Vec<(usize, Option<Cost>)> = mazes
        .iter()
        .map(|maze| explore_until_exit(maze, HeapFrontier::new()))
        .collect();
    let heap_exit_time = start.elapsed();
    println!("HeapFrontier (early exit):   {:?}", heap_exit_time);

    println!("Running HeapFrontier + par_iter...");
    let start = Instant::now();
    let heap_par_results: Vec<(usize, Option<Cost>)> = mazes
        .par_iter()
        .map(|maze| explore(maze, HeapFrontier::new()))
        .collect();
    let heap_par_time = start.elapsed();
    println!("HeapFrontier + par_iter:     {:?}", heap_par_time);

    // =========================================================================
    // Small mazes - heap vs scan
    // =========================================================================
    println!(
        "\n=== Small mazes ({}x{}, {} mazes) - heap vs scan ===",
        SMALL_MAZE_SIZE, SMALL_MAZE_SIZE, NUM_MAZES
    );

    println!("Running HeapFrontier...");
    let start = Instant::now();
    let small_heap_results: Vec<(usize, Option<Cost>)> = small_mazes
        .iter()
        .map(|maze| explore(maze, HeapFrontier::new()))
        .collect();
    let small_heap_time = start.elapsed();
    println!("HeapFrontier:                {:?}", small_heap_time);

    println!("Running ScanFrontier...");
    let start = Instant::now();
    let small_scan_results: Vec<(usize, Option<Cost>)> = small_mazes
        .iter()
        .map(|maze| explore(maze, ScanFrontier::new()))
        .collect();
    let small_scan_time = start.elapsed();
    println!("ScanFrontier:                {:?}", small_scan_time);

    // =========================================================================
    // Verification
    // =========================================================================
    println!("\nVerifying results...");

    let mut mismatches = 0;
    for i in 0..NUM_MAZES {
        let exit_cost = heap_results[i].1;
        if exit_cost != heap_exit_results[i].1
            || heap_results[i] != heap_par_results[i]
            || small_heap_results[i] != small_scan_results[i]
        {
            if mismatches < 5 {
                println!(
                    "Mismatch at maze {}: full={:?}, early={:?}, par={:?}",
                    i, exit_cost, heap_exit_results[i].1, heap_par_results[i].1
                );
            }
            mismatches += 1;
        }
    }

    if mismatches == 0 {
        println!("✓ All frontiers produce identical results!");
    } else {
        println!("✗ {} mismatches found!", mismatches);
    }

    println!("\nSample results:");
    for i in 0..3 {
        println!(
            "  Maze {}: exit cost = {:?}, settled {} (full) vs {} (early exit)",
            i, heap_results[i].1, heap_results[i].0, heap_exit_results[i].0
        );
    }

    // =========================================================================
    // Summary
    // =========================================================================
    println!("\n=== Performance Summary ===");

    println!("\nBig mazes ({}x{}):", MAZE_SIZE, MAZE_SIZE);
    println!("  HeapFrontier (full):        {:?}", heap_time);
    println!("  HeapFrontier (early exit):  {:?}", heap_exit_time);
    println!("  HeapFrontier + par_iter:    {:?}", heap_par_time);

    println!("\nSmall mazes ({}x{}):", SMALL_MAZE_SIZE, SMALL_MAZE_SIZE);
    println!("  HeapFrontier:               {:?}", small_heap_time);
    println!("  ScanFrontier:               {:?}", small_scan_time);

    println!(
        "\nScanFrontier vs HeapFrontier: {:.2}x slower",
        small_scan_time.as_secs_f64() / small_heap_time.as_secs_f64()
    );
    println!(
        "Early exit vs full exploration: {:.2}x faster",
        heap_time.as_secs_f64() / heap_exit_time.as_secs_f64()
    );
}
