//! # grid_maze
//!
//! Generates [perfect mazes](https://en.wikipedia.org/wiki/Maze_generation_algorithm)
//! on a grid by randomized depth-first backtracking and finds shortest routes
//! through them with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
//!
//! Passages are carved on the odd-coordinate lattice of a grid with odd
//! dimensions, so the outermost rows and columns always remain walls. The
//! search uses the Manhattan distance as its heuristic, which keeps it optimal
//! on the uniform-cost 4-grid. Searches can be observed after each expansion
//! or advanced step by step, which is what an animated display needs.
//!
//! ```
//! use grid_maze::{MazeGenerator, PathFinder, Point};
//!
//! let grid = MazeGenerator::from_seed(Some(7)).generate(21, 21).unwrap();
//! let outcome = PathFinder::new()
//!     .find_path(&grid, Point::new(1, 1), Point::new(19, 19))
//!     .unwrap();
//! let path = outcome.path.unwrap();
//! assert_eq!(path.first(), Some(&Point::new(1, 1)));
//! assert_eq!(path.last(), Some(&Point::new(19, 19)));
//! ```
mod astar;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod point;
pub mod solver;

pub use config::{MazeConfig, MazeRun};
pub use error::{MazeError, Result};
pub use generator::MazeGenerator;
pub use grid::{CellState, Connectivity, Grid};
pub use point::Point;
pub use solver::{
    ExploredSet, NoopObserver, PathFinder, Search, SearchObserver, SearchOutcome, SearchSnapshot,
    SearchStatus,
};

/// Shortest path from `start` to `end` with a default [PathFinder].
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Result<SearchOutcome> {
    PathFinder::new().find_path(grid, start, end)
}
