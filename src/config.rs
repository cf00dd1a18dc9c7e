use log::info;

use crate::error::Result;
use crate::generator::MazeGenerator;
use crate::grid::Grid;
use crate::point::Point;
use crate::solver::{PathFinder, SearchObserver, SearchOutcome};

/// Parameters of a generate-then-solve run.
///
/// The path runs between the two opposite lattice corners, `(1, 1)` and
/// `(width - 2, height - 2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for the maze layout; `None` draws one from system entropy.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: 51,
            height: 51,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.width as i32 - 2, self.height as i32 - 2)
    }

    /// Carves a new maze with these dimensions and seed.
    pub fn generate(&self) -> Result<Grid> {
        MazeGenerator::from_seed(self.seed).generate(self.width, self.height)
    }

    /// Generates a maze and solves it from [start](Self::start) to [end](Self::end).
    pub fn solve(&self) -> Result<MazeRun> {
        self.solve_with_observer(&mut crate::solver::NoopObserver)
    }

    /// Like [solve](Self::solve), reporting every expansion to `observer`.
    pub fn solve_with_observer<O>(&self, observer: &mut O) -> Result<MazeRun>
    where
        O: SearchObserver + ?Sized,
    {
        let grid = self.generate()?;
        let (start, end) = (self.start(), self.end());
        let outcome = PathFinder::new().find_path_with_observer(&grid, start, end, observer)?;
        info!(
            "Solved {}x{} maze: path of {:?} steps, {} cells explored",
            self.width,
            self.height,
            outcome.path_length(),
            outcome.explored.len()
        );
        Ok(MazeRun {
            grid,
            start,
            end,
            outcome,
        })
    }
}

/// Everything a presentation layer needs to draw a solved maze.
#[derive(Clone, Debug)]
pub struct MazeRun {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    pub outcome: SearchOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn default_endpoints() {
        let config = MazeConfig::default();
        assert_eq!(config.start(), Point::new(1, 1));
        assert_eq!(config.end(), Point::new(49, 49));
    }

    #[test]
    fn seeded_runs_repeat() {
        let config = MazeConfig::new(15, 11).with_seed(5);
        let a = config.solve().unwrap();
        let b = config.solve().unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.outcome.path, b.outcome.path);
        assert_eq!(a.outcome.explored, b.outcome.explored);
    }

    #[test]
    fn solved_path_spans_corners() {
        let run = MazeConfig::new(21, 21).with_seed(1).solve().unwrap();
        let path = run.outcome.path.unwrap();
        assert_eq!(path.first(), Some(&run.start));
        assert_eq!(path.last(), Some(&run.end));
    }

    #[test]
    fn invalid_config_is_reported() {
        assert_eq!(
            MazeConfig::new(10, 11).solve().unwrap_err(),
            MazeError::InvalidDimensions {
                width: 10,
                height: 11
            }
        );
    }
}
