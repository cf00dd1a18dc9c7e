//! Perfect maze generation

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::Result;
use crate::grid::Grid;
use crate::point::{Point, UNIT_STEPS};

/// A cell on the odd lattice together with the directions not yet tried from it.
struct Frame {
    cell: Point,
    directions: [Point; 4],
    next: usize,
}

/// Carves perfect mazes by randomized depth-first backtracking.
///
/// The random source is injected so that a seeded generator reproduces the
/// same maze. Generation walks the odd-coordinate lattice starting from
/// [MazeGenerator::ORIGIN]; each visited cell shuffles the four lattice
/// directions once and descends into the first still-walled candidate before
/// trying the remaining ones.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator backed by [StdRng], seeded when `seed` is given and from
    /// system entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        })
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub const ORIGIN: Point = Point::new(1, 1);

    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Creates a fresh grid of the given size and carves a maze into it.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        self.carve(&mut grid)?;
        Ok(grid)
    }

    /// Carves a maze into an all-wall `grid`.
    ///
    /// The work stack holds one [Frame] per cell on the current corridor, so
    /// the visiting order is the same as the recursive formulation without its
    /// call depth.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<()> {
        info!(
            "Carving {}x{} maze from {}",
            grid.width(),
            grid.height(),
            Self::ORIGIN
        );
        grid.set_passage_point(Self::ORIGIN)?;
        let mut stack = vec![self.frame(Self::ORIGIN)];
        let mut carved = 1;
        let mut max_depth = 1;

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.directions.len() {
                stack.pop();
                continue;
            }
            let step = frame.directions[frame.next];
            frame.next += 1;
            let cell = frame.cell;

            let candidate = cell + step.scale(2);
            if Self::inside_border(grid, candidate) && !grid.is_passage_point(candidate) {
                grid.set_passage_point(cell + step)?;
                grid.set_passage_point(candidate)?;
                carved += 1;
                let next = self.frame(candidate);
                stack.push(next);
                max_depth = max_depth.max(stack.len());
            }
        }
        debug!("Maximum corridor depth {}", max_depth);
        info!(
            "Carved {} lattice cells, {} passages in total",
            carved,
            grid.passage_count()
        );
        Ok(())
    }

    fn frame(&mut self, cell: Point) -> Frame {
        let mut directions = UNIT_STEPS;
        directions.shuffle(&mut self.random);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }

    /// Lattice cells must stay within `1..=dimension - 2` on both axes.
    fn inside_border(grid: &Grid, p: Point) -> bool {
        p.x >= 1 && p.y >= 1 && p.x <= grid.width() as i32 - 2 && p.y <= grid.height() as i32 - 2
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::grid::CellState;

    /// With an all-zero random source every shuffle rotates the canonical
    /// order +x, -x, +y, -y into -x, +y, -y, +x.
    #[test]
    fn fixed_source_produces_known_layout() {
        let mut generator = MazeGenerator::new(StepRng::new(0, 0));
        let grid = generator.generate(5, 5).unwrap();
        let expected = "\
#####
#.#.#
#.#.#
#...#
#####";
        assert_eq!(grid.to_string(), expected);

        use CellState::{Passage as P, Wall as W};
        #[rustfmt::skip]
        let cells = [
            W, W, W, W, W,
            W, P, W, P, W,
            W, P, W, P, W,
            W, P, P, P, W,
            W, W, W, W, W,
        ];
        assert_eq!(grid.cells(), &cells[..]);
    }

    #[test]
    fn smallest_grid_is_single_cell() {
        let grid = MazeGenerator::from_seed(Some(3)).generate(3, 3).unwrap();
        assert_eq!(grid.to_string(), "###\n#.#\n###");
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::from_seed(Some(42)).generate(31, 21).unwrap();
        let b = MazeGenerator::from_seed(Some(42)).generate(31, 21).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let mut generator = MazeGenerator::from_seed(Some(0));
        assert!(generator.generate(4, 5).is_err());
    }

    #[test]
    fn generated_maze_is_perfect() {
        let mut generator = MazeGenerator::from_seed(Some(0));
        let grid = generator.generate(21, 15).unwrap();
        assert!(grid.connectivity().is_perfect());
        // All 10x7 lattice cells plus one wall per tree edge.
        assert_eq!(grid.passage_count(), 70 + 69);
    }

    #[test]
    fn deep_corridors_do_not_overflow() {
        let grid = MazeGenerator::from_seed(Some(9)).generate(401, 401).unwrap();
        assert!(grid.connectivity().is_perfect());
    }
}
