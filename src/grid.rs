use core::fmt;

use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{MazeError, Result};
use crate::point::Point;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Wall,
    Passage,
}

/// Rectangular maze grid with odd dimensions.
///
/// Cells at odd coordinates form the carve-able lattice, the outermost rows and
/// columns stay [CellState::Wall]. A grid starts out entirely walled; the
/// [MazeGenerator](crate::generator::MazeGenerator) opens passages through
/// `&mut Grid`, after which searches only ever borrow it immutably.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-wall grid. Both dimensions must be odd, at least 3 and
    /// addressable by `i32` coordinates.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        let valid = |d: usize| (3..=i32::MAX as usize).contains(&d) && d % 2 == 1;
        let len = width
            .checked_mul(height)
            .filter(|_| valid(width) && valid(height))
            .ok_or(MazeError::InvalidDimensions { width, height })?;
        Ok(Grid {
            width,
            height,
            cells: vec![CellState::Wall; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Cell state, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.in_bounds(x, y).then(|| self.cells[self.ix(x, y)])
    }

    pub fn get_point(&self, point: Point) -> Option<CellState> {
        self.get(point.x, point.y)
    }

    /// Whether (x, y) is an open cell. Out-of-bounds coordinates are simply not passages.
    pub fn is_passage(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(CellState::Passage)
    }

    pub fn is_passage_point(&self, point: Point) -> bool {
        self.is_passage(point.x, point.y)
    }

    /// Opens the cell at (x, y).
    pub fn set_passage(&mut self, x: i32, y: i32) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(MazeError::OutOfBounds {
                point: Point::new(x, y),
                width: self.width,
                height: self.height,
            });
        }
        let ix = self.ix(x, y);
        self.cells[ix] = CellState::Passage;
        Ok(())
    }

    pub fn set_passage_point(&mut self, point: Point) -> Result<()> {
        self.set_passage(point.x, point.y)
    }

    /// The four unit-step neighbours of (x, y) in the order +x, -x, +y, -y.
    /// Neighbours outside the grid are included; callers filter.
    pub fn neighbors4(&self, x: i32, y: i32) -> [Point; 4] {
        Point::new(x, y).neumann_neighborhood()
    }

    /// Neighbours of `point` that can be stepped onto, in canonical order.
    pub fn passable_neighbors(&self, point: &Point) -> SmallVec<[Point; 4]> {
        point
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.is_passage_point(*p))
            .collect()
    }

    /// Iterates over all open cells in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Point::new(x, y)))
            .filter(move |p| self.is_passage_point(*p))
    }

    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == CellState::Passage)
            .count()
    }

    /// Row-major view of the cell states for presentation consumers.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Builds a [UnionFind] over cell indices joining 4-adjacent passages.
    fn passage_components(&self) -> (UnionFind<usize>, usize) {
        let mut components = UnionFind::new(self.width * self.height);
        let mut cyclic_edges = 0;
        for p in self.passages() {
            let parent_ix = self.ix(p.x, p.y);
            // Only +x and +y, every edge is visited once.
            for n in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                if self.is_passage_point(n) && !components.union(parent_ix, self.ix(n.x, n.y)) {
                    cyclic_edges += 1;
                }
            }
        }
        (components, cyclic_edges)
    }

    /// Summarises the passage graph: vertex, edge and component counts.
    pub fn connectivity(&self) -> Connectivity {
        let (components, cyclic_edges) = self.passage_components();
        let mut roots = self
            .passages()
            .map(|p| components.find(self.ix(p.x, p.y)))
            .collect::<Vec<_>>();
        roots.sort_unstable();
        roots.dedup();
        let passages = self.passage_count();
        // Every successful union merged two components.
        Connectivity {
            passages,
            edges: passages - roots.len() + cyclic_edges,
            components: roots.len(),
        }
    }

    /// Checks whether two cells are passages connected through passages.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.is_passage_point(*start) || !self.is_passage_point(*goal) {
            return false;
        }
        let (components, _) = self.passage_components();
        components.equiv(self.ix(start.x, start.y), self.ix(goal.x, goal.y))
    }
}

/// Shape of the passage graph of a [Grid], where passages are vertices and
/// 4-adjacent passage pairs are edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connectivity {
    pub passages: usize,
    pub edges: usize,
    pub components: usize,
}

impl Connectivity {
    /// A perfect maze is a spanning tree: connected and `edges == passages - 1`.
    pub fn is_perfect(&self) -> bool {
        self.components == 1 && self.edges + 1 == self.passages
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.cells.chunks(self.width).map(|row| {
            row.iter()
                .map(|c| match c {
                    CellState::Wall => '#',
                    CellState::Passage => '.',
                })
                .join("")
        });
        write!(f, "{}", rows.format("\n"))
    }
}
