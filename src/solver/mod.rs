//! A* search over a finished maze.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{debug, info, warn};

use crate::astar::{SearchContext, Visit};
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::point::Point;

pub mod observer;

pub use observer::{NoopObserver, SearchObserver, SearchSnapshot};

/// Cost of a single step between adjacent passages.
pub const STEP_COST: u32 = 1;

/// Nodes popped from the frontier, in the order they were popped.
pub type ExploredSet = IndexSet<Point, FxBuildHasher>;

/// Manhattan distance, admissible and consistent for unit steps on a 4-grid.
pub fn heuristic(p1: &Point, p2: &Point) -> u32 {
    p1.manhattan_distance(p2) as u32 * STEP_COST
}

/// Shortest-path solver for maze grids.
///
/// Every search is a fresh A* run from `start` to `goal` over passage cells,
/// with the frontier ordered by `g + h` and ties broken by the natural
/// ordering of [Point].
#[derive(Clone, Debug)]
pub struct PathFinder {
    /// Whether observer snapshots include the frontier.
    pub report_frontier: bool,
}

impl Default for PathFinder {
    fn default() -> PathFinder {
        PathFinder {
            report_frontier: true,
        }
    }
}

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder::default()
    }

    fn check_bounds(grid: &Grid, point: Point) -> Result<()> {
        if grid.point_in_bounds(point) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                point,
                width: grid.width(),
                height: grid.height(),
            })
        }
    }

    /// Prepares a search that is advanced one expansion at a time with
    /// [Search::step]. Fails if either endpoint lies outside the grid.
    pub fn search<'g>(&self, grid: &'g Grid, start: Point, goal: Point) -> Result<Search<'g>> {
        Self::check_bounds(grid, start)?;
        Self::check_bounds(grid, goal)?;
        let context = if grid.is_passage_point(start) {
            SearchContext::new(start, heuristic(&start, &goal))
        } else {
            debug!("Start {} is a wall, nothing to expand", start);
            SearchContext::empty()
        };
        Ok(Search {
            grid,
            goal,
            context,
            explored: ExploredSet::default(),
            path: None,
            finished: None,
            expansions: 0,
            report_frontier: self.report_frontier,
        })
    }

    /// Computes the shortest path from `start` to `goal`.
    pub fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Result<SearchOutcome> {
        self.find_path_with_observer(grid, start, goal, &mut NoopObserver)
    }

    /// Computes the shortest path from `start` to `goal`, notifying `observer`
    /// after every expansion.
    pub fn find_path_with_observer<O>(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome>
    where
        O: SearchObserver + ?Sized,
    {
        let mut search = self.search(grid, start, goal)?;
        while let SearchStatus::Expanded(_) = search.step() {
            observer.on_step(&search.snapshot());
        }
        Ok(search.finish())
    }
}

/// What a call to [Search::step] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The node was expanded; the search can continue.
    Expanded(Point),
    /// The goal was reached.
    Found,
    /// The frontier ran empty without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, SearchStatus::Expanded(_))
    }
}

/// An A* search in progress. Created by [PathFinder::search].
pub struct Search<'g> {
    grid: &'g Grid,
    goal: Point,
    context: SearchContext<Point, u32>,
    explored: ExploredSet,
    path: Option<Vec<Point>>,
    finished: Option<SearchStatus>,
    expansions: usize,
    report_frontier: bool,
}

impl<'g> Search<'g> {
    /// Pops frontier entries until one node is expanded or the search ends.
    /// Once finished, keeps returning the final status.
    pub fn step(&mut self) -> SearchStatus {
        if let Some(status) = self.finished {
            return status;
        }
        let grid = self.grid;
        let goal = self.goal;
        loop {
            let visit = self.context.step(
                |node| {
                    grid.passable_neighbors(node)
                        .into_iter()
                        .map(|n| (n, STEP_COST))
                },
                |node| heuristic(node, &goal),
                |node| *node == goal,
            );
            match visit {
                Visit::Stale => continue,
                Visit::Expanded(node) => {
                    self.explored.insert(node);
                    self.expansions += 1;
                    return SearchStatus::Expanded(node);
                }
                Visit::Reached(path, cost) => {
                    self.explored.insert(goal);
                    info!(
                        "Reached {} at cost {} after {} expansions",
                        goal, cost, self.expansions
                    );
                    self.path = Some(path);
                    self.finished = Some(SearchStatus::Found);
                    return SearchStatus::Found;
                }
                Visit::Exhausted => {
                    warn!(
                        "{} could not be reached, frontier exhausted after {} expansions",
                        goal, self.expansions
                    );
                    self.finished = Some(SearchStatus::Exhausted);
                    return SearchStatus::Exhausted;
                }
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    /// Nodes waiting in the frontier, duplicates included.
    pub fn frontier(&self) -> impl Iterator<Item = Point> + '_ {
        self.context.frontier().copied()
    }

    /// Number of nodes expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Best known distance from the start to `point`, if it has been discovered.
    pub fn cost_to(&self, point: &Point) -> Option<u32> {
        self.context.cost(point)
    }

    /// The path, once the goal has been reached.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Snapshot of the current state, as handed to a [SearchObserver].
    pub fn snapshot(&self) -> SearchSnapshot<'_> {
        SearchSnapshot {
            current: self.explored.last().copied(),
            explored: &self.explored,
            frontier: self.report_frontier.then_some(&self.context),
        }
    }

    /// Runs the search to the end.
    pub fn finish(mut self) -> SearchOutcome {
        while !self.step().is_finished() {}
        SearchOutcome {
            path: self.path,
            explored: self.explored,
            expansions: self.expansions,
        }
    }
}

/// Result of a completed search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Cells from start to goal inclusive, or `None` if the goal is unreachable.
    pub path: Option<Vec<Point>>,
    pub explored: ExploredSet,
    pub expansions: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps along the path.
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}
