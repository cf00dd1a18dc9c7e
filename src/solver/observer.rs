use crate::astar::SearchContext;
use crate::point::Point;
use crate::solver::ExploredSet;

/// Read-only view of a search right after one node expansion.
pub struct SearchSnapshot<'a> {
    /// The node expanded last, `None` before the first expansion.
    pub current: Option<Point>,
    /// Every node popped so far, in expansion order.
    pub explored: &'a ExploredSet,
    pub(crate) frontier: Option<&'a SearchContext<Point, u32>>,
}

impl<'a> SearchSnapshot<'a> {
    /// Queued nodes, or `None` if the path finder was configured not to report
    /// them. A node can appear more than once when a cheaper route to it was
    /// found after it was first queued.
    pub fn frontier(&self) -> Option<impl Iterator<Item = Point> + 'a> {
        self.frontier.map(|context| context.frontier().copied())
    }

    pub fn frontier_len(&self) -> Option<usize> {
        self.frontier.map(|context| context.frontier_len())
    }
}

/// Receives a [SearchSnapshot] after every expansion, e.g. to draw the search
/// progressively. Notifications are informational; the search continues as soon
/// as the call returns.
///
/// Closures taking a `&SearchSnapshot` are observers as well.
pub trait SearchObserver {
    fn on_step(&mut self, snapshot: &SearchSnapshot<'_>);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchSnapshot<'_>),
{
    fn on_step(&mut self, snapshot: &SearchSnapshot<'_>) {
        self(snapshot)
    }
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_step(&mut self, _snapshot: &SearchSnapshot<'_>) {}
}
