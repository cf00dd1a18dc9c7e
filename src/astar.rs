//! This module implements a resumable variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which hands control back to the caller after every pop, so that a search can be
//! observed or paused between expansions.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Frontier entry. `index` points into the parents map of the owning context.
struct SmallestCostHolder<N, C> {
    estimated_cost: C,
    cost: C,
    node: N,
    index: usize,
}

impl<N: Eq, C: PartialEq> Eq for SmallestCostHolder<N, C> {}

impl<N: Eq, C: PartialEq> PartialEq for SmallestCostHolder<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.node.eq(&other.node)
    }
}

impl<N: Ord, C: Ord> PartialOrd for SmallestCostHolder<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, C: Ord> Ord for SmallestCostHolder<N, C> {
    /// [BinaryHeap] is a max-heap, so both keys are reversed: the smallest
    /// estimated cost pops first, and among equal estimates the smallest node
    /// in its natural order.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

/// Result of a single [SearchContext::step].
pub(crate) enum Visit<N, C> {
    /// The node was popped and its successors relaxed.
    Expanded(N),
    /// An outdated duplicate entry was popped and dropped.
    Stale,
    /// The goal was popped; holds the path from the start and its cost.
    Reached(Vec<N>, C),
    /// The frontier is empty.
    Exhausted,
}

/// Frontier and predecessor bookkeeping for one A* run.
///
/// `parents` maps every discovered node to the index of its predecessor and the
/// best known cost from the start, which doubles as the `cameFrom` map and the
/// g-score table.
pub(crate) struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<N, C>>,
    parents: FxIndexMap<N, (usize, C)>,
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone + Ord,
    C: Zero + Ord + Copy,
{
    /// A context whose frontier holds nothing; every step is [Visit::Exhausted].
    pub fn empty() -> Self {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
        }
    }

    pub fn new(start: N, estimated_cost: C) -> Self {
        let mut context = Self::empty();
        context.parents.insert(start.clone(), (usize::MAX, Zero::zero()));
        context.to_see.push(SmallestCostHolder {
            estimated_cost,
            cost: Zero::zero(),
            node: start,
            index: 0,
        });
        context
    }

    /// Nodes currently queued, including outdated duplicates.
    pub fn frontier(&self) -> impl Iterator<Item = &N> + '_ {
        self.to_see.iter().map(|holder| &holder.node)
    }

    pub fn frontier_len(&self) -> usize {
        self.to_see.len()
    }

    /// Best known cost from the start to `node`.
    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }

    /// Pops the most promising entry and relaxes its successors.
    pub fn step<FN, IN, FH, FS>(
        &mut self,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Visit<N, C>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() else {
            return Visit::Exhausted;
        };
        let node = match self.parents.get_index(index) {
            // A node may be queued several times if a cheaper way to it was found
            // after it was first pushed. Only the entry with the best cost counts.
            Some((_, &(_, c))) if cost > c => return Visit::Stale,
            Some((node, _)) => node.clone(),
            None => return Visit::Stale,
        };
        if success(&node) {
            let path = self.reverse_path(index);
            return Visit::Reached(path, cost);
        }
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match self.parents.entry(successor.clone()) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            self.to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                node: successor,
                index: n,
            });
        }
        Visit::Expanded(node)
    }

    /// Follows predecessor indices from `end` back to the start.
    fn reverse_path(&self, end: usize) -> Vec<N> {
        let mut i = end;
        let mut path: Vec<N> = std::iter::from_fn(|| {
            self.parents.get_index(i).map(|(node, &(parent, _))| {
                i = parent;
                node.clone()
            })
        })
        .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - 3 with a shortcut 0 -> 3 of cost 5.
    fn line_successors(n: &u32) -> Vec<(u32, u32)> {
        let mut succ = vec![];
        if *n > 0 {
            succ.push((n - 1, 1));
        }
        if *n < 3 {
            succ.push((n + 1, 1));
        }
        if *n == 0 {
            succ.push((3, 5));
        }
        succ
    }

    fn run(context: &mut SearchContext<u32, u32>, goal: u32) -> (Option<(Vec<u32>, u32)>, usize) {
        let mut expansions = 0;
        loop {
            match context.step(line_successors, |n| goal.abs_diff(*n), |n| *n == goal) {
                Visit::Expanded(_) => expansions += 1,
                Visit::Stale => {}
                Visit::Reached(path, cost) => return (Some((path, cost)), expansions),
                Visit::Exhausted => return (None, expansions),
            }
        }
    }

    #[test]
    fn prefers_cheaper_route_over_direct_edge() {
        let mut context = SearchContext::new(0, 3);
        let (result, expansions) = run(&mut context, 3);
        assert_eq!(result, Some((vec![0, 1, 2, 3], 3)));
        assert_eq!(expansions, 3);
        assert_eq!(context.cost(&3), Some(3));
    }

    #[test]
    fn start_is_goal() {
        let mut context = SearchContext::new(2, 0);
        let (result, expansions) = run(&mut context, 2);
        assert_eq!(result, Some((vec![2], 0)));
        assert_eq!(expansions, 0);
    }

    #[test]
    fn empty_context_is_exhausted() {
        let mut context: SearchContext<u32, u32> = SearchContext::empty();
        assert_eq!(context.frontier_len(), 0);
        assert!(matches!(
            context.step(line_successors, |_| 0, |_| true),
            Visit::Exhausted
        ));
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let mut context = SearchContext::new(0, 0);
        let (result, expansions) = run(&mut context, 7);
        assert_eq!(result, None);
        assert_eq!(expansions, 4);
    }

    #[test]
    fn ties_pop_smallest_node_first() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, node) in [(4, 9), (4, 2), (3, 7), (4, 5)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost: 0,
                node,
                index: 0,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.node)).collect::<Vec<u32>>();
        assert_eq!(order, vec![7, 2, 5, 9]);
    }
}
