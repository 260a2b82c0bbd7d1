//! A resumable variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! The search state lives in a [SearchContext] which is advanced one expansion at a time, so
//! callers can inspect costs and predecessors between steps.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Marks the start node, which has no predecessor.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry that got furthest from the
        // start, which is closest to the goal when the estimates tie
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Outcome of a single [SearchContext::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<C> {
    /// A node was expanded or a stale entry discarded, the goal has not been reached yet.
    Pending,
    /// The node at `index` satisfies the success predicate and was reached at `cost`.
    Found { index: usize, cost: C },
    /// The frontier is empty.
    Exhausted,
}

/// Search state of a single A* run: the frontier, the best known cost and predecessor of every
/// discovered node and, optionally, the set of nodes that are finalised.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    parents: FxIndexMap<N, (usize, C)>,
    closed: FxHashSet<usize>,
    use_closed_set: bool,
    expanded: usize,
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    /// With `use_closed_set` a node is expanded at most once; without it a node is re-opened
    /// whenever a cheaper way to reach it turns up.
    pub fn new(use_closed_set: bool) -> SearchContext<N, C> {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
            closed: FxHashSet::default(),
            use_closed_set,
            expanded: 0,
        }
    }

    /// Clears all state and seeds the frontier with `start`.
    pub fn reset(&mut self, start: &N, start_estimate: C) {
        self.to_see.clear();
        self.parents.clear();
        self.closed.clear();
        self.expanded = 0;
        self.parents
            .insert(start.clone(), (NO_PARENT, Zero::zero()));
        self.to_see.push(SmallestCostHolder {
            estimated_cost: start_estimate,
            cost: Zero::zero(),
            index: 0,
        });
    }

    /// Pops the most promising frontier entry and, unless it is the goal, relaxes its successors.
    pub fn step<FN, IN, FH, FS>(
        &mut self,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Step<C>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() else {
            return Step::Exhausted;
        };
        let successors = {
            let (node, &(_, c)) = self
                .parents
                .get_index(index)
                .expect("frontier entries index into the parent map");
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                return Step::Pending;
            }
            if self.use_closed_set && !self.closed.insert(index) {
                return Step::Pending;
            }
            if success(node) {
                return Step::Found { index, cost };
            }
            self.expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match self.parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if self.use_closed_set && self.closed.contains(&e.index()) {
                        continue;
                    }
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
                index: n,
            });
        }
        trace!(
            "Expanded node {}, {} frontier entries",
            index,
            self.to_see.len()
        );
        Step::Pending
    }

    /// Best known cost from the start, [None] for undiscovered nodes.
    pub fn cost_of(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }

    /// The predecessor on the best known path, [None] for the start and undiscovered nodes.
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        self.parents
            .get(node)
            .and_then(|&(p, _)| self.parents.get_index(p))
            .map(|(parent, _)| parent)
    }

    pub fn is_closed(&self, node: &N) -> bool {
        self.parents
            .get_index_of(node)
            .is_some_and(|ix| self.closed.contains(&ix))
    }

    /// Number of frontier entries, stale duplicates included.
    pub fn open_len(&self) -> usize {
        self.to_see.len()
    }

    /// Number of nodes whose successors have been generated.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Every node discovered so far together with its best known cost, in discovery order.
    pub fn discovered(&self) -> impl Iterator<Item = (&N, C)> + '_ {
        self.parents.iter().map(|(node, &(_, c))| (node, c))
    }

    /// Follows the predecessors from the node at `index` back to the start and returns the
    /// nodes in start-to-`index` order.
    pub fn path_to(&self, index: usize) -> Vec<N> {
        reverse_path(&self.parents, |&(p, _)| p, index)
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the context to completion on a line graph `0 - 1 - ... - 9` with an extra expensive
    /// shortcut `0 - 9`.
    fn run(use_closed_set: bool) -> (SearchContext<i32, i32>, Option<(Vec<i32>, i32)>) {
        let mut ct = SearchContext::new(use_closed_set);
        let successors = |n: &i32| {
            let mut v = vec![];
            if *n > 0 {
                v.push((n - 1, 1));
            }
            if *n < 9 {
                v.push((n + 1, 1));
            }
            if *n == 0 {
                v.push((9, 20));
            }
            v
        };
        let heuristic = |n: &i32| 9 - n;
        ct.reset(&0, heuristic(&0));
        let result = loop {
            match ct.step(successors, heuristic, |n| *n == 9) {
                Step::Pending => continue,
                Step::Found { index, cost } => break Some((ct.path_to(index), cost)),
                Step::Exhausted => break None,
            }
        };
        (ct, result)
    }

    #[test]
    fn finds_cheapest_line_path() {
        for use_closed_set in [false, true] {
            let (ct, result) = run(use_closed_set);
            let (path, cost) = result.unwrap();
            assert_eq!(path, (0..=9).collect::<Vec<_>>());
            assert_eq!(cost, 9);
            assert_eq!(ct.cost_of(&9), Some(9));
            assert_eq!(ct.parent_of(&9), Some(&8));
            assert_eq!(ct.parent_of(&0), None);
        }
    }

    #[test]
    fn exhausts_when_goal_is_missing() {
        let mut ct: SearchContext<i32, i32> = SearchContext::new(true);
        ct.reset(&0, 0);
        let mut steps = 0;
        loop {
            steps += 1;
            match ct.step(
                |n: &i32| if *n < 3 { vec![(n + 1, 1)] } else { vec![] },
                |_: &i32| 0,
                |_: &i32| false,
            ) {
                Step::Exhausted => break,
                Step::Found { .. } => panic!("no node satisfies the predicate"),
                Step::Pending => {}
            }
        }
        assert_eq!(ct.expanded(), 4);
        assert_eq!(steps, 5);
        assert!(ct.is_closed(&3));
        assert_eq!(ct.open_len(), 0);
    }

    #[test]
    fn reset_discards_previous_run() {
        let (mut ct, _) = run(true);
        ct.reset(&4, 5);
        assert_eq!(ct.discovered().count(), 1);
        assert_eq!(ct.cost_of(&4), Some(0));
        assert_eq!(ct.cost_of(&9), None);
        assert_eq!(ct.expanded(), 0);
        assert!(!ct.is_closed(&4));
    }
}
