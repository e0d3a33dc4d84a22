//! Frontier structures: FIFO queue, LIFO stack and stable min-priority queue.

use std::cmp::Ordering;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::strategy::Strategy;

/// Discovered-but-not-yet-expanded nodes.
pub trait Frontier<N> {
    /// Insert `node`. `priority` is only used by priority frontiers.
    ///
    /// Frontiers that [`dedupe`](Self::dedupes) ignore a node that is
    /// already pending and return `false`.
    fn push(&mut self, node: N, priority: f64) -> bool;

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<N>;

    /// Whether `node` is pending.
    fn contains(&self, node: &N) -> bool;

    /// Number of stored entries, duplicates included.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether pending nodes are suppressed at insertion time.
    fn dedupes(&self) -> bool;

    /// Pending entries, next-to-pop first.
    fn snapshot(&self) -> Vec<N>;
}

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// Breadth-first frontier: oldest entry first, duplicates suppressed.
#[derive(Clone, Debug)]
pub struct FifoFrontier<N> {
    queue: VecDeque<N>,
    pending: HashSet<N>,
}

impl<N> Default for FifoFrontier<N> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            pending: HashSet::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Frontier<N> for FifoFrontier<N> {
    fn push(&mut self, node: N, _priority: f64) -> bool {
        if !self.pending.insert(node.clone()) {
            return false;
        }
        self.queue.push_back(node);
        true
    }

    fn pop(&mut self) -> Option<N> {
        let node = self.queue.pop_front()?;
        self.pending.remove(&node);
        Some(node)
    }

    fn contains(&self, node: &N) -> bool {
        self.pending.contains(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn dedupes(&self) -> bool {
        true
    }

    fn snapshot(&self) -> Vec<N> {
        self.queue.iter().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// LIFO
// ---------------------------------------------------------------------------

/// Depth-first frontier: newest entry first.
///
/// Duplicates are kept; the driver discards already-visited entries after
/// popping them. Membership is tracked with per-node entry counts.
#[derive(Clone, Debug)]
pub struct LifoFrontier<N> {
    stack: Vec<N>,
    counts: HashMap<N, usize>,
}

impl<N> Default for LifoFrontier<N> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            counts: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Frontier<N> for LifoFrontier<N> {
    fn push(&mut self, node: N, _priority: f64) -> bool {
        *self.counts.entry(node.clone()).or_insert(0) += 1;
        self.stack.push(node);
        true
    }

    fn pop(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        if let MapEntry::Occupied(mut e) = self.counts.entry(node.clone()) {
            *e.get_mut() -= 1;
            if *e.get() == 0 {
                e.remove();
            }
        }
        Some(node)
    }

    fn contains(&self, node: &N) -> bool {
        self.counts.contains_key(node)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn dedupes(&self) -> bool {
        false
    }

    fn snapshot(&self) -> Vec<N> {
        self.stack.iter().rev().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(priority, seq)`.
#[derive(Clone, Debug)]
struct Entry<N> {
    priority: f64,
    seq: u64,
    node: N,
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the smallest sequence number.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

/// Greedy best-first frontier: smallest priority first, earlier insertion
/// wins ties, duplicates suppressed.
#[derive(Clone, Debug)]
pub struct PriorityFrontier<N> {
    heap: BinaryHeap<Entry<N>>,
    pending: HashSet<N>,
    seq: u64,
}

impl<N> Default for PriorityFrontier<N> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: HashSet::new(),
            seq: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> Frontier<N> for PriorityFrontier<N> {
    fn push(&mut self, node: N, priority: f64) -> bool {
        if !self.pending.insert(node.clone()) {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            node,
        });
        true
    }

    fn pop(&mut self) -> Option<N> {
        let Entry { node, .. } = self.heap.pop()?;
        self.pending.remove(&node);
        Some(node)
    }

    fn contains(&self, node: &N) -> bool {
        self.pending.contains(node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn dedupes(&self) -> bool {
        true
    }

    fn snapshot(&self) -> Vec<N> {
        let mut entries: Vec<&Entry<N>> = self.heap.iter().collect();
        // Descending under the reversed Ord is pop order.
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| e.node.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// StrategyFrontier
// ---------------------------------------------------------------------------

/// The frontier matching a [`Strategy`], dispatched statically.
#[derive(Clone, Debug)]
pub enum StrategyFrontier<N> {
    Fifo(FifoFrontier<N>),
    Lifo(LifoFrontier<N>),
    Priority(PriorityFrontier<N>),
}

impl<N> StrategyFrontier<N> {
    /// Create an empty frontier for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Self::Fifo(FifoFrontier::default()),
            Strategy::DepthFirst => Self::Lifo(LifoFrontier::default()),
            Strategy::GreedyBestFirst => Self::Priority(PriorityFrontier::default()),
        }
    }
}

impl<N: Clone + Eq + Hash> Frontier<N> for StrategyFrontier<N> {
    fn push(&mut self, node: N, priority: f64) -> bool {
        match self {
            Self::Fifo(f) => f.push(node, priority),
            Self::Lifo(f) => f.push(node, priority),
            Self::Priority(f) => f.push(node, priority),
        }
    }

    fn pop(&mut self) -> Option<N> {
        match self {
            Self::Fifo(f) => f.pop(),
            Self::Lifo(f) => f.pop(),
            Self::Priority(f) => f.pop(),
        }
    }

    fn contains(&self, node: &N) -> bool {
        match self {
            Self::Fifo(f) => f.contains(node),
            Self::Lifo(f) => f.contains(node),
            Self::Priority(f) => f.contains(node),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Fifo(f) => f.len(),
            Self::Lifo(f) => f.len(),
            Self::Priority(f) => f.len(),
        }
    }

    fn dedupes(&self) -> bool {
        match self {
            Self::Fifo(f) => f.dedupes(),
            Self::Lifo(f) => f.dedupes(),
            Self::Priority(f) => f.dedupes(),
        }
    }

    fn snapshot(&self) -> Vec<N> {
        match self {
            Self::Fifo(f) => f.snapshot(),
            Self::Lifo(f) => f.snapshot(),
            Self::Priority(f) => f.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<i64>>(f: &mut F) -> Vec<i64> {
        std::iter::from_fn(|| f.pop()).collect()
    }

    #[test]
    fn fifo_order_and_dedup() {
        let mut f = FifoFrontier::default();
        assert!(f.push(1, 0.0));
        assert!(f.push(2, 0.0));
        assert!(!f.push(1, 0.0));
        assert!(f.contains(&1));
        assert_eq!(f.len(), 2);
        assert_eq!(f.snapshot(), vec![1, 2]);
        assert_eq!(drain(&mut f), vec![1, 2]);
        assert!(!f.contains(&1));
        assert!(f.is_empty());
    }

    #[test]
    fn fifo_allows_reinsert_after_pop() {
        let mut f = FifoFrontier::default();
        f.push(5, 0.0);
        assert_eq!(f.pop(), Some(5));
        assert!(f.push(5, 0.0));
    }

    #[test]
    fn lifo_order_keeps_duplicates() {
        let mut f = LifoFrontier::default();
        f.push(1, 0.0);
        f.push(2, 0.0);
        assert!(f.push(1, 0.0));
        assert_eq!(f.len(), 3);
        assert_eq!(f.snapshot(), vec![1, 2, 1]);
        assert_eq!(f.pop(), Some(1));
        // One copy of 1 is still pending.
        assert!(f.contains(&1));
        assert_eq!(drain(&mut f), vec![2, 1]);
        assert!(!f.contains(&1));
    }

    #[test]
    fn priority_smallest_first() {
        let mut f = PriorityFrontier::default();
        f.push(10, 3.0);
        f.push(20, 1.0);
        f.push(30, 2.0);
        assert_eq!(f.snapshot(), vec![20, 30, 10]);
        assert_eq!(drain(&mut f), vec![20, 30, 10]);
    }

    #[test]
    fn priority_ties_break_by_insertion_order() {
        let mut f = PriorityFrontier::default();
        for n in [7, 3, 9, 1, 5] {
            f.push(n, 1.0);
        }
        f.push(100, 0.5);
        assert_eq!(f.snapshot(), vec![100, 7, 3, 9, 1, 5]);
        assert_eq!(drain(&mut f), vec![100, 7, 3, 9, 1, 5]);
    }

    #[test]
    fn priority_dedup() {
        let mut f = PriorityFrontier::default();
        assert!(f.push(1, 5.0));
        assert!(!f.push(1, 0.0));
        assert_eq!(f.len(), 1);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn strategy_frontier_dispatch() {
        for (strategy, expected, dedupes) in [
            (Strategy::BreadthFirst, vec![1, 2, 3], true),
            (Strategy::DepthFirst, vec![3, 2, 1], false),
            (Strategy::GreedyBestFirst, vec![3, 2, 1], true),
        ] {
            let mut f = StrategyFrontier::new(strategy);
            f.push(1, 3.0);
            f.push(2, 2.0);
            f.push(3, 1.0);
            assert_eq!(f.dedupes(), dedupes);
            assert_eq!(f.snapshot(), expected);
            assert_eq!(drain(&mut f), expected);
        }
    }
}
