//! Priority queue with membership test and in-place priority change.
//!
//! [`PriorityQueue`] is a binary heap accompanied by an index from an element
//! to its position in the heap. The index makes [`contains`] a hash lookup and
//! lets [`change_priority`] and [`remove`] work in *O(log n)* without scanning
//! the heap for the element.
//!
//! An entry is identified by its element only. There is never more than one
//! entry for the same element, and the priority of an element is changed
//! rather than the element being inserted again.
//!
//! [`contains`]: PriorityQueue::contains
//! [`change_priority`]: PriorityQueue::change_priority
//! [`remove`]: PriorityQueue::remove
//!
//! # Examples
//!
//! ```
//! use waypath::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::min();
//!
//! queue.insert("Prague", 328).unwrap();
//! queue.insert("Vienna", 293).unwrap();
//! queue.insert("Munich", 467).unwrap();
//!
//! queue.change_priority(&"Munich", 170).unwrap();
//!
//! assert_eq!(queue.extract_top(), Some(("Munich", 170)));
//! assert_eq!(queue.extract_top(), Some(("Vienna", 293)));
//! ```

use std::{borrow::Borrow, fmt, hash::Hash, mem};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Which end of the priority order is extracted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The lowest priority is extracted first.
    Min,
    /// The highest priority is extracted first.
    Max,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("element is already in the queue")]
pub struct DuplicateElementError<E, P> {
    pub element: E,
    pub priority: P,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("element is not in the queue")]
pub struct ElementNotFoundError<P>(pub P);

#[derive(Clone)]
pub struct PriorityQueue<E, P> {
    heap: Vec<(E, P)>,
    index: FxHashMap<E, usize>,
    order: Order,
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}

fn right(parent: usize) -> usize {
    parent * 2 + 2
}

impl<E, P> PriorityQueue<E, P>
where
    E: Eq + Hash + Clone,
    P: Ord,
{
    pub fn new(order: Order) -> Self {
        Self {
            heap: Vec::new(),
            index: FxHashMap::default(),
            order,
        }
    }

    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order,
        }
    }

    pub fn min() -> Self {
        Self::new(Order::Min)
    }

    pub fn max() -> Self {
        Self::new(Order::Max)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }

    /// Current priority of the element, if it is in the queue.
    pub fn priority<Q>(&self, element: &Q) -> Option<&P>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(element).map(|&pos| &self.heap[pos].1)
    }

    /// Adds a new element with the given priority.
    ///
    /// If the element is already in the queue, nothing is changed and both
    /// the element and the priority are returned back in the error. Use
    /// [`change_priority`](PriorityQueue::change_priority) to update the
    /// priority of a queued element.
    pub fn insert(&mut self, element: E, priority: P) -> Result<(), DuplicateElementError<E, P>> {
        if self.index.contains_key(&element) {
            return Err(DuplicateElementError { element, priority });
        }

        let pos = self.heap.len();
        self.index.insert(element.clone(), pos);
        self.heap.push((element, priority));
        self.sift_up(pos);

        Ok(())
    }

    /// Returns the top entry without removing it.
    pub fn peek(&self) -> Option<(&E, &P)> {
        self.heap.first().map(|(element, priority)| (element, priority))
    }

    /// Removes and returns the top entry, that is the one with the lowest
    /// priority for [min](Order::Min) queue and the highest priority for
    /// [max](Order::Max) queue.
    ///
    /// Ties are broken arbitrarily.
    pub fn extract_top(&mut self) -> Option<(E, P)> {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.remove_at(0))
        }
    }

    /// Moves the element to the position matching the new priority and
    /// returns the previous priority.
    ///
    /// If the element is not in the queue, the queue is left untouched and
    /// the new priority is returned back in the error.
    pub fn change_priority<Q>(
        &mut self,
        element: &Q,
        priority: P,
    ) -> Result<P, ElementNotFoundError<P>>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&pos) = self.index.get(element) else {
            return Err(ElementNotFoundError(priority));
        };

        let old = mem::replace(&mut self.heap[pos].1, priority);

        if self.precedes(&self.heap[pos].1, &old) {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }

        Ok(old)
    }

    /// Removes the element from the queue and returns its priority.
    pub fn remove<Q>(&mut self, element: &Q) -> Option<P>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = *self.index.get(element)?;
        Some(self.remove_at(pos).1)
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &P)> + '_ {
        self.heap.iter().map(|(element, priority)| (element, priority))
    }

    fn remove_at(&mut self, pos: usize) -> (E, P) {
        let (element, priority) = self.heap.swap_remove(pos);
        self.index.remove(&element);

        if pos < self.heap.len() {
            if let Some(moved) = self.index.get_mut(&self.heap[pos].0) {
                *moved = pos;
            }

            // The entry moved from the end can belong either above or below.
            self.sift_down(pos);
            self.sift_up(pos);
        }

        (element, priority)
    }

    fn precedes(&self, lhs: &P, rhs: &P) -> bool {
        match self.order {
            Order::Min => lhs < rhs,
            Order::Max => lhs > rhs,
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = parent(pos);
            if !self.precedes(&self.heap[pos].1, &self.heap[parent].1) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let mut top = pos;

            for child in [left(pos), right(pos)] {
                if child < self.heap.len()
                    && self.precedes(&self.heap[child].1, &self.heap[top].1)
                {
                    top = child;
                }
            }

            if top == pos {
                break;
            }

            self.swap(pos, top);
            pos = top;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }

        self.heap.swap(i, j);
        // Both entries are present in the index by invariant.
        if let Some(pos) = self.index.get_mut(&self.heap[i].0) {
            *pos = i;
        }
        if let Some(pos) = self.index.get_mut(&self.heap[j].0) {
            *pos = j;
        }
    }

    #[cfg(test)]
    fn check(&self) {
        assert_eq!(self.heap.len(), self.index.len());

        for (pos, (element, _)) in self.heap.iter().enumerate() {
            assert_eq!(self.index.get(element), Some(&pos));
        }

        for i in 1..self.heap.len() {
            assert!(!self.precedes(&self.heap[i].1, &self.heap[parent(i)].1));
        }
    }
}

impl<E, P> Default for PriorityQueue<E, P>
where
    E: Eq + Hash + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::min()
    }
}

impl<E: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("order", &self.order)
            .field("entries", &self.heap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::queue_ops,
        testing::{QueueModel, QueueOp},
    };

    use super::*;

    fn drain<E, P>(queue: &mut PriorityQueue<E, P>) -> Vec<(E, P)>
    where
        E: Eq + Hash + Clone,
        P: Ord,
    {
        let mut out = Vec::new();
        while let Some(entry) = queue.extract_top() {
            queue.check();
            out.push(entry);
        }
        out
    }

    #[test]
    fn min_order() {
        let mut queue = PriorityQueue::min();

        for (element, priority) in [("c", 3), ("a", 1), ("e", 5), ("b", 2), ("d", 4)] {
            queue.insert(element, priority).unwrap();
            queue.check();
        }

        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some((&"a", &1)));
        assert_eq!(
            drain(&mut queue),
            vec![("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn max_order() {
        let mut queue = PriorityQueue::max();

        for (element, priority) in [("c", 3), ("a", 1), ("e", 5), ("b", 2), ("d", 4)] {
            queue.insert(element, priority).unwrap();
        }

        assert_eq!(queue.order(), Order::Max);
        assert_eq!(
            drain(&mut queue),
            vec![("e", 5), ("d", 4), ("c", 3), ("b", 2), ("a", 1)]
        );
    }

    #[test]
    fn extract_empty() {
        let mut queue = PriorityQueue::<&str, u32>::min();

        assert_eq!(queue.extract_top(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn insert_duplicate_rejected() {
        let mut queue = PriorityQueue::min();
        queue.insert("a", 5).unwrap();

        assert_eq!(
            queue.insert("a", 1),
            Err(DuplicateElementError {
                element: "a",
                priority: 1
            })
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.priority("a"), Some(&5));
    }

    #[test]
    fn contains_ignores_priority() {
        let mut queue = PriorityQueue::<String, u32>::min();
        queue.insert("a".to_string(), 5).unwrap();

        assert!(queue.contains("a"));
        assert!(!queue.contains("b"));

        queue.extract_top();
        assert!(!queue.contains("a"));
    }

    #[test]
    fn change_priority_moves_both_ways() {
        let mut queue = PriorityQueue::min();

        for (element, priority) in [("a", 10), ("b", 20), ("c", 30), ("d", 40), ("e", 50)] {
            queue.insert(element, priority).unwrap();
        }

        assert_eq!(queue.change_priority(&"d", 5), Ok(40));
        queue.check();
        assert_eq!(queue.change_priority(&"a", 45), Ok(10));
        queue.check();

        assert_eq!(
            drain(&mut queue),
            vec![("d", 5), ("b", 20), ("c", 30), ("a", 45), ("e", 50)]
        );
    }

    #[test]
    fn change_priority_absent() {
        let mut queue = PriorityQueue::min();
        queue.insert("a", 1).unwrap();

        assert_matches!(queue.change_priority(&"b", 7), Err(ElementNotFoundError(7)));
        assert_eq!(queue.len(), 1);
        assert!(!queue.contains(&"b"));
    }

    #[test]
    fn remove_from_middle() {
        let mut queue = PriorityQueue::min();

        for (element, priority) in [("a", 1), ("b", 8), ("c", 2), ("d", 9), ("e", 10), ("f", 3)] {
            queue.insert(element, priority).unwrap();
        }

        assert_eq!(queue.remove(&"b"), Some(8));
        queue.check();
        assert_eq!(queue.remove(&"b"), None);

        assert_eq!(
            drain(&mut queue),
            vec![("a", 1), ("c", 2), ("f", 3), ("d", 9), ("e", 10)]
        );
    }

    #[test]
    fn clear() {
        let mut queue = PriorityQueue::max();
        queue.insert(1, 1).unwrap();
        queue.insert(2, 2).unwrap();

        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.contains(&1));
        assert_eq!(queue.insert(1, 3), Ok(()));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_min_queue_top_is_global_min(ops in queue_ops(16, 256)) {
            let mut model = QueueModel::new(Order::Min);
            prop_assert_eq!(model.apply_all(ops), Ok(()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_queue_top_is_global_max(ops in queue_ops(16, 256)) {
            let mut model = QueueModel::new(Order::Max);
            prop_assert_eq!(model.apply_all(ops), Ok(()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_heap_invariant_holds(ops in queue_ops(16, 256)) {
            let mut queue = PriorityQueue::min();

            for op in ops {
                match op {
                    QueueOp::Insert(element, priority) => {
                        let _ = queue.insert(element, priority);
                    }
                    QueueOp::ChangePriority(element, priority) => {
                        let _ = queue.change_priority(&element, priority);
                    }
                    QueueOp::Remove(element) => {
                        queue.remove(&element);
                    }
                    QueueOp::ExtractTop => {
                        queue.extract_top();
                    }
                }
                queue.check();
            }
        }
    }
}
