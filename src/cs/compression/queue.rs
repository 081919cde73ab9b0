//! Weight-ordered merge queue.
//!
//! Entries come out in ascending weight order. Entries of equal weight come
//! out in the order they were inserted, so a newly inserted entry sits just
//! before the first entry with a strictly greater weight. This tie-break
//! decides the tree shape (and therefore the codes) whenever weights collide.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::cs::compression::Result;
use crate::error::Error;

/// A queued node together with the weight it is ordered by.
#[derive(Debug, Clone)]
pub struct QueueEntry<T> {
    pub weight: usize,
    pub node: T,
    seq: u64,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower weight, then earlier arrival, should come first.
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue driving the merge loop.
#[derive(Debug, Clone)]
pub struct MergeQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_seq: u64,
}

impl<T> Default for MergeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MergeQueue<T> {
    pub fn new() -> Self {
        MergeQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    ///
    /// Fails with [`Error::Allocation`] if the storage cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve(capacity)?;
        Ok(MergeQueue { heap, next_seq: 0 })
    }

    /// Insert `node` behind every queued entry whose weight is `<= weight`.
    pub fn insert(&mut self, node: T, weight: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueueEntry { weight, node, seq });
    }

    /// Remove the two lowest-weight entries, front entry first.
    pub fn remove_two_lowest(&mut self) -> Result<(QueueEntry<T>, QueueEntry<T>)> {
        let size = self.heap.len();
        match (self.heap.pop(), self.heap.pop()) {
            (Some(first), Some(second)) => {
                trace!(
                    "dequeued weights {} and {}, {} entries left",
                    first.weight,
                    second.weight,
                    self.heap.len()
                );
                Ok((first, second))
            }
            (first, _) => {
                // Leave the queue as it was.
                if let Some(entry) = first {
                    self.heap.push(entry);
                }
                Err(Error::QueueUnderflow { size })
            }
        }
    }

    /// Remove the front entry.
    pub fn pop(&mut self) -> Option<QueueEntry<T>> {
        self.heap.pop()
    }

    /// Weight of the front entry, if any.
    pub fn peek_weight(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.weight)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Sum of the weights of every queued entry.
    pub fn total_weight(&self) -> usize {
        self.heap.iter().map(|entry| entry.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(mut queue: MergeQueue<T>) -> Vec<(usize, T)> {
        let mut out = Vec::new();
        while let Some(entry) = queue.pop() {
            out.push((entry.weight, entry.node));
        }
        out
    }

    #[test]
    fn test_ascending_order() {
        let mut queue = MergeQueue::new();
        for (name, weight) in [("e", 5), ("a", 1), ("c", 3), ("b", 2), ("d", 4)] {
            queue.insert(name, weight);
        }
        let order: Vec<&str> = drain(queue).into_iter().map(|(_, n)| n).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_equal_weights_keep_arrival_order() {
        let mut queue = MergeQueue::new();
        queue.insert("first", 2);
        queue.insert("low", 1);
        queue.insert("second", 2);
        queue.insert("high", 3);
        queue.insert("third", 2);
        let order: Vec<&str> = drain(queue).into_iter().map(|(_, n)| n).collect();
        assert_eq!(order, vec!["low", "first", "second", "third", "high"]);
    }

    #[test]
    fn test_remove_two_lowest() {
        let mut queue = MergeQueue::new();
        queue.insert('x', 7);
        queue.insert('y', 1);
        queue.insert('z', 1);
        let (first, second) = queue.remove_two_lowest().unwrap();
        assert_eq!((first.node, first.weight), ('y', 1));
        assert_eq!((second.node, second.weight), ('z', 1));
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.peek_weight(), Some(7));
    }

    #[test]
    fn test_underflow() {
        let mut queue: MergeQueue<u8> = MergeQueue::new();
        assert!(matches!(
            queue.remove_two_lowest(),
            Err(Error::QueueUnderflow { size: 0 })
        ));

        queue.insert(b'a', 3);
        assert!(matches!(
            queue.remove_two_lowest(),
            Err(Error::QueueUnderflow { size: 1 })
        ));
        // The lone entry is still there.
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.total_weight(), 3);
    }

    #[test]
    fn test_with_capacity() {
        let mut queue = MergeQueue::with_capacity(256).unwrap();
        assert!(queue.is_empty());
        queue.insert((), 4);
        queue.insert((), 6);
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.total_weight(), 10);
    }

    #[test]
    fn test_with_capacity_overflow() {
        let result = MergeQueue::<u64>::with_capacity(usize::MAX);
        assert!(matches!(result, Err(Error::Allocation(_))));
    }
}
