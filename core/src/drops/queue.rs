//! Pending drops waiting for promotion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::skills::PriorityTable;

use super::DropRecord;

/// Heap entry. Ordered so the max-heap yields the lowest rank first and,
/// within a rank, the earliest arrival.
#[derive(Debug)]
struct QueuedDrop {
    rank: u32,
    seq: u64,
    record: DropRecord,
}

impl Ord for QueuedDrop {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedDrop {}

/// Stable priority queue of admitted drops. Unbounded; the animator limits
/// how fast it is drained.
#[derive(Debug, Default)]
pub struct DropQueue {
    heap: BinaryHeap<QueuedDrop>,
    priorities: PriorityTable,
    next_seq: u64,
}

impl DropQueue {
    pub fn new(priorities: PriorityTable) -> Self {
        Self {
            heap: BinaryHeap::new(),
            priorities,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, record: DropRecord) {
        let rank = self.priorities.rank(record.skill);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedDrop { rank, seq, record });
    }

    /// Remove the highest-priority drop
    pub fn pop(&mut self) -> Option<DropRecord> {
        self.heap.pop().map(|q| q.record)
    }

    /// Look at the drop `pop` would return
    pub fn peek(&self) -> Option<&DropRecord> {
        self.heap.peek().map(|q| &q.record)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }
}
