use std::cmp::Reverse;
use std::collections::BinaryHeap;


/// Min-priority queue with a deterministic tie-break.
///
/// Every pushed value gets a sequence number. Among values of equal priority, the
/// one pushed first is popped first, so the pop order only depends on the order
/// of the pushes.
#[derive(Debug)]
pub struct PriorityQueue<V> {

    heap: BinaryHeap<Reverse<(usize, u64, V)>>,
    next_sequence: u64

}

impl<V: Ord> PriorityQueue<V> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0
        }
    }


    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0
        }
    }


    pub fn push(&mut self, priority: usize, value: V) {
        self.heap.push(Reverse((priority, self.next_sequence, value)));
        self.next_sequence += 1;
    }


    /// Removes the value with the lowest priority.
    pub fn pop(&mut self) -> Option<(usize, V)> {
        self.heap.pop()
            .map(|Reverse((priority, _, value))| (priority, value))
    }


    pub fn len(&self) -> usize {
        self.heap.len()
    }


    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

}

impl<V: Ord> Default for PriorityQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}
