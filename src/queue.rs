//! Binary min-heap task queue
//!
//! A straightforward binary min-heap over [`Task`] records, stored as a
//! `Vec` interpreted as a complete binary tree by position: for index
//! `i`, children live at `2i + 1` and `2i + 2`, the parent at
//! `(i - 1) / 2`.
//!
//! Every comparison uses the full `(priority, sequence)` key, so tasks
//! with equal priority are extracted in insertion order.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek`        | O(1)       |
//! | `len`         | O(1)       |
//! | `snapshot`    | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use task_priority_queue::TaskQueue;
//!
//! let mut queue = TaskQueue::new();
//! queue.insert(2, "second").unwrap();
//! queue.insert(1, "first").unwrap();
//!
//! assert_eq!(queue.peek().unwrap().description, "first");
//! assert_eq!(queue.extract_min().unwrap().priority, 1);
//! assert_eq!(queue.extract_min().unwrap().priority, 2);
//! assert!(queue.extract_min().is_err());
//! ```

use crate::error::QueueError;
use crate::task::Task;

/// A min-heap priority queue of tasks
///
/// Maintains two invariants across every mutation:
///
/// 1. **Heap property**: for every non-root index `i`,
///    `data[parent(i)].key() <= data[i].key()`.
/// 2. **Structure property**: the storage vector has no gaps, so it
///    always represents a complete binary tree.
///
/// The queue is exclusively owned by its caller; mutation requires
/// `&mut self` and every operation runs to completion before returning.
/// There is no shared or global instance.
#[derive(Debug, Default)]
pub struct TaskQueue {
    /// Heap storage in complete-binary-tree order
    data: Vec<Task>,
    /// Next insertion counter value, strictly greater than every
    /// sequence ever handed out by this queue
    next_sequence: u64,
}

impl TaskQueue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Builds a queue from an initial batch of `(priority, description)`
    /// pairs, validating each entry
    ///
    /// Sequence numbers follow iteration order, so the result is
    /// indistinguishable from calling [`insert`](Self::insert) once per
    /// pair. Fails with [`QueueError::InvalidInput`] on the first blank
    /// description.
    pub fn from_tasks<I, S>(tasks: I) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut queue = Self::new();
        for (priority, description) in tasks {
            queue.insert(priority, description)?;
        }
        Ok(queue)
    }

    /// Returns true if the queue holds no tasks
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of tasks currently queued
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts a task, returning a copy of it with its assigned sequence
    ///
    /// The description must be non-empty after trimming whitespace;
    /// otherwise the insert fails with [`QueueError::InvalidInput`] and
    /// the queue is unchanged. Any `i64` priority is accepted, duplicates
    /// included.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(
        &mut self,
        priority: i64,
        description: impl Into<String>,
    ) -> Result<Task, QueueError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(QueueError::InvalidInput);
        }

        let task = Task {
            priority,
            description,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.data.push(task.clone());
        self.sift_up(self.data.len() - 1);

        Ok(task)
    }

    /// Returns the most urgent task without removing it
    ///
    /// Fails with [`QueueError::EmptyQueue`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Result<&Task, QueueError> {
        self.data.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the most urgent task
    ///
    /// The root is swapped with the last element, the storage shrinks by
    /// one, and the moved element sifts down until the heap property is
    /// restored. Fails with [`QueueError::EmptyQueue`] if the queue is
    /// empty; no partial state change occurs.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min(&mut self) -> Result<Task, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Returns a copy of the internal storage in heap-array order
    ///
    /// The result is NOT sorted; it is the complete-binary-tree layout,
    /// suitable for visualizing the heap. Callers wanting sorted output
    /// must sort by `(priority, sequence)` themselves. The queue is not
    /// mutated.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn snapshot(&self) -> Vec<Task> {
        self.data.clone()
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].key() < self.data[parent].key() {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].key() < self.data[smallest].key() {
                smallest = left;
            }
            if right < len && self.data[right].key() < self.data[smallest].key() {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}
