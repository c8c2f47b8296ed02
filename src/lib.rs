//! Min-Heap Task Priority Queue
//!
//! This crate provides a priority queue of `(priority, description)` tasks
//! backed by a binary min-heap, with a deterministic first-in-first-served
//! tie-break among tasks that share a priority.
//!
//! Lower priority values are more urgent: a task with priority 1 surfaces
//! before a task with priority 3. When two tasks have the same priority,
//! the one inserted earlier is extracted first. Determinism comes from a
//! per-queue insertion counter: every comparison uses the lexicographic
//! key `(priority, sequence)`, never the priority alone.
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
//! queue.insert(3, "Send follow-up email").unwrap();
//! queue.insert(1, "Fix critical server bug").unwrap();
//! queue.insert(2, "Review PRs").unwrap();
//!
//! let next = queue.extract_min().unwrap();
//! assert_eq!(next.priority, 1);
//! assert_eq!(next.description, "Fix critical server bug");
//! ```

pub mod error;
pub mod queue;
pub mod task;

// Re-export the public surface for convenience
pub use error::QueueError;
pub use queue::TaskQueue;
pub use task::Task;
