//! Error type for queue operations
//!
//! The queue has exactly two failure modes, both caller-recoverable:
//! rejecting a blank task description on insert, and reading from an
//! empty queue. Neither leaves the queue in a partially mutated state.

use std::fmt;

/// Error type for [`TaskQueue`](crate::TaskQueue) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The task description is empty or whitespace-only
    InvalidInput,
    /// The queue contains no tasks
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::InvalidInput => {
                write!(f, "task description must be non-empty")
            }
            QueueError::EmptyQueue => {
                write!(f, "the task queue is empty")
            }
        }
    }
}

impl std::error::Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            QueueError::InvalidInput.to_string(),
            "task description must be non-empty"
        );
        assert_eq!(QueueError::EmptyQueue.to_string(), "the task queue is empty");
    }
}
