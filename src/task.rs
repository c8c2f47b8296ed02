//! The task record stored in the queue
//!
//! A [`Task`] pairs a numeric priority with a textual description, plus
//! the insertion sequence number the owning queue assigned to it. The
//! sequence number exists purely to make ordering total: two tasks never
//! compare equal under [`Task::key`], so extraction order is fully
//! deterministic even when priorities collide.

use serde::{Deserialize, Serialize};

/// A unit of work held by a [`TaskQueue`](crate::TaskQueue)
///
/// Lower `priority` means more urgent. The `sequence` field is assigned
/// by the queue at insertion time and is strictly increasing within one
/// queue instance; among tasks with equal priority, the smaller sequence
/// (inserted earlier) is treated as smaller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Urgency of the task; lower values surface first
    pub priority: i64,
    /// Human-readable label, non-empty by construction
    pub description: String,
    /// Queue-assigned insertion counter, used to break priority ties
    pub sequence: u64,
}

impl Task {
    /// The total-order comparison key: `(priority, sequence)`,
    /// compared lexicographically with both components ascending.
    ///
    /// All heap comparisons go through this key, so the first-in
    /// first-served tie-break is enforced consistently in both sift
    /// directions.
    #[inline]
    pub fn key(&self) -> (i64, u64) {
        (self.priority, self.sequence)
    }
}
