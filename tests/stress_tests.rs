//! Stress tests that push the queue through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use task_priority_queue::TaskQueue;

#[test]
fn test_massive_insert_then_drain() {
    let mut queue = TaskQueue::new();

    for i in 0..10_000 {
        queue.insert(i, "work item").unwrap();
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.extract_min().unwrap().priority, i);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_massive_reverse_insert_then_drain() {
    let mut queue = TaskQueue::new();

    for i in (0..10_000).rev() {
        queue.insert(i, "work item").unwrap();
    }

    for i in 0..10_000 {
        assert_eq!(queue.extract_min().unwrap().priority, i);
    }
}

#[test]
fn test_sawtooth_pattern() {
    // Repeatedly fill part-way and drain part-way; the queue must stay
    // consistent across many partial drains.
    let mut queue = TaskQueue::new();
    let mut expected_len = 0usize;

    for round in 0..100i64 {
        for i in 0..50 {
            queue.insert((round * 37 + i * 13) % 101, "work item").unwrap();
        }
        expected_len += 50;

        let mut last_key = None;
        for _ in 0..30 {
            let task = queue.extract_min().unwrap();
            if let Some(prev) = last_key {
                assert!(prev < task.key());
            }
            last_key = Some(task.key());
        }
        expected_len -= 30;

        assert_eq!(queue.len(), expected_len);
    }
}

#[test]
fn test_all_equal_priorities_drain_in_arrival_order() {
    let mut queue = TaskQueue::new();

    for i in 0..5_000u64 {
        let task = queue.insert(1, format!("task {i}")).unwrap();
        assert_eq!(task.sequence, i);
    }

    for i in 0..5_000 {
        assert_eq!(queue.extract_min().unwrap().sequence, i);
    }
}

#[test]
fn test_pseudorandom_priorities_drain_sorted() {
    // Simple LCG keeps the test deterministic without a rand dependency.
    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as i64) % 1_000
    };

    let mut queue = TaskQueue::new();
    for _ in 0..10_000 {
        queue.insert(next(), "work item").unwrap();
    }

    let mut last_key = None;
    while let Ok(task) = queue.extract_min() {
        if let Some(prev) = last_key {
            assert!(prev < task.key());
        }
        last_key = Some(task.key());
    }
}
