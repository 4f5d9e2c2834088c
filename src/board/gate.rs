//! Per-task operation gate
//!
//! Store calls and dialog awaits are suspension points, so two operations on
//! the same task could otherwise interleave (an edit racing a delete, say)
//! and leave the board inconsistent with the store. The gate admits at most
//! one in-flight operation per task identifier; further attempts are refused
//! until the permit is dropped.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Single-flight gate keyed by task identifier
#[derive(Debug, Default)]
pub struct OpGate {
    busy: Mutex<HashSet<String>>,
}

impl OpGate {
    pub fn new() -> Self {
        OpGate::default()
    }

    /// Try to start an operation on the given task. Returns `None` when one
    /// is already in flight. The permit releases the task on drop.
    pub fn try_acquire(&self, id: &str) -> Option<OpPermit<'_>> {
        let mut busy = self.lock();
        if !busy.insert(id.to_string()) {
            return None;
        }
        Some(OpPermit {
            gate: self,
            id: id.to_string(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.busy
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Exclusive claim on a task identifier for the duration of one operation
#[derive(Debug)]
pub struct OpPermit<'a> {
    gate: &'a OpGate,
    id: String,
}

impl Drop for OpPermit<'_> {
    fn drop(&mut self) {
        self.gate.lock().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let gate = OpGate::new();

        let permit = gate.try_acquire("t1").unwrap();
        assert!(gate.try_acquire("t1").is_none());
        drop(permit);

        assert!(gate.try_acquire("t1").is_some());
    }

    #[test]
    fn test_distinct_tasks_do_not_contend() {
        let gate = OpGate::new();

        let _p1 = gate.try_acquire("t1").unwrap();
        let _p2 = gate.try_acquire("t2").unwrap();
        assert!(gate.try_acquire("t1").is_none());
        assert!(gate.try_acquire("t2").is_none());
    }
}
