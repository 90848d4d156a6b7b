//! Task Entity
//!
//! A task as stored by the contract. Identity is positional: the index in the
//! on-chain list is the only identifier.

use serde::{Deserialize, Serialize};

/// A single on-chain task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text
    pub content: String,
    /// Completion flag
    pub completed: bool,
}

impl Task {
    pub fn new(content: impl Into<String>, completed: bool) -> Self {
        Self {
            content: content.into(),
            completed,
        }
    }
}

/// The list published by the last complete read pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task count seen by the pass (None until a pass has completed)
    pub count: Option<u64>,
    /// Tasks in index order, `tasks.len() == count`
    pub tasks: Vec<Task>,
    /// Number of passes published so far
    pub generation: u64,
}

impl TaskSnapshot {
    /// Whether `index` addresses a task in this snapshot
    pub fn contains(&self, index: u64) -> bool {
        index < self.tasks.len() as u64
    }

    pub fn is_loaded(&self) -> bool {
        self.count.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_not_loaded() {
        let snapshot = TaskSnapshot::default();
        assert!(!snapshot.is_loaded());
        assert!(!snapshot.contains(0));
    }

    #[test]
    fn test_contains_is_bounded_by_task_list() {
        let snapshot = TaskSnapshot {
            count: Some(2),
            tasks: vec![Task::new("buy milk", false), Task::new("pay rent", true)],
            generation: 1,
        };
        assert!(snapshot.contains(0));
        assert!(snapshot.contains(1));
        assert!(!snapshot.contains(2));
    }
}
