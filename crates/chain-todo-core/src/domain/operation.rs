//! Write Operation Lifecycle
//!
//! `Idle -> PendingSignature -> Mining -> Success | Failed`

use serde::{Deserialize, Serialize};

/// Which writer operation a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    CreateTask,
    ToggleCompleted,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::CreateTask => "create task",
            OperationKind::ToggleCompleted => "toggle task",
        }
    }
}

/// State of one write operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationState {
    #[default]
    Idle,
    /// Waiting for the user to approve in the wallet
    PendingSignature,
    /// Broadcast, waiting to be included in a block
    Mining { tx_hash: String },
    Success,
    /// Reason as reported by the wallet or node
    Failed(String),
}

impl OperationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationState::Success | OperationState::Failed(_))
    }

    /// Between dispatch and a terminal state
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            OperationState::PendingSignature | OperationState::Mining { .. }
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationState::Success)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            OperationState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
