//! Optimistic done-toggle.
//!
//! ```text
//! Pending -> Committed | RolledBack
//! ```
//!
//! The local flip happens when the toggle is created; the remote result then
//! decides whether it sticks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleState {
    Pending,
    Committed,
    RolledBack,
}

/// A flip applied locally, awaiting the remote verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    task_id: String,
    original_done: bool,
}

impl PendingToggle {
    pub(crate) fn new(task_id: impl Into<String>, original_done: bool) -> Self {
        Self {
            task_id: task_id.into(),
            original_done,
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn state(&self) -> ToggleState {
        ToggleState::Pending
    }

    pub fn original_done(&self) -> bool {
        self.original_done
    }

    /// Value the task holds while pending.
    pub fn optimistic_done(&self) -> bool {
        !self.original_done
    }

    pub fn commit(self) -> ToggleOutcome {
        ToggleOutcome {
            done: self.optimistic_done(),
            task_id: self.task_id,
            state: ToggleState::Committed,
        }
    }

    pub fn roll_back(self) -> ToggleOutcome {
        ToggleOutcome {
            done: self.original_done,
            task_id: self.task_id,
            state: ToggleState::RolledBack,
        }
    }
}

/// Final state of a toggle and the `done` value the task ends with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub task_id: String,
    pub state: ToggleState,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_keeps_the_flip() {
        let p = PendingToggle::new("a", false);
        assert_eq!(p.state(), ToggleState::Pending);
        assert!(p.optimistic_done());
        let out = p.commit();
        assert_eq!(out.state, ToggleState::Committed);
        assert!(out.done);
    }

    #[test]
    fn roll_back_restores_original() {
        let out = PendingToggle::new("a", true).roll_back();
        assert_eq!(out.state, ToggleState::RolledBack);
        assert!(out.done);
        assert_eq!(out.task_id, "a");
    }
}
