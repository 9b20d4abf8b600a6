//! Focus countdown.
//!
//! A tick-driven state machine. It owns no thread or timer: the caller
//! invokes `tick()` once per second and `stop()` on a manual stop.
//!
//! ```text
//! Idle -> Running -> (Finished | Stopped)
//! ```

use serde::{Deserialize, Serialize};

use super::DEFAULT_FOCUS_TITLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    Finished,
    Stopped,
}

/// A focus interval that ended, naturally or by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusOutcome {
    pub title: String,
    pub minutes: u32,
    /// False when the user stopped early.
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusCountdown {
    title: String,
    duration_min: u32,
    remaining_secs: u64,
    state: CountdownState,
}

impl Default for FocusCountdown {
    fn default() -> Self {
        Self {
            title: DEFAULT_FOCUS_TITLE.to_string(),
            duration_min: 0,
            remaining_secs: 0,
            state: CountdownState::Idle,
        }
    }
}

impl FocusCountdown {
    /// Start a countdown. Returns `None` for a zero duration.
    ///
    /// A blank title becomes the default one.
    pub fn start(title: &str, duration_min: u32) -> Option<Self> {
        if duration_min == 0 {
            return None;
        }
        let title = title.trim();
        Some(Self {
            title: if title.is_empty() {
                DEFAULT_FOCUS_TITLE.to_string()
            } else {
                title.to_string()
            },
            duration_min,
            remaining_secs: duration_min as u64 * 60,
            state: CountdownState::Running,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// `MM:SS` of the remaining time.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Consume one second. Returns the outcome when the countdown reaches zero.
    pub fn tick(&mut self) -> Option<FocusOutcome> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Finished;
            return Some(FocusOutcome {
                title: self.title.clone(),
                minutes: self.duration_min,
                completed: true,
            });
        }
        None
    }

    /// Stop early. Elapsed minutes are `max(1, round(total - remaining/60))`.
    pub fn stop(&mut self) -> Option<FocusOutcome> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.state = CountdownState::Stopped;
        let elapsed = self.duration_min as f64 - self.remaining_secs as f64 / 60.0;
        let minutes = crate::scoring::round_half_up(elapsed).max(1.0) as u32;
        Some(FocusOutcome {
            title: self.title.clone(),
            minutes,
            completed: false,
        })
    }
}
