//! Focus sessions and the countdown that produces them.

mod countdown;

pub use countdown::{CountdownState, FocusCountdown, FocusOutcome};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::EnergyScore;

pub const DEFAULT_FOCUS_TITLE: &str = "Focus session";

/// Energy drained per focused minute when the end reading is derived locally.
const DRAIN_PER_MINUTE: f64 = 0.25;

/// Minutes at or above which a session counts as deep focus.
pub const DEEP_FOCUS_MINUTES: u32 = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub title: String,
    pub minutes: u32,
    #[serde(default)]
    pub energy_start: Option<EnergyScore>,
    /// Kept unrounded, e.g. 72.5.
    #[serde(default)]
    pub energy_end: Option<f64>,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

impl FocusSession {
    pub fn is_deep(&self) -> bool {
        self.minutes >= DEEP_FOCUS_MINUTES
    }
}

/// Payload of `POST /focus-sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFocusSession {
    pub title: String,
    pub minutes: u32,
    pub energy_start: Option<EnergyScore>,
}

impl NewFocusSession {
    /// Record synthesized when the remote could not store the session.
    pub fn into_local_session(self, at: DateTime<Utc>) -> FocusSession {
        FocusSession {
            energy_end: local_energy_end(self.energy_start, self.minutes),
            title: self.title,
            minutes: self.minutes,
            energy_start: self.energy_start,
            date: at,
        }
    }
}

/// `max(0, min(100, start - minutes * 0.25))`, absent when `start` is.
pub fn local_energy_end(energy_start: Option<EnergyScore>, minutes: u32) -> Option<f64> {
    energy_start.map(|start| {
        (start as f64 - minutes as f64 * DRAIN_PER_MINUTE)
            .min(100.0)
            .max(0.0)
    })
}
