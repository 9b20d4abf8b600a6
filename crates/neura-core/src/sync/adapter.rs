//! Sync adapter: remote first, local fallback second.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::RemoteError;
use crate::focus::{FocusSession, NewFocusSession};
use crate::remote::{FitnessSnapshot, RemoteSource};
use crate::scoring::{compute_energy, energy_label, EnergyInputs, EnergyScore};
use crate::task::{NewTask, Task};

/// Shown when the remote chat answered without a reply.
pub const EMPTY_REPLY_NUDGE: &str = "I couldn't reach the psychologist module right now, \
but try picking one small, concrete next step for today.";

/// Shown when the remote chat could not be reached at all.
pub const CHAT_FAILURE_REPLY: &str = "I had a technical problem reaching the psychologist \
module just now. Remember: ease up on self-criticism and pick a single task you can \
realistically finish today.";

/// Where a stored value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Synced<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Synced<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            origin: Origin::Remote,
        }
    }

    fn local(value: T) -> Self {
        Self {
            value,
            origin: Origin::LocalFallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::LocalFallback
    }
}

/// Score plus the label to show with it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReading {
    pub score: Option<EnergyScore>,
    pub label: String,
    pub origin: Origin,
}

pub struct SyncAdapter<R> {
    remote: R,
}

impl<R: RemoteSource> SyncAdapter<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// `None` on failure: the caller keeps its collection untouched.
    pub async fn fetch_tasks(&self) -> Option<Vec<Task>> {
        match self.remote.fetch_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "hydrated tasks from remote");
                Some(tasks)
            }
            Err(e) => {
                log_unavailable("fetch tasks", &e);
                None
            }
        }
    }

    pub async fn fetch_focus_sessions(&self) -> Option<Vec<FocusSession>> {
        match self.remote.fetch_focus_sessions().await {
            Ok(sessions) => {
                debug!(count = sessions.len(), "hydrated focus sessions from remote");
                Some(sessions)
            }
            Err(e) => {
                log_unavailable("fetch focus sessions", &e);
                None
            }
        }
    }

    pub async fn compute_energy(&self, inputs: &EnergyInputs) -> EnergyReading {
        match self.remote.compute_energy(inputs).await {
            Ok(reply) => {
                let score = reply.score();
                let label = reply
                    .label
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| energy_label(score).to_string());
                info!(?score, "energy computed remotely");
                EnergyReading {
                    score,
                    label,
                    origin: Origin::Remote,
                }
            }
            Err(e) => {
                log_unavailable("compute energy", &e);
                let score = compute_energy(inputs);
                EnergyReading {
                    score: Some(score),
                    label: energy_label(Some(score)).to_string(),
                    origin: Origin::LocalFallback,
                }
            }
        }
    }

    pub async fn create_task(&self, payload: NewTask) -> Synced<Task> {
        match self.remote.create_task(&payload).await {
            Ok(task) => {
                info!(id = %task.id, "task created remotely");
                Synced::remote(task)
            }
            Err(e) => {
                log_unavailable("create task", &e);
                Synced::local(payload.into_local_task())
            }
        }
    }

    /// Plain passthrough; rollback is the caller's job.
    pub async fn toggle_task(&self, id: &str) -> Result<(), RemoteError> {
        self.remote.toggle_task(id).await
    }

    pub async fn create_focus_session(
        &self,
        payload: NewFocusSession,
        at: DateTime<Utc>,
    ) -> Synced<FocusSession> {
        match self.remote.create_focus_session(&payload).await {
            Ok(session) => {
                info!(minutes = session.minutes, "focus session stored remotely");
                Synced::remote(session)
            }
            Err(e) => {
                log_unavailable("create focus session", &e);
                Synced::local(payload.into_local_session(at))
            }
        }
    }

    /// Chat reply from the remote, or [`CHAT_FAILURE_REPLY`] when it is
    /// unavailable.
    pub async fn chat_reply(&self, text: &str, energy: Option<EnergyScore>) -> Synced<String> {
        match self.remote.post_psych_message(text, energy).await {
            Ok(reply) => Synced::remote(
                reply
                    .reply
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| EMPTY_REPLY_NUDGE.to_string()),
            ),
            Err(e) => {
                log_unavailable("post psychologist message", &e);
                Synced::local(CHAT_FAILURE_REPLY.to_string())
            }
        }
    }

    pub async fn fetch_fitness(&self) -> Option<FitnessSnapshot> {
        match self.remote.fetch_fitness().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log_unavailable("fetch fitness snapshot", &e);
                None
            }
        }
    }
}

fn log_unavailable(operation: &str, err: &RemoteError) {
    match err {
        RemoteError::Disabled => debug!(operation, "remote disabled, using local fallback"),
        _ => warn!(operation, error = %err, "remote unavailable, using local fallback"),
    }
}
