//! Remote source of truth.
//!
//! The backend is consumed only through the operations of [`RemoteSource`].
//! [`HttpRemote`] speaks the JSON-over-HTTP contract; tests substitute their
//! own implementations.

mod http;
mod types;

pub use http::HttpRemote;
pub use types::{ChatRequest, ChatReply, EnergyReply, FitnessSnapshot};

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ConfigError, RemoteError};
use crate::focus::{FocusSession, NewFocusSession};
use crate::scoring::{EnergyInputs, EnergyScore};
use crate::storage::Config;
use crate::task::{NewTask, Task};

#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// `GET /api/tasks`
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError>;

    /// `POST /api/tasks`
    async fn create_task(&self, task: &NewTask) -> Result<Task, RemoteError>;

    /// `PATCH /api/tasks/{id}/toggle`
    async fn toggle_task(&self, id: &str) -> Result<(), RemoteError>;

    /// `GET /api/focus-sessions`
    async fn fetch_focus_sessions(&self) -> Result<Vec<FocusSession>, RemoteError>;

    /// `POST /api/focus-sessions`
    async fn create_focus_session(
        &self,
        session: &NewFocusSession,
    ) -> Result<FocusSession, RemoteError>;

    /// `POST /api/energy/calculate`
    async fn compute_energy(&self, inputs: &EnergyInputs) -> Result<EnergyReply, RemoteError>;

    /// `POST /api/psychologist/message`
    async fn post_psych_message(
        &self,
        text: &str,
        energy: Option<EnergyScore>,
    ) -> Result<ChatReply, RemoteError>;

    /// `GET /api/google-fit/mock`
    async fn fetch_fitness(&self) -> Result<FitnessSnapshot, RemoteError>;
}

/// A remote that is always unavailable. Used when remote calls are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRemote;

#[async_trait]
impl RemoteSource for OfflineRemote {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn create_task(&self, _task: &NewTask) -> Result<Task, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn toggle_task(&self, _id: &str) -> Result<(), RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn fetch_focus_sessions(&self) -> Result<Vec<FocusSession>, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn create_focus_session(
        &self,
        _session: &NewFocusSession,
    ) -> Result<FocusSession, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn compute_energy(&self, _inputs: &EnergyInputs) -> Result<EnergyReply, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn post_psych_message(
        &self,
        _text: &str,
        _energy: Option<EnergyScore>,
    ) -> Result<ChatReply, RemoteError> {
        Err(RemoteError::Disabled)
    }

    async fn fetch_fitness(&self) -> Result<FitnessSnapshot, RemoteError> {
        Err(RemoteError::Disabled)
    }
}

/// Either the HTTP client or the offline stand-in, picked from config.
pub enum ConfiguredRemote {
    Http(HttpRemote),
    Offline(OfflineRemote),
}

impl ConfiguredRemote {
    /// Offline when `remote.enabled` is false, HTTP against the effective
    /// base URL otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        if !config.remote.enabled {
            return Ok(ConfiguredRemote::Offline(OfflineRemote));
        }
        let timeout = Duration::from_secs(config.remote.timeout_secs.max(1));
        let remote = HttpRemote::new(&config.effective_base_url(), timeout)?;
        Ok(ConfiguredRemote::Http(remote))
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, ConfiguredRemote::Offline(_))
    }
}

#[async_trait]
impl RemoteSource for ConfiguredRemote {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.fetch_tasks().await,
            ConfiguredRemote::Offline(r) => r.fetch_tasks().await,
        }
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.create_task(task).await,
            ConfiguredRemote::Offline(r) => r.create_task(task).await,
        }
    }

    async fn toggle_task(&self, id: &str) -> Result<(), RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.toggle_task(id).await,
            ConfiguredRemote::Offline(r) => r.toggle_task(id).await,
        }
    }

    async fn fetch_focus_sessions(&self) -> Result<Vec<FocusSession>, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.fetch_focus_sessions().await,
            ConfiguredRemote::Offline(r) => r.fetch_focus_sessions().await,
        }
    }

    async fn create_focus_session(
        &self,
        session: &NewFocusSession,
    ) -> Result<FocusSession, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.create_focus_session(session).await,
            ConfiguredRemote::Offline(r) => r.create_focus_session(session).await,
        }
    }

    async fn compute_energy(&self, inputs: &EnergyInputs) -> Result<EnergyReply, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.compute_energy(inputs).await,
            ConfiguredRemote::Offline(r) => r.compute_energy(inputs).await,
        }
    }

    async fn post_psych_message(
        &self,
        text: &str,
        energy: Option<EnergyScore>,
    ) -> Result<ChatReply, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.post_psych_message(text, energy).await,
            ConfiguredRemote::Offline(r) => r.post_psych_message(text, energy).await,
        }
    }

    async fn fetch_fitness(&self) -> Result<FitnessSnapshot, RemoteError> {
        match self {
            ConfiguredRemote::Http(r) => r.fetch_fitness().await,
            ConfiguredRemote::Offline(r) => r.fetch_fitness().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_builds_offline_remote() {
        let mut cfg = Config::default();
        cfg.remote.enabled = false;
        let remote = ConfiguredRemote::from_config(&cfg).unwrap();
        assert!(remote.is_offline());
    }

    #[tokio::test]
    async fn offline_remote_reports_disabled() {
        let err = OfflineRemote.fetch_tasks().await.unwrap_err();
        assert!(matches!(err, RemoteError::Disabled));
    }
}
