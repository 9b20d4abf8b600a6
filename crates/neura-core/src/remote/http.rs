//! JSON-over-HTTP client for the remote backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{ChatReply, ChatRequest, EnergyReply, FitnessSnapshot};
use super::RemoteSource;
use crate::error::{ConfigError, RemoteError};
use crate::focus::{FocusSession, NewFocusSession};
use crate::scoring::{EnergyInputs, EnergyScore};
use crate::task::{NewTask, Task};

const TASKS_PATH: &str = "/api/tasks";
const FOCUS_SESSIONS_PATH: &str = "/api/focus-sessions";
const ENERGY_PATH: &str = "/api/energy/calculate";
const PSYCH_PATH: &str = "/api/psychologist/message";
const FITNESS_PATH: &str = "/api/google-fit/mock";

pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    /// Build a client for `base_url` (scheme and host, optional path prefix).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        url::Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            key: "remote.base_url".into(),
            message: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "remote.timeout_secs".into(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, RemoteError> {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(RemoteError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let resp = self.send::<()>(Method::GET, path, None).await?;
        decode(resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RemoteError> {
        let resp = self.send(Method::POST, path, Some(body)).await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError> {
        self.get_json(TASKS_PATH).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, RemoteError> {
        self.post_json(TASKS_PATH, task).await
    }

    async fn toggle_task(&self, id: &str) -> Result<(), RemoteError> {
        let path = format!("{}/{}/toggle", TASKS_PATH, urlencoding::encode(id));
        // Body is ignored; only the status matters.
        self.send::<()>(Method::PATCH, &path, None).await?;
        Ok(())
    }

    async fn fetch_focus_sessions(&self) -> Result<Vec<FocusSession>, RemoteError> {
        self.get_json(FOCUS_SESSIONS_PATH).await
    }

    async fn create_focus_session(
        &self,
        session: &NewFocusSession,
    ) -> Result<FocusSession, RemoteError> {
        self.post_json(FOCUS_SESSIONS_PATH, session).await
    }

    async fn compute_energy(&self, inputs: &EnergyInputs) -> Result<EnergyReply, RemoteError> {
        self.post_json(ENERGY_PATH, inputs).await
    }

    async fn post_psych_message(
        &self,
        text: &str,
        energy: Option<EnergyScore>,
    ) -> Result<ChatReply, RemoteError> {
        self.post_json(PSYCH_PATH, &ChatRequest { text, energy }).await
    }

    async fn fetch_fitness(&self) -> Result<FitnessSnapshot, RemoteError> {
        self.get_json(FITNESS_PATH).await
    }
}
