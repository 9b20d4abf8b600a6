//! Wire shapes of the remote replies that are not day-model records.

use serde::{Deserialize, Serialize};

use crate::scoring::EnergyScore;

/// Reply of `POST /energy/calculate`.
///
/// Both fields are optional on the wire: a reply without a numeric `energy`
/// means "no score" rather than a failed call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyReply {
    #[serde(default)]
    pub energy: Option<serde_json::Value>,
    #[serde(default)]
    pub label: Option<String>,
}

impl EnergyReply {
    /// Round and clamp the remote number into a score.
    pub fn score(&self) -> Option<EnergyScore> {
        self.energy
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .filter(|e| e.is_finite())
            .map(|e| crate::scoring::round_half_up(e.min(100.0).max(0.0)) as EnergyScore)
    }
}

/// Body of `POST /psychologist/message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub text: &'a str,
    pub energy: Option<EnergyScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Reply of the mock wearable endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessSnapshot {
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub steps: Option<u64>,
}
