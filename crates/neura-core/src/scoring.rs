//! Pure scoring functions: daily energy and task weight.
//!
//! `compute_energy` is the local fallback for the remote energy endpoint;
//! it only runs when that call fails.

use serde::{Deserialize, Serialize};

/// Integer readiness score in `0..=100`. Absence ("no data yet") is modelled
/// as `Option<EnergyScore>` wherever the score is stored.
pub type EnergyScore = u8;

/// Raw inputs of one energy submission. Not stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyInputs {
    /// Hours slept last night.
    #[serde(rename = "sleep")]
    pub sleep_hours: f64,
    /// 0..=10
    #[serde(rename = "training")]
    pub training_level: f64,
    /// 0..=10
    #[serde(rename = "focus")]
    pub focus_level: f64,
    /// 0..=10
    #[serde(rename = "nutrition")]
    pub nutrition_level: f64,
}

const SLEEP_WEIGHT: f64 = 0.35;
const TRAINING_WEIGHT: f64 = 0.20;
const FOCUS_WEIGHT: f64 = 0.25;
const NUTRITION_WEIGHT: f64 = 0.20;

/// Step function, not interpolated.
fn sleep_score(hours: f64) -> f64 {
    if hours <= 0.0 {
        20.0
    } else if hours >= 8.0 {
        100.0
    } else if hours >= 6.5 {
        85.0
    } else if hours >= 5.5 {
        70.0
    } else {
        50.0
    }
}

/// Round half up: 62.5 becomes 63.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Compute the local energy score.
///
/// Training, focus and nutrition are not clamped on the way in; only the
/// final weighted sum is clamped to `0..=100`.
pub fn compute_energy(inputs: &EnergyInputs) -> EnergyScore {
    let energy = sleep_score(inputs.sleep_hours) * SLEEP_WEIGHT
        + inputs.training_level * 10.0 * TRAINING_WEIGHT
        + inputs.focus_level * 10.0 * FOCUS_WEIGHT
        + inputs.nutrition_level * 10.0 * NUTRITION_WEIGHT;

    // max/min (not clamp) so a NaN sum still lands inside the range.
    round_half_up(energy.min(100.0).max(0.0)) as EnergyScore
}

/// Rounded mean of urgency, effort and impact.
pub fn compute_task_weight(urgency: u8, effort: u8, impact: u8) -> u8 {
    let sum = urgency as f64 + effort as f64 + impact as f64;
    round_half_up(sum / 3.0) as u8
}

/// Four-band classification used for the energy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    NoData,
    Low,
    Moderate,
    High,
    Maximum,
}

impl EnergyBand {
    pub fn from_score(score: Option<EnergyScore>) -> Self {
        match score {
            None => EnergyBand::NoData,
            Some(s) if s < 35 => EnergyBand::Low,
            Some(s) if s < 65 => EnergyBand::Moderate,
            Some(s) if s < 85 => EnergyBand::High,
            Some(_) => EnergyBand::Maximum,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnergyBand::NoData => "no data",
            EnergyBand::Low => "low",
            EnergyBand::Moderate => "moderate",
            EnergyBand::High => "high",
            EnergyBand::Maximum => "maximum",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            EnergyBand::NoData => "No data for today.",
            EnergyBand::Low => "Low energy · A good day for light tasks and review.",
            EnergyBand::Moderate => {
                "Moderate energy · Mix medium tasks with small deliveries."
            }
            EnergyBand::High => {
                "High energy · Ideal for deep study and complex freelance work."
            }
            EnergyBand::Maximum => "Maximum energy · Excellent for high-impact projects.",
        }
    }
}

/// Descriptive label for a (possibly absent) score. Total.
pub fn energy_label(score: Option<EnergyScore>) -> &'static str {
    EnergyBand::from_score(score).guidance()
}
