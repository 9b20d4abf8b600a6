//! Task records.

use chrono::{NaiveDate, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::compute_task_weight;

pub const DEFAULT_CATEGORY: &str = "pessoal";

/// Urgency at or above this marks a task as urgent.
pub const URGENT_THRESHOLD: u8 = 7;

/// Upper bound of urgency, effort and impact.
pub const MAX_TASK_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned when the remote is reachable, local otherwise.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urgency: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effort: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub impact: u8,
    /// Fixed at creation. Never mutated on its own.
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: u8,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
}

impl Task {
    pub fn is_urgent_open(&self) -> bool {
        self.urgency >= URGENT_THRESHOLD && !self.done
    }

    /// Undated tasks count for every day.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.date.map_or(true, |d| d == day)
    }
}

/// Payload of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub urgency: u8,
    pub effort: u8,
    pub impact: u8,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub category: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>, urgency: u8, effort: u8, impact: u8) -> Self {
        Self {
            title: title.into(),
            urgency,
            effort,
            impact,
            date: None,
            time: None,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Urgency, effort and impact all within `0..=10`.
    pub fn has_valid_scores(&self) -> bool {
        [self.urgency, self.effort, self.impact]
            .iter()
            .all(|&score| score <= MAX_TASK_SCORE)
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Build the record stored when the remote could not create it.
    pub fn into_local_task(self) -> Task {
        Task {
            id: local_task_id(),
            weight: compute_task_weight(self.urgency, self.effort, self.impact),
            title: self.title,
            urgency: self.urgency,
            effort: self.effort,
            impact: self.impact,
            date: self.date,
            time: self.time,
            category: self.category,
            done: false,
        }
    }
}

/// Timestamp in base 36 followed by a five character random suffix.
pub fn local_task_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(5)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{}{}", to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_task_gets_weight_and_id() {
        let task = NewTask::new("Write report", 7, 5, 3).into_local_task();
        assert_eq!(task.weight, 5);
        assert!(!task.done);
        assert_eq!(task.category, "pessoal");
        assert!(task.id.len() > 5);
    }

    #[test]
    fn local_ids_differ() {
        assert_ne!(local_task_id(), local_task_id());
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn remote_task_with_numeric_id_and_missing_fields() {
        let task: Task = serde_json::from_str(
            r#"{"id": 12, "title": "Pay rent", "urgency": 9, "done": true}"#,
        )
        .unwrap();
        assert_eq!(task.id, "12");
        assert_eq!(task.category, "pessoal");
        assert!(task.done);
        assert!(!task.is_urgent_open());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": "a", "title": "Call bank", "urgency": null, "effort": null,
                 "impact": 4, "weight": null, "category": null, "done": null},
                {"id": "b", "title": "Gym", "urgency": 8}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].urgency, 0);
        assert_eq!(tasks[0].effort, 0);
        assert_eq!(tasks[0].impact, 4);
        assert_eq!(tasks[0].weight, 0);
        assert_eq!(tasks[0].category, "pessoal");
        assert!(!tasks[0].done);
        assert_eq!(tasks[1].urgency, 8);
    }

    #[test]
    fn scores_above_ten_are_invalid() {
        assert!(NewTask::new("x", 10, 0, 10).has_valid_scores());
        assert!(!NewTask::new("x", 11, 5, 5).has_valid_scores());
        assert!(!NewTask::new("x", 5, 5, 200).has_valid_scores());
    }

    #[test]
    fn undated_tasks_are_due_every_day() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut task = NewTask::new("x", 1, 1, 1).into_local_task();
        assert!(task.is_due_on(day));
        task.date = NaiveDate::from_ymd_opt(2024, 1, 16);
        assert!(!task.is_due_on(day));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = NewTask::new("t", 1, 2, 3)
            .with_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .with_time("09:30");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2024-02-01");
        assert_eq!(json["time"], "09:30");
        assert_eq!(json["category"], "pessoal");
    }
}
