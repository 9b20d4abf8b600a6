//! Study queue blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STUDY_MINUTES: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    pub topic: String,
    pub duration_minutes: u32,
    pub created_at: DateTime<Utc>,
}

impl StudyBlock {
    /// `None` for a blank topic or a zero duration.
    pub fn new(topic: &str, duration_minutes: u32, created_at: DateTime<Utc>) -> Option<Self> {
        let topic = topic.trim();
        if topic.is_empty() || duration_minutes == 0 {
            return None;
        }
        Some(Self {
            topic: topic.to_string(),
            duration_minutes,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_topic_and_zero_minutes() {
        assert!(StudyBlock::new("  ", 40, Utc::now()).is_none());
        assert!(StudyBlock::new("Rust", 0, Utc::now()).is_none());
        let block = StudyBlock::new(" Rust traits ", 40, Utc::now()).unwrap();
        assert_eq!(block.topic, "Rust traits");
    }
}
