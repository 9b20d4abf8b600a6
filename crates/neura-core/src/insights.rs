//! Human-readable guidance derived from the day model.
//!
//! Both generators read the state in the same fixed order: energy, urgent
//! open tasks, deep-focus streak. The chat reply is the local stand-in for
//! the remote psychologist and never looks at what the user wrote.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::EnergyScore;
use crate::store::SessionState;

pub const INSUFFICIENT_DATA: &str = "Not enough data yet. Log your energy, use Focus Mode \
and add tasks so I can generate more precise insights.";

const CHAT_OPENING: &str = "Thanks for sharing. I'll weigh what you described together with \
your energy, focus sessions and tasks. ";

const CHAT_CLOSING: &str = "If you can, take a short break, breathe deeply and consciously \
choose the next step for today instead of running on autopilot.";

/// Coarse three-way split used by guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceTier {
    Low,
    Moderate,
    High,
}

impl GuidanceTier {
    pub fn from_score(score: EnergyScore) -> Self {
        if score < 40 {
            GuidanceTier::Low
        } else if score < 70 {
            GuidanceTier::Moderate
        } else {
            GuidanceTier::High
        }
    }
}

fn urgent_open_count(state: &SessionState) -> usize {
    state.tasks.iter().filter(|t| t.is_urgent_open()).count()
}

fn deep_focus_count(state: &SessionState) -> usize {
    state.focus_sessions.iter().filter(|s| s.is_deep()).count()
}

/// One to four guidance lines for the insights panel.
pub fn build_insights(state: &SessionState) -> Vec<String> {
    let mut out = Vec::with_capacity(3);

    if let Some(energy) = state.energy {
        let line = match GuidanceTier::from_score(energy) {
            GuidanceTier::Low => {
                "Low energy detected: plan the day around short tasks and reviews, \
                 avoiding heavy decisions."
            }
            GuidanceTier::Moderate => {
                "Moderate energy: a good moment to mix operational tasks with a study \
                 or project block."
            }
            GuidanceTier::High => {
                "High energy: the ideal moment to push an important project or study \
                 difficult material."
            }
        };
        out.push(line.to_string());
    }

    let urgent = urgent_open_count(state);
    if urgent > 0 {
        out.push(format!(
            "There are {urgent} high-urgency tasks pending. Suggestion: make at most 3 of \
             them today's priority."
        ));
    }

    let deep = deep_focus_count(state);
    if deep > 0 {
        out.push(format!(
            "{deep} deep focus session(s) recorded. Use this pattern to build a fixed \
             study routine."
        ));
    }

    if out.is_empty() {
        out.push(INSUFFICIENT_DATA.to_string());
    }
    out
}

/// Compose the local chat reply. `_text` is deliberately unused.
pub fn build_chat_reply(_text: &str, state: &SessionState) -> String {
    let mut reply = String::from(CHAT_OPENING);

    if let Some(energy) = state.energy {
        reply.push_str(match GuidanceTier::from_score(energy) {
            GuidanceTier::Low => {
                "Your energy is low today, so ease up on yourself and prioritise short, \
                 simple tasks. "
            }
            GuidanceTier::Moderate => {
                "Your energy is moderate, which is good for balancing operational work \
                 with one deeper task. "
            }
            GuidanceTier::High => {
                "Your energy is high, a great moment to move forward on something you \
                 have been putting off. "
            }
        });
    }

    let urgent = urgent_open_count(state);
    if urgent > 0 {
        reply.push_str(&format!(
            "I notice {urgent} high-urgency task(s) piling up. Pick just one or two as the \
             main focus of the day instead of trying to solve everything at once. "
        ));
    }

    if deep_focus_count(state) > 0 {
        reply.push_str(
            "You have completed consistent focus sessions recently, which shows \
             discipline. Use that history as proof you can get back into deep \
             concentration. ",
        );
    }

    reply.push_str(CHAT_CLOSING);
    reply
}

/// Counts for today's mini task map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub total: usize,
    pub urgent_open: usize,
    pub done: usize,
}

impl TodaySummary {
    /// Tasks without a date count for every day.
    pub fn for_day(state: &SessionState, day: NaiveDate) -> Self {
        state
            .tasks
            .iter()
            .filter(|t| t.is_due_on(day))
            .fold(Self::default(), |mut acc, t| {
                acc.total += 1;
                if t.is_urgent_open() {
                    acc.urgent_open += 1;
                }
                if t.done {
                    acc.done += 1;
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::NewFocusSession;
    use crate::task::NewTask;
    use chrono::Utc;

    fn deep_session(minutes: u32) -> crate::focus::FocusSession {
        NewFocusSession {
            title: "x".into(),
            minutes,
            energy_start: None,
        }
        .into_local_session(Utc::now())
    }

    #[test]
    fn empty_state_yields_single_fallback() {
        let state = SessionState::new();
        assert_eq!(build_insights(&state), vec![INSUFFICIENT_DATA.to_string()]);
    }

    #[test]
    fn insights_follow_fixed_order() {
        let mut state = SessionState::new();
        state.energy = Some(30);
        state.tasks.insert(NewTask::new("urgent", 9, 1, 1).into_local_task());
        state.tasks.insert(NewTask::new("calm", 2, 1, 1).into_local_task());
        state.focus_sessions.insert(deep_session(30));

        let insights = build_insights(&state);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].starts_with("Low energy"));
        assert!(insights[1].starts_with("There are 1 high-urgency"));
        assert!(insights[2].starts_with("1 deep focus"));
    }

    #[test]
    fn done_urgent_tasks_and_short_sessions_do_not_count() {
        let mut state = SessionState::new();
        let mut task = NewTask::new("urgent", 9, 1, 1).into_local_task();
        task.done = true;
        state.tasks.insert(task);
        state.focus_sessions.insert(deep_session(24));
        assert_eq!(build_insights(&state), vec![INSUFFICIENT_DATA.to_string()]);
    }

    #[test]
    fn energy_tiers_use_forty_and_seventy() {
        assert_eq!(GuidanceTier::from_score(39), GuidanceTier::Low);
        assert_eq!(GuidanceTier::from_score(40), GuidanceTier::Moderate);
        assert_eq!(GuidanceTier::from_score(69), GuidanceTier::Moderate);
        assert_eq!(GuidanceTier::from_score(70), GuidanceTier::High);
    }

    #[test]
    fn chat_reply_ignores_text() {
        let mut state = SessionState::new();
        state.energy = Some(75);
        let a = build_chat_reply("I feel awful", &state);
        let b = build_chat_reply("great day!", &state);
        assert_eq!(a, b);
        assert!(a.starts_with(CHAT_OPENING));
        assert!(a.contains("Your energy is high"));
        assert!(a.ends_with(CHAT_CLOSING));
    }

    #[test]
    fn chat_reply_without_data_is_opening_and_closing() {
        let state = SessionState::new();
        assert_eq!(
            build_chat_reply("", &state),
            format!("{CHAT_OPENING}{CHAT_CLOSING}")
        );
    }

    #[test]
    fn today_summary_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut state = SessionState::new();
        state.tasks.insert(NewTask::new("a", 8, 1, 1).into_local_task());
        state
            .tasks
            .insert(NewTask::new("b", 1, 1, 1).with_date(today).into_local_task());
        let mut done = NewTask::new("c", 9, 1, 1).into_local_task();
        done.done = true;
        state.tasks.insert(done);
        state.tasks.insert(
            NewTask::new("tomorrow", 9, 1, 1)
                .with_date(today.succ_opt().unwrap())
                .into_local_task(),
        );

        let s = TodaySummary::for_day(&state, today);
        assert_eq!(s.total, 3);
        assert_eq!(s.urgent_open, 1);
        assert_eq!(s.done, 1);
    }
}
