//! Session state store.
//!
//! [`SessionState`] is the aggregate root of the user's day. [`SessionStore`]
//! owns one state plus the sync adapter and exposes the mutation entry points.
//! It is constructed by the application and handed to whoever needs it;
//! there is no global instance.
//!
//! Entry points take `&mut self`, so handlers never overlap. Invalid input
//! is a silent no-op. Re-deriving mood lines or insights after a mutation is
//! left to the caller.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collections::{
    BoundedHistory, FINANCE_CAPACITY, FOCUS_SESSION_CAPACITY, STUDY_QUEUE_CAPACITY, TASK_CAPACITY,
};
use crate::finance::{plan_finance_goal, FinanceEntry, FinanceGoal, FinanceKind, FinanceSummary};
use crate::focus::{FocusCountdown, FocusOutcome, FocusSession, NewFocusSession};
use crate::insights::{build_chat_reply, build_insights, TodaySummary};
use crate::mood::{mood_line, Mood, MoodWindow};
use crate::remote::RemoteSource;
use crate::scoring::{EnergyInputs, EnergyScore};
use crate::study::StudyBlock;
use crate::sync::{EnergyReading, PendingToggle, SyncAdapter, ToggleOutcome};
use crate::task::{NewTask, Task, MAX_TASK_SCORE};

/// Everything the dashboard knows about the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub energy: Option<EnergyScore>,
    /// Newest first, capped at 40.
    pub tasks: BoundedHistory<Task>,
    /// Newest first, capped at 20.
    pub focus_sessions: BoundedHistory<FocusSession>,
    pub mood: MoodWindow,
    /// Oldest first, capped at 12.
    pub study_queue: BoundedHistory<StudyBlock>,
    /// Newest first, capped at 60.
    pub finance: BoundedHistory<FinanceEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            energy: None,
            tasks: BoundedHistory::newest_first(TASK_CAPACITY),
            focus_sessions: BoundedHistory::newest_first(FOCUS_SESSION_CAPACITY),
            mood: MoodWindow::new(),
            study_queue: BoundedHistory::fifo(STUDY_QUEUE_CAPACITY),
            finance: BoundedHistory::newest_first(FINANCE_CAPACITY),
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

pub struct SessionStore<R> {
    state: SessionState,
    sync: SyncAdapter<R>,
    countdown: Option<FocusCountdown>,
    energy_summary: Option<String>,
}

impl<R: RemoteSource> SessionStore<R> {
    pub fn new(remote: R) -> Self {
        Self::with_state(remote, SessionState::new())
    }

    pub fn with_state(remote: R, state: SessionState) -> Self {
        Self {
            state,
            sync: SyncAdapter::new(remote),
            countdown: None,
            energy_summary: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn remote(&self) -> &R {
        self.sync.remote()
    }

    /// One-line summary of the last energy submission.
    pub fn energy_summary(&self) -> Option<&str> {
        self.energy_summary.as_deref()
    }

    pub fn countdown(&self) -> Option<&FocusCountdown> {
        self.countdown.as_ref().filter(|c| c.is_running())
    }

    pub fn insights(&self) -> Vec<String> {
        build_insights(&self.state)
    }

    pub fn mood_line(&self) -> String {
        mood_line(&self.state.mood)
    }

    pub fn today_summary(&self) -> TodaySummary {
        TodaySummary::for_day(&self.state, Local::now().date_naive())
    }

    pub fn finance_summary(&self) -> FinanceSummary {
        FinanceSummary::from_entries(self.state.finance.iter())
    }

    // ── Hydration ────────────────────────────────────────────────────

    /// Replace tasks and focus sessions with the remote copies.
    ///
    /// Each collection is replaced whole on success and left untouched on
    /// failure.
    pub async fn hydrate(&mut self) {
        self.sync_tasks().await;
        self.sync_focus_sessions().await;
    }

    pub async fn sync_tasks(&mut self) {
        if let Some(tasks) = self.sync.fetch_tasks().await {
            self.state.tasks.replace_all(tasks);
        }
    }

    pub async fn sync_focus_sessions(&mut self) {
        if let Some(sessions) = self.sync.fetch_focus_sessions().await {
            self.state.focus_sessions.replace_all(sessions);
        }
    }

    // ── Energy ───────────────────────────────────────────────────────

    /// Overwrite the day's energy score.
    pub async fn submit_energy(&mut self, inputs: EnergyInputs) {
        let EnergyReading { score, label, .. } = self.sync.compute_energy(&inputs).await;
        self.state.energy = score;
        self.energy_summary = score.map(|s| format!("Your energy today is {s}/100. {label}"));
    }

    /// Seed the day's score from a known value, e.g. one given on the
    /// command line. Values above 100 are clamped.
    pub fn set_energy(&mut self, score: Option<EnergyScore>) {
        self.state.energy = score.map(|s| s.min(100));
    }

    /// Sleep hours from the wearable endpoint, one decimal, for prefilling.
    pub async fn fitness_sleep_hint(&self) -> Option<f64> {
        let snapshot = self.sync.fetch_fitness().await?;
        snapshot
            .sleep_hours
            .filter(|h| h.is_finite())
            .map(|h| (h * 10.0).round() / 10.0)
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub async fn create_task(&mut self, payload: NewTask) {
        if payload.title.trim().is_empty() {
            debug!("ignoring task without a title");
            return;
        }
        if !payload.has_valid_scores() {
            debug!(
                urgency = payload.urgency,
                effort = payload.effort,
                impact = payload.impact,
                "ignoring task with a score above {MAX_TASK_SCORE}"
            );
            return;
        }
        let payload = NewTask {
            title: payload.title.trim().to_string(),
            ..payload
        };
        let created = self.sync.create_task(payload).await;
        self.state.tasks.insert(created.value);
    }

    /// Flip `done` locally. `None` if the task is unknown.
    pub fn begin_toggle(&mut self, id: &str) -> Option<PendingToggle> {
        let task = self.state.tasks.find_mut(|t| t.id == id)?;
        let pending = PendingToggle::new(id, task.done);
        task.done = pending.optimistic_done();
        Some(pending)
    }

    /// Confirm the flip remotely, or revert it.
    pub async fn finish_toggle(&mut self, pending: PendingToggle) -> ToggleOutcome {
        // Tasks without an id never reached the remote; nothing to confirm.
        if pending.task_id().is_empty() {
            return pending.commit();
        }
        match self.sync.toggle_task(pending.task_id()).await {
            Ok(()) => {
                info!(id = pending.task_id(), "task toggle committed");
                pending.commit()
            }
            Err(e) => {
                warn!(
                    id = pending.task_id(),
                    error = %e,
                    "task toggle failed remotely, rolling back"
                );
                let outcome = pending.roll_back();
                if let Some(task) = self.state.tasks.find_mut(|t| t.id == outcome.task_id) {
                    task.done = outcome.done;
                }
                outcome
            }
        }
    }

    /// Optimistic toggle. `on_pending` sees the flipped state before the
    /// remote call is issued.
    pub async fn toggle_task_with(
        &mut self,
        id: &str,
        on_pending: impl FnOnce(&SessionState),
    ) -> Option<ToggleOutcome> {
        let pending = self.begin_toggle(id)?;
        on_pending(&self.state);
        Some(self.finish_toggle(pending).await)
    }

    pub async fn toggle_task(&mut self, id: &str) -> Option<ToggleOutcome> {
        self.toggle_task_with(id, |_| {}).await
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Start a countdown, replacing any running one. Zero minutes is a no-op.
    pub fn start_focus_session(&mut self, title: &str, minutes: u32) {
        match FocusCountdown::start(title, minutes) {
            Some(countdown) => self.countdown = Some(countdown),
            None => debug!("ignoring focus session without a duration"),
        }
    }

    /// Advance the running countdown by one second and record the session
    /// when it reaches zero. Returns the outcome in that case.
    pub async fn tick_focus(&mut self) -> Option<FocusOutcome> {
        let outcome = self.countdown.as_mut()?.tick()?;
        self.countdown = None;
        self.complete_focus_session(&outcome.title, outcome.minutes)
            .await;
        Some(outcome)
    }

    /// Stop the running countdown and record the elapsed minutes.
    pub async fn stop_focus_session(&mut self) -> Option<FocusOutcome> {
        let outcome = self.countdown.take()?.stop()?;
        self.complete_focus_session(&outcome.title, outcome.minutes)
            .await;
        Some(outcome)
    }

    /// Record a finished focus interval and shift the mood window once.
    pub async fn complete_focus_session(&mut self, title: &str, minutes: u32) {
        if minutes == 0 {
            debug!("ignoring focus session of zero minutes");
            return;
        }
        let payload = NewFocusSession {
            title: title.to_string(),
            minutes,
            energy_start: self.state.energy,
        };
        let stored = self.sync.create_focus_session(payload, Utc::now()).await;
        self.state.focus_sessions.insert(stored.value);
        self.state.mood.shift(Mood::from_session_minutes(minutes));
    }

    // ── Study / finance ──────────────────────────────────────────────

    /// Queue a study block. Returns false when the input was rejected.
    pub fn add_study_block(&mut self, topic: &str, duration_minutes: u32) -> bool {
        match StudyBlock::new(topic, duration_minutes, Utc::now()) {
            Some(block) => {
                self.state.study_queue.insert(block);
                true
            }
            None => {
                debug!("ignoring invalid study block");
                false
            }
        }
    }

    /// Record an income or expense. Returns false when the input was rejected.
    pub fn add_finance_entry(&mut self, kind: FinanceKind, description: &str, value: f64) -> bool {
        match FinanceEntry::new(kind, description, value, Utc::now()) {
            Some(entry) => {
                self.state.finance.insert(entry);
                true
            }
            None => {
                debug!("ignoring invalid finance entry");
                false
            }
        }
    }

    /// Plan a savings target against today's date.
    pub fn compute_finance_goal(&self, target: f64, deadline: NaiveDate) -> Option<FinanceGoal> {
        plan_finance_goal(target, deadline, Local::now().date_naive())
    }

    // ── Chat ─────────────────────────────────────────────────────────

    /// Reply to a chat message. `None` for blank input.
    pub async fn send_chat(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let reply = self.sync.chat_reply(text, self.state.energy).await;
        Some(reply.value)
    }

    /// Reply composed from the day's own numbers, without the remote.
    pub fn reflect(&self, text: &str) -> String {
        build_chat_reply(text, &self.state)
    }
}
