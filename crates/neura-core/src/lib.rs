//! # Neura Core Library
//!
//! Day model and derived metrics for the Neura personal dashboard: energy,
//! tasks, focus sessions, mood, study queue and finances. The CLI is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Scoring**: pure energy and task-weight formulas
//! - **Store**: the session state plus every mutation entry point
//! - **Sync**: remote-first calls that fall back to local results
//! - **Remote**: the backend contract and its HTTP client
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SessionStore`]: owns the day and applies mutations
//! - [`SyncAdapter`]: remote first, local fallback second
//! - [`RemoteSource`]: trait over the backend
//! - [`Config`]: application configuration management

pub mod collections;
pub mod error;
pub mod finance;
pub mod focus;
pub mod insights;
pub mod mood;
pub mod remote;
pub mod scoring;
pub mod storage;
pub mod store;
pub mod study;
pub mod sync;
pub mod task;

pub use collections::{BoundedHistory, Layout};
pub use error::{ConfigError, CoreError, RemoteError};
pub use finance::{format_currency, FinanceEntry, FinanceGoal, FinanceKind, FinanceSummary};
pub use focus::{FocusCountdown, FocusOutcome, FocusSession, NewFocusSession};
pub use insights::{build_chat_reply, build_insights, TodaySummary};
pub use mood::{mood_line, Mood, MoodWindow};
pub use remote::{ConfiguredRemote, HttpRemote, OfflineRemote, RemoteSource};
pub use scoring::{compute_energy, compute_task_weight, energy_label, EnergyInputs, EnergyScore};
pub use storage::Config;
pub use store::{SessionState, SessionStore};
pub use study::StudyBlock;
pub use sync::{Origin, SyncAdapter, Synced, ToggleOutcome, ToggleState};
pub use task::{NewTask, Task};
