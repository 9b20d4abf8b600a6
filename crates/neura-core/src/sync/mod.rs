//! Remote sync with local fallback.
//!
//! Every call tries the remote source first. A failure of any kind is logged
//! and replaced by a deterministic local result, so nothing in here returns
//! an error to the day model.

mod adapter;
mod toggle;

pub use adapter::{
    EnergyReading, Origin, SyncAdapter, Synced, CHAT_FAILURE_REPLY, EMPTY_REPLY_NUDGE,
};
pub use toggle::{PendingToggle, ToggleOutcome, ToggleState};
