//! Focus countdown commands.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use neura_core::focus::DEFAULT_FOCUS_TITLE;
use neura_core::{Config, FocusOutcome};
use tracing::debug;

use crate::common::{self, CliResult, Store};

#[derive(Subcommand)]
pub enum FocusAction {
    /// Run a countdown in the foreground. Ctrl-C stops it early.
    Start {
        /// Session title
        title: Vec<String>,
        /// Duration in minutes (default: focus.default_minutes)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Recorded focus sessions, newest first
    History {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: FocusAction, config: &Config) -> CliResult {
    match action {
        FocusAction::Start { title, minutes } => {
            let minutes = minutes.unwrap_or(config.focus.default_minutes);
            if minutes == 0 {
                return Err("minutes must be greater than zero".into());
            }
            let mut store = common::open_store(config)?;
            store.start_focus_session(&session_title(&title), minutes);
            let outcome = run_countdown(&mut store).await?;
            report(&outcome);
        }
        FocusAction::History { json } => {
            let store = common::hydrated_store(config).await?;
            print_history(&store, json)?;
        }
    }
    Ok(())
}

/// Join title words, falling back to the default title.
pub fn session_title(words: &[String]) -> String {
    let title = words.join(" ");
    if title.trim().is_empty() {
        DEFAULT_FOCUS_TITLE.to_string()
    } else {
        title
    }
}

pub fn print_history(store: &Store, json: bool) -> CliResult {
    let sessions = store.state().focus_sessions.to_vec();
    if json {
        return common::print_json(&sessions);
    }
    if sessions.is_empty() {
        println!("No focus sessions.");
    }
    for s in &sessions {
        let start = s.energy_start.map_or("-".to_string(), |e| e.to_string());
        let end = s.energy_end.map_or("-".to_string(), |e| e.to_string());
        println!(
            "{}  {} ({} min, energy {start} -> {end})",
            s.date.format("%Y-%m-%d %H:%M"),
            s.title,
            s.minutes
        );
    }
    Ok(())
}

/// Tick once a second until the countdown finishes or Ctrl-C stops it.
async fn run_countdown(store: &mut Store) -> Result<FocusOutcome, Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately.
    interval.tick().await;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if let Some(countdown) = store.countdown() {
            print!("\r{}  {}", countdown.title(), countdown.display());
            std::io::stdout().flush()?;
        }

        tokio::select! {
            _ = interval.tick() => {
                if let Some(outcome) = store.tick_focus().await {
                    println!();
                    return Ok(outcome);
                }
            }
            _ = &mut ctrl_c => {
                println!();
                debug!("interrupted, stopping focus countdown");
                return store
                    .stop_focus_session()
                    .await
                    .ok_or_else(|| "no focus session running".into());
            }
        }
    }
}

pub fn report(outcome: &FocusOutcome) {
    if outcome.completed {
        println!("Focus session complete: {} ({} min)", outcome.title, outcome.minutes);
    } else {
        println!("Focus session stopped: {} ({} min recorded)", outcome.title, outcome.minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_words_are_joined() {
        let words = vec!["Write".to_string(), "thesis".to_string()];
        assert_eq!(session_title(&words), "Write thesis");
    }

    #[test]
    fn missing_title_uses_default() {
        assert_eq!(session_title(&[]), DEFAULT_FOCUS_TITLE);
    }
}
