//! Task management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use neura_core::sync::{ToggleOutcome, ToggleState};
use neura_core::task::{DEFAULT_CATEGORY, MAX_TASK_SCORE};
use neura_core::{Config, NewTask};

use crate::common::{self, CliResult, Store};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new task
    Add {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
        /// Urgency (0-10)
        #[arg(long, default_value = "5", value_parser = score_parser())]
        urgency: u8,
        /// Effort (0-10)
        #[arg(long, default_value = "5", value_parser = score_parser())]
        effort: u8,
        /// Impact (0-10)
        #[arg(long, default_value = "5", value_parser = score_parser())]
        impact: u8,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,
        /// Category
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// Flip a task between open and done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Counts for today's tasks
    Today,
}

fn score_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=i64::from(MAX_TASK_SCORE))
}

pub async fn run(action: TaskAction, config: &Config) -> CliResult {
    let mut store = common::hydrated_store(config).await?;
    apply(&mut store, action).await
}

pub async fn apply(store: &mut Store, action: TaskAction) -> CliResult {
    match action {
        TaskAction::List { json } => {
            let tasks = store.state().tasks.to_vec();
            if json {
                return common::print_json(&tasks);
            }
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for t in &tasks {
                let mark = if t.done { "x" } else { " " };
                let due = t.date.map(|d| format!(" due {d}")).unwrap_or_default();
                println!(
                    "[{mark}] {}  {} (weight {}, urgency {}){due}",
                    t.id, t.title, t.weight, t.urgency
                );
            }
        }
        TaskAction::Add {
            title,
            urgency,
            effort,
            impact,
            date,
            time,
            category,
        } => {
            let title = title.join(" ");
            if title.trim().is_empty() {
                return Err("task title must not be empty".into());
            }
            let mut payload = NewTask::new(title, urgency, effort, impact).with_category(category);
            if let Some(date) = date {
                payload = payload.with_date(date);
            }
            if let Some(time) = time {
                payload = payload.with_time(time);
            }
            store.create_task(payload).await;
            if let Some(task) = store.state().tasks.get(0) {
                println!("Task created: {} ({})", task.title, task.id);
            }
        }
        TaskAction::Toggle { id } => {
            let outcome = store
                .toggle_task(&id)
                .await
                .ok_or_else(|| format!("task not found: {id}"))?;
            println!("{}", toggle_message(&outcome));
        }
        TaskAction::Today => {
            let summary = store.today_summary();
            println!(
                "{} today, {} urgent open, {} done",
                summary.total, summary.urgent_open, summary.done
            );
        }
    }
    Ok(())
}

/// A rolled-back toggle is reported, not treated as a failure.
fn toggle_message(outcome: &ToggleOutcome) -> String {
    match outcome.state {
        ToggleState::Committed => {
            let status = if outcome.done { "done" } else { "open" };
            format!("Task {} is now {status}", outcome.task_id)
        }
        _ => format!("Could not toggle task {}; change reverted.", outcome.task_id),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TaskCli {
        #[command(subcommand)]
        action: TaskAction,
    }

    fn parse(args: &[&str]) -> Result<TaskAction, clap::Error> {
        TaskCli::try_parse_from(std::iter::once("task").chain(args.iter().copied()))
            .map(|cli| cli.action)
    }

    #[test]
    fn add_joins_title_words() {
        match parse(&["add", "Pay", "rent", "--urgency", "9"]).unwrap() {
            TaskAction::Add { title, urgency, effort, .. } => {
                assert_eq!(title.join(" "), "Pay rent");
                assert_eq!(urgency, 9);
                assert_eq!(effort, 5);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn scores_above_ten_are_rejected() {
        assert!(parse(&["add", "x", "--urgency", "10"]).is_ok());
        assert!(parse(&["add", "x", "--urgency", "11"]).is_err());
        assert!(parse(&["add", "x", "--effort", "200"]).is_err());
        assert!(parse(&["add", "x", "--impact", "-1"]).is_err());
    }

    #[test]
    fn rolled_back_toggle_reports_revert() {
        let outcome = ToggleOutcome {
            task_id: "t1".into(),
            state: ToggleState::RolledBack,
            done: false,
        };
        assert_eq!(toggle_message(&outcome), "Could not toggle task t1; change reverted.");

        let outcome = ToggleOutcome {
            state: ToggleState::Committed,
            done: true,
            ..outcome
        };
        assert_eq!(toggle_message(&outcome), "Task t1 is now done");
    }
}
