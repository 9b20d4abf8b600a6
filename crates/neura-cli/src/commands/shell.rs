//! Interactive session.
//!
//! One store lives for the whole session, so the study queue, the finance
//! ledger and the mood window accumulate here. A one-second interval drives
//! the focus countdown while stdin is read line by line. Each line is parsed
//! with the same clap grammar as the one-shot commands.

use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};
use neura_core::finance::format_currency;
use neura_core::{Config, FinanceKind};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::chat::ChatArgs;
use super::energy::EnergyArgs;
use super::finance::FinanceAction;
use super::focus::{self, report, FocusAction};
use super::insights::InsightsArgs;
use super::task::TaskAction;
use crate::common::{self, CliResult, Store};

#[derive(Parser)]
#[command(name = "neura", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    cmd: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// Submit today's energy
    Energy(EnergyArgs),
    /// Sleep hours from the wearable
    Fitness,
    /// Task management
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Focus countdown, ticking in the background
    Focus {
        #[command(subcommand)]
        action: ShellFocus,
    },
    /// Study queue
    Study {
        #[command(subcommand)]
        action: StudyAction,
    },
    /// Income, expenses and savings planning
    Finance {
        #[command(subcommand)]
        action: ShellFinance,
    },
    /// Mood line for the last seven sessions
    Mood,
    /// Guidance derived from energy, tasks and focus history
    Insights(InsightsArgs),
    /// Talk to the psychologist module
    Chat(ChatArgs),
    /// Reply composed from today's numbers, without the remote
    Reflect {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Pull tasks and focus sessions from the remote
    Sync,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand)]
pub enum ShellFocus {
    #[command(flatten)]
    Common(FocusAction),
    /// Stop the running countdown and record the elapsed minutes
    Stop,
    /// Remaining time of the running countdown
    Status,
}

#[derive(Subcommand)]
pub enum StudyAction {
    /// Queue a study block
    Add {
        /// Topic
        #[arg(required = true)]
        topic: Vec<String>,
        /// Duration in minutes (default: study.default_minutes)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Queued study blocks, oldest first
    List,
}

#[derive(Subcommand)]
pub enum ShellFinance {
    #[command(flatten)]
    Common(FinanceAction),
    /// Record an income
    Income {
        value: f64,
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Record an expense
    Expense {
        value: f64,
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Income, expense and balance of the ledger
    Summary,
}

/// Parse one input line. `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(std::iter::once("neura").chain(words)).map(|parsed| Some(parsed.cmd))
}

/// Apply a command to the store. `Ok(false)` when the session should end.
async fn execute(
    store: &mut Store,
    cmd: ShellCommand,
    config: &Config,
) -> Result<bool, Box<dyn std::error::Error>> {
    match cmd {
        ShellCommand::Energy(args) => super::energy::apply(store, args).await?,
        ShellCommand::Fitness => super::fitness::apply(store).await?,
        ShellCommand::Task { action } => super::task::apply(store, action).await?,
        ShellCommand::Focus { action } => focus_command(store, action, config).await?,
        ShellCommand::Study { action } => study_command(store, action, config),
        ShellCommand::Finance { action } => finance_command(store, action)?,
        ShellCommand::Mood => println!("{}", store.mood_line()),
        ShellCommand::Insights(args) => super::insights::apply(store, args)?,
        ShellCommand::Chat(args) => super::chat::apply(store, args).await?,
        ShellCommand::Reflect { text } => println!("{}", store.reflect(&text.join(" "))),
        ShellCommand::Sync => {
            store.hydrate().await;
            println!(
                "{} task(s), {} focus session(s)",
                store.state().tasks.len(),
                store.state().focus_sessions.len()
            );
        }
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

async fn focus_command(store: &mut Store, action: ShellFocus, config: &Config) -> CliResult {
    match action {
        ShellFocus::Common(FocusAction::Start { title, minutes }) => {
            let minutes = minutes.unwrap_or(config.focus.default_minutes);
            if minutes == 0 {
                return Err("minutes must be greater than zero".into());
            }
            store.start_focus_session(&focus::session_title(&title), minutes);
            if let Some(c) = store.countdown() {
                println!("Focus started: {} ({} min)", c.title(), c.duration_min());
            }
        }
        ShellFocus::Common(FocusAction::History { json }) => focus::print_history(store, json)?,
        ShellFocus::Stop => match store.stop_focus_session().await {
            Some(outcome) => report(&outcome),
            None => println!("No focus session running."),
        },
        ShellFocus::Status => match store.countdown() {
            Some(c) => println!("{}  {}", c.title(), c.display()),
            None => println!("No focus session running."),
        },
    }
    Ok(())
}

fn study_command(store: &mut Store, action: StudyAction, config: &Config) {
    match action {
        StudyAction::Add { topic, minutes } => {
            let minutes = minutes.unwrap_or(config.study.default_minutes);
            if !store.add_study_block(&topic.join(" "), minutes) {
                println!("Study block needs a topic and a duration.");
            }
        }
        StudyAction::List => {
            for block in store.state().study_queue.iter() {
                println!("{} ({} min)", block.topic, block.duration_minutes);
            }
        }
    }
}

fn finance_command(store: &mut Store, action: ShellFinance) -> CliResult {
    let (kind, value, description) = match action {
        ShellFinance::Common(action) => return super::finance::apply(store, action),
        ShellFinance::Summary => {
            let s = store.finance_summary();
            println!(
                "income {}  expense {}  balance {}",
                format_currency(s.income),
                format_currency(s.expense),
                format_currency(s.balance)
            );
            return Ok(());
        }
        ShellFinance::Income { value, description } => (FinanceKind::Income, value, description),
        ShellFinance::Expense { value, description } => {
            (FinanceKind::Expense, value, description)
        }
    };
    if !store.add_finance_entry(kind, &description.join(" "), value) {
        println!("Entry needs a description and a positive value.");
    }
    Ok(())
}

fn prompt() {
    print!("neura> ");
    std::io::stdout().flush().ok();
}

pub async fn run(config: &Config) -> CliResult {
    let mut store = common::hydrated_store(config).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;

    println!("Type 'help' for commands.");
    prompt();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(outcome) = store.tick_focus().await {
                    println!();
                    report(&outcome);
                    prompt();
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Ok(Some(cmd)) => match execute(&mut store, cmd, config).await {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => println!("error: {e}"),
                    },
                    Ok(None) => {}
                    Err(e) => print!("{}", e.render()),
                }
                prompt();
            }
        }
    }

    if let Some(outcome) = store.stop_focus_session().await {
        debug!("session ended with a running countdown");
        report(&outcome);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(line: &str) -> ShellCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn energy_uses_the_one_shot_flags() {
        match parse("energy --sleep 7.5 --nutrition 8") {
            ShellCommand::Energy(args) => {
                assert_eq!(args.sleep, Some(7.5));
                assert_eq!(args.training, 5.0);
                assert_eq!(args.nutrition, 8.0);
            }
            _ => panic!("expected energy"),
        }
        assert!(parse_line("energy --sleep lots").is_err());
    }

    #[test]
    fn task_add_takes_multi_word_title() {
        match parse("task add Pay rent --urgency 9") {
            ShellCommand::Task {
                action: TaskAction::Add { title, urgency, .. },
            } => {
                assert_eq!(title.join(" "), "Pay rent");
                assert_eq!(urgency, 9);
            }
            _ => panic!("expected task add"),
        }
        assert!(parse_line("task add x --urgency 11").is_err());
    }

    #[test]
    fn focus_start_reuses_one_shot_grammar() {
        match parse("focus start Write thesis --minutes 50") {
            ShellCommand::Focus {
                action: ShellFocus::Common(FocusAction::Start { title, minutes }),
            } => {
                assert_eq!(focus::session_title(&title), "Write thesis");
                assert_eq!(minutes, Some(50));
            }
            _ => panic!("expected focus start"),
        }
        assert!(matches!(
            parse("focus stop"),
            ShellCommand::Focus {
                action: ShellFocus::Stop
            }
        ));
    }

    #[test]
    fn finance_entries_and_goal() {
        match parse("finance expense 12.5 Lunch out") {
            ShellCommand::Finance {
                action: ShellFinance::Expense { value, description },
            } => {
                assert_eq!(value, 12.5);
                assert_eq!(description.join(" "), "Lunch out");
            }
            _ => panic!("expected expense"),
        }
        match parse("finance goal 1200 2030-04-15") {
            ShellCommand::Finance {
                action: ShellFinance::Common(FinanceAction::Goal { amount, deadline }),
            } => {
                assert_eq!(amount, 1200.0);
                assert_eq!(deadline, NaiveDate::from_ymd_opt(2030, 4, 15).unwrap());
            }
            _ => panic!("expected goal"),
        }
        assert!(parse_line("finance income abc Salary").is_err());
        assert!(parse_line("finance goal 1200 next-year").is_err());
    }

    #[test]
    fn study_minutes_are_optional() {
        match parse("study add Linear algebra --minutes 25") {
            ShellCommand::Study {
                action: StudyAction::Add { topic, minutes },
            } => {
                assert_eq!(topic.join(" "), "Linear algebra");
                assert_eq!(minutes, Some(25));
            }
            _ => panic!("expected study add"),
        }
        assert!(matches!(
            parse("study add Rust"),
            ShellCommand::Study {
                action: StudyAction::Add { minutes: None, .. }
            }
        ));
    }

    #[test]
    fn exit_is_an_alias_for_quit() {
        assert!(matches!(parse("exit"), ShellCommand::Quit));
        assert!(matches!(parse("quit"), ShellCommand::Quit));
    }

    #[test]
    fn help_and_unknown_commands_are_errors() {
        let help = parse_line("help").err().unwrap();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert!(help.render().to_string().contains("reflect"));

        assert!(parse_line("dance").is_err());
        assert!(parse_line("chat").is_err());
    }
}
