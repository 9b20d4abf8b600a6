use chrono::NaiveDate;
use clap::Subcommand;
use neura_core::Config;

use crate::common::{self, CliResult, Store};

#[derive(Subcommand)]
pub enum FinanceAction {
    /// Monthly savings needed to reach a target by a deadline
    Goal {
        /// Target amount
        amount: f64,
        /// Deadline (YYYY-MM-DD)
        deadline: NaiveDate,
    },
}

pub fn run(action: FinanceAction, config: &Config) -> CliResult {
    let store = common::open_store(config)?;
    apply(&store, action)
}

pub fn apply(store: &Store, action: FinanceAction) -> CliResult {
    match action {
        FinanceAction::Goal { amount, deadline } => {
            let goal = store
                .compute_finance_goal(amount, deadline)
                .ok_or("target must be a positive amount")?;
            println!("{}", goal.message());
        }
    }
    Ok(())
}
