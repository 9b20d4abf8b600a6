use clap::Args;
use neura_core::Config;

use crate::common::{self, CliResult, Store};

#[derive(Args)]
pub struct InsightsArgs {
    /// Today's energy score (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub energy: Option<u8>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: InsightsArgs, config: &Config) -> CliResult {
    let mut store = common::hydrated_store(config).await?;
    apply(&mut store, args)
}

pub fn apply(store: &mut Store, args: InsightsArgs) -> CliResult {
    if args.energy.is_some() {
        store.set_energy(args.energy);
    }
    let insights = store.insights();
    if args.json {
        return common::print_json(&insights);
    }
    for line in &insights {
        println!("- {line}");
    }
    Ok(())
}
