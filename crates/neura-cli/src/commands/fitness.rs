use neura_core::Config;

use crate::common::{self, CliResult, Store};

pub async fn run(config: &Config) -> CliResult {
    let store = common::open_store(config)?;
    apply(&store).await
}

pub async fn apply(store: &Store) -> CliResult {
    match store.fitness_sleep_hint().await {
        Some(hours) => println!("Sleep: {hours:.1} h"),
        None => println!("No wearable data available."),
    }
    Ok(())
}
