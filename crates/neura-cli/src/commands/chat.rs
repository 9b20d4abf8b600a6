use clap::Args;
use neura_core::Config;

use crate::common::{self, CliResult, Store};

#[derive(Args)]
pub struct ChatArgs {
    /// Message text
    #[arg(required = true)]
    pub text: Vec<String>,
    /// Today's energy score (0-100), sent along with the message
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub energy: Option<u8>,
}

pub async fn run(args: ChatArgs, config: &Config) -> CliResult {
    let mut store = common::hydrated_store(config).await?;
    apply(&mut store, args).await
}

pub async fn apply(store: &mut Store, args: ChatArgs) -> CliResult {
    if args.energy.is_some() {
        store.set_energy(args.energy);
    }
    let reply = store
        .send_chat(&args.text.join(" "))
        .await
        .ok_or("message must not be empty")?;
    println!("{reply}");
    Ok(())
}
