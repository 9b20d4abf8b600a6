use clap::Args;
use neura_core::scoring::EnergyBand;
use neura_core::{energy_label, Config, EnergyInputs};

use crate::common::{self, CliResult, Store};

#[derive(Args)]
pub struct EnergyArgs {
    /// Hours slept last night
    #[arg(long)]
    pub sleep: Option<f64>,
    /// Training level (0-10)
    #[arg(long, default_value = "5")]
    pub training: f64,
    /// Focus level (0-10)
    #[arg(long, default_value = "5")]
    pub focus: f64,
    /// Nutrition level (0-10)
    #[arg(long, default_value = "5")]
    pub nutrition: f64,
    /// Prefill sleep hours from the wearable endpoint
    #[arg(long)]
    pub fit: bool,
}

pub async fn run(args: EnergyArgs, config: &Config) -> CliResult {
    let mut store = common::open_store(config)?;
    apply(&mut store, args).await
}

pub async fn apply(store: &mut Store, args: EnergyArgs) -> CliResult {
    let sleep_hours = match (args.sleep, args.fit) {
        (Some(hours), _) => hours,
        (None, true) => store
            .fitness_sleep_hint()
            .await
            .ok_or("no sleep data from the wearable endpoint, pass --sleep")?,
        (None, false) => return Err("--sleep is required unless --fit is given".into()),
    };

    store
        .submit_energy(EnergyInputs {
            sleep_hours,
            training_level: args.training,
            focus_level: args.focus,
            nutrition_level: args.nutrition,
        })
        .await;

    match store.energy_summary() {
        Some(summary) => println!("{summary}"),
        None => println!("{}", energy_label(None)),
    }
    println!("band: {}", EnergyBand::from_score(store.state().energy).name());
    Ok(())
}
