use clap::{Parser, Subcommand};
use neura_core::Config;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "neura", version, about = "Neura personal dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute today's energy score
    Energy(commands::energy::EnergyArgs),
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Focus countdown and session history
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Savings planning
    Finance {
        #[command(subcommand)]
        action: commands::finance::FinanceAction,
    },
    /// Talk to the psychologist module
    Chat(commands::chat::ChatArgs),
    /// Guidance derived from energy, tasks and focus history
    Insights(commands::insights::InsightsArgs),
    /// Wearable snapshot
    Fitness,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Interactive session keeping one day model alive
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    common::init_logging(&config);

    let result = match cli.command {
        Commands::Energy(args) => commands::energy::run(args, &config).await,
        Commands::Task { action } => commands::task::run(action, &config).await,
        Commands::Focus { action } => commands::focus::run(action, &config).await,
        Commands::Finance { action } => commands::finance::run(action, &config),
        Commands::Chat(args) => commands::chat::run(args, &config).await,
        Commands::Insights(args) => commands::insights::run(args, &config).await,
        Commands::Fitness => commands::fitness::run(&config).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Shell => commands::shell::run(&config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
