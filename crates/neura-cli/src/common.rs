//! Shared setup for CLI commands.

use neura_core::{ConfigError, ConfiguredRemote, Config, SessionStore};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub type Store = SessionStore<ConfiguredRemote>;

/// Install the stderr subscriber.
///
/// Priority: `RUST_LOG` env var > `log.level` from config.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}

/// Fresh store wired to the configured remote. Nothing is hydrated yet.
pub fn open_store(config: &Config) -> Result<Store, ConfigError> {
    Ok(SessionStore::new(ConfiguredRemote::from_config(config)?))
}

/// Store with tasks and focus sessions pulled from the remote.
pub async fn hydrated_store(config: &Config) -> Result<Store, ConfigError> {
    let mut store = open_store(config)?;
    store.hydrate().await;
    Ok(store)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
