use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    data::{bot_config::BotConfigStore, persistence::JsonFileStore},
    error::AppError,
};

const DEFAULT_LOG_FILTER: &str = "jimbot=info,serenity=warn,info";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs the bot at info and serenity at warn.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

/// Loads the bot config file into the process-wide store.
///
/// # Arguments
/// - `config` - Application configuration containing the config file path
///
/// # Returns
/// - `Ok(BotConfigStore)` - Store loaded from disk, or defaults if the file is missing
/// - `Err(AppError::StorageErr)` - The file could not be read or is corrupt
pub async fn load_bot_config(config: &Config) -> Result<BotConfigStore, AppError> {
    let persistence = Arc::new(JsonFileStore::new(&config.bot_config_path));
    let path = persistence.path().display().to_string();

    let store = BotConfigStore::load(persistence).await?;

    tracing::info!("Loaded bot config from {}", path);

    Ok(store)
}

/// Builds the HTTP client used for Roblox and bypass lookups.
///
/// Redirects are disabled and requests time out so a slow third-party API cannot
/// hold a command handler indefinitely.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}
