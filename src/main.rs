//! JimBot, a Discord community bot.
//!
//! Games (`/gambling_machine`, `/blackjack`), member activity tracking
//! (`/activity`), moderation (`/mute`, `/unmute`), lookups (`/roblox`, `/bypass`)
//! and forum post logging (`/setforumlogs`) for a single community.
//!
//! # Layout
//!
//! - **Bot** (`bot/`) - Serenity client, event handlers and slash commands
//! - **Service** (`service/`) - Command behaviour independent of Discord
//! - **Data** (`data/`) - The persisted bot config and its JSON file
//! - **Model** (`model/`) - Cards, blackjack rules, slot reels and API payloads
//! - **Scheduler** (`scheduler/`) - Expiry of abandoned blackjack games
//!
//! Configuration is read from the environment (and `.env`) by `config`.

mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    scheduler::session_expiry,
    service::{blackjack::BlackjackService, slots::SlotMachine},
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let store = Arc::new(startup::load_bot_config(&config).await?);
    let http_client = startup::setup_reqwest_client()?;
    let blackjack = BlackjackService::new(config.blackjack_timeout);

    session_expiry::start_scheduler(blackjack.clone()).await?;

    let state = BotState::new(
        store,
        blackjack,
        SlotMachine::new(),
        http_client,
        config.discord_guild_id,
    );

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
