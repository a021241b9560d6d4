//! Bot state shared across all event handlers.
//!
//! `BotState` holds every dependency the handlers need. It is built once during
//! startup, handed to the serenity event handler, and cloned into background tasks
//! such as the session expiry scheduler.

use std::sync::Arc;

use crate::{
    data::bot_config::BotConfigStore,
    service::{
        blackjack::BlackjackService, bypass::BypassService, roblox::RobloxService,
        slots::SlotMachine,
    },
};

/// Shared resources and dependencies for event handlers.
///
/// All fields are cheap to clone:
/// - `Arc<BotConfigStore>` is a reference-counted pointer
/// - `BlackjackService` and `SlotMachine` keep their state behind `Arc`s
/// - The lookup services wrap a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct BotState {
    /// Persisted log channel and activity counts.
    pub store: Arc<BotConfigStore>,

    /// Live blackjack sessions.
    pub blackjack: BlackjackService,

    pub slots: SlotMachine,
    pub roblox: RobloxService,
    pub bypass: BypassService,

    /// Guild to register slash commands in, or `None` for global registration.
    pub command_guild_id: Option<u64>,
}

impl BotState {
    /// Creates a new bot state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Loaded bot config store
    /// - `blackjack` - Session registry for blackjack games
    /// - `slots` - Slot machine RNG
    /// - `http_client` - HTTP client shared by the lookup services
    /// - `command_guild_id` - Guild for command registration, if any
    pub fn new(
        store: Arc<BotConfigStore>,
        blackjack: BlackjackService,
        slots: SlotMachine,
        http_client: reqwest::Client,
        command_guild_id: Option<u64>,
    ) -> Self {
        Self {
            store,
            blackjack,
            slots,
            roblox: RobloxService::new(http_client.clone()),
            bypass: BypassService::new(http_client),
            command_guild_id,
        }
    }
}
