//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the slash commands, in one guild or globally

use serenity::all::{Command, Context, GuildId, Ready};

use crate::{bot::commands, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Registration replaces the full command set each time, so commands removed from
/// the bot disappear from Discord on the next start. Guild registration applies
/// immediately and is meant for development; global registration can take a while
/// to propagate.
///
/// # Arguments
/// - `state` - Bot state holding the optional command guild
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let definitions = commands::all();
    let result = match state.command_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions)
                .await
        }
        None => Command::set_global_commands(&ctx.http, definitions).await,
    };

    match result {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
