//! Discord bot integration.
//!
//! The serenity client is built in `start`, events are routed through
//! `handler::Handler`, and each slash command lives in its own module under
//! `commands` with a `register` function for its definition and a `run` function
//! for its behaviour.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive thread creation events for forum post logging
//! - `GUILD_MESSAGES` - Count messages sent in guild channels
//! - `DIRECT_MESSAGES` - Count messages sent to the bot directly
//!
//! Activity counting only needs message authors, so the privileged
//! `MESSAGE_CONTENT` intent is not requested.

pub mod commands;
pub mod handler;
pub mod start;
