//! Persistence layer for the bot config file.
//!
//! `persistence` defines how the whole config is read and written; `bot_config`
//! owns the in-memory copy the rest of the bot works against and writes every
//! change back through the persistence collaborator.

pub mod bot_config;
pub mod persistence;
