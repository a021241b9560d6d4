//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Command
//! handlers return it with `?`; the serenity event handler logs it and, when the
//! interaction can still be answered, shows the user a generic failure notice built
//! from [`AppError::user_message`].

pub mod config;
pub mod game;
pub mod internal;
pub mod storage;

use thiserror::Error;

use crate::error::{
    config::ConfigError, game::GameError, internal::InternalError, storage::StorageError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion so handlers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Blackjack state machine error.
    #[error(transparent)]
    GameErr(#[from] GameError),

    /// Bot config persistence error.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Unexpected internal failure, such as an unparseable id the bot generated.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the Roblox or bypass APIs cannot be reached or return
    /// an unexpected payload.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    BadRequest(String),

    /// The invoking user lacks the permission a command requires.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    Forbidden(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message suitable for showing to the Discord user who triggered the error.
    ///
    /// `BadRequest` and `Forbidden` carry their own user-facing text. Everything else is
    /// an infrastructure failure whose details belong in the logs, so the user only sees
    /// a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message) | Self::Forbidden(message) => format!("❌ {message}"),
            _ => "❌ Error.".to_string(),
        }
    }
}
