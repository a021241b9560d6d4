use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The config file could not be read or written, even after a retry.
    ///
    /// The on-disk file is left untouched when this is returned from a save since
    /// writes go to a temporary file that only replaces the target once complete.
    #[error("Bot config storage at {path} is unavailable: {source}")]
    Unavailable {
        /// Path of the config file
        path: PathBuf,
        /// The I/O error from the final attempt
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but does not contain valid bot config JSON.
    #[error("Bot config at {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the config file
        path: PathBuf,
        /// The JSON decode error
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory config could not be encoded as JSON.
    #[error("Failed to encode bot config: {0}")]
    Encode(#[source] serde_json::Error),
}
