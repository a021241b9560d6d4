use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Raised when an id the bot generated itself (such as the session id embedded
    /// in a button custom id) cannot be read back.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Mute end time outside Discord's timestamp range
    ///
    /// Raised by `/mute` when now plus the requested minutes cannot be sent to
    /// Discord as a timeout end.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_error_names_the_end_time() {
        let err = InternalError::InvalidDiscordTimestamp {
            timestamp: 253_402_300_800,
            reason: "out of range".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("253402300800"));
        assert!(message.contains("out of range"));
    }
}
