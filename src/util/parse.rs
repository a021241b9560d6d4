use regex::Regex;
use std::sync::LazyLock;

use crate::error::{internal::InternalError, AppError};

static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("trailing id pattern is valid"));

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Extracts the message id from the end of a message id or message link.
///
/// Accepts a bare id (`1234`) or a copied link
/// (`https://discord.com/channels/<guild>/<channel>/1234`).
///
/// # Returns
/// - `Some(u64)` - The trailing digits as an id
/// - `None` - Input does not end in digits, the digits overflow a `u64`, or they are zero
pub fn parse_trailing_id(value: &str) -> Option<u64> {
    TRAILING_ID
        .find(value.trim())
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .filter(|&id| id != 0)
}
