//! Payloads exchanged with the Roblox and bypass.vip APIs.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/usernames/users`.
#[derive(Debug, Serialize)]
pub struct UsernamesRequest<'a> {
    pub usernames: [&'a str; 1],
}

/// Generic `{"data": [...]}` envelope used by the Roblox APIs.
#[derive(Debug, Deserialize)]
pub struct RobloxList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct RobloxUsernameMatch {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RobloxUserDetails {
    pub name: String,
    #[serde(rename = "isBanned", default)]
    pub is_banned: bool,
}

#[derive(Debug, Deserialize)]
pub struct RobloxThumbnail {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// A Roblox user as shown by `/roblox`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobloxProfile {
    pub id: u64,
    pub name: String,
    pub is_banned: bool,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BypassResponse {
    pub destination: Option<String>,
}
