//! Roblox user lookup.

use crate::{
    error::AppError,
    model::lookup::{
        RobloxList, RobloxProfile, RobloxThumbnail, RobloxUserDetails, RobloxUsernameMatch,
        UsernamesRequest,
    },
};

const ROBLOX_USERS_URL: &str = "https://users.roblox.com";
const ROBLOX_THUMBNAILS_URL: &str = "https://thumbnails.roblox.com";

/// Looks up Roblox users through the public users and thumbnails APIs.
#[derive(Clone)]
pub struct RobloxService {
    http: reqwest::Client,
    users_url: String,
    thumbnails_url: String,
}

impl RobloxService {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_urls(http, ROBLOX_USERS_URL, ROBLOX_THUMBNAILS_URL)
    }

    pub fn with_base_urls(
        http: reqwest::Client,
        users_url: impl Into<String>,
        thumbnails_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            users_url: users_url.into(),
            thumbnails_url: thumbnails_url.into(),
        }
    }

    /// Resolves a username to its profile.
    ///
    /// Makes three requests: username to id, id to user details, and id to avatar.
    ///
    /// # Arguments
    /// - `username` - Roblox username to look up
    ///
    /// # Returns
    /// - `Ok(Some(RobloxProfile))` - The user exists
    /// - `Ok(None)` - No user has that name
    /// - `Err(AppError::ReqwestErr)` - A request failed or returned an unexpected body
    pub async fn lookup(&self, username: &str) -> Result<Option<RobloxProfile>, AppError> {
        let matches: RobloxList<RobloxUsernameMatch> = self
            .http
            .post(self.usernames_endpoint())
            .json(&UsernamesRequest {
                usernames: [username],
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(user) = matches.data.first() else {
            return Ok(None);
        };

        let details: RobloxUserDetails = self
            .http
            .get(self.user_endpoint(user.id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let thumbnails: RobloxList<RobloxThumbnail> = self
            .http
            .get(self.avatar_endpoint())
            .query(&[
                ("userIds", user.id.to_string()),
                ("size", "720x720".to_string()),
                ("format", "Png".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Some(RobloxProfile {
            id: user.id,
            name: details.name,
            is_banned: details.is_banned,
            avatar_url: thumbnails
                .data
                .into_iter()
                .next()
                .and_then(|thumbnail| thumbnail.image_url),
        }))
    }

    fn usernames_endpoint(&self) -> String {
        format!("{}/v1/usernames/users", self.users_url)
    }

    fn user_endpoint(&self, user_id: u64) -> String {
        format!("{}/v1/users/{}", self.users_url, user_id)
    }

    fn avatar_endpoint(&self) -> String {
        format!("{}/v1/users/avatar", self.thumbnails_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoints_from_base_urls() {
        let service = RobloxService::new(reqwest::Client::new());

        assert_eq!(
            service.usernames_endpoint(),
            "https://users.roblox.com/v1/usernames/users"
        );
        assert_eq!(service.user_endpoint(156), "https://users.roblox.com/v1/users/156");
        assert_eq!(
            service.avatar_endpoint(),
            "https://thumbnails.roblox.com/v1/users/avatar"
        );
    }

    /// Tests a lookup against an unreachable API.
    ///
    /// Expected: Err(ReqwestErr) rather than a panic or a `None`
    #[tokio::test]
    async fn unreachable_api_is_an_error() {
        let service = RobloxService::with_base_urls(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            "http://127.0.0.1:9",
        );

        let result = service.lookup("builderman").await;

        assert!(matches!(result, Err(AppError::ReqwestErr(_))));
    }
}
