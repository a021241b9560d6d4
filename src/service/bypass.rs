//! Short-link resolution through the bypass.vip API.

use url::Url;

use crate::{error::AppError, model::lookup::BypassResponse};

const BYPASS_ENDPOINT: &str = "https://api.bypass.vip/bypass";

#[derive(Clone)]
pub struct BypassService {
    http: reqwest::Client,
    endpoint: String,
}

impl BypassService {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoint(http, BYPASS_ENDPOINT)
    }

    pub fn with_endpoint(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Asks the bypass API where a shortened link leads.
    ///
    /// # Arguments
    /// - `link` - The shortened link, which must be an absolute http(s) URL
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The destination URL
    /// - `Ok(None)` - The API answered without a destination
    /// - `Err(AppError::BadRequest)` - `link` is not an http(s) URL
    /// - `Err(AppError::ReqwestErr)` - The request failed
    pub async fn resolve(&self, link: &str) -> Result<Option<String>, AppError> {
        let link = parse_link(link)?;

        let response: BypassResponse = self
            .http
            .get(&self.endpoint)
            .query(&[("url", link.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.destination)
    }
}

fn parse_link(link: &str) -> Result<Url, AppError> {
    let url = Url::parse(link.trim())
        .map_err(|_| AppError::BadRequest("That doesn't look like a link.".to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AppError::BadRequest(
            "Only http and https links can be bypassed.".to_string(),
        )),
    }
}
