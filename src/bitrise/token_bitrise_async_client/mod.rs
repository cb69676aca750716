use crate::bitrise::BITRISE_API_VERSION;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, Response};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Sends one request to the Bitrise api.
#[async_trait::async_trait]
pub trait AsyncClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Response, reqwest::Error>;
}

/// Asynchronous Bitrise API client.
pub struct TokenBitriseAsyncClient {
    url: String,
    token: String,
    client: Client,
}

impl TokenBitriseAsyncClient {
    /// Creates a new asynchronous Bitrise API client authentic by personal access token.
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the Bitrise api, without version.
    /// * `token` - Access token, sent as `Authorization: token <token>`.
    pub fn new(url: &str, token: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            url: url.trim_end_matches('/').into(),
            token: token.into(),
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
        })
    }
}

#[async_trait::async_trait]
impl AsyncClient for TokenBitriseAsyncClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}/{}/{}", self.url, BITRISE_API_VERSION, endpoint);
        let mut req = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(USER_AGENT, concat!("build-log-export/", env!("CARGO_PKG_VERSION")));

        if !params.is_empty() {
            req = req.query(params);
        }

        req.send().await
    }
}
