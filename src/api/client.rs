//! HTTP client for the profile-update endpoint.
//!
//! Thin wrapper over `reqwest::Client` carrying the API base URL, the
//! caller's bearer token, and a request timeout from configuration.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use super::{ApiError, ProfileApi, ProfileUpdateRequest};
use crate::config::ApiConfig;
use crate::session::SessionUser;

/// Client for the remote profile API.
pub struct HttpProfileClient {
    base_url: String,
    auth_token: String,
    client: reqwest::Client,
}

impl HttpProfileClient {
    /// Create a client from API configuration and the session's bearer token.
    pub fn new(config: &ApiConfig, auth_token: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make an authenticated PUT request and decode the JSON response.
    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileClient {
    async fn update_profile(&self, request: &ProfileUpdateRequest) -> Result<SessionUser, ApiError> {
        tracing::debug!("PUT profile for {}", request.email);
        self.put("profile", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpProfileClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        HttpProfileClient::new(&config, "token").unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let c = client("http://localhost:3333/");
        assert_eq!(c.url("/profile"), "http://localhost:3333/profile");
        assert_eq!(c.url("profile"), "http://localhost:3333/profile");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let c = client("https://api.example.com/v1");
        assert_eq!(c.url("profile"), "https://api.example.com/v1/profile");
    }
}
