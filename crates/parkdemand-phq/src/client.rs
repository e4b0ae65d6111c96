//! HTTP client for the PredictHQ REST API.
//!
//! Wraps `reqwest` with bearer-token auth, PredictHQ error bodies and typed
//! response deserialization. Only the suggested-radius endpoint is used here;
//! the sidebar needs nothing else.

use std::time::Duration;

use parkdemand_core::{AppConfig, RadiusQuery, RadiusSource};
use reqwest::{Client, StatusCode, Url};

use crate::error::PhqError;
use crate::types::{ApiErrorBody, SuggestedRadius};

const SUGGESTED_RADIUS_PATH: &str = "v1/suggested-radius/";

/// Client for the PredictHQ REST API.
///
/// Built from [`AppConfig`] with [`PhqClient::from_config`], or pointed at a
/// mock server in tests with [`PhqClient::with_base_url`].
pub struct PhqClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl PhqClient {
    /// Creates a new client against `base_url` with the given user agent.
    ///
    /// # Errors
    ///
    /// Returns [`PhqError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`PhqError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PhqError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `build_url` can append endpoint paths
        // directly onto the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PhqError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url,
        })
    }

    /// Builds a client from application config.
    ///
    /// Returns `Ok(None)` when no access token is configured.
    ///
    /// # Errors
    ///
    /// Same as [`PhqClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, PhqError> {
        config
            .phq_access_token
            .as_deref()
            .map(|token| {
                Self::with_base_url(
                    token,
                    config.request_timeout_secs,
                    &config.user_agent,
                    &config.phq_base_url,
                )
            })
            .transpose()
    }

    /// Fetches the recommended search radius around a point for an industry.
    ///
    /// # Errors
    ///
    /// - [`PhqError::Api`] if PredictHQ answers with a non-2xx status.
    /// - [`PhqError::Http`] on network failure.
    /// - [`PhqError::Deserialize`] if the body is not the expected JSON.
    pub async fn suggested_radius(&self, query: &RadiusQuery) -> Result<SuggestedRadius, PhqError> {
        let url = self.suggested_radius_url(query);
        tracing::debug!(%url, "requesting suggested radius");

        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| PhqError::Deserialize {
            context: format!("suggested-radius(origin={})", query.origin()),
            source: e,
        })
    }

    fn suggested_radius_url(&self, query: &RadiusQuery) -> Url {
        self.build_url(
            SUGGESTED_RADIUS_PATH,
            &[
                ("location.origin", &query.origin()),
                ("radius_unit", query.unit.as_str()),
                ("industry", &query.industry),
            ],
        )
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{path}", self.base_url.path()));
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends an authenticated GET and parses the body as JSON.
    ///
    /// Non-2xx statuses become [`PhqError::Api`] carrying the vendor's message.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PhqError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| PhqError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }
}

fn api_error(status: StatusCode, raw: &str) -> PhqError {
    let message = serde_json::from_str::<ApiErrorBody>(raw)
        .unwrap_or_default()
        .into_message(raw);
    tracing::warn!(status = status.as_u16(), %message, "PredictHQ request failed");
    PhqError::Api {
        status: status.as_u16(),
        message,
    }
}

impl RadiusSource for PhqClient {
    type Error = PhqError;

    async fn suggested_radius(&self, query: &RadiusQuery) -> Result<SuggestedRadius, PhqError> {
        PhqClient::suggested_radius(self, query).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
