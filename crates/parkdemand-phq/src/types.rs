//! PredictHQ wire types.
//!
//! Successful suggested-radius responses deserialize straight into
//! [`SuggestedRadius`]; error responses carry a message under one of a few
//! keys depending on the failing layer.

use serde::Deserialize;

pub use parkdemand_core::SuggestedRadius;

/// Body of a non-2xx response.
///
/// Auth failures use `error`, validation failures use `detail`, and the
/// gateway's rate limiter uses `message`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message, falling back to the raw body.
    #[must_use]
    pub fn into_message(self, raw: &str) -> String {
        if let Some(error) = self.error {
            return error;
        }
        if let Some(message) = self.message {
            return message;
        }
        match self.detail {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
            None if raw.trim().is_empty() => "no response body".to_owned(),
            None => raw.trim().to_owned(),
        }
    }
}
