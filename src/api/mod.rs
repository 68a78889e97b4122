//! Remote sessions API surface.
//!
//! The strategy only ever talks to Trinsic through the [`SessionsApi`] trait,
//! so tests (or hosts with their own transport policy) can substitute the
//! reqwest-backed [`TrinsicApiClient`] with a double.

mod client;

pub use client::TrinsicApiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::KnownIdentityData;

/// Payload for creating a hosted widget session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidgetSessionRequest {
    pub redirect_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_identity_data: Option<KnownIdentityData>,
}

/// What session creation came back with. Both fields are optional on the
/// wire; the strategy enforces their presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidgetSessionResponse {
    #[serde(default)]
    pub launch_url: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Credentials for fetching the results of a completed session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionResultRequest {
    pub results_access_key: String,
}

/// Verification results, passed verbatim to the caller-supplied verifier.
/// The strategy never inspects this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionResult(pub serde_json::Value);

/// Remote call failures. Surfaced unchanged to the strategy's caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to Trinsic API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Trinsic API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// The two remote operations the handshake needs.
#[async_trait]
pub trait SessionsApi: Send + Sync {
    /// Create a widget session the user can be redirected to.
    ///
    /// # Errors
    ///
    /// Returns an error if the network call fails or the API responds with a
    /// non-success status.
    async fn create_widget_session(
        &self,
        request: CreateWidgetSessionRequest,
    ) -> Result<CreateWidgetSessionResponse, ApiError>;

    /// Fetch the results of a completed session.
    ///
    /// # Errors
    ///
    /// Returns an error if the network call fails or the API responds with a
    /// non-success status.
    async fn get_session_result(
        &self,
        session_id: &str,
        request: GetSessionResultRequest,
    ) -> Result<SessionResult, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_session_request_serializes_camel_case() {
        let request = CreateWidgetSessionRequest {
            redirect_url: "https://example.com/callback".to_string(),
            providers: Some(vec!["yoti".to_string()]),
            known_identity_data: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["redirectUrl"], "https://example.com/callback");
        assert_eq!(json["providers"][0], "yoti");
        assert!(json.get("knownIdentityData").is_none());
    }

    #[test]
    fn widget_session_response_tolerates_missing_fields() {
        let response: CreateWidgetSessionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.launch_url.is_none());
        assert!(response.session_id.is_none());

        let response: CreateWidgetSessionResponse =
            serde_json::from_str(r#"{"launchUrl":"https://widget","sessionId":"abc"}"#).unwrap();
        assert_eq!(response.launch_url.as_deref(), Some("https://widget"));
        assert_eq!(response.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn session_result_is_transparent_json() {
        let result: SessionResult =
            serde_json::from_str(r#"{"identity":{"id":"123"}}"#).unwrap();
        assert_eq!(result.0["identity"]["id"], "123");
    }

    #[test]
    fn results_access_key_serializes_camel_case() {
        let request = GetSessionResultRequest {
            results_access_key: "key".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["resultsAccessKey"], "key");
    }
}
