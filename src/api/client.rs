use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::{
    ApiError, CreateWidgetSessionRequest, CreateWidgetSessionResponse, GetSessionResultRequest,
    SessionResult, SessionsApi,
};

const DEFAULT_BASE_URL: &str = "https://api.trinsic.id";

/// reqwest-backed [`SessionsApi`] implementation.
///
/// Carries no retry, backoff, or timeout policy of its own; configure those
/// on the underlying client if the host needs them.
pub struct TrinsicApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl TrinsicApiClient {
    #[must_use]
    pub fn new(access_token: &str) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Point the client at a different API host, e.g. a local stub server.
    #[must_use]
    pub fn with_base_url(access_token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SessionsApi for TrinsicApiClient {
    async fn create_widget_session(
        &self,
        request: CreateWidgetSessionRequest,
    ) -> Result<CreateWidgetSessionResponse, ApiError> {
        debug!(
            "Creating widget session with redirectUrl {}",
            request.redirect_url
        );
        let response = self
            .http
            .post(format!("{}/api/v1/sessions/widget", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_session_result(
        &self,
        session_id: &str,
        request: GetSessionResultRequest,
    ) -> Result<SessionResult, ApiError> {
        debug!("Getting session result with sessionId {session_id}");
        let response = self
            .http
            .post(format!(
                "{}/api/v1/sessions/{session_id}/results",
                self.base_url
            ))
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = TrinsicApiClient::with_base_url("token", "https://stub.local/");
        assert_eq!(client.base_url, "https://stub.local");

        let client = TrinsicApiClient::new("token");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
