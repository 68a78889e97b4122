//! Mock objects and fake implementations for testing
//!
//! Provides a scripted [`SessionsApi`] double that records what the strategy
//! sends it, so tests can assert on request payloads without any network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    ApiError, CreateWidgetSessionRequest, CreateWidgetSessionResponse, GetSessionResultRequest,
    SessionResult, SessionsApi,
};

use super::constants::{TEST_LAUNCH_URL, TEST_SESSION_ID};

/// Scripted [`SessionsApi`] double.
///
/// Responses are set up front with the builder methods; every call the
/// strategy makes is recorded and can be inspected afterwards through
/// [`created_sessions`](Self::created_sessions) /
/// [`fetched_results`](Self::fetched_results).
#[derive(Default)]
pub struct MockSessionsApi {
    widget_session: CreateWidgetSessionResponse,
    session_result: Option<SessionResult>,
    failure: Option<(u16, String)>,
    created: Mutex<Vec<CreateWidgetSessionRequest>>,
    fetched: Mutex<Vec<(String, String)>>,
}

impl MockSessionsApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a complete widget-session response with the default test
    /// launch URL and session id.
    #[must_use]
    pub fn with_default_widget_session(self) -> Self {
        self.with_widget_session(Some(TEST_LAUNCH_URL), Some(TEST_SESSION_ID))
    }

    /// Script a widget-session response; pass `None` to leave a field out.
    #[must_use]
    pub fn with_widget_session(
        mut self,
        launch_url: Option<&str>,
        session_id: Option<&str>,
    ) -> Self {
        self.widget_session = CreateWidgetSessionResponse {
            launch_url: launch_url.map(ToString::to_string),
            session_id: session_id.map(ToString::to_string),
        };
        self
    }

    /// Script the session result returned on callback.
    #[must_use]
    pub fn with_session_result(mut self, result: serde_json::Value) -> Self {
        self.session_result = Some(SessionResult(result));
        self
    }

    /// Make every call fail with the given HTTP status and body.
    #[must_use]
    pub fn with_api_failure(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    /// Widget-session requests received so far.
    #[must_use]
    pub fn created_sessions(&self) -> Vec<CreateWidgetSessionRequest> {
        self.created.lock().unwrap().clone()
    }

    /// `(session_id, results_access_key)` pairs of result fetches so far.
    #[must_use]
    pub fn fetched_results(&self) -> Vec<(String, String)> {
        self.fetched.lock().unwrap().clone()
    }

    fn scripted_failure(&self) -> Option<ApiError> {
        self.failure.as_ref().map(|(status, body)| ApiError::Status {
            status: reqwest::StatusCode::from_u16(*status).unwrap(),
            body: body.clone(),
        })
    }
}

#[async_trait]
impl SessionsApi for MockSessionsApi {
    async fn create_widget_session(
        &self,
        request: CreateWidgetSessionRequest,
    ) -> Result<CreateWidgetSessionResponse, ApiError> {
        self.created.lock().unwrap().push(request);
        if let Some(failure) = self.scripted_failure() {
            return Err(failure);
        }
        Ok(self.widget_session.clone())
    }

    async fn get_session_result(
        &self,
        session_id: &str,
        request: GetSessionResultRequest,
    ) -> Result<SessionResult, ApiError> {
        self.fetched
            .lock()
            .unwrap()
            .push((session_id.to_string(), request.results_access_key));
        if let Some(failure) = self.scripted_failure() {
            return Err(failure);
        }
        Ok(self
            .session_result
            .clone()
            .unwrap_or(SessionResult(serde_json::Value::Null)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn mock_records_widget_session_requests() {
        let mock = MockSessionsApi::new().with_default_widget_session();
        let response = mock
            .create_widget_session(CreateWidgetSessionRequest {
                redirect_url: "https://example.com/cb".to_string(),
                providers: None,
                known_identity_data: None,
            })
            .await
            .unwrap();

        assert_eq!(response.launch_url.as_deref(), Some(TEST_LAUNCH_URL));
        assert_eq!(mock.created_sessions().len(), 1);
        assert_eq!(
            mock.created_sessions()[0].redirect_url,
            "https://example.com/cb"
        );
    }

    #[actix_web::test]
    async fn mock_scripts_failures_for_both_calls() {
        let mock = MockSessionsApi::new().with_api_failure(503, "maintenance");

        let error = mock
            .get_session_result(
                "abc",
                GetSessionResultRequest {
                    results_access_key: "key".to_string(),
                },
            )
            .await
            .unwrap_err();

        match error {
            ApiError::Status { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            ApiError::Http(_) => panic!("expected a scripted status error"),
        }
        assert_eq!(mock.fetched_results(), vec![("abc".to_string(), "key".to_string())]);
    }
}
