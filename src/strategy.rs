//! The Trinsic authentication strategy.
//!
//! One operation, two paths. A request with neither callback parameter
//! starts a widget session and leaves via redirect; a request carrying both
//! parameters is the widget's callback and resolves to the verifier's output.

use std::sync::Arc;

use actix_web::{web, HttpRequest};
use log::debug;
use serde::Deserialize;
use url::Url;

use crate::api::{
    CreateWidgetSessionRequest, GetSessionResultRequest, SessionsApi, TrinsicApiClient,
};
use crate::cookie;
use crate::error::TrinsicError;
use crate::options::TrinsicOptions;
use crate::outcome::{AuthenticationOutcome, RedirectAction};
use crate::verifier::{Verification, Verifier};

/// Query parameters supplied by the widget redirect.
#[derive(Debug, Default, Deserialize)]
struct CallbackQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
    #[serde(rename = "resultsAccessKey")]
    results_access_key: Option<String>,
}

impl CallbackQuery {
    fn from_request(req: &HttpRequest) -> Self {
        web::Query::<Self>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default()
    }

    /// The access key, but only when both parameters are present and
    /// non-empty. Anything less restarts the flow.
    fn results_access_key(self) -> Option<String> {
        let has_session_id = self.session_id.is_some_and(|id| !id.is_empty());
        self.results_access_key
            .filter(|key| has_session_id && !key.is_empty())
    }
}

/// Authentication strategy bridging actix-web to the Trinsic verification
/// widget. Stateless across requests except for the pending-session cookie.
pub struct TrinsicStrategy<V> {
    options: TrinsicOptions,
    api: Arc<dyn SessionsApi>,
    verifier: V,
}

impl<V> TrinsicStrategy<V> {
    /// Identifying name of this strategy.
    pub const NAME: &'static str = "trinsic";

    /// Build a strategy backed by the default API client.
    #[must_use]
    pub fn new(options: TrinsicOptions, verifier: V) -> Self {
        let api = Arc::new(TrinsicApiClient::new(&options.access_token));
        Self {
            options,
            api,
            verifier,
        }
    }

    /// Build a strategy with an injected [`SessionsApi`] implementation.
    #[must_use]
    pub fn with_api(options: TrinsicOptions, api: Arc<dyn SessionsApi>, verifier: V) -> Self {
        Self {
            options,
            api,
            verifier,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[must_use]
    pub fn options(&self) -> &TrinsicOptions {
        &self.options
    }

    #[must_use]
    pub fn verifier(&self) -> &V {
        &self.verifier
    }
}

impl<V: Verifier> TrinsicStrategy<V> {
    /// Run one pass of the handshake for `req`.
    ///
    /// # Errors
    ///
    /// - [`TrinsicError::MissingLaunchUrl`] / [`TrinsicError::MissingSessionId`] /
    ///   [`TrinsicError::MalformedLaunchUrl`] when session creation violates
    ///   the API contract
    /// - [`TrinsicError::MissingSessionReference`] when the callback request
    ///   carries no usable pending-session cookie
    /// - [`TrinsicError::Api`] for remote call failures, unchanged
    /// - [`TrinsicError::Verification`] for verifier failures, unchanged
    pub async fn authenticate(
        &self,
        req: &HttpRequest,
    ) -> Result<AuthenticationOutcome<V::Output>, TrinsicError> {
        debug!("Request URL {}", req.uri());

        let Some(results_access_key) = CallbackQuery::from_request(req).results_access_key()
        else {
            debug!("No sessionId or resultsAccessKey found in the URL, redirecting to Trinsic");
            return self.initiate().await.map(AuthenticationOutcome::Redirect);
        };

        debug!("Session ID found in the URL, handling callback");
        self.complete(req, results_access_key)
            .await
            .map(AuthenticationOutcome::Authenticated)
    }

    async fn initiate(&self) -> Result<RedirectAction, TrinsicError> {
        debug!(
            "Creating widget session with redirectUrl {}",
            self.options.redirect_url
        );
        let response = self
            .api
            .create_widget_session(CreateWidgetSessionRequest {
                redirect_url: self.options.redirect_url.clone(),
                providers: self.options.providers.clone(),
                known_identity_data: self.options.known_identity_data.clone(),
            })
            .await?;

        let launch_url = response
            .launch_url
            .filter(|url| !url.is_empty())
            .ok_or(TrinsicError::MissingLaunchUrl)?;
        let session_id = response
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or(TrinsicError::MissingSessionId)?;

        debug!("Widget session created");
        debug!("Launch URL {launch_url}");
        debug!("Session ID {session_id}");

        Ok(RedirectAction {
            location: Url::parse(&launch_url)?,
            cookie: cookie::pending_session_cookie(&session_id),
        })
    }

    async fn complete(
        &self,
        req: &HttpRequest,
        results_access_key: String,
    ) -> Result<V::Output, TrinsicError> {
        let session_id =
            cookie::pending_session_id(req).ok_or(TrinsicError::MissingSessionReference)?;
        debug!("Session ID found in cookie {session_id}");

        let results = self
            .api
            .get_session_result(&session_id, GetSessionResultRequest { results_access_key })
            .await?;
        debug!("Session result received");

        let output = self
            .verifier
            .verify(Verification {
                request: req,
                results,
            })
            .await
            .map_err(TrinsicError::Verification)?;
        debug!("Verification complete");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(uri: &str) -> CallbackQuery {
        let req = actix_web::test::TestRequest::with_uri(uri).to_http_request();
        CallbackQuery::from_request(&req)
    }

    #[test]
    fn both_parameters_required_for_callback() {
        assert_eq!(
            query("/auth?sessionId=abc&resultsAccessKey=key").results_access_key(),
            Some("key".to_string())
        );
        assert!(query("/auth").results_access_key().is_none());
        assert!(query("/auth?sessionId=abc").results_access_key().is_none());
        assert!(query("/auth?resultsAccessKey=key")
            .results_access_key()
            .is_none());
    }

    #[test]
    fn empty_parameters_count_as_absent() {
        assert!(query("/auth?sessionId=&resultsAccessKey=key")
            .results_access_key()
            .is_none());
        assert!(query("/auth?sessionId=abc&resultsAccessKey=")
            .results_access_key()
            .is_none());
    }

    #[test]
    fn unrelated_parameters_are_ignored() {
        assert_eq!(
            query("/auth?other=1&sessionId=abc&resultsAccessKey=key&more=2")
                .results_access_key(),
            Some("key".to_string())
        );
    }
}
