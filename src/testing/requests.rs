//! HTTP request builders for testing the strategy
//!
//! Thin fluent wrapper over `actix_web::test::TestRequest` with shorthands
//! for the two requests the handshake sees: the bare entry request and the
//! widget callback.

use actix_web::cookie::Cookie;
use actix_web::http::Method;
use actix_web::{test, HttpRequest};

use crate::cookie::pending_session_cookie;

use super::constants::{TEST_RESULTS_ACCESS_KEY, TEST_SESSION_ID};

/// Builder for creating HTTP requests for testing
pub struct RequestBuilder {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    cookies: Vec<Cookie<'static>>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: Method::GET,
            uri: "/".to_string(),
            headers: Vec::new(),
            cookies: Vec::new(),
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the request URI
    #[must_use]
    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = uri.to_string();
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a cookie to the request
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Add a pending-session cookie storing the given session id
    #[must_use]
    pub fn with_pending_session(self, session_id: &str) -> Self {
        self.with_cookie(pending_session_cookie(session_id))
    }

    /// Add a raw `Cookie` header string
    #[must_use]
    pub fn with_cookie_header(self, cookies: &str) -> Self {
        self.header("Cookie", cookies)
    }

    /// Build the final `HttpRequest`
    #[must_use]
    pub fn build(self) -> HttpRequest {
        let mut req = test::TestRequest::default()
            .method(self.method)
            .uri(&self.uri);

        for (name, value) in self.headers {
            req = req.insert_header((name, value));
        }

        for cookie in self.cookies {
            req = req.cookie(cookie);
        }

        req.to_http_request()
    }
}

/// Quick builder functions for the requests the handshake sees
impl RequestBuilder {
    /// Request entering the flow with no callback parameters.
    #[must_use]
    pub fn initiate() -> HttpRequest {
        Self::new().uri("/auth/trinsic").build()
    }

    /// Widget callback carrying both query parameters and a valid
    /// pending-session cookie for the default test session.
    #[must_use]
    pub fn callback() -> HttpRequest {
        Self::callback_for(TEST_SESSION_ID, TEST_RESULTS_ACCESS_KEY)
    }

    /// Widget callback with explicit session id and access key.
    #[must_use]
    pub fn callback_for(session_id: &str, results_access_key: &str) -> HttpRequest {
        Self::new()
            .uri(&format!(
                "/auth/trinsic?sessionId={session_id}&resultsAccessKey={results_access_key}"
            ))
            .with_pending_session(session_id)
            .build()
    }

    /// Widget callback whose request carries no cookies at all.
    #[must_use]
    pub fn callback_without_cookie() -> HttpRequest {
        Self::new()
            .uri(&format!(
                "/auth/trinsic?sessionId={TEST_SESSION_ID}&resultsAccessKey={TEST_RESULTS_ACCESS_KEY}"
            ))
            .build()
    }
}
