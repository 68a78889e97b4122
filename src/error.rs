//! Strategy error taxonomy.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::api::ApiError;

/// Everything that can make the handshake fail. All variants are terminal
/// for the current request; the host decides what the user sees.
#[derive(Debug, Error)]
pub enum TrinsicError {
    /// Session creation came back without a launch URL.
    #[error("Failed to start sign in flow. No launch URL returned.")]
    MissingLaunchUrl,

    /// Session creation came back without a session identifier.
    #[error("Failed to start sign in flow. No session ID returned.")]
    MissingSessionId,

    /// Session creation returned a launch URL that does not parse.
    #[error("Failed to start sign in flow. Invalid launch URL: {0}")]
    MalformedLaunchUrl(#[from] url::ParseError),

    /// No usable pending-session cookie on the callback request (missing,
    /// expired, or malformed).
    #[error("Missing sessionId in cookie")]
    MissingSessionReference,

    /// Remote API call failure, passed through unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Verification function failure, passed through unchanged.
    #[error(transparent)]
    Verification(anyhow::Error),
}

impl TrinsicError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingLaunchUrl | Self::MissingSessionId | Self::MalformedLaunchUrl(_) => {
                "invalid_api_response"
            }
            Self::MissingSessionReference => "missing_session_reference",
            Self::Api(_) => "api_failure",
            Self::Verification(_) => "verification_failed",
        }
    }
}

/// Default actix integration so `authenticate(...).await?` works directly in
/// handlers. Hosts that want their own error pages can match on the variants
/// instead.
impl ResponseError for TrinsicError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingSessionReference => StatusCode::BAD_REQUEST,
            Self::Verification(_) => StatusCode::UNAUTHORIZED,
            Self::MissingLaunchUrl
            | Self::MissingSessionId
            | Self::MalformedLaunchUrl(_)
            | Self::Api(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.error_code(),
            "message": self.to_string(),
        }))
    }
}
