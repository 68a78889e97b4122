#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Trinsic identity verification strategy for actix-web.
//!
//! The strategy drives a two-request handshake against Trinsic's hosted
//! verification widget: an unauthenticated request is redirected to the
//! widget with a short-lived pending-session cookie, and the widget's
//! callback is resolved into whatever your [`Verifier`] produces from the
//! verification results.
//!
//! # Example
//!
//! ```no_run
//! use actix_web::{web, HttpRequest, HttpResponse};
//! use async_trait::async_trait;
//! use trinsic_auth::{
//!     AuthenticationOutcome, TrinsicOptions, TrinsicStrategy, Verification, Verifier,
//! };
//!
//! struct LookUpUser;
//!
//! #[async_trait(?Send)]
//! impl Verifier for LookUpUser {
//!     type Output = String;
//!
//!     async fn verify(&self, verification: Verification<'_>) -> anyhow::Result<String> {
//!         // Match the verification results against your own user store here.
//!         Ok(verification.results.0["identity"]["id"].to_string())
//!     }
//! }
//!
//! async fn sign_in(
//!     req: HttpRequest,
//!     strategy: web::Data<TrinsicStrategy<LookUpUser>>,
//! ) -> actix_web::Result<HttpResponse> {
//!     match strategy.authenticate(&req).await? {
//!         AuthenticationOutcome::Redirect(redirect) => Ok(redirect.into_response()),
//!         AuthenticationOutcome::Authenticated(user_id) => {
//!             Ok(HttpResponse::Ok().body(user_id))
//!         }
//!     }
//! }
//! ```

/// Version of the trinsic-auth crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod cookie;
pub mod error;
pub mod options;
pub mod outcome;
pub mod strategy;
pub mod verifier;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use api::{SessionResult, SessionsApi, TrinsicApiClient};
pub use error::TrinsicError;
pub use options::{KnownIdentityData, TrinsicOptions};
pub use outcome::{AuthenticationOutcome, RedirectAction};
pub use strategy::TrinsicStrategy;
pub use verifier::{Verification, Verifier};
