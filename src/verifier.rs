//! The caller-supplied verification seam.

use actix_web::HttpRequest;
use async_trait::async_trait;

use crate::api::SessionResult;

/// What the verification step gets to look at.
#[derive(Debug)]
pub struct Verification<'a> {
    /// The request that triggered the authentication flow.
    pub request: &'a HttpRequest,
    /// The session result returned by Trinsic.
    pub results: SessionResult,
}

/// Turns verification results into whatever the host application considers
/// an authenticated identity (a user record, a session payload, an id).
///
/// `?Send` because the verification borrows the actix request, which lives on
/// a single-threaded worker.
#[async_trait(?Send)]
pub trait Verifier {
    /// Value produced on successful verification.
    type Output;

    /// Decide whether the verification results are acceptable.
    ///
    /// # Errors
    ///
    /// Any failure is propagated unchanged to the strategy's caller as
    /// [`TrinsicError::Verification`](crate::TrinsicError::Verification).
    async fn verify(&self, verification: Verification<'_>) -> anyhow::Result<Self::Output>;
}
