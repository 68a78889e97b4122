//! Pre-built test data: options, strategies, and verifier doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::options::TrinsicOptions;
use crate::strategy::TrinsicStrategy;
use crate::verifier::{Verification, Verifier};

use super::constants::{TEST_ACCESS_TOKEN, TEST_REDIRECT_URL};
use super::mock::MockSessionsApi;

/// Central fixture provider for all test data
pub struct TestFixtures;

impl TestFixtures {
    /// Standard strategy options without provider or identity hints.
    #[must_use]
    pub fn options() -> TrinsicOptions {
        TrinsicOptions {
            access_token: TEST_ACCESS_TOKEN.to_string(),
            redirect_url: TEST_REDIRECT_URL.to_string(),
            providers: None,
            known_identity_data: None,
        }
    }

    /// A strategy wired to the given API double and an [`EchoVerifier`].
    #[must_use]
    pub fn strategy(api: Arc<MockSessionsApi>) -> TrinsicStrategy<EchoVerifier> {
        TrinsicStrategy::with_api(Self::options(), api, EchoVerifier::default())
    }

    /// A strategy whose verifier always fails.
    #[must_use]
    pub fn rejecting_strategy(api: Arc<MockSessionsApi>) -> TrinsicStrategy<RejectingVerifier> {
        TrinsicStrategy::with_api(Self::options(), api, RejectingVerifier)
    }
}

/// Verifier double that hands the raw results back and counts invocations.
#[derive(Default)]
pub struct EchoVerifier {
    calls: AtomicUsize,
}

impl EchoVerifier {
    /// How many times the strategy invoked this verifier.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl Verifier for EchoVerifier {
    type Output = serde_json::Value;

    async fn verify(&self, verification: Verification<'_>) -> anyhow::Result<Self::Output> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(verification.results.0)
    }
}

/// Verifier double that always rejects.
pub struct RejectingVerifier;

#[async_trait(?Send)]
impl Verifier for RejectingVerifier {
    type Output = serde_json::Value;

    async fn verify(&self, _verification: Verification<'_>) -> anyhow::Result<Self::Output> {
        Err(anyhow::anyhow!("identity rejected by verifier"))
    }
}
