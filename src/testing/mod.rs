//! Testing utilities: fixtures, request builders, and a scripted API double.
//!
//! Available to unit tests and, behind the `testing` feature, to integration
//! tests and downstream hosts that want to drive the strategy without a live
//! Trinsic account.

pub mod fixtures;
pub mod mock;
pub mod requests;

pub use fixtures::{EchoVerifier, RejectingVerifier, TestFixtures};
pub use mock::MockSessionsApi;
pub use requests::RequestBuilder;

/// Common test constants
pub mod constants {
    /// Default test access token.
    pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

    /// Default test redirect URL.
    pub const TEST_REDIRECT_URL: &str = "https://example.com/callback";

    /// Default test widget session identifier.
    pub const TEST_SESSION_ID: &str = "test-session-id";

    /// Default test results access key.
    pub const TEST_RESULTS_ACCESS_KEY: &str = "test-results-access-key";

    /// Default test launch URL.
    pub const TEST_LAUNCH_URL: &str = "https://verify.trinsic.example/widget?session=123";
}
