//! Construction-time configuration for the strategy.

use serde::{Deserialize, Serialize};

/// Configuration handed to [`TrinsicStrategy`](crate::TrinsicStrategy) once at
/// construction. Immutable for the strategy's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrinsicOptions {
    /// The access token to use for the Trinsic API.
    pub access_token: String,
    /// The URL to redirect the user to after the widget session is complete.
    pub redirect_url: String,
    /// The list of allowed identity providers. If not specified, all available
    /// providers will be allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
    /// Known identity data of the individual being verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_identity_data: Option<KnownIdentityData>,
}

/// Identity hints forwarded to the widget session so the remote flow can
/// prefill or cross-check what it already knows about the individual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownIdentityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// ISO 8601 date, e.g. `1990-01-31`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}
