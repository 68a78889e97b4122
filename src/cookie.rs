//! Pending-session cookie: the strategy's only state between the two
//! requests of the handshake.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use url::form_urlencoded;

/// Name of the cookie linking a browser to an in-progress widget session.
pub const PENDING_SESSION_COOKIE: &str = "trinsic-auth-strategy";

/// The cookie is never refreshed; the pending session expires with it.
const PENDING_SESSION_MAX_AGE: Duration = Duration::seconds(300);

/// Build the pending-session cookie for a freshly created widget session.
///
/// The value is itself a query string (`sessionId=<id>`) rather than the bare
/// identifier, matching the wire format callers may already have stored.
#[must_use]
pub fn pending_session_cookie(session_id: &str) -> Cookie<'static> {
    let value = form_urlencoded::Serializer::new(String::new())
        .append_pair("sessionId", session_id)
        .finish();

    Cookie::build(PENDING_SESSION_COOKIE, value)
        .http_only(true)
        .max_age(PENDING_SESSION_MAX_AGE)
        .path("/")
        .same_site(SameSite::Lax)
        .finish()
}

/// Session identifier carried by the request's pending-session cookie, if
/// any. `None` when the cookie is missing, malformed, or stores an empty id.
#[must_use]
pub fn pending_session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(PENDING_SESSION_COOKIE)
        .and_then(|cookie| session_id_from_value(cookie.value()))
}

fn session_id_from_value(value: &str) -> Option<String> {
    form_urlencoded::parse(value.as_bytes())
        .find(|(name, _)| name == "sessionId")
        .map(|(_, id)| id.into_owned())
        .filter(|id| !id.is_empty())
}
