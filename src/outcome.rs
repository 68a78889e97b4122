//! Tagged outcome of one pass through the strategy.
//!
//! The source of truth for "this request must leave via a redirect" is the
//! type system, not control flow: initiation always produces
//! [`AuthenticationOutcome::Redirect`], never a value.

use actix_web::cookie::Cookie;
use actix_web::{http::header, HttpResponse};
use url::Url;

/// What [`authenticate`](crate::TrinsicStrategy::authenticate) produced.
#[derive(Debug)]
pub enum AuthenticationOutcome<T> {
    /// The user must visit the hosted widget. Terminal for this request;
    /// render it with [`RedirectAction::into_response`].
    Redirect(RedirectAction),
    /// The callback was verified; carries the verifier's output.
    Authenticated(T),
}

/// Redirect to the widget launch URL, with the pending-session cookie to
/// attach on the way out.
#[derive(Debug)]
pub struct RedirectAction {
    pub location: Url,
    pub cookie: Cookie<'static>,
}

impl RedirectAction {
    /// Render as `302 Found` with the `Set-Cookie` header attached.
    #[must_use]
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Found()
            .cookie(self.cookie)
            .append_header((header::LOCATION, self.location.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn redirect_action_renders_found_with_cookie() {
        let action = RedirectAction {
            location: Url::parse("https://verify.example/widget?session=123").unwrap(),
            cookie: crate::cookie::pending_session_cookie("abc"),
        };

        let response = action.into_response();
        assert_eq!(response.status(), StatusCode::FOUND);

        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "https://verify.example/widget?session=123");

        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        let set_cookie = set_cookie.to_str().unwrap();
        assert!(set_cookie.starts_with("trinsic-auth-strategy="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Max-Age=300"));
        assert!(set_cookie.contains("SameSite=Lax"));
    }
}
