//! Session handling for the analytics page.
//!
//! The analytics page only fetches and charts data when a user is present.
//! Presence is tracked with a private (encrypted and signed) cookie holding
//! the user's name; there is no password or account store behind it.

mod cookie;
mod middleware;

pub use cookie::{
    COOKIE_EXPIRY, COOKIE_USER, DEFAULT_COOKIE_DURATION, get_user_from_cookies,
    invalidate_session_cookie, set_session_cookie,
};
pub use middleware::{AuthState, auth_guard};

/// The user identity extracted from a valid session cookie.
///
/// Route handlers behind [auth_guard] can receive this with
/// `Extension(user): Extension<CurrentUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);
