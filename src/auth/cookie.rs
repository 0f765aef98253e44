//! Defines functions for handling the session cookies.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

use super::CurrentUser;

/// The cookie holding the logged-in user's name.
pub const COOKIE_USER: &str = "user";
/// The cookie holding the session expiry date-time.
pub const COOKIE_EXPIRY: &str = "expiry";
/// The default duration for which session cookies are valid.
pub const DEFAULT_COOKIE_DURATION: Duration = Duration::hours(24);

/// Add a session cookie to the cookie jar, indicating that a user is logged in.
///
/// Sets the expiry of the session to `duration` from the current time.
///
/// Returns the cookie jar with the cookies added.
///
/// # Errors
/// Returns [Error::EmptyUserName] if `user_name` is empty, or
/// [Error::InvalidDateFormat] if the expiry time cannot be formatted.
pub fn set_session_cookie(
    jar: PrivateCookieJar,
    user_name: &str,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    if user_name.trim().is_empty() {
        return Err(Error::EmptyUserName);
    }

    let expiry = OffsetDateTime::now_utc() + duration;
    let expiry_string = expiry
        .format(&Rfc3339)
        .map_err(|error| Error::InvalidDateFormat(error.to_string(), expiry.to_string()))?;

    Ok(jar
        .add(
            Cookie::build((COOKIE_USER, user_name.trim().to_owned()))
                .expires(expiry)
                .http_only(true)
                .same_site(SameSite::Strict)
                .secure(true),
        )
        .add(
            Cookie::build((COOKIE_EXPIRY, expiry_string))
                .expires(expiry)
                .http_only(true)
                .same_site(SameSite::Strict)
                .secure(true),
        ))
}

/// Set the session cookies to an invalid value and set their max age to zero,
/// which should delete the cookies on the client side.
pub fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_USER, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
    .add(
        Cookie::build((COOKIE_EXPIRY, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Get the logged-in user from the session cookies in `jar`.
///
/// # Errors
/// Returns:
/// - [Error::CookieMissing] if either session cookie is absent, the user name
///   is empty, or the session has expired.
/// - [Error::InvalidDateFormat] if the expiry cookie cannot be parsed.
pub fn get_user_from_cookies(jar: &PrivateCookieJar) -> Result<CurrentUser, Error> {
    let user_cookie = jar.get(COOKIE_USER).ok_or(Error::CookieMissing)?;
    let expiry_cookie = jar.get(COOKIE_EXPIRY).ok_or(Error::CookieMissing)?;

    let expiry = OffsetDateTime::parse(expiry_cookie.value(), &Rfc3339).map_err(|error| {
        Error::InvalidDateFormat(error.to_string(), expiry_cookie.value().to_owned())
    })?;

    if expiry < OffsetDateTime::now_utc() {
        return Err(Error::CookieMissing);
    }

    let user_name = user_cookie.value();
    if user_name.is_empty() {
        return Err(Error::CookieMissing);
    }

    Ok(CurrentUser(user_name.to_owned()))
}
