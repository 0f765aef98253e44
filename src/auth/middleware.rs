//! Middleware that gates pages on a logged-in user.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

use crate::{AppState, endpoints};

use super::cookie::get_user_from_cookies;

/// The state needed for the auth middleware.
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that checks for a valid session cookie.
///
/// The current user is placed into the request and the request executed
/// normally if the cookie is valid, otherwise a redirect to the log-in page
/// is returned.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(user): Extension<CurrentUser>` to receive the current user.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return Redirect::to(endpoints::LOG_IN_VIEW).into_response();
        }
    };

    let user = match get_user_from_cookies(&jar) {
        Ok(user) => user,
        Err(_) => return Redirect::to(endpoints::LOG_IN_VIEW).into_response(),
    };

    parts.extensions.insert(user);
    let request = Request::from_parts(parts, body);

    next.run(request).await
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{Extension, Router, middleware, response::IntoResponse, routing::get};
    use axum_test::TestServer;

    use crate::{
        app_state::create_cookie_key,
        auth::{CurrentUser, DEFAULT_COOKIE_DURATION, set_session_cookie},
        endpoints,
    };

    use super::{AuthState, auth_guard};

    fn get_test_state() -> AuthState {
        AuthState {
            cookie_key: create_cookie_key("42"),
        }
    }

    async fn whoami(Extension(user): Extension<CurrentUser>) -> String {
        user.0
    }

    fn get_test_server(state: AuthState) -> TestServer {
        let app = Router::new()
            .route("/protected", get(whoami))
            .layer(middleware::from_fn_with_state(state, auth_guard));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn redirects_to_log_in_without_session_cookie() {
        let server = get_test_server(get_test_state());

        let response = server.get("/protected").await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn redirects_to_log_in_with_forged_session_cookie() {
        let server = get_test_server(get_test_state());

        let forged_cookie = axum_extra::extract::cookie::Cookie::new("user", "averagejoe");
        let response = server.get("/protected").add_cookie(forged_cookie).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn passes_request_through_with_valid_session_cookie() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let jar = axum_extra::extract::PrivateCookieJar::new(state.cookie_key);
        let jar = set_session_cookie(jar, "averagejoe", DEFAULT_COOKIE_DURATION).unwrap();

        // The jar's response headers carry the encrypted cookie values the
        // client would store.
        let mut request = server.get("/protected");
        let jar_response = jar.into_response();
        for header_value in jar_response
            .headers()
            .get_all(axum::http::header::SET_COOKIE)
        {
            let cookie = axum_extra::extract::cookie::Cookie::parse(
                header_value.to_str().unwrap().to_owned(),
            )
            .unwrap();
            request = request.add_cookie(cookie);
        }
        let response = request.await;

        response.assert_status_ok();
        response.assert_text("averagejoe");
    }
}
