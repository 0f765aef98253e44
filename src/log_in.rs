//! The log-in page and the route handler that establishes the session.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, auth::set_session_cookie, endpoints, html::base};

/// The form data for logging in.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogInForm {
    /// The name to sign in as.
    pub user_name: String,
}

fn log_in_form(error_message: Option<&str>) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::LOG_IN_API)
            class="space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="user_name"
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                {
                    "Your name"
                }

                input
                    type="text"
                    name="user_name"
                    id="user_name"
                    tabindex="0"
                    class="block w-full p-2.5 rounded text-sm text-gray-900
                        dark:text-white bg-gray-50 dark:bg-gray-700 border
                        border-gray-300 dark:border-gray-600";

                @if let Some(error_message) = error_message {
                    p class="text-sm text-red-600 dark:text-red-500" { (error_message) }
                }
            }

            button
                type="submit" id="submit-button" tabindex="0"
                class="w-full px-4 py-2 bg-blue-500 dark:bg-blue-600
                    hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded"
            {
                "Log in"
            }
        }
    }
}

fn log_in_view(error_message: Option<&str>) -> Markup {
    let content = html! {
        div class="flex flex-col items-center justify-center px-6 py-8 mx-auto"
        {
            p class="flex items-center mb-6 text-2xl font-semibold text-gray-900 dark:text-white"
            {
                "Moneylens"
            }

            div
                class="w-full bg-white rounded-lg shadow dark:border md:mt-0
                    sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1
                        class="text-xl font-bold leading-tight tracking-tight
                            text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Sign in"
                    }

                    (log_in_form(error_message))
                }
            }
        }
    };

    base("Sign in", &[], &content)
}

/// Display the log-in page.
pub async fn get_log_in_page() -> Response {
    log_in_view(None).into_response()
}

/// Handle log-in requests by setting the session cookie and redirecting to
/// the analytics page.
///
/// # Errors
/// Propagates [Error::InvalidDateFormat] if the session expiry cannot be
/// formatted, which renders the internal error page.
pub async fn post_log_in(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Result<Response, Error> {
    match set_session_cookie(jar, &form.user_name, state.cookie_duration) {
        Ok(jar) => Ok((jar, Redirect::to(endpoints::ANALYTICS_VIEW)).into_response()),
        Err(Error::EmptyUserName) => {
            tracing::debug!("Log in rejected: empty user name");
            Ok(log_in_view(Some("Please enter a name to sign in.")).into_response())
        }
        Err(error) => Err(error),
    }
}
