//! Moneylens is a small web app that charts your income and expenses by
//! category.
//!
//! Transactions are fetched from a remote HTTP endpoint, partitioned into
//! income and expense records, summed per category, and rendered as a pair of
//! donut charts on a single server-rendered page.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod analytics;
mod app_state;
mod auth;
mod endpoints;
mod html;
mod internal_server_error;
mod log_in;
mod log_out;
mod not_found;
mod routing;
mod source;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use analytics::{CategoryTotals, aggregate};
pub use app_state::AppState;
pub use routing::build_router;
pub use source::{HttpTransactionSource, TransactionSource};
pub use transaction::{Transaction, TransactionType, UNCATEGORISED_LABEL};

use crate::internal_server_error::InternalServerErrorPage;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transactions endpoint could not be fetched or its payload could
    /// not be decoded.
    ///
    /// This single class covers network failures, non-2xx statuses and
    /// malformed payloads alike. Callers log it and fall back to the default
    /// (empty) chart state.
    #[error("could not fetch transactions: {0}")]
    TransactionFetch(String),

    /// A chart's ECharts options could not be built from its totals.
    #[error("could not build chart options: {0}")]
    ChartOptions(String),

    /// Either the user ID or expiry cookie is missing from the cookie jar in
    /// the request.
    #[error("no cookies in the cookie jar :(")]
    CookieMissing,

    /// There was an error parsing the date in the cookie or creating the new
    /// expiry date time.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not format expiry cookie date-time string \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// An empty string was submitted as the user name when logging in.
    #[error("user name cannot be empty")]
    EmptyUserName,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EmptyUserName => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerErrorPage::default().into_response()
            }
        }
    }
}
