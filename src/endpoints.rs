//! The app's endpoint URIs.

/// The root route which redirects to the analytics page.
pub const ROOT: &str = "/";
/// The page showing the income and expense donut charts.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
