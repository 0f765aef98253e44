//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    analytics::get_analytics_page,
    auth::auth_guard,
    endpoints,
    log_in::{get_log_in_page, post_log_in},
    log_out::get_log_out,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out));

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the analytics page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ANALYTICS_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, endpoints, log_in::LogInForm, test_utils::DummySource};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new("42", Arc::new(DummySource));

        TestServer::builder()
            .save_cookies()
            .build(build_router(state))
    }

    #[tokio::test]
    async fn root_redirects_to_log_in_without_session() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn analytics_redirects_to_log_in_without_session() {
        let server = get_test_server();

        let response = server.get(endpoints::ANALYTICS_VIEW).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn analytics_page_loads_after_logging_in() {
        let server = get_test_server();

        let log_in_response = server
            .post(endpoints::LOG_IN_API)
            .form(&LogInForm {
                user_name: "averagejoe".to_owned(),
            })
            .await;
        log_in_response.assert_status_see_other();

        let response = server.get(endpoints::ANALYTICS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Signed in as averagejoe"));
    }

    #[tokio::test]
    async fn root_redirects_to_analytics_with_session() {
        let server = get_test_server();

        server
            .post(endpoints::LOG_IN_API)
            .form(&LogInForm {
                user_name: "averagejoe".to_owned(),
            })
            .await;

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::ANALYTICS_VIEW);
    }

    #[tokio::test]
    async fn logging_out_locks_the_analytics_page_again() {
        let server = get_test_server();

        server
            .post(endpoints::LOG_IN_API)
            .form(&LogInForm {
                user_name: "averagejoe".to_owned(),
            })
            .await;
        server.get(endpoints::LOG_OUT).await;

        let response = server.get(endpoints::ANALYTICS_VIEW).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::LOG_IN_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_returns_404_page() {
        let server = get_test_server();

        let response = server.get("/definitely_not_a_page").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }
}
