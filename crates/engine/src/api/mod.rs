//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Build the full router: routes, request tracing and CORS.
pub fn router(app: Arc<App>, cors_allowed_origins: &[String]) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    match build_cors_layer(cors_allowed_origins) {
        Some(cors) => router = router.layer(cors),
        None => tracing::warn!("No valid CORS origins configured, cross-origin requests will be refused"),
    }

    router
}

/// `*` allows any origin, method and header. Otherwise only the listed origins.
fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
    };
    use tower::ServiceExt;
    use wizbattle_domain::SamplingTable;

    use crate::infrastructure::ports::MockLlmPort;
    use crate::prompt_templates::PromptCatalog;

    fn test_app() -> Arc<App> {
        Arc::new(App::new(
            Arc::new(MockLlmPort::new()),
            PromptCatalog::defaults(),
            SamplingTable::standard(),
        ))
    }

    fn preflight(origin: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("OPTIONS")
            .uri("/generate_wizard_stats")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let router = router(test_app(), &["*".to_string()]);

        let response = router.oneshot(preflight("http://localhost:5173")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let router = router(test_app(), &["https://wizbattle.app".to_string()]);

        let response = router.oneshot(preflight("https://wizbattle.app")).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://wizbattle.app"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_header() {
        let router = router(test_app(), &["https://wizbattle.app".to_string()]);

        let response = router.oneshot(preflight("https://evil.example")).await.unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn test_no_valid_origins_means_no_layer() {
        assert!(build_cors_layer(&[]).is_none());
        assert!(build_cors_layer(&["bad\norigin".to_string()]).is_none());
    }
}
