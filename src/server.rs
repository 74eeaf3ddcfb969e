//! HTTP server for the course search API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/programs-courses` | Search courses by query, keyword, and campus |
//! | `GET`  | `/health` | Health check (returns version and course count) |
//!
//! # Search parameters
//!
//! `q` (single term), `limit` (default 20, max 200), and the repeatable,
//! comma-separated `campus` and `keyword`.
//!
//! # Error Contract
//!
//! Failures, including panics inside a handler, are answered with status
//! 500 and
//!
//! ```json
//! { "success": false, "error": "<message>" }
//! ```
//!
//! where the message falls back to `"Unknown error occurred"` when the
//! failure carries none.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser front ends
//! can call the API directly.

use anyhow::Context;
use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use course_search_core::query::SearchParams;

use crate::catalog::{load_catalog, Catalog};
use crate::config::Config;
use crate::search::search_catalog;

/// Fallback message when a failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    /// Aggregated catalog, read-only for the life of the process.
    catalog: Arc<Catalog>,
}

/// Starts the HTTP server.
///
/// Loads every configured catalog, binds to `[server].bind`, and serves
/// until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(config);
    let app = router(catalog);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!(bind = %config.server.bind, "course search listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the full application router over `catalog`.
pub fn router(catalog: Catalog) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
    };

    with_middleware(
        Router::new()
            .route("/api/programs-courses", get(handle_search))
            .route("/health", get(handle_health))
            .with_state(state),
    )
}

fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: if message.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            },
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::internal(err.into().to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status, error = %self.message, "request failed");
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Renders a caught handler panic as a 500 with the panic message.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };
    AppError::internal(message).into_response()
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    courses: usize,
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        courses: state.catalog.len(),
    })
}

// ============ GET /api/programs-courses ============

/// Handler for `GET /api/programs-courses`.
///
/// Query pairs are taken as an ordered list so repeated `campus` and
/// `keyword` keys survive extraction.
async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let params = SearchParams::from_pairs(pairs);
    let response = search_catalog(&state.catalog, &params);
    let body = serde_json::to_value(&response)?;
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use course_search_core::catalog::CatalogSource;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn manoa_catalog() -> Catalog {
        let mut manoa: Vec<Value> = (0..8)
            .map(|i| {
                json!({
                    "course_prefix": "ICS",
                    "course_number": format!("{}", 100 + i),
                    "course_title": format!("Data Topics {}", i),
                    "dept_name": "Information & Computer Sciences",
                })
            })
            .collect();
        manoa.push(json!({"course_prefix": "HIST", "course_number": "151", "course_title": "World History"}));

        Catalog::from_sources(vec![
            CatalogSource::new(
                "Hilo",
                json!([{"course_title": "Big Data Analytics", "dept_name": "Computer Science"}]),
            ),
            CatalogSource::new("Manoa", Value::Array(manoa)),
            CatalogSource::new("Maui", json!({"unexpected": "shape"})),
        ])
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_search_campus_filter_and_limit() {
        let (status, body) = get_json(
            router(manoa_catalog()),
            "/api/programs-courses?q=data&campus=Manoa&limit=5",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 8);
        assert_eq!(body["results"].as_array().unwrap().len(), 5);
        assert_eq!(body["results"][0]["campus"], "Manoa");
        assert_eq!(body["results"][0]["course_number"], "100");
    }

    #[tokio::test]
    async fn test_search_without_terms_is_advisory() {
        let (status, body) = get_json(router(manoa_catalog()), "/api/programs-courses?campus=Manoa").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "total": 0,
                "message": "Please include a search query (e.g., ?q=data)",
                "results": [],
            })
        );
    }

    #[tokio::test]
    async fn test_repeated_and_comma_separated_params() {
        let (_, body) = get_json(
            router(manoa_catalog()),
            "/api/programs-courses?keyword=history&campus=hilo,%20manoa&keyword=big%20data",
        )
        .await;
        // Hilo's "Big Data Analytics" and Manoa's "World History"
        assert_eq!(body["total"], 2);
        let campuses: Vec<_> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["campus"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(campuses, vec!["Hilo", "Manoa"]);
    }

    #[tokio::test]
    async fn test_invalid_limit_defaults_to_twenty() {
        let courses: Vec<Value> = (0..25)
            .map(|i| json!({"course_title": format!("Biology {}", i)}))
            .collect();
        let catalog = Catalog::from_sources(vec![CatalogSource::new("Hilo", Value::Array(courses))]);

        for uri in [
            "/api/programs-courses?q=biology",
            "/api/programs-courses?q=biology&limit=abc",
            "/api/programs-courses?q=biology&limit=0",
            "/api/programs-courses?q=biology&limit=-3",
        ] {
            let (_, body) = get_json(router(catalog.clone()), uri).await;
            assert_eq!(body["total"], 25, "{}", uri);
            assert_eq!(body["results"].as_array().unwrap().len(), 20, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(manoa_catalog()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["courses"], 10);
    }

    async fn explode() -> &'static str {
        panic!("catalog exploded")
    }

    async fn explode_opaque() -> &'static str {
        std::panic::panic_any(42u32)
    }

    #[tokio::test]
    async fn test_panic_becomes_500_with_message() {
        let app = with_middleware(
            Router::new()
                .route("/boom", get(explode))
                .route("/opaque", get(explode_opaque)),
        );

        let (status, body) = get_json(app.clone(), "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "error": "catalog exploded"}));

        let (status, body) = get_json(app, "/opaque").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "error": UNKNOWN_ERROR}));
    }

    #[test]
    fn test_app_error_from_anyhow() {
        let err: AppError = anyhow::anyhow!("catalog unavailable").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "catalog unavailable");
    }
}
