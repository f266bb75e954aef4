//! HTTP request handlers for the query server.
//!
//! Implements the question-answering and health check endpoints using axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use relgraph_domain::LlmProvider;
use relgraph_query::{QueryEngine, QueryError, QueryResponse};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state
pub struct AppState<L>
where
    L: LlmProvider,
{
    /// Engine answering questions against the loaded store
    pub engine: Arc<QueryEngine<L>>,
}

impl<L> AppState<L>
where
    L: LlmProvider,
{
    /// Wrap an engine for sharing across requests
    pub fn new(engine: QueryEngine<L>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

// Derived Clone would require L: Clone
impl<L> Clone for AppState<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

/// Query string of `GET /query`
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// The natural-language question
    pub q: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Number of triplets in the loaded store
    pub triplet_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Query engine error
    QueryError(QueryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::QueryError(e) => {
                let status = match e {
                    QueryError::EmptyQuestion => StatusCode::BAD_REQUEST,
                    QueryError::Llm(_) => StatusCode::BAD_GATEWAY,
                    QueryError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    QueryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.to_string())
            }
        };

        if status.is_server_error() {
            warn!("Query failed with {}: {}", status, message);
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::QueryError(e)
    }
}

/// GET /query?q= - Answer a question
async fn query<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    let question = params.q.unwrap_or_default();
    let response = state.engine.answer(&question).await?;
    Ok(Json(response))
}

/// GET /health - Liveness and store size
async fn health_check<L>(State(state): State<AppState<L>>) -> Json<HealthCheckResponse>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        triplet_count: state.engine.store().len(),
    })
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>) -> AxumRouter
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    AxumRouter::new()
        .route("/query", get(query::<L>))
        .route("/health", get(health_check::<L>))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use relgraph_llm::MockProvider;
    use relgraph_query::QueryConfig;
    use relgraph_store::RelationStore;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState<MockProvider> {
        let store = Arc::new(RelationStore::new());
        let engine =
            QueryEngine::new(store, MockProvider::default(), QueryConfig::default()).unwrap();
        AppState::new(engine)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_question() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/query")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (QueryError::EmptyQuestion, StatusCode::BAD_REQUEST),
            (QueryError::Llm("down".to_string()), StatusCode::BAD_GATEWAY),
            (QueryError::Timeout(5), StatusCode::GATEWAY_TIMEOUT),
            (QueryError::Config("bad".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let response = AppError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
