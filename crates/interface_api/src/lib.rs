//! HTTP API Layer
//!
//! This crate exposes the grade calculator over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Thin adapters from HTTP to the `GradeCalculator` facade
//! - **Middleware**: Request IDs, request logging, concurrency limiting
//! - **DTOs**: Request bodies and list/detail envelopes
//! - **Error Handling**: Consistent `{error, message}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(calculator, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use app_grading::GradeCalculator;

use crate::config::ApiConfig;
use crate::handlers::{grading, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<GradeCalculator>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `calculator` - Grading facade backed by a student store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(calculator: Arc<GradeCalculator>, config: ApiConfig) -> Router {
    let max_concurrent_requests = config.max_concurrent_requests.max(1);
    let state = AppState { calculator, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Student routes
    let student_routes = Router::new()
        .route("/", get(grading::list_students))
        .route("/:id", axum::routing::delete(grading::remove_student))
        .route("/:id/evaluations", post(grading::register_evaluation))
        .route("/:id/attendance", put(grading::update_attendance))
        .route("/:id/extra-points-policy", put(grading::update_extra_points_policy))
        .route("/:id/final-grade", get(grading::final_grade))
        .route("/:id/calculation-detail", get(grading::calculation_detail));

    let api_routes = Router::new()
        .nest("/students", student_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
