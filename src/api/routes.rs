use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id_middleware, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/books", get(handlers::get_books).post(handlers::create_book))
        // Book lists
        .route("/views", post(handlers::create_view))
        .route(
            "/views/:id",
            get(handlers::get_view).delete(handlers::delete_view),
        )
        .route("/views/:id/sort/:column", post(handlers::toggle_sort))
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(CorsLayer::permissive()),
        )
}
