use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_book, borrow_book, get_book, notify_user_with_book_reviews, register_user,
    return_book,
};

/// Creates the API router with all circulation endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Add a book to the catalog
/// - POST /users - Register a user
/// - POST /books/:isbn/borrow - Borrow a book
/// - POST /books/:isbn/return - Return a book
/// - POST /books/:isbn/reviews/notify - Send a book's reviews to a user
///
/// Query endpoints (Read operations):
/// - GET /books/:isbn?user_id= - Look up an available book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/books", post(add_book))
        .route("/users", post(register_user))
        .route("/books/:isbn/borrow", post(borrow_book))
        .route("/books/:isbn/return", post(return_book))
        .route(
            "/books/:isbn/reviews/notify",
            post(notify_user_with_book_reviews),
        )
        // Query endpoints (Read operations)
        .route("/books/:isbn", get(get_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
