use crate::application::circulation::CirculationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CirculationError);

impl From<CirculationError> for ApiError {
    fn from(err: CirculationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match self.0 {
            // 400 Bad Request - リクエストの修正が必要
            CirculationError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),

            // 404 Not Found - リクエストされたリソースが存在しない
            CirculationError::BookNotFound => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND"),
            CirculationError::UserNotRegistered => (StatusCode::NOT_FOUND, "USER_NOT_REGISTERED"),
            CirculationError::NoReviewsFound => (StatusCode::NOT_FOUND, "NO_REVIEWS_FOUND"),

            // 409 Conflict - 現在の状態と衝突する
            CirculationError::InvalidBorrowedState => {
                (StatusCode::CONFLICT, "INVALID_BORROWED_STATE")
            }
            CirculationError::BookAlreadyExists => (StatusCode::CONFLICT, "BOOK_ALREADY_EXISTS"),
            CirculationError::UserAlreadyExists => (StatusCode::CONFLICT, "USER_ALREADY_EXISTS"),
            CirculationError::BookAlreadyBorrowed | CirculationError::BookNotAvailable => {
                (StatusCode::CONFLICT, "BOOK_ALREADY_BORROWED")
            }
            CirculationError::BookNotBorrowed => (StatusCode::CONFLICT, "BOOK_NOT_BORROWED"),

            // 外部サービスの障害
            CirculationError::ReviewServiceUnavailable(ref e) => {
                tracing::warn!("Review source error: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "REVIEW_SERVICE_UNAVAILABLE")
            }
            CirculationError::Notification(ref e) => {
                tracing::warn!("Notification error: {}", e);
                (StatusCode::BAD_GATEWAY, "NOTIFICATION_FAILED")
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CirculationError::CatalogStoreError(ref e) => {
                tracing::error!("Catalog store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "CATALOG_STORE_ERROR")
            }
        };

        let body = Json(ErrorResponse::new(error_type, self.0.to_string()));
        (status, body).into_response()
    }
}
