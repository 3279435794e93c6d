use crate::adapters::mock::NotificationChannel as LogNotificationChannel;
use crate::application::circulation::{
    ServiceDependencies, add_book as execute_add_book, borrow_book as execute_borrow_book,
    get_book_by_isbn as execute_get_book_by_isbn,
    notify_user_with_book_reviews as execute_notify_user_with_book_reviews,
    register_user as execute_register_user, return_book as execute_return_book,
};
use crate::domain::User;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AddBookRequest, BookResponse, RegisterUserRequest, UserIdQuery, UserIdRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books - 書籍を登録
///
/// ボディが欠落・不正な場合は「書籍なし」としてサービスに渡す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<AddBookRequest>>,
) -> Result<StatusCode, ApiError> {
    let book = payload.map(|Json(req)| Arc::new(req.into_book()));

    execute_add_book(&state.service_deps, book).await?;

    Ok(StatusCode::CREATED)
}

/// POST /users - 利用者を登録
///
/// HTTP経由で登録された利用者にはログ出力の通知チャネルを割り当てる。
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<RegisterUserRequest>>,
) -> Result<StatusCode, ApiError> {
    let user = payload.map(|Json(req)| {
        let channel = Arc::new(LogNotificationChannel::new(req.id.clone()));
        Arc::new(User::new(req.id, req.name, channel))
    });

    execute_register_user(&state.service_deps, user).await?;

    Ok(StatusCode::CREATED)
}

/// POST /books/:isbn/borrow - 書籍を貸出
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    payload: Option<Json<UserIdRequest>>,
) -> Result<StatusCode, ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    execute_borrow_book(&state.service_deps, &isbn, &req.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /books/:isbn/return - 書籍を返却
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, ApiError> {
    execute_return_book(&state.service_deps, &isbn).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /books/:isbn/reviews/notify - 書籍のレビューを利用者に通知
pub async fn notify_user_with_book_reviews(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    payload: Option<Json<UserIdRequest>>,
) -> Result<StatusCode, ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    execute_notify_user_with_book_reviews(&state.service_deps, &isbn, &req.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:isbn?user_id= - 書籍を参照
///
/// 貸出中の書籍は返さない。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_get_book_by_isbn(&state.service_deps, &isbn, &query.user_id).await?;

    Ok(Json(BookResponse::from(book.as_ref())))
}
