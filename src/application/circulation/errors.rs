use crate::ports::{CatalogStoreError, NotificationError, ReviewSourceError};
use std::fmt;
use thiserror::Error;

/// 入力検証で不正と判定された項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Book,
    Isbn,
    Title,
    Author,
    User,
    UserId,
    UserName,
    NotificationService,
}

impl InvalidField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidField::Book => "book",
            InvalidField::Isbn => "ISBN",
            InvalidField::Title => "title",
            InvalidField::Author => "author",
            InvalidField::User => "user",
            InvalidField::UserId => "user Id",
            InvalidField::UserName => "user name",
            InvalidField::NotificationService => "notification service",
        }
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 貸出管理アプリケーション層のエラー
///
/// 入力不正（`InvalidArgument`）と業務ルール違反（それ以外）を区別する。
/// 通知の配信失敗だけは変換せず、チャネルのエラーをそのまま返す。
#[derive(Debug, Error)]
pub enum CirculationError {
    /// 入力が欠落している、または形式が不正
    #[error("Invalid {0}.")]
    InvalidArgument(InvalidField),

    /// 貸出中の状態で登録しようとした
    #[error("Book with invalid borrowed state.")]
    InvalidBorrowedState,

    /// 同じISBNの書籍が既に存在する
    #[error("Book already exists.")]
    BookAlreadyExists,

    /// 同じIDの利用者が既に存在する
    #[error("User already exists.")]
    UserAlreadyExists,

    /// 書籍が存在しない
    #[error("Book not found!")]
    BookNotFound,

    /// 利用者が登録されていない
    #[error("User not found!")]
    UserNotRegistered,

    /// 書籍が既に貸出中（貸出時）
    #[error("Book is already borrowed!")]
    BookAlreadyBorrowed,

    /// 書籍が既に貸出中（参照時）
    #[error("Book was already borrowed!")]
    BookNotAvailable,

    /// 書籍が貸出されていない
    #[error("Book wasn't borrowed!")]
    BookNotBorrowed,

    /// レビューソースの取得失敗
    #[error("Review service unavailable!")]
    ReviewServiceUnavailable(#[source] ReviewSourceError),

    /// レビューが存在しない
    #[error("No reviews found!")]
    NoReviewsFound,

    /// 通知チャネルの配信失敗（変換しない）
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// CatalogStoreのエラー
    #[error("Catalog store error")]
    CatalogStoreError(#[source] CatalogStoreError),
}

impl CirculationError {
    /// 入力不正か（業務ルール違反・外部障害ではない）
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CirculationError::InvalidArgument(_))
    }

    /// 貸出中の書籍に対する操作か（貸出・参照のどちらで検出したかを問わない）
    pub fn is_already_borrowed(&self) -> bool {
        matches!(
            self,
            CirculationError::BookAlreadyBorrowed | CirculationError::BookNotAvailable
        )
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CirculationError>;
