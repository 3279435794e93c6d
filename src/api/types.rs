use serde::{Deserialize, Serialize};

use crate::domain::Book;

/// 書籍登録リクエスト（POST /books）
///
/// 欠落した項目は空文字として扱い、サービス側の入力検証で弾く。
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub borrowed: bool,
}

impl AddBookRequest {
    pub fn into_book(self) -> Book {
        Book::new(self.isbn, self.title, self.author).with_borrowed(self.borrowed)
    }
}

/// 利用者登録リクエスト（POST /users）
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// 利用者IDを伴うリクエスト（貸出・レビュー通知）
#[derive(Debug, Default, Deserialize)]
pub struct UserIdRequest {
    #[serde(default)]
    pub user_id: String,
}

/// 書籍参照のクエリパラメータ（GET /books/:isbn）
#[derive(Debug, Default, Deserialize)]
pub struct UserIdQuery {
    #[serde(default)]
    pub user_id: String,
}

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub borrowed: bool,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            borrowed: book.is_borrowed(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
