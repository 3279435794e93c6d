use crate::domain::{Book, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// カタログストアのエラー
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// 同じキーのレコードが既に存在する（insert_book / insert_user の競合）
    #[error("{0} already stored")]
    AlreadyExists(String),

    /// 永続化基盤の障害
    #[error("catalog backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// カタログストアポート
///
/// 書籍と利用者の永続化を抽象化する。
/// 書籍はISBN、利用者はIDをキーとして保持される。
/// ストアが唯一の所有者であり、サービスは呼び出し中だけ参照を借りる。
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// ISBNで書籍を検索する
    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Arc<Book>>>;

    /// 書籍を登録する
    ///
    /// 存在確認と登録は不可分に行い、既に同じISBNがあれば
    /// `CatalogStoreError::AlreadyExists` を返す。
    async fn insert_book(&self, isbn: &str, book: Arc<Book>) -> Result<()>;

    /// 貸出を記録する
    ///
    /// 呼び出し時点で書籍は既に貸出中状態に遷移している。
    async fn record_borrow(&self, isbn: &str, user_id: &str) -> Result<()>;

    /// 返却を記録する
    ///
    /// 呼び出し時点で書籍は既に貸出可能状態に戻っている。
    async fn record_return(&self, isbn: &str) -> Result<()>;

    /// IDで利用者を検索する
    async fn find_user_by_id(&self, id: &str) -> Result<Option<Arc<User>>>;

    /// 利用者を登録する
    ///
    /// 既に同じIDがあれば `CatalogStoreError::AlreadyExists` を返す。
    async fn insert_user(&self, id: &str, user: Arc<User>) -> Result<()>;
}
