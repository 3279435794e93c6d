use async_trait::async_trait;
use thiserror::Error;

/// レビュー取得失敗
#[derive(Debug, Error)]
pub enum ReviewSourceError {
    /// レビューサービスに接続できない、またはサービス側の障害
    #[error("review source unavailable: {0}")]
    Unavailable(String),
}

/// レビューソースポート
///
/// 書籍の外部レビューを取得する。
/// 取得のたびに `release` をちょうど1回呼び出す必要がある。
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// ISBNに対するレビューを取得する
    ///
    /// `Ok(None)` はレビューが存在しないことを表し、
    /// 空のリスト（取得は成功したが内容がない）とは区別される。
    async fn fetch_reviews(
        &self,
        isbn: &str,
    ) -> std::result::Result<Option<Vec<String>>, ReviewSourceError>;

    /// 取得に使ったリソースを解放する
    fn release(&self);
}
