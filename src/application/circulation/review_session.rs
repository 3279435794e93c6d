use crate::ports::{ReviewSource, ReviewSourceError};

/// レビューソースのスコープ付き取得
///
/// `acquire` から drop までが1回の取得。drop 時に必ず `release` が
/// ちょうど1回呼ばれる（正常終了、エラーでの早期 return、panic のいずれでも）。
pub(super) struct ReviewSession<'a> {
    source: &'a dyn ReviewSource,
}

impl<'a> ReviewSession<'a> {
    pub(super) fn acquire(source: &'a dyn ReviewSource) -> Self {
        tracing::debug!("review source acquired");
        Self { source }
    }

    pub(super) async fn fetch_reviews(
        &self,
        isbn: &str,
    ) -> Result<Option<Vec<String>>, ReviewSourceError> {
        self.source.fetch_reviews(isbn).await
    }
}

impl Drop for ReviewSession<'_> {
    fn drop(&mut self) {
        self.source.release();
        tracing::debug!("review source released");
    }
}
