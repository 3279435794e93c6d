use crate::ports::review_source::{ReviewSource as ReviewSourceTrait, ReviewSourceError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// ReviewSourceのモック実装
///
/// ISBNごとに登録されたレビューを返す。
/// レビューが登録されていない書籍は「結果なし」になる。
/// 障害状態に切り替えて、外部サービスの停止を再現できる。
pub struct ReviewSource {
    reviews: Mutex<HashMap<String, Vec<String>>>,
    unavailable: AtomicBool,
    releases: AtomicUsize,
}

impl ReviewSource {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
            releases: AtomicUsize::new(0),
        }
    }

    /// 書籍のレビューを登録
    pub fn add_review(&self, isbn: &str, review: impl Into<String>) {
        self.reviews
            .lock()
            .unwrap()
            .entry(isbn.to_string())
            .or_default()
            .push(review.into());
    }

    /// `isbn=レビュー` を `;` で区切った文字列からレビューを登録する
    ///
    /// 空の要素や `=` を含まない要素は読み飛ばす。
    /// 戻り値は登録したレビューの件数。
    pub fn load_seed(&self, seed: &str) -> usize {
        let mut loaded = 0;
        for entry in seed.split(';') {
            let Some((isbn, review)) = entry.split_once('=') else {
                continue;
            };
            let (isbn, review) = (isbn.trim(), review.trim());
            if isbn.is_empty() || review.is_empty() {
                continue;
            }
            self.add_review(isbn, review);
            loaded += 1;
        }
        loaded
    }

    /// 外部サービスの障害を再現する
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 解放された回数
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl Default for ReviewSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewSourceTrait for ReviewSource {
    async fn fetch_reviews(&self, isbn: &str) -> Result<Option<Vec<String>>, ReviewSourceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ReviewSourceError::Unavailable(
                "mock review source is offline".to_string(),
            ));
        }
        Ok(self.reviews.lock().unwrap().get(isbn).cloned())
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}
