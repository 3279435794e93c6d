//! Recording fakes for the circulation collaborators.
#![allow(dead_code)]

use async_trait::async_trait;
use library_circulation::application::circulation::ServiceDependencies;
use library_circulation::domain::{Book, User};
use library_circulation::ports::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ISBN: &str = "978-965-231-157-3";
pub const USER_ID: &str = "318434123789";

// ============================================================================
// CatalogStore
// ============================================================================

/// インメモリCatalogStore（呼び出しを記録する）
pub struct RecordingCatalogStore {
    books: Mutex<HashMap<String, Arc<Book>>>,
    users: Mutex<HashMap<String, Arc<User>>>,
    calls: Mutex<Vec<String>>,
    /// record_borrow 時点で書籍が貸出中だったか
    borrow_saw_borrowed: Mutex<Vec<bool>>,
    fail_writes: AtomicBool,
    /// 検索では見つからないが登録で競合する（並行登録の再現）
    conflict_on_insert: AtomicBool,
}

impl RecordingCatalogStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            borrow_saw_borrowed: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            conflict_on_insert: AtomicBool::new(false),
        }
    }

    /// 事前データとして書籍を置く（呼び出し記録には残らない）
    pub fn seed_book(&self, book: Arc<Book>) {
        self.books.lock().unwrap().insert(book.isbn.clone(), book);
    }

    pub fn seed_user(&self, user: Arc<User>) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn borrow_saw_borrowed(&self) -> Vec<bool> {
        self.borrow_saw_borrowed.lock().unwrap().clone()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn conflict_on_insert(&self) {
        self.conflict_on_insert.store(true, Ordering::SeqCst);
    }

    fn check_insert(&self, key: &str) -> catalog_store::Result<()> {
        if self.conflict_on_insert.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::AlreadyExists(key.to_string()));
        }
        self.check_write()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_write(&self) -> catalog_store::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CatalogStoreError::Backend("store is read-only".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for RecordingCatalogStore {
    async fn find_book_by_isbn(&self, isbn: &str) -> catalog_store::Result<Option<Arc<Book>>> {
        self.record(format!("find_book_by_isbn({})", isbn));
        Ok(self.books.lock().unwrap().get(isbn).cloned())
    }

    async fn insert_book(&self, isbn: &str, book: Arc<Book>) -> catalog_store::Result<()> {
        self.record(format!("insert_book({})", isbn));
        self.check_insert(isbn)?;
        self.books.lock().unwrap().insert(isbn.to_string(), book);
        Ok(())
    }

    async fn record_borrow(&self, isbn: &str, user_id: &str) -> catalog_store::Result<()> {
        self.record(format!("record_borrow({}, {})", isbn, user_id));
        let borrowed = self
            .books
            .lock()
            .unwrap()
            .get(isbn)
            .map(|b| b.is_borrowed())
            .unwrap_or(false);
        self.borrow_saw_borrowed.lock().unwrap().push(borrowed);
        self.check_write()
    }

    async fn record_return(&self, isbn: &str) -> catalog_store::Result<()> {
        self.record(format!("record_return({})", isbn));
        self.check_write()
    }

    async fn find_user_by_id(&self, id: &str) -> catalog_store::Result<Option<Arc<User>>> {
        self.record(format!("find_user_by_id({})", id));
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn insert_user(&self, id: &str, user: Arc<User>) -> catalog_store::Result<()> {
        self.record(format!("insert_user({})", id));
        self.check_insert(id)?;
        self.users.lock().unwrap().insert(id.to_string(), user);
        Ok(())
    }
}

// ============================================================================
// ReviewSource
// ============================================================================

/// レビュー取得の結果
pub enum ReviewScript {
    Reviews(Vec<String>),
    Absent,
    Fail,
}

/// スクリプト通りに応答するReviewSource（取得・解放回数を記録する）
pub struct ScriptedReviewSource {
    script: Mutex<ReviewScript>,
    fetches: AtomicUsize,
    releases: AtomicUsize,
}

impl ScriptedReviewSource {
    pub fn new(script: ReviewScript) -> Self {
        Self {
            script: Mutex::new(script),
            fetches: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
        }
    }

    pub fn returning(reviews: &[&str]) -> Self {
        Self::new(ReviewScript::Reviews(
            reviews.iter().map(|r| r.to_string()).collect(),
        ))
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewSource for ScriptedReviewSource {
    async fn fetch_reviews(&self, _isbn: &str) -> Result<Option<Vec<String>>, ReviewSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &*self.script.lock().unwrap() {
            ReviewScript::Reviews(reviews) => Ok(Some(reviews.clone())),
            ReviewScript::Absent => Ok(None),
            ReviewScript::Fail => Err(ReviewSourceError::Unavailable("timeout".to_string())),
        }
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// NotificationChannel
// ============================================================================

/// 送信メッセージを記録するNotificationChannel
pub struct RecordingChannel {
    sent: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let channel = Self::new();
        channel.fail.store(true, Ordering::SeqCst);
        channel
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    async fn send(&self, message: &str) -> Result<(), NotificationError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotificationError::DeliveryFailed("mailbox full".to_string()));
        }
        self.sent.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct Fixture {
    pub store: Arc<RecordingCatalogStore>,
    pub reviews: Arc<ScriptedReviewSource>,
    pub deps: ServiceDependencies,
}

pub fn fixture(reviews: ScriptedReviewSource) -> Fixture {
    let store = Arc::new(RecordingCatalogStore::new());
    let reviews = Arc::new(reviews);
    let deps = ServiceDependencies {
        catalog_store: store.clone(),
        review_source: reviews.clone(),
    };
    Fixture {
        store,
        reviews,
        deps,
    }
}

pub fn heroes() -> Arc<Book> {
    Arc::new(Book::new(ISBN, "Heroes", "Amit"))
}

pub fn amit(channel: Arc<RecordingChannel>) -> Arc<User> {
    Arc::new(User::new(USER_ID, "Amit", channel))
}
