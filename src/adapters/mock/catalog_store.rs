use crate::domain::{Book, User};
use crate::ports::catalog_store::{CatalogStore as CatalogStoreTrait, CatalogStoreError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex};

/// CatalogStoreのインメモリ実装
///
/// 書籍・利用者・貸出をプロセス内メモリに保持する。
/// バイナリとテストで使用し、再起動すると内容は消える。
pub struct CatalogStore {
    books: Mutex<HashMap<String, Arc<Book>>>,
    users: Mutex<HashMap<String, Arc<User>>>,
    loans: Mutex<HashMap<String, String>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
            loans: Mutex::new(HashMap::new()),
        }
    }

    /// 貸出中の一覧（ISBN -> 利用者ID）
    pub fn loans(&self) -> HashMap<String, String> {
        self.loans.lock().unwrap().clone()
    }

    pub fn book_count(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStoreTrait for CatalogStore {
    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Arc<Book>>> {
        Ok(self.books.lock().unwrap().get(isbn).cloned())
    }

    /// 存在しない場合のみ登録（ロック内で確認と挿入を行う）
    async fn insert_book(&self, isbn: &str, book: Arc<Book>) -> Result<()> {
        match self.books.lock().unwrap().entry(isbn.to_string()) {
            Entry::Occupied(_) => Err(CatalogStoreError::AlreadyExists(isbn.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(book);
                Ok(())
            }
        }
    }

    async fn record_borrow(&self, isbn: &str, user_id: &str) -> Result<()> {
        self.loans
            .lock()
            .unwrap()
            .insert(isbn.to_string(), user_id.to_string());
        Ok(())
    }

    async fn record_return(&self, isbn: &str) -> Result<()> {
        self.loans.lock().unwrap().remove(isbn);
        Ok(())
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<Arc<User>>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    /// 存在しない場合のみ登録（ロック内で確認と挿入を行う）
    async fn insert_user(&self, id: &str, user: Arc<User>) -> Result<()> {
        match self.users.lock().unwrap().entry(id.to_string()) {
            Entry::Occupied(_) => Err(CatalogStoreError::AlreadyExists(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }
}
