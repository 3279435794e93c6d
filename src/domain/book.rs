use std::sync::atomic::{AtomicBool, Ordering};

use super::{BorrowBookError, ReturnBookError};

/// 書籍 - ISBNをキーとするカタログの1冊
///
/// 所有者はカタログストア。貸出サービスは `borrow` / `return_book` で
/// 貸出フラグを切り替えるだけ。
///
/// 状態遷移：
/// - Available --borrow--> Borrowed
/// - Borrowed --return_book--> Available
#[derive(Debug)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    borrowed: AtomicBool,
}

impl Book {
    /// 新規作成（貸出可能）
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            borrowed: AtomicBool::new(false),
        }
    }

    /// 初期の貸出フラグを指定する
    ///
    /// カタログ外から持ち込まれた書籍は貸出中を名乗ることがあり、
    /// `add_book` はそれを拒否する。
    pub fn with_borrowed(self, borrowed: bool) -> Self {
        self.borrowed.store(borrowed, Ordering::Release);
        self
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed.load(Ordering::Acquire)
    }

    /// 状態遷移：Available -> Borrowed
    ///
    /// 確認と切り替えは1回のアトミック操作。
    /// 同じ書籍への同時貸出は片方だけが成功する。
    pub fn borrow(&self) -> Result<(), BorrowBookError> {
        self.borrowed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| BorrowBookError::AlreadyBorrowed)
    }

    /// 状態遷移：Borrowed -> Available
    pub fn return_book(&self) -> Result<(), ReturnBookError> {
        self.borrowed
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| ReturnBookError::NotBorrowed)
    }
}

impl Clone for Book {
    fn clone(&self) -> Self {
        Self {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            borrowed: AtomicBool::new(self.is_borrowed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heroes() -> Book {
        Book::new("978-965-231-157-3", "Heroes", "Amit")
    }

    #[test]
    fn test_new_book_is_available() {
        assert!(!heroes().is_borrowed());
    }

    #[test]
    fn test_with_borrowed_sets_flag() {
        assert!(heroes().with_borrowed(true).is_borrowed());
    }

    #[test]
    fn test_borrow_then_return_cycles() {
        let book = heroes();

        assert!(book.borrow().is_ok());
        assert!(book.is_borrowed());

        assert!(book.return_book().is_ok());
        assert!(!book.is_borrowed());

        // 何度でも循環できる
        assert!(book.borrow().is_ok());
        assert!(book.is_borrowed());
    }

    #[test]
    fn test_borrow_twice_fails() {
        let book = heroes();
        book.borrow().unwrap();

        assert_eq!(book.borrow().unwrap_err(), BorrowBookError::AlreadyBorrowed);
        assert!(book.is_borrowed());
    }

    #[test]
    fn test_return_available_book_fails() {
        let book = heroes();

        assert_eq!(book.return_book().unwrap_err(), ReturnBookError::NotBorrowed);
        assert!(!book.is_borrowed());
    }

    #[test]
    fn test_clone_copies_flag() {
        let book = heroes();
        book.borrow().unwrap();

        let copy = book.clone();
        assert!(copy.is_borrowed());
        assert_eq!(copy.isbn, book.isbn);
    }
}
