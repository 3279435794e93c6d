use crate::domain::{Book, User, validation};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{CirculationError, InvalidField, Result};
use super::review_session::ReviewSession;

/// サービスの依存関係
///
/// 貸出サービス自身は状態を持たない。
/// 各操作は依存関係を受け取り、検証してから外部コラボレーターを呼ぶだけ。
/// 通知チャネルは利用者ごとに持つため、ここには含めない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog_store: Arc<dyn CatalogStore>,
    pub review_source: Arc<dyn ReviewSource>,
}

/// 条件が偽なら入力不正エラー
fn ensure(valid: bool, field: InvalidField) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(CirculationError::InvalidArgument(field))
    }
}

fn ensure_isbn(isbn: &str) -> Result<()> {
    ensure(validation::is_valid_isbn(isbn), InvalidField::Isbn)
}

fn ensure_user_id(user_id: &str) -> Result<()> {
    ensure(validation::is_valid_user_id(user_id), InvalidField::UserId)
}

/// ストアから書籍を取得するヘルパー関数
///
/// # エラー
/// - CatalogStoreError: 読み込み失敗
/// - BookNotFound: 該当する書籍がない
async fn find_book(store: &Arc<dyn CatalogStore>, isbn: &str) -> Result<Arc<Book>> {
    store
        .find_book_by_isbn(isbn)
        .await
        .map_err(CirculationError::CatalogStoreError)?
        .ok_or(CirculationError::BookNotFound)
}

/// ストアから利用者を取得するヘルパー関数
///
/// # エラー
/// - CatalogStoreError: 読み込み失敗
/// - UserNotRegistered: 該当する利用者がない
async fn find_user(store: &Arc<dyn CatalogStore>, user_id: &str) -> Result<Arc<User>> {
    store
        .find_user_by_id(user_id)
        .await
        .map_err(CirculationError::CatalogStoreError)?
        .ok_or(CirculationError::UserNotRegistered)
}

/// 書籍を登録する
///
/// ビジネスルール（この順で検証し、最初の違反で即座に失敗する）：
/// - 書籍が渡されていること
/// - ISBN・タイトル・著者名が有効であること
/// - 貸出中でないこと
/// - 同じISBNの書籍が存在しないこと
pub async fn add_book(deps: &ServiceDependencies, book: Option<Arc<Book>>) -> Result<()> {
    let book = book.ok_or(CirculationError::InvalidArgument(InvalidField::Book))?;
    tracing::debug!(isbn = %book.isbn, "add_book");

    // 1. 入力検証
    ensure_isbn(&book.isbn)?;
    ensure(validation::is_valid_title(&book.title), InvalidField::Title)?;
    ensure(validation::is_valid_author(&book.author), InvalidField::Author)?;

    // 2. 貸出状態の確認
    if book.is_borrowed() {
        return Err(CirculationError::InvalidBorrowedState);
    }

    // 3. 重複確認
    let existing = deps
        .catalog_store
        .find_book_by_isbn(&book.isbn)
        .await
        .map_err(CirculationError::CatalogStoreError)?;

    if existing.is_some() {
        return Err(CirculationError::BookAlreadyExists);
    }

    // 4. ストアに保存（確認後に競合した場合も重複として扱う）
    let isbn = book.isbn.clone();
    deps.catalog_store
        .insert_book(&isbn, book)
        .await
        .map_err(|e| match e {
            CatalogStoreError::AlreadyExists(_) => CirculationError::BookAlreadyExists,
            e => CirculationError::CatalogStoreError(e),
        })?;

    tracing::info!(%isbn, "book added");
    Ok(())
}

/// 利用者を登録する
///
/// ビジネスルール：
/// - 利用者が渡されていること
/// - ID・氏名が有効で、通知チャネルを持っていること
/// - 同じIDの利用者が存在しないこと
pub async fn register_user(deps: &ServiceDependencies, user: Option<Arc<User>>) -> Result<()> {
    let user = user.ok_or(CirculationError::InvalidArgument(InvalidField::User))?;
    tracing::debug!(user_id = %user.id, "register_user");

    // 1. 入力検証
    ensure_user_id(&user.id)?;
    ensure(
        validation::is_valid_user_name(&user.name),
        InvalidField::UserName,
    )?;
    ensure(
        user.notification_channel.is_some(),
        InvalidField::NotificationService,
    )?;

    // 2. 重複確認
    let existing = deps
        .catalog_store
        .find_user_by_id(&user.id)
        .await
        .map_err(CirculationError::CatalogStoreError)?;

    if existing.is_some() {
        return Err(CirculationError::UserAlreadyExists);
    }

    // 3. ストアに保存（確認後に競合した場合も重複として扱う）
    let user_id = user.id.clone();
    deps.catalog_store
        .insert_user(&user_id, user)
        .await
        .map_err(|e| match e {
            CatalogStoreError::AlreadyExists(_) => CirculationError::UserAlreadyExists,
            e => CirculationError::CatalogStoreError(e),
        })?;

    tracing::info!(%user_id, "user registered");
    Ok(())
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - ISBNが有効で、書籍が存在すること
/// - 利用者IDが有効で（書籍の存在確認の後に検証）、利用者が登録済みであること
/// - 書籍が貸出中でないこと
///
/// 書籍の状態を貸出中に変更してから、ストアに貸出を記録する。
/// 記録に失敗した場合、書籍の状態は元に戻す。
pub async fn borrow_book(deps: &ServiceDependencies, isbn: &str, user_id: &str) -> Result<()> {
    tracing::debug!(%isbn, %user_id, "borrow_book");

    // 1. 書籍の確認
    ensure_isbn(isbn)?;
    let book = find_book(&deps.catalog_store, isbn).await?;

    // 2. 利用者の確認
    ensure_user_id(user_id)?;
    find_user(&deps.catalog_store, user_id).await?;

    // 3. 状態遷移（Available -> Borrowed）
    book.borrow()
        .map_err(|_| CirculationError::BookAlreadyBorrowed)?;

    // 4. ストアに記録
    if let Err(e) = deps.catalog_store.record_borrow(isbn, user_id).await {
        tracing::warn!(%isbn, "recording borrow failed, reverting book state");
        let _ = book.return_book();
        return Err(CirculationError::CatalogStoreError(e));
    }

    tracing::info!(%isbn, %user_id, "book borrowed");
    Ok(())
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - ISBNが有効で、書籍が存在すること
/// - 書籍が貸出中であること
pub async fn return_book(deps: &ServiceDependencies, isbn: &str) -> Result<()> {
    tracing::debug!(%isbn, "return_book");

    // 1. 書籍の確認
    ensure_isbn(isbn)?;
    let book = find_book(&deps.catalog_store, isbn).await?;

    // 2. 状態遷移（Borrowed -> Available）
    book.return_book()
        .map_err(|_| CirculationError::BookNotBorrowed)?;

    // 3. ストアに記録
    if let Err(e) = deps.catalog_store.record_return(isbn).await {
        tracing::warn!(%isbn, "recording return failed, reverting book state");
        let _ = book.borrow();
        return Err(CirculationError::CatalogStoreError(e));
    }

    tracing::info!(%isbn, "book returned");
    Ok(())
}

/// ISBNで書籍を参照する
///
/// ビジネスルール：
/// - ISBN・利用者IDが有効であること
/// - 書籍が存在し、貸出中でないこと
///
/// 状態は変更しない。
pub async fn get_book_by_isbn(
    deps: &ServiceDependencies,
    isbn: &str,
    user_id: &str,
) -> Result<Arc<Book>> {
    tracing::debug!(%isbn, %user_id, "get_book_by_isbn");

    ensure_isbn(isbn)?;
    ensure_user_id(user_id)?;

    let book = find_book(&deps.catalog_store, isbn).await?;

    if book.is_borrowed() {
        return Err(CirculationError::BookNotAvailable);
    }

    Ok(book)
}

/// レビュー通知メッセージを組み立てる
pub fn compose_review_message(title: &str, reviews: &[String]) -> String {
    format!("Reviews for '{}':\n{}", title, reviews.join("\n"))
}

/// 書籍のレビューを利用者に通知する
///
/// ビジネスルール：
/// - ISBN・利用者IDが有効であること
/// - 書籍が存在し、利用者が登録済みであること
/// - レビューが取得できること（取得失敗はサービス利用不可、結果なしはレビューなし）
///
/// レビューソースは取得の間だけ確保され、どの経路で抜けても必ず解放される。
/// 通知の送信失敗は変換せずにそのまま返す（再送しない）。
pub async fn notify_user_with_book_reviews(
    deps: &ServiceDependencies,
    isbn: &str,
    user_id: &str,
) -> Result<()> {
    tracing::debug!(%isbn, %user_id, "notify_user_with_book_reviews");

    // 1. 入力検証
    ensure_isbn(isbn)?;
    ensure_user_id(user_id)?;

    // 2. 書籍・利用者の確認
    let book = find_book(&deps.catalog_store, isbn).await?;
    let user = find_user(&deps.catalog_store, user_id).await?;

    // 3. レビュー取得（スコープを抜けると解放）
    let reviews = {
        let session = ReviewSession::acquire(deps.review_source.as_ref());
        match session.fetch_reviews(isbn).await {
            Ok(Some(reviews)) => reviews,
            Ok(None) => return Err(CirculationError::NoReviewsFound),
            Err(e) => {
                tracing::warn!(%isbn, error = %e, "fetching reviews failed");
                return Err(CirculationError::ReviewServiceUnavailable(e));
            }
        }
    };

    // 4. 通知
    let channel = user
        .notification_channel
        .as_ref()
        .ok_or(CirculationError::InvalidArgument(
            InvalidField::NotificationService,
        ))?;

    let message = compose_review_message(&book.title, &reviews);
    channel.send(&message).await.inspect_err(|e| {
        tracing::warn!(%isbn, %user_id, error = %e, "sending review notification failed");
    })?;

    tracing::info!(%isbn, %user_id, reviews = reviews.len(), "reviews sent");
    Ok(())
}
