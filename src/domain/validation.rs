//! 貸出管理の各操作で共有する入力検証
//!
//! すべて純粋な述語で、外部コラボレーターには触れない。

use regex::Regex;
use std::sync::LazyLock;

/// ISBN-13の桁数
pub const ISBN_DIGITS: usize = 13;

/// 利用者IDの桁数
pub const USER_ID_DIGITS: usize = 12;

/// 区切りなし13桁、または `接頭記号-グループ-出版者-書名-チェック` の5区分
static ISBN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{13}|\d{3}-\d+-\d+-\d+-\d)$").expect("ISBN pattern is valid")
});

/// 文字の並び。単独のスペース・ハイフン・アポストロフィで区切ってよい
static AUTHOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+(?:[ '\-]\p{L}+)*$").expect("author pattern is valid"));

/// 先頭12桁から求めるISBN-13のチェックディジット
///
/// 重みは 1, 3, 1, 3, ... の交互。チェックディジットは `(10 - sum % 10) % 10`。
pub fn isbn13_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(ISBN_DIGITS - 1)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

/// ISBN-13の正規形式で、チェックディジットが正しいか
pub fn is_valid_isbn(isbn: &str) -> bool {
    if !ISBN_SHAPE.is_match(isbn) {
        return false;
    }

    let digits: Vec<u32> = isbn.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != ISBN_DIGITS {
        return false;
    }

    isbn13_check_digit(&digits) == digits[ISBN_DIGITS - 1]
}

/// 利用者ID：ちょうど12桁の数字
pub fn is_valid_user_id(id: &str) -> bool {
    id.len() == USER_ID_DIGITS && id.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

pub fn is_valid_author(author: &str) -> bool {
    AUTHOR_NAME.is_match(author)
}

pub fn is_valid_user_name(name: &str) -> bool {
    !name.trim().is_empty()
}
