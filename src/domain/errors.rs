/// 貸出のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    AlreadyBorrowed,
}

/// 返却のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 貸出されていない
    NotBorrowed,
}
