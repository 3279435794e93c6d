use async_trait::async_trait;
use thiserror::Error;

/// 通知配信失敗
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// 通知チャネルポート
///
/// 利用者ごとに1つ割り当てられる配信経路。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// メッセージを送信する
    async fn send(&self, message: &str) -> std::result::Result<(), NotificationError>;
}
