use crate::ports::notification_channel::{
    NotificationChannel as NotificationChannelTrait, NotificationError,
};
use async_trait::async_trait;

/// NotificationChannelのモック実装
///
/// 実際には配信せず、メッセージをログに出力して成功を返す。
pub struct NotificationChannel {
    user_id: String,
}

impl NotificationChannel {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl NotificationChannelTrait for NotificationChannel {
    async fn send(&self, message: &str) -> Result<(), NotificationError> {
        tracing::info!(user_id = %self.user_id, %message, "notification sent");
        Ok(())
    }
}
