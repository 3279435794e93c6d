use std::fmt;
use std::sync::Arc;

use crate::ports::NotificationChannel;

/// 利用者 - 登録済みの図書館利用者
///
/// 利用者は通知チャネルをちょうど1つ持つ。
/// Option なのは、不完全な登録を表現して拒否するためだけ。
#[derive(Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub notification_channel: Option<Arc<dyn NotificationChannel>>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        notification_channel: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notification_channel: Some(notification_channel),
        }
    }

    /// 通知チャネルを持たない利用者（登録は失敗する）
    pub fn without_notification_channel(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notification_channel: None,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field(
                "notification_channel",
                &self.notification_channel.as_ref().map(|_| "<channel>"),
            )
            .finish()
    }
}
