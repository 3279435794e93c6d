pub mod catalog_store;
pub mod notification_channel;
pub mod review_source;

pub use catalog_store::{CatalogStore, CatalogStoreError};
pub use notification_channel::{NotificationChannel, NotificationError};
pub use review_source::{ReviewSource, ReviewSourceError};
