mod notification_id;

pub use notification_id::NotificationId;
