// crates/notification/src/domain/value_objects/notification_id.rs

use shared_kernel::uuid_identifier;

uuid_identifier!(NotificationId, "notification_id", "Notification");
