mod rest_notification_repository;

pub use rest_notification_repository::RestNotificationRepository;
