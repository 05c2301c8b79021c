mod notification_repository;

pub use notification_repository::NotificationRepository;

#[cfg(any(test, feature = "test-utils"))]
mod notification_repository_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository_stub::NotificationRepositoryStub;
