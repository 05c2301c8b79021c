// crates/notification/src/application/mark_notification_as_read/mark_notification_as_read_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::value_objects::UserId;
    use shared_kernel::errors::DomainError;

    use crate::application::fixtures::notification;
    use crate::application::mark_notification_as_read::{
        MarkNotificationAsReadCommand, MarkNotificationAsReadUseCase,
    };
    use crate::domain::repositories::NotificationRepositoryStub;
    use crate::domain::value_objects::NotificationId;

    #[tokio::test]
    async fn test_marking_twice_is_idempotent() {
        // Arrange
        let n = notification(UserId::new(), "hello", 0);
        let id = n.id;
        let repo = Arc::new(NotificationRepositoryStub::with_notifications(vec![n]));
        let use_case = MarkNotificationAsReadUseCase::new(repo.clone());

        // Act
        use_case.execute(MarkNotificationAsReadCommand { notification_id: id }).await.unwrap();
        let again = use_case.execute(MarkNotificationAsReadCommand { notification_id: id }).await;

        // Assert
        assert!(again.is_ok());
        assert!(repo.stored(&id).unwrap().is_read);
    }

    #[tokio::test]
    async fn test_unknown_notification_is_not_found() {
        let use_case = MarkNotificationAsReadUseCase::new(Arc::new(NotificationRepositoryStub::default()));

        let result = use_case
            .execute(MarkNotificationAsReadCommand { notification_id: NotificationId::new() })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { entity: "Notification", .. })));
    }
}
