// crates/profile/src/application/get_profile/get_profile_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::value_objects::UserId;
    use shared_kernel::errors::DomainError;

    use crate::application::get_profile::{GetProfileCommand, GetProfileUseCase};
    use crate::domain::entities::Profile;
    use crate::domain::repositories::ProfileRepositoryStub;

    #[tokio::test]
    async fn test_get_profile_returns_existing_row() {
        // Arrange
        let id = UserId::new();
        let profile = Profile::builder(id).with_full_name(Some("Alice".into())).build();
        let repo = Arc::new(ProfileRepositoryStub::with_profile(profile));
        let use_case = GetProfileUseCase::new(repo.clone());

        // Act
        let result = use_case.execute(GetProfileCommand { user_id: id }).await.unwrap();

        // Assert
        assert_eq!(result.unwrap().full_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_get_profile_absent_is_none_and_creates_nothing() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let use_case = GetProfileUseCase::new(repo.clone());

        let result = use_case.execute(GetProfileCommand { user_id: UserId::new() }).await;

        assert!(matches!(result, Ok(None)));
        assert_eq!(repo.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_profile_propagates_remote_failure() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        *repo.error_to_return.lock().unwrap() = Some(DomainError::Infrastructure("timeout".into()));
        let use_case = GetProfileUseCase::new(repo);

        let result = use_case.execute(GetProfileCommand { user_id: UserId::new() }).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
