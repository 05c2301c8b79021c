// crates/profile/src/domain/repositories/profile_repository_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Profile, ProfilePatch};
use crate::domain::repositories::ProfileRepository;

/// Table `profiles` en mémoire.
pub struct ProfileRepositoryStub {
    pub profiles: Mutex<HashMap<UserId, Profile>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre de prochaines lectures qui « ratent » la ligne (simule un
    /// écrivain concurrent passé entre la lecture et l'insertion)
    pub stale_reads: Mutex<usize>,
    pub insert_calls: Mutex<usize>,
}

impl Default for ProfileRepositoryStub {
    fn default() -> Self {
        Self {
            profiles: Mutex::new(HashMap::new()),
            error_to_return: Mutex::new(None),
            stale_reads: Mutex::new(0),
            insert_calls: Mutex::new(0),
        }
    }
}

impl ProfileRepositoryStub {
    pub fn with_profile(profile: Profile) -> Self {
        let stub = Self::default();
        stub.profiles.lock().unwrap().insert(profile.id, profile);
        stub
    }

    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }

    pub fn stored(&self, id: &UserId) -> Option<Profile> {
        self.profiles.lock().unwrap().get(id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>> {
        self.check_error()?;

        let mut stale = self.stale_reads.lock().unwrap();
        if *stale > 0 {
            *stale -= 1;
            return Ok(None);
        }

        Ok(self.profiles.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile> {
        self.check_error()?;
        *self.insert_calls.lock().unwrap() += 1;

        let mut map = self.profiles.lock().unwrap();
        if map.contains_key(&profile.id) {
            return Err(DomainError::AlreadyExists {
                entity: Profile::entity_name(),
                field: "id",
                value: profile.id.to_string(),
            });
        }
        if let Some(username) = &profile.username {
            if map.values().any(|p| p.username.as_ref() == Some(username)) {
                return Err(DomainError::AlreadyExists {
                    entity: Profile::entity_name(),
                    field: "username",
                    value: username.to_string(),
                });
            }
        }
        map.insert(profile.id, profile.clone());
        Ok(profile.clone())
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Profile>> {
        self.check_error()?;

        let mut map = self.profiles.lock().unwrap();
        Ok(map.get_mut(id).map(|profile| {
            profile.apply(patch, updated_at);
            profile.clone()
        }))
    }
}
