// crates/profile/src/infrastructure/rest/repositories/rest_profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::{Profile, ProfilePatch};
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::rest::rows::{RestProfileInsert, RestProfileRow, RestProfileUpdate};
use crate::infrastructure::rest::PROFILES_TABLE;

pub struct RestProfileRepository {
    ctx: RestContext,
}

impl RestProfileRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>> {
        let row = self
            .ctx
            .from(PROFILES_TABLE)
            .select("*")
            .eq("id", id)
            .fetch_optional::<RestProfileRow>()
            .await
            .map_domain::<Profile>()?;

        Ok(row.map(Profile::from))
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile> {
        let rows = self
            .ctx
            .from(PROFILES_TABLE)
            .insert::<_, RestProfileRow>(&RestProfileInsert::from(profile))
            .await
            .map_domain::<Profile>()?;

        rows.into_iter()
            .next()
            .map(Profile::from)
            .ok_or_else(|| DomainError::Internal("Profile insert returned no row".into()))
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Profile>> {
        let rows = self
            .ctx
            .from(PROFILES_TABLE)
            .eq("id", id)
            .update::<_, RestProfileRow>(&RestProfileUpdate { patch, updated_at })
            .await
            .map_domain::<Profile>()?;

        Ok(rows.into_iter().next().map(Profile::from))
    }
}
