// crates/problem/src/infrastructure/rest/repositories/rest_author_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::AuthorSummary;
use crate::domain::repositories::AuthorRepository;
use crate::infrastructure::rest::rows::RestAuthorRow;
use crate::infrastructure::rest::{AUTHOR_COLUMNS, PROFILES_TABLE};

pub struct RestAuthorRepository {
    ctx: RestContext,
}

impl RestAuthorRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl AuthorRepository for RestAuthorRepository {
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<AuthorSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .ctx
            .from(PROFILES_TABLE)
            .select(AUTHOR_COLUMNS)
            .is_in("id", ids)
            .fetch::<RestAuthorRow>()
            .await
            .map_domain::<AuthorSummary>()?;

        Ok(rows.into_iter().map(AuthorSummary::from).collect())
    }
}
