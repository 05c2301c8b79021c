// crates/problem/src/infrastructure/rest/repositories/rest_problem_repository.rs

use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt, RestQuery};

use crate::domain::entities::{Problem, ProblemFilter, ProblemUpdate, ProblemView};
use crate::domain::repositories::ProblemRepository;
use crate::domain::value_objects::ProblemId;
use crate::infrastructure::rest::rows::RestProblemRow;
use crate::infrastructure::rest::PROBLEMS_TABLE;

/// Problème + nom de sa catégorie
const PROBLEM_SELECT: &str = "*, categories:category_id (name)";

pub struct RestProblemRepository {
    ctx: RestContext,
}

impl RestProblemRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }

    fn apply_filter<'a>(query: RestQuery<'a>, filter: &ProblemFilter) -> RestQuery<'a> {
        // Un id explicite court-circuite tous les autres critères
        if let Some(id) = filter.problem_id {
            return query.eq("id", id);
        }

        let mut query = query;
        if let Some(user_id) = filter.user_id {
            query = query.eq("user_id", user_id);
        }
        if let Some(category_id) = filter.category_id {
            query = query.eq("category_id", category_id);
        }
        if let Some(status) = filter.status {
            query = query.eq("status", status);
        }
        if let Some(is_public) = filter.is_public {
            query = query.eq("is_public", is_public);
        }
        query.page(&filter.page)
    }
}

#[async_trait]
impl ProblemRepository for RestProblemRepository {
    async fn find(&self, filter: &ProblemFilter) -> Result<Vec<ProblemView>> {
        let query = self.ctx.from(PROBLEMS_TABLE).select(PROBLEM_SELECT);

        let rows = Self::apply_filter(query, filter)
            .order("created_at", false)
            .fetch::<RestProblemRow>()
            .await
            .map_domain::<Problem>()?;

        Ok(rows.into_iter().map(RestProblemRow::into_view).collect())
    }

    async fn insert(&self, problem: &Problem) -> Result<Problem> {
        let rows = self
            .ctx
            .from(PROBLEMS_TABLE)
            .insert::<_, RestProblemRow>(problem)
            .await
            .map_domain::<Problem>()?;

        rows.into_iter()
            .next()
            .map(Problem::from)
            .ok_or_else(|| DomainError::Internal("Problem insert returned no row".into()))
    }

    async fn update(&self, id: &ProblemId, update: &ProblemUpdate) -> Result<Option<Problem>> {
        let rows = self
            .ctx
            .from(PROBLEMS_TABLE)
            .eq("id", id)
            .update::<_, RestProblemRow>(update)
            .await
            .map_domain::<Problem>()?;

        Ok(rows.into_iter().next().map(Problem::from))
    }

    async fn delete(&self, id: &ProblemId) -> Result<bool> {
        let deleted = self
            .ctx
            .from(PROBLEMS_TABLE)
            .eq("id", id)
            .delete::<IgnoredAny>()
            .await
            .map_domain::<Problem>()?;

        Ok(!deleted.is_empty())
    }
}
