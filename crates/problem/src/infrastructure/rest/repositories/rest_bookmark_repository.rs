// crates/problem/src/infrastructure/rest/repositories/rest_bookmark_repository.rs

use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::{Authored, ProblemBookmark, ProblemView};
use crate::domain::repositories::BookmarkRepository;
use crate::domain::value_objects::ProblemId;
use crate::infrastructure::rest::rows::{RestBookmarkedProblemRow, RestProblemRow};
use crate::infrastructure::rest::BOOKMARKS_TABLE;

/// Favori -> problème -> (auteur, catégorie), en une seule requête
const BOOKMARKED_PROBLEMS_SELECT: &str = "
    created_at,
    problems:problem_id (
        *,
        profiles:user_id (id, username, avatar_url),
        categories:category_id (name)
    )";

pub struct RestBookmarkRepository {
    ctx: RestContext,
}

impl RestBookmarkRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl BookmarkRepository for RestBookmarkRepository {
    async fn add(&self, bookmark: &ProblemBookmark) -> Result<bool> {
        // ON CONFLICT DO NOTHING : seule une ligne réellement créée revient
        let created = self
            .ctx
            .from(BOOKMARKS_TABLE)
            .on_conflict("user_id,problem_id")
            .upsert_ignore_duplicates::<_, IgnoredAny>(bookmark)
            .await
            .map_domain::<ProblemBookmark>()?;

        Ok(!created.is_empty())
    }

    async fn remove(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool> {
        let deleted = self
            .ctx
            .from(BOOKMARKS_TABLE)
            .eq("user_id", user_id)
            .eq("problem_id", problem_id)
            .delete::<IgnoredAny>()
            .await
            .map_domain::<ProblemBookmark>()?;

        Ok(!deleted.is_empty())
    }

    async fn exists(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool> {
        let row = self
            .ctx
            .from(BOOKMARKS_TABLE)
            .select("user_id")
            .eq("user_id", user_id)
            .eq("problem_id", problem_id)
            .fetch_optional::<IgnoredAny>()
            .await
            .map_domain::<ProblemBookmark>()?;

        Ok(row.is_some())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Authored<ProblemView>>> {
        let rows = self
            .ctx
            .from(BOOKMARKS_TABLE)
            .select(BOOKMARKED_PROBLEMS_SELECT)
            .eq("user_id", user_id)
            .order("created_at", false)
            .fetch::<RestBookmarkedProblemRow>()
            .await
            .map_domain::<ProblemBookmark>()?;

        let total = rows.len();
        let problems: Vec<Authored<ProblemView>> = rows
            .into_iter()
            .filter_map(|row| row.problems)
            .map(RestProblemRow::into_authored)
            .collect();

        if problems.len() < total {
            tracing::debug!(
                user_id = %user_id,
                skipped = total - problems.len(),
                "Bookmarked problems no longer visible"
            );
        }
        Ok(problems)
    }
}
