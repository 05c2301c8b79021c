// crates/problem/src/infrastructure/rest/repositories/rest_taxonomy_repository.rs

use async_trait::async_trait;
use serde::de::IgnoredAny;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::rest::{RestContext, RestErrorExt};

use crate::domain::entities::{ProblemCategory, ProblemTag};
use crate::domain::repositories::TaxonomyRepository;
use crate::domain::value_objects::{ProblemId, TagId};
use crate::infrastructure::rest::rows::{RestTagRelation, RestTagRelationRow};
use crate::infrastructure::rest::{CATEGORIES_TABLE, TAGS_TABLE, TAG_RELATIONS_TABLE};

pub struct RestTaxonomyRepository {
    ctx: RestContext,
}

impl RestTaxonomyRepository {
    pub fn new(ctx: RestContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl TaxonomyRepository for RestTaxonomyRepository {
    async fn categories(&self) -> Result<Vec<ProblemCategory>> {
        self.ctx
            .from(CATEGORIES_TABLE)
            .select("*")
            .order("name", true)
            .fetch::<ProblemCategory>()
            .await
            .map_domain::<ProblemCategory>()
    }

    async fn tags(&self) -> Result<Vec<ProblemTag>> {
        self.ctx
            .from(TAGS_TABLE)
            .select("*")
            .order("name", true)
            .fetch::<ProblemTag>()
            .await
            .map_domain::<ProblemTag>()
    }

    async fn tags_for_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemTag>> {
        let rows = self
            .ctx
            .from(TAG_RELATIONS_TABLE)
            .select("problem_tags:tag_id (*)")
            .eq("problem_id", problem_id)
            .fetch::<RestTagRelationRow>()
            .await
            .map_domain::<ProblemTag>()?;

        // L'ordre d'une ressource embarquée ne s'applique pas aux lignes parentes
        let mut tags: Vec<ProblemTag> = rows.into_iter().filter_map(|r| r.problem_tags).collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn attach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()> {
        let relations: Vec<RestTagRelation> = tag_ids
            .iter()
            .map(|tag_id| RestTagRelation {
                problem_id: *problem_id,
                tag_id: *tag_id,
            })
            .collect();

        self.ctx
            .from(TAG_RELATIONS_TABLE)
            .insert_minimal(&relations)
            .await
            .map_domain::<ProblemTag>()
    }

    async fn detach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()> {
        self.ctx
            .from(TAG_RELATIONS_TABLE)
            .eq("problem_id", problem_id)
            .is_in("tag_id", tag_ids)
            .delete::<IgnoredAny>()
            .await
            .map_domain::<ProblemTag>()?;

        Ok(())
    }
}
