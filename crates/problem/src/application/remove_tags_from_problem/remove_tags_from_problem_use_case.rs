// crates/problem/src/application/remove_tags_from_problem/remove_tags_from_problem_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::dedupe_tag_ids;
use crate::application::remove_tags_from_problem::RemoveTagsFromProblemCommand;
use crate::domain::repositories::TaxonomyRepository;

pub struct RemoveTagsFromProblemUseCase {
    repo: Arc<dyn TaxonomyRepository>,
}

impl RemoveTagsFromProblemUseCase {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: RemoveTagsFromProblemCommand) -> Result<()> {
        let tag_ids = dedupe_tag_ids(cmd.tag_ids);
        if tag_ids.is_empty() {
            return Ok(());
        }

        self.repo.detach_tags(&cmd.problem_id, &tag_ids).await?;

        tracing::info!(problem_id = %cmd.problem_id, count = tag_ids.len(), "Tags detached");
        Ok(())
    }
}
