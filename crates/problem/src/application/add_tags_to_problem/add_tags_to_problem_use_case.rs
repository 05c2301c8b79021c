// crates/problem/src/application/add_tags_to_problem/add_tags_to_problem_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::add_tags_to_problem::AddTagsToProblemCommand;
use crate::application::dedupe_tag_ids;
use crate::domain::repositories::TaxonomyRepository;

pub struct AddTagsToProblemUseCase {
    repo: Arc<dyn TaxonomyRepository>,
}

impl AddTagsToProblemUseCase {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    /// Insertion groupée. Un tag déjà rattaché fait échouer l'appel (AlreadyExists).
    pub async fn execute(&self, cmd: AddTagsToProblemCommand) -> Result<()> {
        let tag_ids = dedupe_tag_ids(cmd.tag_ids);
        if tag_ids.is_empty() {
            return Ok(());
        }

        self.repo.attach_tags(&cmd.problem_id, &tag_ids).await?;

        tracing::info!(problem_id = %cmd.problem_id, count = tag_ids.len(), "Tags attached");
        Ok(())
    }
}
