// backend/tellme-cli/src/commands/taxonomy.rs

use std::sync::Arc;
use problem::application::add_tags_to_problem::{AddTagsToProblemCommand, AddTagsToProblemUseCase};
use problem::application::get_categories::GetCategoriesUseCase;
use problem::application::get_problem_tags::{GetProblemTagsCommand, GetProblemTagsUseCase};
use problem::application::get_tags::GetTagsUseCase;
use problem::application::remove_tags_from_problem::{
    RemoveTagsFromProblemCommand, RemoveTagsFromProblemUseCase,
};
use problem::infrastructure::rest::repositories::RestTaxonomyRepository;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::TaxonomyCommand;
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: TaxonomyCommand) -> anyhow::Result<()> {
    let repo = Arc::new(RestTaxonomyRepository::new(ctx));

    match cmd {
        TaxonomyCommand::Categories => print_json(&GetCategoriesUseCase::new(repo).execute().await?),
        TaxonomyCommand::Tags => print_json(&GetTagsUseCase::new(repo).execute().await?),
        TaxonomyCommand::ProblemTags { problem_id } => {
            let tags = GetProblemTagsUseCase::new(repo)
                .execute(GetProblemTagsCommand { problem_id })
                .await?;
            print_json(&tags)
        }
        TaxonomyCommand::Attach { problem_id, tag_ids } => {
            AddTagsToProblemUseCase::new(repo)
                .execute(AddTagsToProblemCommand { problem_id, tag_ids })
                .await?;
            Ok(())
        }
        TaxonomyCommand::Detach { problem_id, tag_ids } => {
            RemoveTagsFromProblemUseCase::new(repo)
                .execute(RemoveTagsFromProblemCommand { problem_id, tag_ids })
                .await?;
            Ok(())
        }
    }
}
