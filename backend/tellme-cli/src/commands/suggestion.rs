// backend/tellme-cli/src/commands/suggestion.rs

use std::sync::Arc;
use problem::application::create_suggestion::{CreateSuggestionCommand, CreateSuggestionUseCase};
use problem::application::get_suggestions::{GetSuggestionsCommand, GetSuggestionsUseCase};
use problem::application::update_suggestion_status::{
    UpdateSuggestionStatusCommand, UpdateSuggestionStatusUseCase,
};
use problem::domain::value_objects::SuggestionContent;
use problem::infrastructure::rest::repositories::{RestAuthorRepository, RestSuggestionRepository};
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::SuggestionCommand;
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: SuggestionCommand) -> anyhow::Result<()> {
    let suggestions = Arc::new(RestSuggestionRepository::new(ctx.clone()));

    match cmd {
        SuggestionCommand::List { problem_id } => {
            let list = GetSuggestionsUseCase::new(suggestions, Arc::new(RestAuthorRepository::new(ctx)))
                .execute(GetSuggestionsCommand { problem_id })
                .await?;
            print_json(&list)
        }
        SuggestionCommand::Create { problem_id, user, content } => {
            let created = CreateSuggestionUseCase::new(suggestions, Arc::new(SystemClock))
                .execute(CreateSuggestionCommand {
                    problem_id,
                    user_id: user,
                    content: SuggestionContent::try_new(content)?,
                })
                .await?;
            print_json(&created)
        }
        SuggestionCommand::Status { suggestion_id, status } => {
            let updated = UpdateSuggestionStatusUseCase::new(suggestions, Arc::new(SystemClock))
                .execute(UpdateSuggestionStatusCommand { suggestion_id, status })
                .await?;
            print_json(&updated)
        }
    }
}
