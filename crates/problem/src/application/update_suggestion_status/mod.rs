mod update_suggestion_status_command;
mod update_suggestion_status_use_case;

pub use update_suggestion_status_command::UpdateSuggestionStatusCommand;
pub use update_suggestion_status_use_case::UpdateSuggestionStatusUseCase;
