mod get_suggestions_command;
mod get_suggestions_use_case;

pub use get_suggestions_command::GetSuggestionsCommand;
pub use get_suggestions_use_case::GetSuggestionsUseCase;
