mod create_suggestion_command;
mod create_suggestion_use_case;

pub use create_suggestion_command::CreateSuggestionCommand;
pub use create_suggestion_use_case::CreateSuggestionUseCase;
