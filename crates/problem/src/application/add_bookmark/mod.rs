mod add_bookmark_command;
mod add_bookmark_use_case;

pub use add_bookmark_command::AddBookmarkCommand;
pub use add_bookmark_use_case::AddBookmarkUseCase;
