mod remove_bookmark_command;
mod remove_bookmark_use_case;

pub use remove_bookmark_command::RemoveBookmarkCommand;
pub use remove_bookmark_use_case::RemoveBookmarkUseCase;
