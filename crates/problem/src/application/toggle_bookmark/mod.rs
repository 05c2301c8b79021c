mod toggle_bookmark_command;
mod toggle_bookmark_use_case;

pub use toggle_bookmark_command::ToggleBookmarkCommand;
pub use toggle_bookmark_use_case::ToggleBookmarkUseCase;
