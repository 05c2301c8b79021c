mod get_bookmarks_command;
mod get_bookmarks_use_case;

pub use get_bookmarks_command::GetBookmarksCommand;
pub use get_bookmarks_use_case::GetBookmarksUseCase;

#[cfg(test)]
mod get_bookmarks_use_case_test;
