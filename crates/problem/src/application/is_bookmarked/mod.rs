mod is_bookmarked_command;
mod is_bookmarked_use_case;

pub use is_bookmarked_command::IsBookmarkedCommand;
pub use is_bookmarked_use_case::IsBookmarkedUseCase;
