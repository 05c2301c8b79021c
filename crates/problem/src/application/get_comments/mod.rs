mod get_comments_command;
mod get_comments_use_case;

pub use get_comments_command::GetCommentsCommand;
pub use get_comments_use_case::GetCommentsUseCase;
