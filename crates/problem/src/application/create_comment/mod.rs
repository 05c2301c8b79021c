mod create_comment_command;
mod create_comment_use_case;

pub use create_comment_command::CreateCommentCommand;
pub use create_comment_use_case::CreateCommentUseCase;
