mod add_tags_to_problem_command;
mod add_tags_to_problem_use_case;

pub use add_tags_to_problem_command::AddTagsToProblemCommand;
pub use add_tags_to_problem_use_case::AddTagsToProblemUseCase;
