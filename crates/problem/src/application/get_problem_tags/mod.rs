mod get_problem_tags_command;
mod get_problem_tags_use_case;

pub use get_problem_tags_command::GetProblemTagsCommand;
pub use get_problem_tags_use_case::GetProblemTagsUseCase;
