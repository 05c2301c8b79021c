mod remove_tags_from_problem_command;
mod remove_tags_from_problem_use_case;

pub use remove_tags_from_problem_command::RemoveTagsFromProblemCommand;
pub use remove_tags_from_problem_use_case::RemoveTagsFromProblemUseCase;
