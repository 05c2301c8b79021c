mod delete_problem_command;
mod delete_problem_use_case;

pub use delete_problem_command::DeleteProblemCommand;
pub use delete_problem_use_case::DeleteProblemUseCase;
