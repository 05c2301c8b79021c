mod update_problem_command;
mod update_problem_use_case;

pub use update_problem_command::UpdateProblemCommand;
pub use update_problem_use_case::UpdateProblemUseCase;
