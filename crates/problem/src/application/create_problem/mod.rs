mod create_problem_command;
mod create_problem_use_case;

pub use create_problem_command::CreateProblemCommand;
pub use create_problem_use_case::CreateProblemUseCase;
