mod get_problems_command;
mod get_problems_use_case;

pub use get_problems_command::GetProblemsCommand;
pub use get_problems_use_case::GetProblemsUseCase;
