mod create_report_command;
mod create_report_use_case;

pub use create_report_command::CreateReportCommand;
pub use create_report_use_case::CreateReportUseCase;
