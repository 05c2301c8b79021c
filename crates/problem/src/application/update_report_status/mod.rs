mod update_report_status_command;
mod update_report_status_use_case;

pub use update_report_status_command::UpdateReportStatusCommand;
pub use update_report_status_use_case::UpdateReportStatusUseCase;

#[cfg(test)]
mod update_report_status_use_case_test;
