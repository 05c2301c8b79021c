mod mark_notification_as_read_command;
mod mark_notification_as_read_use_case;

pub use mark_notification_as_read_command::MarkNotificationAsReadCommand;
pub use mark_notification_as_read_use_case::MarkNotificationAsReadUseCase;

#[cfg(test)]
mod mark_notification_as_read_use_case_test;
