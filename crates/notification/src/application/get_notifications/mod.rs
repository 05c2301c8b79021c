mod get_notifications_command;
mod get_notifications_use_case;

pub use get_notifications_command::GetNotificationsCommand;
pub use get_notifications_use_case::GetNotificationsUseCase;
