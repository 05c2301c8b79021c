// backend/tellme-cli/src/commands/notification.rs

use std::sync::Arc;
use notification::application::get_notifications::{GetNotificationsCommand, GetNotificationsUseCase};
use notification::application::mark_notification_as_read::{
    MarkNotificationAsReadCommand, MarkNotificationAsReadUseCase,
};
use notification::infrastructure::rest::repositories::RestNotificationRepository;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::NotificationCommand;
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: NotificationCommand) -> anyhow::Result<()> {
    let repo = Arc::new(RestNotificationRepository::new(ctx));

    match cmd {
        NotificationCommand::List { user_id } => {
            let notifications = GetNotificationsUseCase::new(repo)
                .execute(GetNotificationsCommand { user_id })
                .await?;
            print_json(&notifications)
        }
        NotificationCommand::Read { notification_id } => {
            MarkNotificationAsReadUseCase::new(repo)
                .execute(MarkNotificationAsReadCommand { notification_id })
                .await?;
            Ok(())
        }
    }
}
