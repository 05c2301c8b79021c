// backend/tellme-cli/src/commands/comment.rs

use std::sync::Arc;
use problem::application::create_comment::{CreateCommentCommand, CreateCommentUseCase};
use problem::application::get_comments::{GetCommentsCommand, GetCommentsUseCase};
use problem::domain::value_objects::CommentContent;
use problem::infrastructure::rest::repositories::{RestAuthorRepository, RestCommentRepository};
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::CommentCommand;
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: CommentCommand) -> anyhow::Result<()> {
    let comments = Arc::new(RestCommentRepository::new(ctx.clone()));

    match cmd {
        CommentCommand::List { problem_id } => {
            let thread = GetCommentsUseCase::new(comments, Arc::new(RestAuthorRepository::new(ctx)))
                .execute(GetCommentsCommand { problem_id })
                .await?;
            print_json(&thread)
        }
        CommentCommand::Add { problem_id, user, content } => {
            let comment = CreateCommentUseCase::new(comments, Arc::new(SystemClock))
                .execute(CreateCommentCommand {
                    problem_id,
                    user_id: user,
                    content: CommentContent::try_new(content)?,
                })
                .await?;
            print_json(&comment)
        }
    }
}
