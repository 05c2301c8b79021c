// backend/tellme-cli/src/commands/bookmark.rs

use std::sync::Arc;
use problem::application::add_bookmark::{AddBookmarkCommand, AddBookmarkUseCase};
use problem::application::get_bookmarks::{GetBookmarksCommand, GetBookmarksUseCase};
use problem::application::is_bookmarked::{IsBookmarkedCommand, IsBookmarkedUseCase};
use problem::application::remove_bookmark::{RemoveBookmarkCommand, RemoveBookmarkUseCase};
use problem::application::toggle_bookmark::{ToggleBookmarkCommand, ToggleBookmarkUseCase};
use problem::infrastructure::rest::repositories::RestBookmarkRepository;
use serde_json::json;
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::{BookmarkCommand, BookmarkPair};
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: BookmarkCommand) -> anyhow::Result<()> {
    let repo = Arc::new(RestBookmarkRepository::new(ctx));

    match cmd {
        BookmarkCommand::Add(BookmarkPair { user_id, problem_id }) => {
            let created = AddBookmarkUseCase::new(repo, Arc::new(SystemClock))
                .execute(AddBookmarkCommand { user_id, problem_id })
                .await?;
            print_json(&json!({ "created": created }))
        }
        BookmarkCommand::Remove(BookmarkPair { user_id, problem_id }) => {
            let removed = RemoveBookmarkUseCase::new(repo)
                .execute(RemoveBookmarkCommand { user_id, problem_id })
                .await?;
            print_json(&json!({ "removed": removed }))
        }
        BookmarkCommand::Toggle(BookmarkPair { user_id, problem_id }) => {
            let bookmarked = ToggleBookmarkUseCase::new(repo, Arc::new(SystemClock))
                .execute(ToggleBookmarkCommand { user_id, problem_id })
                .await?;
            print_json(&json!({ "bookmarked": bookmarked }))
        }
        BookmarkCommand::Check(BookmarkPair { user_id, problem_id }) => {
            let bookmarked = IsBookmarkedUseCase::new(repo)
                .execute(IsBookmarkedCommand { user_id, problem_id })
                .await?;
            print_json(&json!({ "bookmarked": bookmarked }))
        }
        BookmarkCommand::List { user_id } => {
            let problems = GetBookmarksUseCase::new(repo)
                .execute(GetBookmarksCommand { user_id })
                .await?;
            print_json(&problems)
        }
    }
}
