// crates/problem/src/application/get_bookmarks/get_bookmarks_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookmarksCommand {
    pub user_id: UserId,
}
