// crates/problem/src/application/create_comment/create_comment_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{CommentContent, ProblemId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentCommand {
    pub problem_id: ProblemId,
    pub user_id: UserId,
    pub content: CommentContent,
}
