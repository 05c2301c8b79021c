mod rest_author_row;
mod rest_bookmark_row;
mod rest_problem_row;
mod rest_status_update;
mod rest_tag_relation_row;

pub use rest_author_row::RestAuthorRow;
pub use rest_bookmark_row::RestBookmarkedProblemRow;
pub use rest_problem_row::{RestCategoryName, RestProblemRow};
pub use rest_status_update::RestStatusUpdate;
pub use rest_tag_relation_row::{RestTagRelation, RestTagRelationRow};
