// crates/problem/src/application/mod.rs

mod author_join;
#[cfg(test)]
mod fixtures;
mod tag_ids;

pub(crate) use tag_ids::dedupe_tag_ids;

pub mod add_bookmark;
pub mod add_tags_to_problem;
pub mod create_comment;
pub mod create_problem;
pub mod create_report;
pub mod create_suggestion;
pub mod delete_problem;
pub mod get_bookmarks;
pub mod get_categories;
pub mod get_comments;
pub mod get_problem_tags;
pub mod get_problems;
pub mod get_suggestions;
pub mod get_tags;
pub mod is_bookmarked;
pub mod remove_bookmark;
pub mod remove_tags_from_problem;
pub mod toggle_bookmark;
pub mod update_problem;
pub mod update_report_status;
pub mod update_suggestion_status;
