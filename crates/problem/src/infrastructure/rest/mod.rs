// crates/problem/src/infrastructure/rest/mod.rs

pub mod repositories;
pub mod rows;

pub(crate) const PROBLEMS_TABLE: &str = "problems";
pub(crate) const COMMENTS_TABLE: &str = "comments";
pub(crate) const PROFILES_TABLE: &str = "profiles";
pub(crate) const BOOKMARKS_TABLE: &str = "problem_bookmarks";
pub(crate) const CATEGORIES_TABLE: &str = "problem_categories";
pub(crate) const TAGS_TABLE: &str = "problem_tags";
pub(crate) const TAG_RELATIONS_TABLE: &str = "problem_tag_relations";
pub(crate) const SUGGESTIONS_TABLE: &str = "problem_suggestions";
pub(crate) const REPORTS_TABLE: &str = "problem_reports";

/// Projection publique des profils utilisée par les jointures auteur
pub(crate) const AUTHOR_COLUMNS: &str = "id, username, avatar_url";
