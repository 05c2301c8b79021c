// crates/problem/src/domain/entities/mod.rs

mod author;
mod bookmark;
mod comment;
mod problem;
mod problem_filter;
mod problem_view;
mod report;
mod suggestion;
mod taxonomy;

pub use author::{AuthorRef, AuthorSummary, Authored, HasAuthor};
pub use bookmark::ProblemBookmark;
pub use comment::Comment;
pub use problem::{Problem, ProblemPatch, ProblemUpdate};
pub use problem_filter::ProblemFilter;
pub use problem_view::ProblemView;
pub use report::ProblemReport;
pub use suggestion::ProblemSuggestion;
pub use taxonomy::{ProblemCategory, ProblemTag};
