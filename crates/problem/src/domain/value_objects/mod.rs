// crates/problem/src/domain/value_objects/mod.rs

mod bounded_text;
mod ids;
mod status;

pub use bounded_text::{CommentContent, Description, ReportReason, SuggestionContent, Title};
pub use ids::{CategoryId, CommentId, ProblemId, ReportId, SuggestionId, TagId};
pub use status::{ProblemStatus, ReportStatus, SuggestionStatus};
