// crates/problem/src/domain/value_objects/ids.rs

use shared_kernel::uuid_identifier;

uuid_identifier!(ProblemId, "problem_id", "Problem");
uuid_identifier!(CommentId, "comment_id", "Comment");
uuid_identifier!(CategoryId, "category_id", "ProblemCategory");
uuid_identifier!(TagId, "tag_id", "ProblemTag");
uuid_identifier!(SuggestionId, "suggestion_id", "ProblemSuggestion");
uuid_identifier!(ReportId, "report_id", "ProblemReport");
