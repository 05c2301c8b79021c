mod rest_author_repository;
mod rest_bookmark_repository;
mod rest_comment_repository;
mod rest_problem_repository;
mod rest_report_repository;
mod rest_suggestion_repository;
mod rest_taxonomy_repository;

pub use rest_author_repository::RestAuthorRepository;
pub use rest_bookmark_repository::RestBookmarkRepository;
pub use rest_comment_repository::RestCommentRepository;
pub use rest_problem_repository::RestProblemRepository;
pub use rest_report_repository::RestReportRepository;
pub use rest_suggestion_repository::RestSuggestionRepository;
pub use rest_taxonomy_repository::RestTaxonomyRepository;
