// crates/problem/src/domain/repositories/mod.rs

mod author_repository;
mod bookmark_repository;
mod comment_repository;
mod problem_repository;
mod report_repository;
mod suggestion_repository;
mod taxonomy_repository;

pub use author_repository::AuthorRepository;
pub use bookmark_repository::BookmarkRepository;
pub use comment_repository::CommentRepository;
pub use problem_repository::ProblemRepository;
pub use report_repository::ReportRepository;
pub use suggestion_repository::SuggestionRepository;
pub use taxonomy_repository::TaxonomyRepository;

#[cfg(any(test, feature = "test-utils"))]
mod author_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod bookmark_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod comment_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod problem_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod report_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod suggestion_repository_stub;
#[cfg(any(test, feature = "test-utils"))]
mod taxonomy_repository_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use author_repository_stub::AuthorRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use bookmark_repository_stub::BookmarkRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository_stub::CommentRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use problem_repository_stub::ProblemRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository_stub::ReportRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use suggestion_repository_stub::SuggestionRepositoryStub;
#[cfg(any(test, feature = "test-utils"))]
pub use taxonomy_repository_stub::TaxonomyRepositoryStub;
