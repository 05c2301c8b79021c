// crates/profile/src/domain/repositories/mod.rs

mod profile_repository;

#[cfg(any(test, feature = "test-utils"))]
mod profile_repository_stub;

pub use profile_repository::ProfileRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository_stub::ProfileRepositoryStub;
