// crates/problem/tests/infrastructure/mod.rs

mod bookmark_repository_it;
mod problem_repository_it;
mod taxonomy_repository_it;
