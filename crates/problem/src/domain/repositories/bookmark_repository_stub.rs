// crates/problem/src/domain/repositories/bookmark_repository_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Authored, ProblemBookmark, ProblemView};
use crate::domain::repositories::BookmarkRepository;
use crate::domain::value_objects::ProblemId;

/// Table `problem_bookmarks` en mémoire ; `problems` tient lieu de jointure
#[derive(Default)]
pub struct BookmarkRepositoryStub {
    pub bookmarks: Mutex<Vec<ProblemBookmark>>,
    pub problems: Mutex<HashMap<ProblemId, Authored<ProblemView>>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl BookmarkRepositoryStub {
    pub fn count(&self, user_id: &UserId, problem_id: &ProblemId) -> usize {
        self.bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| &b.user_id == user_id && &b.problem_id == problem_id)
            .count()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryStub {
    async fn add(&self, bookmark: &ProblemBookmark) -> Result<bool> {
        self.check_error()?;
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let exists = bookmarks
            .iter()
            .any(|b| b.user_id == bookmark.user_id && b.problem_id == bookmark.problem_id);
        if exists {
            return Ok(false);
        }
        bookmarks.push(bookmark.clone());
        Ok(true)
    }

    async fn remove(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool> {
        self.check_error()?;
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(&b.user_id == user_id && &b.problem_id == problem_id));
        Ok(bookmarks.len() < before)
    }

    async fn exists(&self, user_id: &UserId, problem_id: &ProblemId) -> Result<bool> {
        self.check_error()?;
        Ok(self.count(user_id, problem_id) > 0)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Authored<ProblemView>>> {
        self.check_error()?;
        let mut mine: Vec<ProblemBookmark> = self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let problems = self.problems.lock().unwrap();
        Ok(mine
            .iter()
            .filter_map(|b| problems.get(&b.problem_id).cloned())
            .collect())
    }
}
