// crates/problem/src/domain/repositories/author_repository_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::AuthorSummary;
use crate::domain::repositories::AuthorRepository;

#[derive(Default)]
pub struct AuthorRepositoryStub {
    pub authors: Mutex<HashMap<UserId, AuthorSummary>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Clés reçues à chaque appel
    pub calls: Mutex<Vec<Vec<UserId>>>,
}

impl AuthorRepositoryStub {
    pub fn with_author(self, id: UserId, username: &str) -> Self {
        self.authors.lock().unwrap().insert(
            id,
            AuthorSummary {
                id,
                username: Some(username.to_string()),
                avatar_url: None,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Vec<UserId>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryStub {
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<AuthorSummary>> {
        self.calls.lock().unwrap().push(ids.to_vec());
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let authors = self.authors.lock().unwrap();
        Ok(ids.iter().filter_map(|id| authors.get(id).cloned()).collect())
    }
}
