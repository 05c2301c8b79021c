// crates/problem/src/domain/repositories/taxonomy_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{ProblemCategory, ProblemTag};
use crate::domain::repositories::TaxonomyRepository;
use crate::domain::value_objects::{ProblemId, TagId};

#[derive(Default)]
pub struct TaxonomyRepositoryStub {
    pub categories: Mutex<Vec<ProblemCategory>>,
    pub tags: Mutex<Vec<ProblemTag>>,
    pub relations: Mutex<Vec<(ProblemId, TagId)>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre d'appels « distants » reçus
    pub calls: Mutex<usize>,
}

impl TaxonomyRepositoryStub {
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn enter(&self) -> Result<()> {
        *self.calls.lock().unwrap() += 1;
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TaxonomyRepository for TaxonomyRepositoryStub {
    async fn categories(&self) -> Result<Vec<ProblemCategory>> {
        self.enter()?;
        let mut all = self.categories.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn tags(&self) -> Result<Vec<ProblemTag>> {
        self.enter()?;
        let mut all = self.tags.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn tags_for_problem(&self, problem_id: &ProblemId) -> Result<Vec<ProblemTag>> {
        self.enter()?;
        let relations = self.relations.lock().unwrap();
        let mut attached: Vec<ProblemTag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| relations.contains(&(*problem_id, t.id)))
            .cloned()
            .collect();
        attached.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(attached)
    }

    async fn attach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()> {
        self.enter()?;
        let mut relations = self.relations.lock().unwrap();
        // Clé primaire (problem_id, tag_id) : l'insertion groupée échoue en bloc
        if let Some(dup) = tag_ids.iter().find(|t| relations.contains(&(*problem_id, **t))) {
            return Err(DomainError::AlreadyExists {
                entity: ProblemTag::entity_name(),
                field: "tag_id",
                value: dup.to_string(),
            });
        }
        relations.extend(tag_ids.iter().map(|t| (*problem_id, *t)));
        Ok(())
    }

    async fn detach_tags(&self, problem_id: &ProblemId, tag_ids: &[TagId]) -> Result<()> {
        self.enter()?;
        self.relations
            .lock()
            .unwrap()
            .retain(|(p, t)| !(p == problem_id && tag_ids.contains(t)));
        Ok(())
    }
}
