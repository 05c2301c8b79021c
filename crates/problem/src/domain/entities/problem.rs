// crates/problem/src/domain/entities/problem.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::value_objects::{CategoryId, Description, ProblemId, ProblemStatus, Title};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Problem {
    pub id: ProblemId,
    pub user_id: UserId,
    pub title: Title,
    pub description: Description,
    pub category_id: Option<CategoryId>,
    pub status: ProblemStatus,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub solved_at: Option<DateTime<Utc>>,
}

impl Problem {
    /// Nouveau problème public, ouvert, sans catégorie
    pub fn new(user_id: UserId, title: Title, description: Description, now: DateTime<Utc>) -> Self {
        Self {
            id: ProblemId::new(),
            user_id,
            title,
            description,
            category_id: None,
            status: ProblemStatus::Open,
            is_public: true,
            created_at: now,
            updated_at: now,
            solved_at: None,
        }
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_status(mut self, status: ProblemStatus) -> Self {
        self.status = status;
        self.solved_at = (status == ProblemStatus::Solved).then_some(self.created_at);
        self
    }

    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Applique localement une mise à jour (même sémantique que le PATCH distant)
    pub fn apply(&mut self, update: &ProblemUpdate) {
        let patch = &update.patch;
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
        if let Some(solved_at) = update.solved_at {
            self.solved_at = solved_at;
        }
        self.updated_at = update.updated_at;
    }
}

impl EntityMetadata for Problem {
    fn entity_name() -> &'static str {
        "Problem"
    }
}

/// Modification partielle demandée par l'appelant. `category_id: Some(None)` retire la catégorie.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProblemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<CategoryId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProblemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl ProblemPatch {
    /// Horodate le patch et dérive `solved_at` du statut demandé et du statut courant :
    /// passage à `solved` => estampillé, `solved` déjà acquis => inchangé,
    /// tout autre statut => effacé.
    pub fn stamp(self, previous: Option<ProblemStatus>, now: DateTime<Utc>) -> ProblemUpdate {
        let solved_at = match self.status {
            Some(ProblemStatus::Solved) if previous == Some(ProblemStatus::Solved) => None,
            Some(ProblemStatus::Solved) => Some(Some(now)),
            Some(_) => Some(None),
            None => None,
        };

        ProblemUpdate {
            patch: self,
            updated_at: now,
            solved_at,
        }
    }
}

/// Corps effectif d'une mise à jour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemUpdate {
    #[serde(flatten)]
    pub patch: ProblemPatch,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<Option<DateTime<Utc>>>,
}
