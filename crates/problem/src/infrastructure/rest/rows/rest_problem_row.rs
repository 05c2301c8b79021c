// crates/problem/src/infrastructure/rest/rows/rest_problem_row.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_kernel::domain::value_objects::UserId;
use uuid::Uuid;

use crate::domain::entities::{AuthorSummary, Authored, Problem, ProblemView};
use crate::domain::value_objects::{CategoryId, Description, ProblemId, ProblemStatus, Title};
use crate::infrastructure::rest::rows::RestAuthorRow;

/// Ligne `problems`, éventuellement avec la catégorie et l'auteur embarqués
#[derive(Debug, Deserialize)]
pub struct RestProblemRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub solved_at: Option<DateTime<Utc>>,
    /// `categories:category_id(name)`
    #[serde(default)]
    pub categories: Option<RestCategoryName>,
    /// `profiles:user_id(id, username, avatar_url)`, seulement dans les favoris
    #[serde(default)]
    pub profiles: Option<RestAuthorRow>,
}

#[derive(Debug, Deserialize)]
pub struct RestCategoryName {
    pub name: String,
}

impl RestProblemRow {
    pub fn into_view(self) -> ProblemView {
        self.split().0
    }

    /// Problème + auteur embarqué, sans requête supplémentaire
    pub fn into_authored(self) -> Authored<ProblemView> {
        let (view, author) = self.split();
        let user_id = view.problem.user_id;
        Authored::new(view, user_id, author)
    }

    fn split(self) -> (ProblemView, Option<AuthorSummary>) {
        let status = match self.status.as_deref() {
            None => ProblemStatus::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(problem_id = %self.id, status = raw, "Unknown problem status, reading as open");
                ProblemStatus::default()
            }),
        };

        let problem = Problem {
            id: ProblemId::from(self.id),
            user_id: UserId::new_unchecked(self.user_id),
            title: Title::from_raw(self.title),
            description: Description::from_raw(self.description.unwrap_or_default()),
            category_id: self.category_id.map(CategoryId::from),
            status,
            is_public: self.is_public.unwrap_or(true),
            created_at: self.created_at,
            updated_at: self.updated_at.unwrap_or(self.created_at),
            solved_at: self.solved_at,
        };

        let category_name = self.categories.map(|c| c.name);
        (
            ProblemView::new(problem, category_name),
            self.profiles.map(AuthorSummary::from),
        )
    }
}

impl From<RestProblemRow> for Problem {
    fn from(row: RestProblemRow) -> Self {
        row.into_view().problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_with_embedded_category() {
        let row: RestProblemRow = serde_json::from_value(json!({
            "id": "8d6f1c8e-59a4-4c8e-9a52-3a1d2f4b5c6d",
            "user_id": "2b1e9f0a-0c3d-4e5f-8a9b-1c2d3e4f5a6b",
            "title": "Pothole",
            "description": "Deep one",
            "category_id": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d",
            "status": "in_progress",
            "is_public": false,
            "created_at": "2024-05-01T09:00:00Z",
            "updated_at": "2024-05-02T09:00:00Z",
            "solved_at": null,
            "categories": { "name": "Roads" }
        }))
        .unwrap();

        let view = row.into_view();

        assert_eq!(view.category_name.as_deref(), Some("Roads"));
        assert_eq!(view.problem.status, ProblemStatus::InProgress);
        assert!(!view.problem.is_public);
        assert!(view.problem.category_id.is_some());
    }

    #[test]
    fn test_sparse_row_gets_column_defaults() {
        let row: RestProblemRow = serde_json::from_value(json!({
            "id": "8d6f1c8e-59a4-4c8e-9a52-3a1d2f4b5c6d",
            "user_id": "2b1e9f0a-0c3d-4e5f-8a9b-1c2d3e4f5a6b",
            "title": "Pothole",
            "created_at": "2024-05-01T09:00:00Z",
            "categories": null
        }))
        .unwrap();

        let problem = Problem::from(row);

        assert_eq!(problem.status, ProblemStatus::Open);
        assert!(problem.is_public);
        assert_eq!(problem.updated_at, problem.created_at);
        assert_eq!(problem.description.as_str(), "");
    }

    #[test]
    fn test_embedded_author_is_kept() {
        let row: RestProblemRow = serde_json::from_value(json!({
            "id": "8d6f1c8e-59a4-4c8e-9a52-3a1d2f4b5c6d",
            "user_id": "2b1e9f0a-0c3d-4e5f-8a9b-1c2d3e4f5a6b",
            "title": "Pothole",
            "created_at": "2024-05-01T09:00:00Z",
            "profiles": { "id": "2b1e9f0a-0c3d-4e5f-8a9b-1c2d3e4f5a6b", "username": "sam", "avatar_url": "" }
        }))
        .unwrap();

        let authored = row.into_authored();

        let author = authored.author().unwrap();
        assert_eq!(author.username.as_deref(), Some("sam"));
        assert!(author.avatar_url.is_none());
        assert_eq!(authored.user.id, authored.item.problem.user_id);
    }
}
