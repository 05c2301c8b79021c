// crates/problem/src/application/get_problems/get_problems_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::author_join::attach_authors;
use crate::application::get_problems::GetProblemsCommand;
use crate::domain::entities::{Authored, ProblemView};
use crate::domain::repositories::{AuthorRepository, ProblemRepository};

/// Fil des problèmes : lignes filtrées (created_at décroissant) puis auteurs
pub struct GetProblemsUseCase {
    problems: Arc<dyn ProblemRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl GetProblemsUseCase {
    pub fn new(problems: Arc<dyn ProblemRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { problems, authors }
    }

    pub async fn execute(&self, cmd: GetProblemsCommand) -> Result<Vec<Authored<ProblemView>>> {
        // 1. Lignes principales (catégorie embarquée)
        let rows = self.problems.find(&cmd.filter).await?;

        // 2. + 3. Auteurs en une requête, jointure gauche en mémoire
        attach_authors(rows, self.authors.as_ref()).await
    }
}
