// crates/shared-kernel/src/infrastructure/pagination.rs

use serde::{Deserialize, Serialize};

/// Pagination limit/offset telle que le backend la comprend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PageRequest {
    /// Taille de fenêtre utilisée quand seul l'offset est fourni
    pub const DEFAULT_WINDOW: u32 = 10;

    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    /// Retourne `(limit, offset)` effectifs.
    ///
    /// - `0` vaut "non renseigné" pour les deux champs.
    /// - Avec un offset, la fenêtre est `[offset, offset + (limit ou 10))`.
    pub fn window(&self) -> (Option<u32>, Option<u32>) {
        let limit = self.limit.filter(|l| *l > 0);
        match self.offset.filter(|o| *o > 0) {
            Some(offset) => (Some(limit.unwrap_or(Self::DEFAULT_WINDOW)), Some(offset)),
            None => (limit, None),
        }
    }

    /// Applique la fenêtre sur une liste déjà triée (stubs en mémoire).
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let (limit, offset) = self.window();
        items
            .into_iter()
            .skip(offset.unwrap_or(0) as usize)
            .take(limit.map(|l| l as usize).unwrap_or(usize::MAX))
            .collect()
    }
}
