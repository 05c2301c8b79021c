// crates/profile/src/domain/value_objects/tag_list.rs

use serde::{Deserialize, Serialize};

/// Liste de libellés libres (centres d'intérêt, compétences).
/// Entrées trimées, vides retirées, doublons retirés en gardant l'ordre.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for item in items {
            let trimmed = item.as_ref().trim();
            if !trimmed.is_empty() && !out.iter().any(|existing| existing == trimmed) {
                out.push(trimmed.to_string());
            }
        }
        Self(out)
    }

    /// Ancien format : une seule chaîne séparée par des virgules
    pub fn parse_legacy(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn from_raw(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<TagList> for Vec<String> {
    fn from(list: TagList) -> Self {
        list.0
    }
}
