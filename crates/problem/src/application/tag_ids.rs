// crates/problem/src/application/tag_ids.rs

use std::collections::HashSet;

use crate::domain::value_objects::TagId;

/// Retire les doublons en conservant l'ordre de première apparition
pub(crate) fn dedupe_tag_ids(tag_ids: Vec<TagId>) -> Vec<TagId> {
    let mut seen = HashSet::with_capacity(tag_ids.len());
    tag_ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
