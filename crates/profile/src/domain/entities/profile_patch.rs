// crates/profile/src/domain/entities/profile_patch.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::{Url, Username};

use crate::domain::value_objects::{Bio, SocialLinks, TagList};

/// Mise à jour partielle d'un profil.
///
/// `None` : champ inchangé. Pour les champs effaçables, `Some(None)` remet la
/// colonne à NULL. Sérialisé tel quel dans le corps du PATCH.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Username>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<Bio>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<Url>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<TagList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<TagList>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
