// crates/profile/src/domain/entities/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Url, UserId, Username};

use crate::domain::builders::ProfileBuilder;
use crate::domain::entities::ProfilePatch;
use crate::domain::value_objects::{Bio, SocialLinks, TagList};

/// Profil public d'un utilisateur. `id` est l'identifiant du sujet
/// d'authentification : une ligne par utilisateur au plus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<Username>,
    pub full_name: Option<String>,
    pub bio: Option<Bio>,
    pub location: Option<String>,
    pub avatar_url: Option<Url>,
    pub social_links: SocialLinks,
    pub interests: TagList,
    pub skills: TagList,
    pub reputation: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn builder(id: UserId) -> ProfileBuilder {
        ProfileBuilder::new(id)
    }

    /// Profil minimal créé au premier accès : pseudo généré, listes vides, réputation 0.
    pub fn placeholder(id: UserId, now: DateTime<Utc>) -> Self {
        ProfileBuilder::new(id)
            .with_username(Some(Username::placeholder_for(&id)))
            .with_timestamps(now, now)
            .build()
    }

    /// Même profil minimal, avec le pseudo provisoire long
    pub fn extended_placeholder(id: UserId, now: DateTime<Utc>) -> Self {
        ProfileBuilder::new(id)
            .with_username(Some(Username::extended_placeholder_for(&id)))
            .with_timestamps(now, now)
            .build()
    }

    /// Applique localement un patch (même sémantique que la mise à jour distante)
    pub fn apply(&mut self, patch: &ProfilePatch, now: DateTime<Utc>) {
        if let Some(username) = &patch.username {
            self.username = Some(username.clone());
        }
        if let Some(full_name) = &patch.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(bio) = &patch.bio {
            self.bio = bio.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(avatar_url) = &patch.avatar_url {
            self.avatar_url = avatar_url.clone();
        }
        if let Some(social_links) = &patch.social_links {
            self.social_links = social_links.clone();
        }
        if let Some(interests) = &patch.interests {
            self.interests = interests.clone();
        }
        if let Some(skills) = &patch.skills {
            self.skills = skills.clone();
        }
        self.updated_at = now;
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_ref().map(Username::as_str))
            .unwrap_or("")
    }
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str {
        "Profile"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "profiles_pkey" => "id",
            "profiles_username_key" => "username",
            _ => "unique_constraint",
        }
    }
}
