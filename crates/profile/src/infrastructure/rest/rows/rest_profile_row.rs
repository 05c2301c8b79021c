// crates/profile/src/infrastructure/rest/rows/rest_profile_row.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use shared_kernel::domain::value_objects::{Url, UserId, Username};
use uuid::Uuid;

use crate::domain::entities::{Profile, ProfilePatch};
use crate::domain::value_objects::{Bio, SocialLinks, TagList};

/// Ligne `profiles` telle que renvoyée par le backend
#[derive(Debug, Deserialize)]
pub struct RestProfileRow {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub social_links: Option<JsonValue>,
    #[serde(default)]
    pub interests: Option<TextListColumn>,
    #[serde(default)]
    pub skills: Option<TextListColumn>,
    #[serde(default)]
    pub reputation: Option<i32>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Colonnes text[] ; d'anciennes lignes contiennent une simple chaîne
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TextListColumn {
    List(Vec<Option<String>>),
    Legacy(String),
}

impl TextListColumn {
    fn into_tag_list(self, column: &'static str, id: Uuid) -> TagList {
        match self {
            Self::List(items) => TagList::new(items.into_iter().flatten()),
            Self::Legacy(raw) => {
                tracing::warn!(profile_id = %id, column, "Legacy scalar list column, splitting on commas");
                TagList::parse_legacy(&raw)
            }
        }
    }
}

impl From<RestProfileRow> for Profile {
    fn from(row: RestProfileRow) -> Self {
        let social_links = match row.social_links {
            None | Some(JsonValue::Null) => SocialLinks::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(profile_id = %row.id, error = %e, "Unreadable social_links, ignoring");
                SocialLinks::default()
            }),
        };

        let id = row.id;
        let list = |column: Option<TextListColumn>, name: &'static str| {
            column.map(|c| c.into_tag_list(name, id)).unwrap_or_default()
        };

        Profile::builder(UserId::new_unchecked(id))
            .with_username(row.username.map(Username::from_raw))
            .with_full_name(row.full_name)
            .with_bio(row.bio.filter(|b| !b.trim().is_empty()).map(Bio::from_raw))
            .with_location(row.location)
            .with_avatar_url(row.avatar_url.filter(|u| !u.is_empty()).map(Url::from_raw))
            .with_social_links(social_links)
            .with_interests(list(row.interests, "interests"))
            .with_skills(list(row.skills, "skills"))
            .with_reputation(row.reputation.unwrap_or(0))
            .with_timestamps(row.created_at, row.updated_at.unwrap_or(row.created_at))
            .build()
    }
}

/// Corps de l'INSERT d'un nouveau profil
#[derive(Debug, Serialize)]
pub struct RestProfileInsert<'a> {
    pub id: &'a UserId,
    pub username: Option<&'a Username>,
    pub full_name: Option<&'a str>,
    pub bio: Option<&'a Bio>,
    pub location: Option<&'a str>,
    pub avatar_url: Option<&'a Url>,
    pub social_links: &'a SocialLinks,
    pub interests: &'a TagList,
    pub skills: &'a TagList,
    pub reputation: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Profile> for RestProfileInsert<'a> {
    fn from(p: &'a Profile) -> Self {
        Self {
            id: &p.id,
            username: p.username.as_ref(),
            full_name: p.full_name.as_deref(),
            bio: p.bio.as_ref(),
            location: p.location.as_deref(),
            avatar_url: p.avatar_url.as_ref(),
            social_links: &p.social_links,
            interests: &p.interests,
            skills: &p.skills,
            reputation: p.reputation,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Corps du PATCH : champs du patch + updated_at
#[derive(Debug, Serialize)]
pub struct RestProfileUpdate<'a> {
    #[serde(flatten)]
    pub patch: &'a ProfilePatch,
    pub updated_at: DateTime<Utc>,
}
