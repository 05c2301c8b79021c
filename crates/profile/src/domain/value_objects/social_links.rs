// crates/profile/src/domain/value_objects/social_links.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{Url, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use std::collections::BTreeMap;

/// Liens sociaux du profil (colonne JSON `social_links`).
/// Les plateformes inconnues sont conservées telles quelles dans `others`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    twitter: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linkedin: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instagram: Option<Url>,

    #[serde(flatten)]
    others: BTreeMap<String, Url>,
}

impl SocialLinks {
    pub const MAX_CUSTOM_LINKS: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    // --- Getters ---

    pub fn website(&self) -> Option<&Url> { self.website.as_ref() }
    pub fn github(&self) -> Option<&Url> { self.github.as_ref() }
    pub fn twitter(&self) -> Option<&Url> { self.twitter.as_ref() }
    pub fn linkedin(&self) -> Option<&Url> { self.linkedin.as_ref() }
    pub fn instagram(&self) -> Option<&Url> { self.instagram.as_ref() }
    pub fn others(&self) -> &BTreeMap<String, Url> { &self.others }

    // --- Fluent setters ---

    pub fn with_website(mut self, url: Option<Url>) -> Self { self.website = url; self }
    pub fn with_github(mut self, url: Option<Url>) -> Self { self.github = url; self }
    pub fn with_twitter(mut self, url: Option<Url>) -> Self { self.twitter = url; self }
    pub fn with_linkedin(mut self, url: Option<Url>) -> Self { self.linkedin = url; self }
    pub fn with_instagram(mut self, url: Option<Url>) -> Self { self.instagram = url; self }
    pub fn with_other(mut self, platform: impl Into<String>, url: Url) -> Self {
        let platform = platform.into().trim().to_lowercase();
        if !platform.is_empty() {
            self.others.insert(platform, url);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.website.is_none()
            && self.github.is_none()
            && self.twitter.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
            && self.others.is_empty()
    }

    fn all(&self) -> impl Iterator<Item = &Url> {
        [&self.website, &self.github, &self.twitter, &self.linkedin, &self.instagram]
            .into_iter()
            .flatten()
            .chain(self.others.values())
    }
}

impl ValueObject for SocialLinks {
    fn validate(&self) -> Result<()> {
        if self.others.len() > Self::MAX_CUSTOM_LINKS {
            return Err(DomainError::Validation {
                field: "social_links",
                reason: format!("Too many custom links (max {})", Self::MAX_CUSTOM_LINKS),
            });
        }

        // Les URLs venant du backend n'ont pas été validées à la lecture
        for url in self.all() {
            Url::try_new(url.as_str()).map_err(|_| DomainError::Validation {
                field: "social_links",
                reason: format!("'{}' is not an http(s) URL", url.as_str()),
            })?;
        }

        Ok(())
    }
}
