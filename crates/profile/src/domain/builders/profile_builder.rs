// crates/profile/src/domain/builders/profile_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{Url, UserId, Username};

use crate::domain::entities::Profile;
use crate::domain::value_objects::{Bio, SocialLinks, TagList};

pub struct ProfileBuilder {
    id: UserId,
    username: Option<Username>,
    full_name: Option<String>,
    bio: Option<Bio>,
    location: Option<String>,
    avatar_url: Option<Url>,
    social_links: SocialLinks,
    interests: TagList,
    skills: TagList,
    reputation: i32,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProfileBuilder {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            full_name: None,
            bio: None,
            location: None,
            avatar_url: None,
            social_links: SocialLinks::default(),
            interests: TagList::default(),
            skills: TagList::default(),
            reputation: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_username(mut self, username: Option<Username>) -> Self {
        self.username = username;
        self
    }

    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    pub fn with_bio(mut self, bio: Option<Bio>) -> Self {
        self.bio = bio;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<Url>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    pub fn with_social_links(mut self, social_links: SocialLinks) -> Self {
        self.social_links = social_links;
        self
    }

    pub fn with_interests(mut self, interests: TagList) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_skills(mut self, skills: TagList) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_reputation(mut self, reputation: i32) -> Self {
        self.reputation = reputation;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Profile {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Profile {
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            bio: self.bio,
            location: self.location,
            avatar_url: self.avatar_url,
            social_links: self.social_links,
            interests: self.interests,
            skills: self.skills,
            reputation: self.reputation,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}
