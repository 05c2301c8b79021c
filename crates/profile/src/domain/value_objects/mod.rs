// crates/profile/src/domain/value_objects/mod.rs

mod bio;
mod social_links;
mod tag_list;

pub use bio::Bio;
pub use social_links::SocialLinks;
pub use tag_list::TagList;
