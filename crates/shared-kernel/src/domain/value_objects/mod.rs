mod text;
mod url;
mod user_id;
mod username;
mod value_object;

pub use text::normalize_text;
pub use url::Url;
pub use user_id::UserId;
pub use username::Username;
pub use value_object::ValueObject;
