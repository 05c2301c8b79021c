// crates/profile/src/application/get_or_create_profile/get_or_create_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrCreateProfileCommand {
    pub user_id: UserId,
}
