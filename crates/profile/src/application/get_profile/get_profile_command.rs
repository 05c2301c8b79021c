// crates/profile/src/application/get_profile/get_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileCommand {
    pub user_id: UserId,
}
