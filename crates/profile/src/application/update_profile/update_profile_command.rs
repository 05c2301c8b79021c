// crates/profile/src/application/update_profile/update_profile_command.rs

use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::ProfilePatch;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub patch: ProfilePatch,
}
