mod get_or_create_profile_command;
mod get_or_create_profile_use_case;

pub use get_or_create_profile_command::GetOrCreateProfileCommand;
pub use get_or_create_profile_use_case::GetOrCreateProfileUseCase;
