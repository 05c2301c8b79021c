// backend/tellme-cli/src/commands/profile.rs

use std::sync::Arc;
use profile::application::get_or_create_profile::{GetOrCreateProfileCommand, GetOrCreateProfileUseCase};
use profile::application::get_profile::{GetProfileCommand, GetProfileUseCase};
use profile::application::update_profile::{UpdateProfileCommand, UpdateProfileUseCase};
use profile::domain::entities::ProfilePatch;
use profile::domain::value_objects::{Bio, TagList};
use profile::infrastructure::rest::repositories::RestProfileRepository;
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::{Url, Username};
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::{ProfileCommand, ProfileUpdateArgs};
use crate::commands::{clearable, print_json};

pub async fn run(ctx: RestContext, cmd: ProfileCommand) -> anyhow::Result<()> {
    let repo = Arc::new(RestProfileRepository::new(ctx));

    match cmd {
        ProfileCommand::Get { user_id } => {
            let profile = GetProfileUseCase::new(repo)
                .execute(GetProfileCommand { user_id })
                .await?;
            print_json(&profile)
        }
        ProfileCommand::Ensure { user_id } => {
            let profile = GetOrCreateProfileUseCase::new(repo, Arc::new(SystemClock))
                .execute(GetOrCreateProfileCommand { user_id })
                .await?;
            print_json(&profile)
        }
        ProfileCommand::Update(args) => {
            let user_id = args.user_id;
            let patch = build_patch(args)?;
            let profile = UpdateProfileUseCase::new(repo, Arc::new(SystemClock))
                .execute(UpdateProfileCommand { user_id, patch })
                .await?;
            print_json(&profile)
        }
    }
}

fn build_patch(args: ProfileUpdateArgs) -> anyhow::Result<ProfilePatch> {
    Ok(ProfilePatch {
        username: args.username.map(Username::try_new).transpose()?,
        full_name: clearable(args.full_name, Ok)?,
        bio: clearable(args.bio, Bio::try_new)?,
        location: clearable(args.location, Ok)?,
        avatar_url: clearable(args.avatar_url, Url::try_new)?,
        interests: args.interests.as_deref().map(TagList::parse_legacy),
        skills: args.skills.as_deref().map(TagList::parse_legacy),
        ..Default::default()
    })
}
