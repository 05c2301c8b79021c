// backend/tellme-cli/src/commands/problem.rs

use std::sync::Arc;
use problem::application::create_problem::{CreateProblemCommand, CreateProblemUseCase};
use problem::application::delete_problem::{DeleteProblemCommand, DeleteProblemUseCase};
use problem::application::get_problems::{GetProblemsCommand, GetProblemsUseCase};
use problem::application::update_problem::{UpdateProblemCommand, UpdateProblemUseCase};
use problem::domain::entities::{ProblemFilter, ProblemPatch};
use problem::domain::value_objects::{Description, Title};
use problem::infrastructure::rest::repositories::{RestAuthorRepository, RestProblemRepository};
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::pagination::PageRequest;
use shared_kernel::infrastructure::rest::RestContext;

use crate::cli::{ProblemCommand, ProblemCreateArgs, ProblemListArgs, ProblemUpdateArgs};
use crate::commands::print_json;

pub async fn run(ctx: RestContext, cmd: ProblemCommand) -> anyhow::Result<()> {
    let problems = Arc::new(RestProblemRepository::new(ctx.clone()));

    match cmd {
        ProblemCommand::List(args) => {
            let authors = Arc::new(RestAuthorRepository::new(ctx));
            let feed = GetProblemsUseCase::new(problems, authors)
                .execute(GetProblemsCommand { filter: filter(args) })
                .await?;
            print_json(&feed)
        }
        ProblemCommand::Create(args) => {
            let created = CreateProblemUseCase::new(problems, Arc::new(SystemClock))
                .execute(create_command(args)?)
                .await?;
            print_json(&created)
        }
        ProblemCommand::Update(args) => {
            let problem_id = args.problem_id;
            let patch = patch(args)?;
            let updated = UpdateProblemUseCase::new(problems, Arc::new(SystemClock))
                .execute(UpdateProblemCommand { problem_id, patch })
                .await?;
            print_json(&updated)
        }
        ProblemCommand::Delete { problem_id } => {
            DeleteProblemUseCase::new(problems)
                .execute(DeleteProblemCommand { problem_id })
                .await?;
            Ok(())
        }
    }
}

fn filter(args: ProblemListArgs) -> ProblemFilter {
    ProblemFilter {
        user_id: args.user,
        category_id: args.category,
        status: args.status,
        is_public: args.public,
        problem_id: args.id,
        page: PageRequest::new(args.limit, args.offset),
    }
}

fn create_command(args: ProblemCreateArgs) -> anyhow::Result<CreateProblemCommand> {
    let mut cmd = CreateProblemCommand::new(
        args.user,
        Title::try_new(args.title)?,
        Description::try_new(args.description)?,
    );
    cmd.category_id = args.category;
    cmd.status = args.status;
    cmd.is_public = !args.private;
    Ok(cmd)
}

fn patch(args: ProblemUpdateArgs) -> anyhow::Result<ProblemPatch> {
    let category_id = match (args.category, args.clear_category) {
        (_, true) => Some(None),
        (Some(category), false) => Some(Some(category)),
        (None, false) => None,
    };

    Ok(ProblemPatch {
        title: args.title.map(Title::try_new).transpose()?,
        description: args.description.map(Description::try_new).transpose()?,
        category_id,
        status: args.status,
        is_public: args.public,
    })
}
