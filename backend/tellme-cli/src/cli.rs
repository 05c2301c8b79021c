// backend/tellme-cli/src/cli.rs

use clap::{Args, Parser, Subcommand};
use notification::domain::value_objects::NotificationId;
use problem::domain::value_objects::{
    CategoryId, ProblemId, ProblemStatus, ReportId, ReportStatus, SuggestionId, SuggestionStatus, TagId,
};
use shared_kernel::domain::value_objects::UserId;

#[derive(Parser, Debug)]
#[command(name = "tellme", version, about = "TellMe data-access command line", arg_required_else_help = true)]
pub struct Cli {
    /// Jeton de session ; sans jeton, la clé API sert de bearer
    #[arg(long, global = true, env = "TELLME_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Profils utilisateurs
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Problèmes signalés
    #[command(subcommand)]
    Problems(ProblemCommand),

    #[command(subcommand)]
    Comments(CommentCommand),

    #[command(subcommand)]
    Bookmarks(BookmarkCommand),

    /// Catégories et tags
    #[command(subcommand)]
    Taxonomy(TaxonomyCommand),

    #[command(subcommand)]
    Suggestions(SuggestionCommand),

    /// Signalements de modération
    #[command(subcommand)]
    Reports(ReportCommand),

    #[command(subcommand)]
    Notifications(NotificationCommand),
}

// --- Profils ---

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Lit un profil (rien si absent)
    Get { user_id: UserId },
    /// Lit le profil, le crée avec un nom généré s'il n'existe pas
    Ensure { user_id: UserId },
    Update(ProfileUpdateArgs),
}

#[derive(Args, Debug)]
pub struct ProfileUpdateArgs {
    pub user_id: UserId,
    #[arg(long)]
    pub username: Option<String>,
    /// Chaîne vide pour effacer
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
    /// Liste séparée par des virgules
    #[arg(long)]
    pub interests: Option<String>,
    #[arg(long)]
    pub skills: Option<String>,
}

// --- Problèmes ---

#[derive(Subcommand, Debug)]
pub enum ProblemCommand {
    List(ProblemListArgs),
    Create(ProblemCreateArgs),
    Update(ProblemUpdateArgs),
    Delete { problem_id: ProblemId },
}

#[derive(Args, Debug)]
pub struct ProblemListArgs {
    /// Ignore tous les autres critères
    #[arg(long)]
    pub id: Option<ProblemId>,
    #[arg(long)]
    pub user: Option<UserId>,
    #[arg(long)]
    pub category: Option<CategoryId>,
    #[arg(long)]
    pub status: Option<ProblemStatus>,
    #[arg(long)]
    pub public: Option<bool>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ProblemCreateArgs {
    #[arg(long)]
    pub user: UserId,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: Option<CategoryId>,
    #[arg(long, default_value = "open")]
    pub status: ProblemStatus,
    #[arg(long)]
    pub private: bool,
}

#[derive(Args, Debug)]
pub struct ProblemUpdateArgs {
    pub problem_id: ProblemId,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "clear_category")]
    pub category: Option<CategoryId>,
    #[arg(long)]
    pub clear_category: bool,
    #[arg(long)]
    pub status: Option<ProblemStatus>,
    #[arg(long)]
    pub public: Option<bool>,
}

// --- Commentaires ---

#[derive(Subcommand, Debug)]
pub enum CommentCommand {
    List { problem_id: ProblemId },
    Add {
        problem_id: ProblemId,
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        content: String,
    },
}

// --- Favoris ---

#[derive(Args, Debug)]
pub struct BookmarkPair {
    pub user_id: UserId,
    pub problem_id: ProblemId,
}

#[derive(Subcommand, Debug)]
pub enum BookmarkCommand {
    Add(BookmarkPair),
    Remove(BookmarkPair),
    Toggle(BookmarkPair),
    Check(BookmarkPair),
    List { user_id: UserId },
}

// --- Taxonomie ---

#[derive(Subcommand, Debug)]
pub enum TaxonomyCommand {
    Categories,
    Tags,
    /// Tags d'un problème
    ProblemTags { problem_id: ProblemId },
    Attach {
        problem_id: ProblemId,
        #[arg(required = true)]
        tag_ids: Vec<TagId>,
    },
    Detach {
        problem_id: ProblemId,
        #[arg(required = true)]
        tag_ids: Vec<TagId>,
    },
}

// --- Suggestions ---

#[derive(Subcommand, Debug)]
pub enum SuggestionCommand {
    List { problem_id: ProblemId },
    Create {
        problem_id: ProblemId,
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        content: String,
    },
    Status {
        suggestion_id: SuggestionId,
        status: SuggestionStatus,
    },
}

// --- Signalements ---

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    Create {
        problem_id: ProblemId,
        #[arg(long)]
        reporter: UserId,
        #[arg(long)]
        reason: String,
    },
    Status {
        report_id: ReportId,
        status: ReportStatus,
    },
}

// --- Notifications ---

#[derive(Subcommand, Debug)]
pub enum NotificationCommand {
    List { user_id: UserId },
    Read { notification_id: NotificationId },
}
