use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillbridge_core::session::{FontSize, ProfileVisibility, Theme};
use skillbridge_infrastructure::{ConfigService, ConfigSource, SkillBridgePaths};

mod app;
mod commands;
mod logging;

use app::App;

#[derive(Parser)]
#[command(name = "skillbridge")]
#[command(about = "SkillBridge - learner session and skill assessment", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the persisted session
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` (SKILLBRIDGE_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the current session
    Status,
    /// Forget the stored session and settings
    Reset,
    /// Edit the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Record course progress for the signed-in user
    Progress {
        course_id: String,
        /// Completion percentage
        percent: u32,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// List the self-assessment checklist
    Skills,
    /// List the learning paths
    Paths,
    /// Run the self-assessment with the given skill ids
    Assess {
        #[arg(required = true)]
        skill_ids: Vec<String>,
        /// Learning path to enroll in
        #[arg(long)]
        path: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Overwrite profile fields; an empty value clears an optional field
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    /// Change individual settings; the rest are kept
    Set {
        #[arg(long)]
        email_notifications: Option<bool>,
        #[arg(long)]
        push_notifications: Option<bool>,
        #[arg(long)]
        marketing: Option<bool>,
        #[arg(long)]
        visibility: Option<ProfileVisibility>,
        #[arg(long)]
        show_activity: Option<bool>,
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long)]
        font_size: Option<FontSize>,
        #[arg(long)]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_source) = ConfigService::load(cli.config.as_deref())?;
    let paths = SkillBridgePaths::new(
        cli.data_dir
            .clone()
            .or_else(|| config.storage.data_dir.clone()),
    );
    let logs_dir = if config.logging.file {
        Some(paths.logs_dir()?)
    } else {
        None
    };
    let _log_guard = logging::init(&config.logging, cli.log_level.as_deref(), logs_dir);
    match &config_source {
        ConfigSource::File(path) => tracing::debug!(path = %path.display(), "Config loaded"),
        ConfigSource::Defaults(path) => {
            tracing::debug!(path = %path.display(), "No config file, using defaults")
        }
    }

    let app = App::bootstrap(config, paths)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&app, &email, &password).await?
        }
        Commands::Logout => commands::session::logout(&app),
        Commands::Status => commands::session::status(&app),
        Commands::Reset => commands::session::reset(&app)?,
        Commands::Profile { action } => match action {
            ProfileAction::Set {
                name,
                email,
                avatar,
                bio,
                location,
                company,
                website,
            } => commands::profile::set(
                &app,
                commands::profile::ProfileFields {
                    name,
                    email,
                    avatar,
                    bio,
                    location,
                    company,
                    website,
                },
            )?,
        },
        Commands::Progress { course_id, percent } => {
            commands::profile::progress(&app, &course_id, percent)?
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&app),
            SettingsAction::Set {
                email_notifications,
                push_notifications,
                marketing,
                visibility,
                show_activity,
                theme,
                font_size,
                language,
            } => commands::settings::set(
                &app,
                commands::settings::SettingsChanges {
                    email_notifications,
                    push_notifications,
                    marketing,
                    visibility,
                    show_activity,
                    theme,
                    font_size,
                    language,
                },
            ),
        },
        Commands::Skills => commands::catalog::skills(),
        Commands::Paths => commands::catalog::paths(),
        Commands::Assess { skill_ids, path } => {
            commands::catalog::assess(&app, &skill_ids, path.as_deref())?
        }
    }

    Ok(())
}
