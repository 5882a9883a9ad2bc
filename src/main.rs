mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use koto_console::config::{default_config_path, ConsoleConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "koto-console", version, about = "Configuration console for the KOTO assistant")]
struct Cli {
    /// Settings file (default: ~/.koto/console.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the settings file and KOTO_API_BASE
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Print the resulting document instead of saving it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current configuration
    Show {
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },
    /// List the child folders of a folder (root when omitted)
    Folders {
        parent_id: Option<String>,
    },
    /// Browse folders interactively and add one as a knowledge source
    Browse,
    /// Manage knowledge sources
    Source {
        #[command(subcommand)]
        action: SourceAction,
    },
    /// Manage reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },
    /// Manage linked Notion databases
    Notion {
        #[command(subcommand)]
        action: NotionAction,
    },
    /// Edit the profile and master prompt
    Profile(ProfileArgs),
}

#[derive(Subcommand)]
enum SourceAction {
    /// Add a folder by id without browsing
    Add { id: String, name: String },
    /// Remove a knowledge source
    Remove { id: String },
    /// Set the usage instruction of a knowledge source
    Instruct { id: String, instruction: String },
}

#[derive(Subcommand)]
enum ReminderAction {
    /// Add a new reminder at 12:00
    Add,
    /// Remove the reminder at INDEX (1-based)
    Remove { index: usize },
    /// Change the reminder at INDEX (1-based)
    Set {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        /// Time of day, HH:MM
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        prompt: Option<String>,
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        #[arg(long)]
        disable: bool,
    },
}

#[derive(Subcommand)]
enum NotionAction {
    /// Link a database by its 32-character id
    Add {
        id: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Unlink a database
    Remove { id: String },
    /// Set the description of a database
    Describe { id: String, description: String },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    personality: Option<String>,
    #[arg(long, conflicts_with = "master_prompt_file")]
    master_prompt: Option<String>,
    /// Read the master prompt from a file
    #[arg(long)]
    master_prompt_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = ConsoleConfig::load_from(&settings_path)?;
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
    }

    // Log to stderr so stdout only carries command output.
    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "settings loaded"),
        None => tracing::info!("no settings file at {}, using defaults", settings_path.display()),
    }

    let console = cli::Console::new(config, cli.dry_run)?;

    match cli.command {
        Command::Show { json } => cli::show::show(&console, json).await?,
        Command::Folders { parent_id } => {
            cli::folders::folders(&console, parent_id.as_deref().unwrap_or("")).await?
        }
        Command::Browse => cli::browse::browse(&console).await?,
        Command::Source { action } => match action {
            SourceAction::Add { id, name } => cli::sources::add(&console, id, name).await?,
            SourceAction::Remove { id } => cli::sources::remove(&console, &id).await?,
            SourceAction::Instruct { id, instruction } => {
                cli::sources::instruct(&console, &id, instruction).await?
            }
        },
        Command::Reminder { action } => match action {
            ReminderAction::Add => cli::reminders::add(&console).await?,
            ReminderAction::Remove { index } => cli::reminders::remove(&console, index).await?,
            ReminderAction::Set {
                index,
                name,
                time,
                prompt,
                enable,
                disable,
            } => {
                let enabled = match (enable, disable) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                let patch = koto_console::document::ReminderPatch {
                    name,
                    time,
                    prompt,
                    enabled,
                };
                cli::reminders::set(&console, index, patch).await?
            }
        },
        Command::Notion { action } => match action {
            NotionAction::Add { id, name } => cli::notion::add(&console, &id, &name).await?,
            NotionAction::Remove { id } => cli::notion::remove(&console, &id).await?,
            NotionAction::Describe { id, description } => {
                cli::notion::describe(&console, &id, description).await?
            }
        },
        Command::Profile(args) => {
            let master_prompt = match args.master_prompt_file {
                Some(path) => Some(cli::read_text_file(&path)?),
                None => args.master_prompt,
            };
            let patch = koto_console::document::ProfilePatch {
                user_name: args.name,
                personality: args.personality,
                master_prompt,
            };
            cli::profile::profile(&console, patch).await?
        }
    }

    Ok(())
}
