use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "nikki-tracker")]
#[command(about = "Infinity Nikki progress tracker - Mira Level reward checklist")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the tracker window
    Gui,

    /// Load the levels once and print them with their checked state
    List {
        /// Only show levels that are not checked yet
        #[arg(long)]
        pending_only: bool,
    },

    /// Mark a level as completed (by name or number)
    Check {
        /// Level name (e.g. "Mira Level 5") or number
        level: String,
    },

    /// Mark a level as not completed (by name or number)
    Uncheck {
        /// Level name (e.g. "Mira Level 5") or number
        level: String,
    },

    /// Clear all checked levels
    Reset,

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(nikki_tracker::config::Config::default_path);

    match cli.command {
        Some(Commands::List { pending_only }) => {
            cli::list::list_command(&config_path, pending_only).await?;
        }
        Some(Commands::Check { level }) => {
            cli::check::check_command(&config_path, &level, true).await?;
        }
        Some(Commands::Uncheck { level }) => {
            cli::check::check_command(&config_path, &level, false).await?;
        }
        Some(Commands::Reset) => {
            cli::check::reset_command(&config_path).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI
            nikki_tracker::gui::run_gui(&config_path)?;
        }
    }

    Ok(())
}
