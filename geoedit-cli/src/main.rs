//! geoedit CLI - Command-line interface
//!
//! This binary provides a command-line interface to the geoedit library:
//! schema lookup, feature updates and offline transaction rendering.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use geoedit::config::{config_file_path, ConfigFile};
use geoedit::logging::{init_logging, LoggingGuard};
use std::path::{Path, PathBuf};

use commands::config::ConfigCommands;
use commands::render::RenderArgs;
use commands::schema::SchemaArgs;
use commands::update::UpdateArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "geoedit")]
#[command(version = geoedit::VERSION)]
#[command(about = "Edit GeoServer features through WFS-T", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.geoedit/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a layer schema and print it as JSON
    Schema(SchemaArgs),

    /// Update a feature's geometry and attributes
    Update(UpdateArgs),

    /// Print the WFS-T Update for a feature without sending it
    Render(RenderArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    match cli.command {
        Commands::Schema(args) => {
            let (config, _logging_guard) = start_session(&config_path)?;
            commands::schema::run(args, &config)
        }
        Commands::Update(args) => {
            let (config, _logging_guard) = start_session(&config_path)?;
            commands::update::run(args, &config)
        }
        Commands::Render(args) => commands::render::run(args),
        Commands::Config(command) => commands::config::run(command, &config_path),
    }
}

/// Load configuration and start logging for commands that talk to GeoServer.
fn start_session(config_path: &Path) -> Result<(ConfigFile, LoggingGuard), CliError> {
    let config = commands::common::load_config(config_path)?;
    let guard = init_logging(config.logging.file.as_deref())
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    Ok((config, guard))
}
