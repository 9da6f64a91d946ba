use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_logging::LogConfig;

#[derive(Parser, Debug)]
#[command(name = "folio-docs", about = "Browse and check a Folio documentation site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the desktop docs viewer
    Open {
        /// Site configuration file
        #[arg(long, default_value = "folio.toml")]
        config: PathBuf,
        /// Page to show first (defaults to the first doc in the sidebar)
        #[arg(long)]
        path: Option<String>,
        /// Sidebar to show (defaults to the site's default sidebar)
        #[arg(long)]
        sidebar: Option<String>,
        /// Preferences file (defaults to `.folio-prefs.json` next to the config)
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Verbose, human-readable logging
        #[arg(long)]
        dev: bool,
        /// Also write JSONL logs into this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
    /// Load and validate config, sidebars and showcase
    Check {
        /// Site configuration file
        #[arg(long, default_value = "folio.toml")]
        config: PathBuf,
    },
}

impl Command {
    /// Logging preset for this invocation.
    pub fn log_config(&self) -> LogConfig {
        match self {
            Command::Open {
                dev: true,
                log_dir,
                ..
            } => {
                let mut config = LogConfig::development();
                if let Some(dir) = log_dir {
                    config.file = LogConfig::production(dir.clone()).file;
                }
                config
            }
            Command::Open {
                log_dir: Some(dir), ..
            } => LogConfig::production(dir.clone()),
            Command::Open { .. } | Command::Check { .. } => LogConfig::default(),
        }
    }
}
