//! Folio docs viewer - main entry point
//!
//! Usage:
//!   folio-docs open --config site/folio.toml --path /docs/intro
//!   folio-docs check --config site/folio.toml

use clap::Parser;
use folio_docs::{check, default_prefs_path, first_doc_path, launch, Cli, Command, DocsSite, LaunchData};
use folio_logging::FolioSubscriberBuilder;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(cli.command.log_config())
        .init()?;

    match cli.command {
        Command::Check { config } => {
            let report = check(&config)?;
            println!(
                "{}: {} sidebar(s), {} item(s), {} showcase site(s)",
                config.display(),
                report.sidebars,
                report.items,
                report.showcase_sites
            );
        }
        Command::Open {
            config,
            path,
            sidebar,
            prefs,
            ..
        } => {
            let site = DocsSite::load(&config)?;
            let (sidebar_id, items) = site.sidebar(sidebar.as_deref())?;
            let initial_path = path
                .or_else(|| first_doc_path(&items))
                .unwrap_or_else(|| site.config.base_url.clone());
            let prefs_path = prefs.unwrap_or_else(|| default_prefs_path(&config));

            launch(LaunchData {
                config: site.config,
                sidebar_id,
                sidebar: items,
                initial_path,
                prefs_path,
                session_id: Uuid::new_v4(),
            })?;
        }
    }

    Ok(())
}
