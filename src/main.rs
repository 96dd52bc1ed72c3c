//! pgadmin-servers CLI
//!
//! Usage:
//!   pgadmin-servers
//!   pgadmin-servers --db ./pgadmin4.db --format json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pgadmin_servers::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "pgadmin-servers")]
#[command(about = "List connection profiles saved by pgAdmin 4")]
struct Cli {
    /// Database to read instead of <home>/AppData/Roaming/pgadmin/pgadmin4.db
    #[arg(long, env = "PGADMIN_DB")]
    db: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        let config = Config::new().with_format(self.format.into());
        match &self.db {
            Some(path) => config.with_db_path(path.clone()),
            None => config,
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let stdout = std::io::stdout();
    pgadmin_servers::run(&config, &mut stdout.lock()).context("listing pgAdmin servers failed")?;
    Ok(())
}
