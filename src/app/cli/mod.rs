//! CLI Adapter.

mod fetch_dev_data;
mod get;
mod resolve;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::domain::{AppError, EnvironmentContext};

#[derive(Parser)]
#[command(name = "hymns")]
#[command(version)]
#[command(about = "Fetch the song-selector Hymns.json dataset", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./hymns.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the dev dataset unless a local copy already exists
    #[clap(visible_alias = "f")]
    FetchDevData {
        /// Local file to write (overrides bootstrap.path)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
        /// Remote URL to download from (overrides source.remote_url)
        #[arg(long, value_name = "URL")]
        url: Option<Url>,
        /// Exit non-zero when the download fails
        #[arg(long)]
        strict: bool,
    },
    /// Print the dataset URL selected for the current environment
    #[clap(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        env: EnvArgs,
    },
    /// Fetch the dataset and print it as JSON
    #[clap(visible_alias = "g")]
    Get {
        #[command(flatten)]
        env: EnvArgs,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
}

/// Flags layered over `NODE_ENV` and `HYMNS_JSON_URL`.
#[derive(Args, Debug, Default)]
struct EnvArgs {
    /// Treat this run as a production build
    #[arg(long, conflicts_with = "development")]
    production: bool,
    /// Treat this run as development, whatever NODE_ENV says
    #[arg(long)]
    development: bool,
    /// Development override URL (replaces HYMNS_JSON_URL)
    #[arg(long, value_name = "URL")]
    override_url: Option<String>,
}

impl EnvArgs {
    fn apply(self, mut env: EnvironmentContext) -> EnvironmentContext {
        if self.production {
            env.production = true;
        } else if self.development {
            env.production = false;
        }
        match self.override_url {
            Some(url) => env.with_override_url(url),
            None => env,
        }
    }
}

/// Entry point for the CLI.
pub async fn run() {
    let cli = Cli::parse();
    init_logging();

    let config_path = cli.config.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::FetchDevData { path, url, strict } => {
            fetch_dev_data::run_fetch_dev_data(config_path, path, url, strict).await
        }
        Commands::Resolve { env } => resolve::run_resolve(config_path, env).map(|_| 0),
        Commands::Get { env, compact } => get::run_get(config_path, env, compact).await.map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
