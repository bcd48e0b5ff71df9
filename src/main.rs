//! todo-service - todo record service with concurrent batch creation
//!
//! Loads configuration, initializes logging, connects to the database and
//! serves the HTTP API.

#![allow(missing_docs)]

use clap::Parser;
use std::process::ExitCode;
use todo_service::utils::logging::init_logging;
use todo_service::{Config, TodoService};
use tracing::{error, info};

/// Todo record service with a concurrent batch-creation endpoint
#[derive(Parser, Debug)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(
        short,
        long,
        env = "TODO_SERVICE_CONFIG",
        default_value = "config/todo-service.yaml"
    )]
    config: String,

    /// Database URL, overrides `database.url` and `DATABASE_URL`
    #[arg(long)]
    database_url: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(&args.config).await?;
    if let Some(url) = args.database_url {
        config.apply_database_url(url);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    init_logging(&config.logging)?;
    info!(
        version = todo_service::VERSION,
        git_hash = todo_service::build_info().git_hash,
        "Starting todo service"
    );

    let service = TodoService::new(config).await?;
    service.run().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // DATABASE_URL may come from a .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
