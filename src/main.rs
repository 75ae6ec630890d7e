use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// corpsite - Company website backend
#[derive(Parser)]
#[command(name = "corpsite")]
#[command(about = "Contact intake and service catalog API", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the service catalog
    Services {
        #[command(subcommand)]
        command: ServicesCommands,
    },
}

#[derive(Subcommand)]
enum ServicesCommands {
    /// Create or update services from a JSON file
    Import {
        /// JSON array of services
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = corpsite::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    corpsite::observability::init_observability(
        "corpsite",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => corpsite::cli::server::serve(config, host, port).await,
        Commands::Migrate => corpsite::cli::migrate::migrate(config).await,
        Commands::Reset => corpsite::cli::migrate::reset(config).await,
        Commands::Services {
            command: ServicesCommands::Import { file },
        } => corpsite::cli::services::import(config, file).await,
    }
}
