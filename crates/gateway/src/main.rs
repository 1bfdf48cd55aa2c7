//! Users API - HTTP CRUD service over an in-memory user collection.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::IdStrategy;
use gateway_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "In-memory users CRUD API")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind (overrides USERS_API_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides USERS_API_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Id assignment for created users: length or sequential
        #[arg(long)]
        id_strategy: Option<IdStrategy>,
        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);

    match cli.command {
        Commands::Serve {
            host,
            port,
            id_strategy,
            no_seed,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            if let Some(id_strategy) = id_strategy {
                config.store.id_strategy = id_strategy;
            }
            if no_seed {
                config.store.seed = false;
            }
            tracing::debug!(?config, "Configuration loaded");

            gateway_lib::run_server(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_filter: &str) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
