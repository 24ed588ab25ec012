//! User API - HTTP server for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_api_lib::config::UserApiConfig;

#[derive(Parser)]
#[command(name = "user-api")]
#[command(about = "User management HTTP service")]
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
        /// Address to bind (overrides USER_API_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides USER_API_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the users table if it does not exist
    InitDb,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = UserApiConfig::from_env();
    tracing::debug!("Configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            user_api_lib::serve(config.with_listener(host, port)).await
        }
        Commands::InitDb => user_api_lib::init_db(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
