//! Grievance portal server entry point.
//!
//! Configuration is loaded from environment variables (via .env file);
//! command-line arguments override environment variables.

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grievance_api::{run_server, SmtpNotifier};
use grievance_core::config::AppConfig;
use grievance_db::SledStore;

#[derive(Parser)]
#[command(name = "grievance-server")]
#[command(about = "Grievance portal backend")]
#[command(version)]
struct Cli {
    /// Host to bind to
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Complaint store data directory
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    init_logging();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let store = match SledStore::open(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = match SmtpNotifier::new(&config.mailer) {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_server(&config, store, notifier).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grievance_api=info,grievance_db=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
