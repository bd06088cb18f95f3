use std::{path::Path, process, sync::Arc};

use clap::Parser;
use pointsbridge_core::api::{self, AppState};
use pointsbridge_core::backend::http::HttpRewardsBackend;
use pointsbridge_types::config::GatewayConfig;

#[derive(Parser, Debug)]
#[clap(author, version, about = "PointsBridge - JSON gateway for the legacy customer rewards system", long_about = None)]
struct Opts {
    /// Port the gateway listens on
    #[arg(long = "port", short = 'p', default_value = "8090")]
    port: u16,
}

#[tokio::main]
async fn main() {
    let opts: Opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            process::exit(e.exit_code());
        }
    };

    // Load environment variables from a .env file in the working directory
    load_env_file(Path::new("."));

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = serve(opts).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn serve(opts: Opts) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;
    // credentials stay out of the logs
    tracing::info!(
        "Forwarding to rewards backend at {}",
        config.backend_base_url
    );

    let backend = HttpRewardsBackend::new(config)?;
    let state = AppState::new(Arc::new(backend));

    api::start_server(state, opts.port).await
}

/// Load environment variables from a .env file in the given directory.
fn load_env_file(dir: &Path) {
    let env_file_path = dir.join(".env");

    match dotenvy::from_path(&env_file_path) {
        Ok(_) => {
            eprintln!("✓ Loaded environment from {}", env_file_path.display());
        }
        Err(e) if e.not_found() => {
            // no .env file is fine, continue silently
        }
        Err(e) => {
            eprintln!(
                "Warning: Failed to load .env file at {}: {}",
                env_file_path.display(),
                e
            );
        }
    }
}
