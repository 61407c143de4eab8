// certpulse - Certificate expiry reporting over HTTP
// Licensed under GPL-3.0

use anyhow::Result;
use certpulse::api::{ApiConfig, ApiServer};
use certpulse::Args;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    // Handle --config-example (write example configuration and exit)
    if let Some(path) = &args.config_example {
        ApiConfig::create_example(
            path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid file path"))?,
        )?;
        println!("Example configuration saved to: {}", path.display());
        return Ok(());
    }

    // Load configuration from file or use defaults
    let mut config = if let Some(path) = &args.config {
        ApiConfig::from_file(
            path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid config file path"))?,
        )?
    } else {
        ApiConfig::default()
    };

    // Override with CLI arguments
    if let Some(certs_dir) = args.certs_dir {
        config.certs_dir = certs_dir;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.enable_swagger = args.swagger || config.enable_swagger;
    config.enable_cors = args.cors || config.enable_cors;

    info!(
        "starting certpulse, certificate root: {}",
        config.certs_dir.display()
    );

    let server = ApiServer::new(config)?;
    server.run().await
}
