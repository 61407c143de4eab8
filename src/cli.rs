// certpulse - Certificate expiry reporting over HTTP
// Licensed under GPL-3.0

// CLI module - command line interface and argument parsing

use std::path::PathBuf;

use clap::Parser;

/// certpulse - report the expiry status of on-disk TLS certificates over HTTP
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "certpulse")]
pub struct Args {
    /// Load server configuration from a TOML file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// Certificate root directory (one subdirectory per domain)
    #[arg(long = "certs-dir", value_name = "DIR")]
    pub certs_dir: Option<PathBuf>,

    /// Host address to bind
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Enable the Swagger UI at /api/docs
    #[arg(long = "swagger")]
    pub swagger: bool,

    /// Enable permissive CORS headers
    #[arg(long = "cors")]
    pub cors: bool,
}
