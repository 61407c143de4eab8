// certpulse - Certificate expiry reporting over HTTP
// Licensed under GPL-3.0

//! certpulse reports the expiry status of TLS certificates kept on disk by a
//! certificate-management agent (one `cert.pem` per domain directory) through
//! a small read-only HTTP API. Every request re-reads the filesystem and
//! re-parses every certificate; there is no cache to go stale.

pub mod api;
pub mod certificates;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::DecodeError;

/// Result type for certpulse operations
pub type Result<T> = anyhow::Result<T>;
