// Error types for certpulse
//
// Decode failures are structured data: discovery turns them into per-domain
// error records instead of unwinding across the batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure decoding a single certificate file
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Certificate file missing or unreadable
    #[error("cannot read certificate {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File contents are not a parsable X.509 certificate
    #[error("invalid certificate {}: {details}", .path.display())]
    Malformed { path: PathBuf, details: String },

    /// notAfter lies outside the representable timestamp range
    #[error("certificate {} has an unrepresentable expiry time", .path.display())]
    InvalidExpiry { path: PathBuf },

    /// Subject carries no common-name attribute
    #[error("certificate {} has no subject common name", .path.display())]
    MissingCommonName { path: PathBuf },
}
