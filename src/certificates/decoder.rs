// Certificate Decoder - extract expiry and subject from one on-disk certificate

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;

use crate::error::DecodeError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Fields extracted from a decoded certificate
#[derive(Debug, Clone)]
pub struct DecodedCert {
    /// Expiry instant (UTC)
    pub not_after: DateTime<Utc>,

    /// Signed whole days until expiry, negative once expired
    pub days_remaining: i64,

    /// Subject common name
    pub subject_common_name: String,
}

/// Decode the certificate at `path` against the current UTC clock.
pub fn decode(path: &Path) -> Result<DecodedCert, DecodeError> {
    decode_at(path, Utc::now())
}

/// Decode the certificate at `path`, computing remaining validity against a
/// caller-supplied instant.
///
/// Accepts PEM (`-----BEGIN CERTIFICATE-----`) or raw DER. `days_remaining`
/// is the floor of the signed duration in days, so a certificate that
/// expired an hour ago already reports -1.
pub fn decode_at(path: &Path, now: DateTime<Utc>) -> Result<DecodedCert, DecodeError> {
    let raw = fs::read(path).map_err(|source| DecodeError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let der = if raw.starts_with(b"-----BEGIN") {
        let (_, pem) = parse_x509_pem(&raw).map_err(|e| DecodeError::Malformed {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        pem.contents
    } else {
        raw
    };

    let (_, cert) = X509Certificate::from_der(&der).map_err(|e| DecodeError::Malformed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let expiry = cert.validity().not_after.timestamp();
    let not_after = Utc
        .timestamp_opt(expiry, 0)
        .single()
        .ok_or_else(|| DecodeError::InvalidExpiry {
            path: path.to_path_buf(),
        })?;

    let subject_common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string)
        .ok_or_else(|| DecodeError::MissingCommonName {
            path: path.to_path_buf(),
        })?;

    Ok(DecodedCert {
        not_after,
        days_remaining: whole_days(expiry - now.timestamp()),
        subject_common_name,
    })
}

/// Floor of a signed duration in days. Matches the agent's reporting
/// convention: anything short of a full remaining day counts down, so
/// -1 second is already day -1.
fn whole_days(delta_seconds: i64) -> i64 {
    delta_seconds.div_euclid(SECONDS_PER_DAY)
}
