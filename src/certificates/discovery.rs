// Certificate Discovery - walk the certificate root and build status records

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::certificates::decoder;
use crate::certificates::report::CertificateRecord;

/// File the management agent writes for each domain
pub const CERT_FILE_NAME: &str = "cert.pem";

/// Scan `root` and produce one record per domain directory holding a
/// certificate file, sorted by domain name.
pub fn discover(root: &Path) -> Vec<CertificateRecord> {
    discover_at(root, Utc::now())
}

/// Scan against a caller-supplied clock instant.
///
/// A missing or unreadable root is not fatal: the error is logged and the
/// result is empty, so the service still answers with zero certificates.
/// Domain directories without a certificate file are skipped with a warning;
/// decode failures become error records instead of aborting the batch.
pub fn discover_at(root: &Path, now: DateTime<Utc>) -> Vec<CertificateRecord> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            error!("certificate root {} is not readable: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for entry in entries.flatten() {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let domain = entry.file_name().to_string_lossy().into_owned();

        let cert_path = dir.join(CERT_FILE_NAME);
        if !cert_path.is_file() {
            warn!("{} not found for domain {}", CERT_FILE_NAME, domain);
            continue;
        }

        info!("loading certificate for domain {}", domain);
        let record = match decoder::decode_at(&cert_path, now) {
            Ok(cert) => CertificateRecord::valid(domain, &cert),
            Err(e) => {
                error!(
                    "failed to decode certificate at {}: {}",
                    cert_path.display(),
                    e
                );
                CertificateRecord::failed(domain, e.to_string())
            }
        };
        records.push(record);
    }

    // Filesystem enumeration order is not stable across platforms; sort so
    // responses are reproducible.
    records.sort_by(|a, b| a.domain.cmp(&b.domain));
    records
}
