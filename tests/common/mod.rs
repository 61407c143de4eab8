// Shared helpers for integration tests: build throwaway certificate roots.

use std::fs;
use std::path::Path;

use rcgen::{CertificateParams, DnType, KeyPair};
use time::{Duration, OffsetDateTime};

/// Write a self-signed certificate for `domain` under `root/<domain>/cert.pem`
/// expiring `days` from now, plus an hour of slack so whole-day arithmetic
/// stays stable while the test runs. Negative `days` produces an already
/// expired certificate.
pub fn write_cert(root: &Path, domain: &str, days: i64) {
    let mut params = CertificateParams::new(vec![domain.to_string()]).unwrap();
    params.distinguished_name.push(DnType::CommonName, domain);
    params.not_after = OffsetDateTime::now_utc() + Duration::days(days) + Duration::hours(1);
    params.not_before = params.not_after - Duration::days(365);

    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();

    let dir = root.join(domain);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("cert.pem"), cert.pem()).unwrap();
}

/// Domain directory without a certificate file.
pub fn write_empty_domain(root: &Path, domain: &str) {
    fs::create_dir_all(root.join(domain)).unwrap();
}

/// Domain directory holding garbage where the certificate should be.
pub fn write_broken_cert(root: &Path, domain: &str) {
    let dir = root.join(domain);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("cert.pem"), b"this is not a certificate").unwrap();
}
