// Certificate Report - status records and warn-threshold filtering

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::certificates::decoder::DecodedCert;
use crate::certificates::discovery;

/// Timestamp pattern used for `not_after` in responses
const NOT_AFTER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Expiry status for one discovered domain
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateRecord {
    /// Domain directory name under the certificate root
    pub domain: String,

    #[serde(flatten)]
    pub outcome: RecordOutcome,
}

/// Decode outcome: either the expiry triple or the failure message,
/// never a partial mix of the two
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecordOutcome {
    Valid {
        /// Expiry instant, UTC, `YYYY-MM-DD HH:MM:SS`
        not_after: String,

        /// Signed whole days until expiry, negative once expired
        days_remaining: i64,

        /// Subject common name
        subject: String,
    },
    Failed {
        /// Why the certificate could not be decoded
        error: String,
    },
}

impl CertificateRecord {
    pub fn valid(domain: String, cert: &DecodedCert) -> Self {
        Self {
            domain,
            outcome: RecordOutcome::Valid {
                not_after: cert.not_after.format(NOT_AFTER_FORMAT).to_string(),
                days_remaining: cert.days_remaining,
                subject: cert.subject_common_name.clone(),
            },
        }
    }

    pub fn failed(domain: String, error: String) -> Self {
        Self {
            domain,
            outcome: RecordOutcome::Failed { error },
        }
    }

    /// Days until expiry; `None` when decoding failed.
    pub fn days_remaining(&self) -> Option<i64> {
        match &self.outcome {
            RecordOutcome::Valid { days_remaining, .. } => Some(*days_remaining),
            RecordOutcome::Failed { .. } => None,
        }
    }

    /// Whether this record survives a `warn_days` threshold.
    ///
    /// No threshold keeps everything. With a threshold, only certificates
    /// whose remaining validity is at or below it match; records without a
    /// comparable `days_remaining` (decode failures) never match, so an
    /// unparsable certificate is not reported as expiring soon.
    pub fn matches_warn_days(&self, warn_days: Option<i64>) -> bool {
        match warn_days {
            None => true,
            Some(limit) => self.days_remaining().is_some_and(|days| days <= limit),
        }
    }
}

/// Discover certificates under `root` and apply the optional `warn_days`
/// threshold. Pure function of the filesystem and clock; nothing is cached.
pub fn filtered(root: &Path, warn_days: Option<i64>) -> Vec<CertificateRecord> {
    filtered_at(root, warn_days, Utc::now())
}

/// `filtered` against a caller-supplied clock instant.
pub fn filtered_at(
    root: &Path,
    warn_days: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<CertificateRecord> {
    let records = discovery::discover_at(root, now);
    let Some(limit) = warn_days else {
        return records;
    };

    let before = records.len();
    let kept: Vec<_> = records
        .into_iter()
        .filter(|r| r.matches_warn_days(Some(limit)))
        .collect();
    info!(
        "filtered certificates: {} of {} (<= {} days)",
        kept.len(),
        before,
        limit
    );
    kept
}

/// Number of records matching the threshold.
pub fn count(root: &Path, warn_days: Option<i64>) -> usize {
    filtered(root, warn_days).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_record(domain: &str, days_remaining: i64) -> CertificateRecord {
        let not_after = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        CertificateRecord::valid(
            domain.to_string(),
            &DecodedCert {
                not_after,
                days_remaining,
                subject_common_name: domain.to_string(),
            },
        )
    }

    #[test]
    fn test_no_threshold_keeps_everything() {
        assert!(valid_record("a.example", 500).matches_warn_days(None));
        assert!(valid_record("b.example", -3).matches_warn_days(None));
        assert!(CertificateRecord::failed("c.example".into(), "boom".into())
            .matches_warn_days(None));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let record = valid_record("a.example", 30);
        assert!(record.matches_warn_days(Some(30)));
        assert!(record.matches_warn_days(Some(31)));
        assert!(!record.matches_warn_days(Some(29)));
    }

    #[test]
    fn test_expired_always_matches() {
        let record = valid_record("a.example", -7);
        assert!(record.matches_warn_days(Some(0)));
    }

    #[test]
    fn test_failed_records_never_match_a_threshold() {
        let record = CertificateRecord::failed("broken.net".into(), "bad cert".into());
        assert!(!record.matches_warn_days(Some(i64::MAX)));
        assert_eq!(record.days_remaining(), None);
    }

    #[test]
    fn test_valid_record_serialization_shape() {
        let json = serde_json::to_value(valid_record("example.com", 10)).unwrap();

        assert_eq!(json["domain"], "example.com");
        assert_eq!(json["not_after"], "2026-12-31 23:59:59");
        assert_eq!(json["days_remaining"], 10);
        assert_eq!(json["subject"], "example.com");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_record_serialization_shape() {
        let record = CertificateRecord::failed("broken.net".into(), "bad cert".into());
        let json = serde_json::to_value(record).unwrap();

        assert_eq!(json["domain"], "broken.net");
        assert_eq!(json["error"], "bad cert");
        assert!(json.get("days_remaining").is_none());
        assert!(json.get("not_after").is_none());
    }
}
