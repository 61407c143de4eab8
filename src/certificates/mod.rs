// Certificates module - discovery, decoding, and expiry aggregation

pub mod decoder;
pub mod discovery;
pub mod report;

// Re-export commonly used types
pub use decoder::DecodedCert;
pub use discovery::{discover, CERT_FILE_NAME};
pub use report::{count, filtered, CertificateRecord, RecordOutcome};
