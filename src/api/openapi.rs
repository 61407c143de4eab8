// OpenAPI Documentation

use utoipa::OpenApi;

use crate::api::{
    models::{error::ApiErrorResponse, response::HealthResponse},
    routes,
};
use crate::certificates::{CertificateRecord, RecordOutcome};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::certificates::list_certificates,
        routes::certificates::count_certificates,
        routes::health::health_check,
    ),
    components(
        schemas(
            CertificateRecord,
            RecordOutcome,
            HealthResponse,
            ApiErrorResponse,
        )
    ),
    tags(
        (name = "certificates", description = "Certificate expiry status queries"),
        (name = "health", description = "Health check"),
    ),
    info(
        title = "certpulse API",
        description = r#"
# certpulse REST API

Read-only reporter for the expiry status of TLS certificates managed on disk
(one `cert.pem` per domain directory under the certificate root).

Every request re-reads the filesystem and re-parses every certificate, so the
response always reflects the current state of the root. Certificates that
cannot be decoded are reported with an `error` field instead of expiry data.
"#,
        license(
            name = "GPL-3.0",
            url = "https://www.gnu.org/licenses/gpl-3.0.en.html"
        )
    )
)]
pub struct ApiDoc;
