// Certificate Routes

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::api::{models::error::ApiError, state::AppState};
use crate::certificates::{report, CertificateRecord};

/// Expiry threshold query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExpiryQuery {
    /// Only include certificates expiring within this many days
    pub warn_days: Option<String>,
}

impl ExpiryQuery {
    /// Parsed threshold.
    ///
    /// Permissive parse-or-default contract: absent, empty, or non-integer
    /// input means "no filter", never a request failure.
    pub fn warn_days(&self) -> Option<i64> {
        self.warn_days
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }
}

/// List certificate status records
///
/// Scans the certificate root and returns one record per domain, optionally
/// limited to certificates expiring within `warn_days`.
#[utoipa::path(
    get,
    path = "/",
    tag = "certificates",
    params(ExpiryQuery),
    responses(
        (status = 200, description = "Certificate status records", body = [CertificateRecord])
    )
)]
pub async fn list_certificates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpiryQuery>,
) -> Result<Json<Vec<CertificateRecord>>, ApiError> {
    let warn_days = query.warn_days();
    info!("warn_days param: {:?}", warn_days);

    let records = scan(&state, warn_days).await?;
    info!("returning {} certificate records", records.len());
    Ok(Json(records))
}

/// Count certificate status records
///
/// Same filter semantics as the listing; the body is the decimal count as
/// plain text.
#[utoipa::path(
    get,
    path = "/count",
    tag = "certificates",
    params(ExpiryQuery),
    responses(
        (status = 200, description = "Number of matching records", body = String, content_type = "text/plain")
    )
)]
pub async fn count_certificates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpiryQuery>,
) -> Result<String, ApiError> {
    let records = scan(&state, query.warn_days()).await?;
    let count = records.len();
    info!("returning count: {}", count);
    Ok(count.to_string())
}

/// Run the blocking filesystem scan off the async scheduler.
async fn scan(
    state: &AppState,
    warn_days: Option<i64>,
) -> Result<Vec<CertificateRecord>, ApiError> {
    let root = state.config.certs_dir.clone();
    tokio::task::spawn_blocking(move || report::filtered(&root, warn_days))
        .await
        .map_err(|e| ApiError::Internal(format!("certificate scan task failed: {}", e)))
}
