use crate::models::catalog::{BuildReport, Catalog};
use crate::services::auth::CredentialVerifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type Gate = Arc<dyn CredentialVerifier + Send + Sync>;

/// Shared by every request handler. The catalog is fully built before the
/// state exists and is never mutated afterwards, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub gate: Gate,
    pub report: BuildReport,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, report: BuildReport, gate: Gate) -> Self {
        Self {
            catalog: Arc::new(catalog),
            gate,
            report,
            loaded_at: Utc::now(),
        }
    }
}
