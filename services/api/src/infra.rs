use faculty_perf::error::AppError;
use faculty_perf::performance::{load_bundles_from_path, InMemoryBundleRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the in-memory store, pre-loaded from a bundle export when one is configured.
pub(crate) fn seed_repository(path: Option<&Path>) -> Result<InMemoryBundleRepository, AppError> {
    let Some(path) = path else {
        warn!("no faculty data path configured; starting with an empty repository");
        return Ok(InMemoryBundleRepository::default());
    };

    let bundles = load_bundles_from_path(path)?;
    let repository = InMemoryBundleRepository::with_bundles(bundles);
    info!(
        path = %path.display(),
        faculty = repository.len(),
        "loaded faculty activity bundles"
    );
    Ok(repository)
}
