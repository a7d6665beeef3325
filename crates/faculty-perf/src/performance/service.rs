use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{FacultyActivityBundle, FacultyId};
use super::repository::{BundleRepository, RepositoryError};
use super::scoring::{PerformanceScorer, ScoreReport};

/// Service composing the bundle repository with the scorer.
pub struct PerformanceService<R> {
    repository: Arc<R>,
    scorer: PerformanceScorer,
}

impl<R> PerformanceService<R>
where
    R: BundleRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            scorer: PerformanceScorer::new(),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Load the faculty member's bundle and score it.
    pub fn calculate(&self, id: &FacultyId) -> Result<ScoreReport, PerformanceServiceError> {
        let bundle = match self.repository.fetch(id) {
            Ok(Some(bundle)) => bundle,
            Ok(None) | Err(RepositoryError::NotFound) => {
                warn!(faculty_id = %id, "no activity bundle for faculty");
                return Err(PerformanceServiceError::NotFound(id.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        let report = self.calculate_bundle(&bundle)?;
        debug!(
            faculty_id = %id,
            total_score = report.total_score,
            grade = %report.grade,
            "performance calculated"
        );
        Ok(report)
    }

    /// Score a bundle supplied directly by the caller.
    pub fn calculate_bundle(
        &self,
        bundle: &FacultyActivityBundle,
    ) -> Result<ScoreReport, PerformanceServiceError> {
        let report = self.scorer.score(bundle);
        if !report.total_score.is_finite() {
            return Err(PerformanceServiceError::Computation(format!(
                "total score {} is not a finite number",
                report.total_score
            )));
        }
        Ok(report)
    }

    /// Replace the stored bundle for a faculty member.
    pub fn register(
        &self,
        id: FacultyId,
        bundle: FacultyActivityBundle,
    ) -> Result<(), PerformanceServiceError> {
        debug!(faculty_id = %id, "storing activity bundle");
        self.repository.store(id, bundle)?;
        Ok(())
    }
}

/// Error raised by the performance service.
#[derive(Debug, thiserror::Error)]
pub enum PerformanceServiceError {
    #[error("faculty {0} not found")]
    NotFound(FacultyId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("failed to calculate performance: {0}")]
    Computation(String),
}
