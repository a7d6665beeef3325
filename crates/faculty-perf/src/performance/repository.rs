use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::domain::{FacultyActivityBundle, FacultyId};

/// Data-access seam: whatever assembles a faculty member's records from storage.
pub trait BundleRepository: Send + Sync {
    fn fetch(&self, id: &FacultyId) -> Result<Option<FacultyActivityBundle>, RepositoryError>;
    fn store(&self, id: FacultyId, bundle: FacultyActivityBundle) -> Result<(), RepositoryError>;
    fn faculty_ids(&self) -> Result<Vec<FacultyId>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the CLI, the demo server and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBundleRepository {
    bundles: Arc<RwLock<BTreeMap<FacultyId, FacultyActivityBundle>>>,
}

impl InMemoryBundleRepository {
    pub fn with_bundles(bundles: impl IntoIterator<Item = (FacultyId, FacultyActivityBundle)>) -> Self {
        Self {
            bundles: Arc::new(RwLock::new(bundles.into_iter().collect())),
        }
    }

    pub fn len(&self) -> usize {
        self.bundles.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BundleRepository for InMemoryBundleRepository {
    fn fetch(&self, id: &FacultyId) -> Result<Option<FacultyActivityBundle>, RepositoryError> {
        let guard = self
            .bundles
            .read()
            .map_err(|_| RepositoryError::Unavailable("bundle store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn store(&self, id: FacultyId, bundle: FacultyActivityBundle) -> Result<(), RepositoryError> {
        let mut guard = self
            .bundles
            .write()
            .map_err(|_| RepositoryError::Unavailable("bundle store poisoned".to_string()))?;
        guard.insert(id, bundle);
        Ok(())
    }

    fn faculty_ids(&self) -> Result<Vec<FacultyId>, RepositoryError> {
        let guard = self
            .bundles
            .read()
            .map_err(|_| RepositoryError::Unavailable("bundle store poisoned".to_string()))?;
        Ok(guard.keys().cloned().collect())
    }
}
