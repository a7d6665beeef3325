//! Faculty activity intake, performance scoring, and HTTP exposure.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdministrativeRole, Award, BasicInfo, CertificationType, Certification, CoCurricularActivity,
    Degree, DevelopmentProgram, EventType, ExamDuty, FacultyActivityBundle, FacultyId,
    GuidanceRecord, GuidanceStatus, Innovation, ProjectRecord, PublicationRecord,
    PublicationType, RecognitionLevel, TeachingRecord,
};
pub use import::{
    load_bundle_from_path, load_bundles, load_bundles_from_path, ImportError,
    TeachingLoadImporter,
};
pub use repository::{BundleRepository, InMemoryBundleRepository, RepositoryError};
pub use router::performance_router;
pub use scoring::{ComponentScores, Grade, PerformanceScorer, ScoreBreakdown, ScoreReport};
pub use service::{PerformanceService, PerformanceServiceError};
