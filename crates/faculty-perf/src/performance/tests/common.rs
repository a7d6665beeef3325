use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::performance::domain::{
    AdministrativeRole, Award, BasicInfo, Certification, CertificationType,
    CoCurricularActivity, Degree, DevelopmentProgram, EventType, ExamDuty, FacultyActivityBundle,
    FacultyId, GuidanceRecord, GuidanceStatus, Innovation, ProjectRecord, PublicationRecord,
    PublicationType, RecognitionLevel, TeachingRecord,
};
use crate::performance::repository::{
    BundleRepository, InMemoryBundleRepository, RepositoryError,
};
use crate::performance::service::PerformanceService;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn scored_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn teaching(subject: &str, lecture: u32, tutorial: u32, practical: u32, extra: u32) -> TeachingRecord {
    TeachingRecord {
        subject_name: subject.to_string(),
        lecture_hours: lecture,
        tutorial_hours: tutorial,
        practical_hours: practical,
        extra_hours: extra,
    }
}

pub(super) fn publication(
    impact_factor: f64,
    level: RecognitionLevel,
    kind: PublicationType,
) -> PublicationRecord {
    PublicationRecord {
        impact_factor,
        level,
        publication_type: kind,
    }
}

pub(super) fn project(amount: &str, completed: Option<NaiveDate>) -> ProjectRecord {
    ProjectRecord {
        amount_funded: amount.to_string(),
        date_completed: completed.map(|date| date.to_string()),
    }
}

pub(super) fn role(title: &str, hours: f64) -> AdministrativeRole {
    AdministrativeRole {
        role_title: title.to_string(),
        hours_spent: hours,
    }
}

/// A mid-career profile that scores in every category without saturating any cap.
pub(super) fn sample_bundle() -> FacultyActivityBundle {
    FacultyActivityBundle {
        basic_info: Some(BasicInfo { is_hod: false }),
        teachings: vec![
            teaching("Data Structures", 60, 10, 20, 10),
            teaching("Operating Systems", 45, 0, 30, 5),
        ],
        publications: vec![
            publication(2.5, RecognitionLevel::National, PublicationType::Journal),
            publication(
                1.0,
                RecognitionLevel::Other("Regional".to_string()),
                PublicationType::Other("Conference".to_string()),
            ),
        ],
        projects: vec![
            project("₹12,00,000", NaiveDate::from_ymd_opt(2024, 3, 31)),
            project("5,00,000", None),
        ],
        guidance: vec![
            GuidanceRecord {
                status: GuidanceStatus::Completed,
                degree: Degree::PhD,
            },
            GuidanceRecord {
                status: GuidanceStatus::Other("Ongoing".to_string()),
                degree: Degree::MPhil,
            },
        ],
        roles: vec![
            role("Exam Coordinator", 120.0),
            role("NAAC Committee Member", 50.0),
        ],
        development: vec![
            DevelopmentProgram {
                duration_days: 5.0,
                event_type: EventType::Workshop,
            },
            DevelopmentProgram {
                duration_days: 2.0,
                event_type: EventType::Conference,
            },
            DevelopmentProgram {
                duration_days: 4.0,
                event_type: EventType::Other("Seminar".to_string()),
            },
        ],
        certifications: vec![
            Certification {
                duration_hours: 40.0,
                cert_type: CertificationType::Professional,
            },
            Certification {
                duration_hours: 20.0,
                cert_type: CertificationType::Other("MOOC".to_string()),
            },
        ],
        innovations: vec![
            Innovation {
                hours_spent: 100.0,
                tool_used: Some("Moodle".to_string()),
            },
            Innovation {
                hours_spent: 25.0,
                tool_used: None,
            },
        ],
        awards: vec![Award {
            level: RecognitionLevel::National,
        }],
        duties: vec![ExamDuty { hours_spent: 80.0 }],
        activities: vec![CoCurricularActivity {
            hours_spent: 50.0,
            level: RecognitionLevel::National,
        }],
    }
}

/// Reaches every category cap exactly, for a total of 100.
pub(super) fn full_marks_bundle() -> FacultyActivityBundle {
    FacultyActivityBundle {
        basic_info: Some(BasicInfo { is_hod: true }),
        teachings: vec![
            teaching("Compilers", 40, 10, 10, 10),
            teaching("Databases", 40, 10, 10, 10),
            teaching("Networks", 40, 10, 10, 10),
            teaching("Algorithms", 40, 10, 10, 10),
            teaching("Machine Learning", 40, 10, 10, 10),
        ],
        publications: vec![publication(
            10.0,
            RecognitionLevel::International,
            PublicationType::Journal,
        )],
        projects: vec![project("₹50,00,000", NaiveDate::from_ymd_opt(2023, 12, 1))],
        guidance: vec![
            GuidanceRecord {
                status: GuidanceStatus::Completed,
                degree: Degree::PhD,
            },
            GuidanceRecord {
                status: GuidanceStatus::Completed,
                degree: Degree::PhD,
            },
        ],
        roles: vec![role("Head of Department", 500.0)],
        development: vec![DevelopmentProgram {
            duration_days: 14.0,
            event_type: EventType::Conference,
        }],
        certifications: vec![Certification {
            duration_hours: 160.0,
            cert_type: CertificationType::Professional,
        }],
        innovations: vec![Innovation {
            hours_spent: 500.0,
            tool_used: Some("Jupyter".to_string()),
        }],
        awards: vec![
            Award {
                level: RecognitionLevel::International,
            },
            Award {
                level: RecognitionLevel::International,
            },
        ],
        duties: vec![ExamDuty { hours_spent: 300.0 }],
        activities: vec![CoCurricularActivity {
            hours_spent: 100.0,
            level: RecognitionLevel::International,
        }],
    }
}

pub(super) fn build_service() -> (
    PerformanceService<InMemoryBundleRepository>,
    Arc<InMemoryBundleRepository>,
) {
    let repository = Arc::new(InMemoryBundleRepository::with_bundles([
        (FacultyId::new("asha.rao@college.edu"), sample_bundle()),
        (FacultyId::new("hod.cse@college.edu"), full_marks_bundle()),
    ]));
    let service = PerformanceService::new(repository.clone());
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl BundleRepository for UnavailableRepository {
    fn fetch(&self, _id: &FacultyId) -> Result<Option<FacultyActivityBundle>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn store(&self, _id: FacultyId, _bundle: FacultyActivityBundle) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn faculty_ids(&self) -> Result<Vec<FacultyId>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
