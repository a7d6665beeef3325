use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{
    AdministrativeRole, Award, Certification, CertificationType, CoCurricularActivity, Degree,
    DevelopmentProgram, EventType, ExamDuty, GuidanceRecord, GuidanceStatus, Innovation,
    ProjectRecord, PublicationRecord, PublicationType, RecognitionLevel, TeachingRecord,
};
use super::money::parse_amount;

pub const TEACHING_CAP: f64 = 25.0;
pub const RESEARCH_CAP: f64 = 25.0;
pub const ADMINISTRATIVE_CAP: f64 = 15.0;
pub const PROFESSIONAL_CAP: f64 = 15.0;
pub const INNOVATION_CAP: f64 = 10.0;
pub const ADDITIONAL_CAP: f64 = 10.0;

const TEACHING_HOURS_CAP: f64 = 15.0;
const TEACHING_HOURS_TARGET: f64 = 300.0;
const SUBJECT_DIVERSITY_CAP: f64 = 5.0;
const SUBJECT_DIVERSITY_TARGET: f64 = 5.0;
const EXTRA_HOURS_CAP: f64 = 5.0;
const EXTRA_HOURS_TARGET: f64 = 50.0;

const PUBLICATION_CAP: f64 = 15.0;
const PUBLICATION_TARGET: f64 = 10.0;
const PROJECT_CAP: f64 = 5.0;
const FUNDING_UNIT: f64 = 1_000_000.0;
const GUIDANCE_CAP: f64 = 5.0;
const GUIDANCE_TARGET: f64 = 5.0;

const ROLE_CAP: f64 = 10.0;
const ROLE_HOURS_UNIT: f64 = 100.0;
const HOD_BONUS: f64 = 5.0;

const TRAINING_CAP: f64 = 10.0;
const TRAINING_POINTS_PER_DAY: f64 = 0.5;
const CERTIFICATION_CAP: f64 = 5.0;
const CERTIFICATION_HOURS_UNIT: f64 = 40.0;

const INNOVATION_HOURS_UNIT: f64 = 50.0;

const AWARDS_CAP: f64 = 4.0;
const DUTIES_CAP: f64 = 3.0;
const DUTY_HOURS_UNIT: f64 = 100.0;
const ACTIVITIES_CAP: f64 = 3.0;
const ACTIVITY_HOURS_UNIT: f64 = 50.0;

/// Bounds a sub-score to `[0, cap]`. NaN collapses to zero.
pub(crate) fn capped(value: f64, cap: f64) -> f64 {
    value.max(0.0).min(cap)
}

/// `min(raw / target * cap, cap)`, the normalisation most sub-scores share.
fn normalized(raw: f64, target: f64, cap: f64) -> f64 {
    capped(raw / target * cap, cap)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingScore {
    pub hours: f64,
    pub diversity: f64,
    pub extra: f64,
}

impl TeachingScore {
    pub fn total(&self) -> f64 {
        capped(self.hours + self.diversity + self.extra, TEACHING_CAP)
    }
}

pub(crate) fn score_teaching(records: &[TeachingRecord]) -> TeachingScore {
    let contact_hours: u64 = records.iter().map(TeachingRecord::contact_hours).sum();
    let extra_hours: u64 = records
        .iter()
        .map(|record| u64::from(record.extra_hours))
        .sum();
    let subjects: HashSet<&str> = records
        .iter()
        .map(|record| record.subject_name.as_str())
        .collect();

    TeachingScore {
        hours: normalized(
            contact_hours as f64,
            TEACHING_HOURS_TARGET,
            TEACHING_HOURS_CAP,
        ),
        diversity: normalized(
            subjects.len() as f64,
            SUBJECT_DIVERSITY_TARGET,
            SUBJECT_DIVERSITY_CAP,
        ),
        extra: normalized(extra_hours as f64, EXTRA_HOURS_TARGET, EXTRA_HOURS_CAP),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchScore {
    pub publications: f64,
    pub projects: f64,
    pub guidance: f64,
}

impl ResearchScore {
    pub fn total(&self) -> f64 {
        capped(self.publications + self.projects + self.guidance, RESEARCH_CAP)
    }
}

pub(crate) fn score_research(
    publications: &[PublicationRecord],
    projects: &[ProjectRecord],
    guidance: &[GuidanceRecord],
) -> ResearchScore {
    let publication_points: f64 = publications
        .iter()
        .map(|publication| {
            publication.impact_factor
                * publication_level_weight(&publication.level)
                * publication_type_weight(&publication.publication_type)
        })
        .sum();

    // Funding is counted in millions and capped without a target divisor.
    let funding_points: f64 = projects
        .iter()
        .map(|project| {
            let completion = if project.is_completed() { 1.2 } else { 1.0 };
            parse_amount(&project.amount_funded) / FUNDING_UNIT * completion
        })
        .sum();

    let guidance_points: f64 = guidance
        .iter()
        .map(|record| guidance_status_weight(&record.status) * degree_weight(&record.degree))
        .sum();

    ResearchScore {
        publications: normalized(publication_points, PUBLICATION_TARGET, PUBLICATION_CAP),
        projects: capped(funding_points, PROJECT_CAP),
        guidance: normalized(guidance_points, GUIDANCE_TARGET, GUIDANCE_CAP),
    }
}

fn publication_level_weight(level: &RecognitionLevel) -> f64 {
    match level {
        RecognitionLevel::International => 2.0,
        RecognitionLevel::National => 1.5,
        RecognitionLevel::Other(_) => 1.0,
    }
}

fn publication_type_weight(kind: &PublicationType) -> f64 {
    match kind {
        PublicationType::Journal => 1.2,
        PublicationType::Other(_) => 1.0,
    }
}

fn guidance_status_weight(status: &GuidanceStatus) -> f64 {
    match status {
        GuidanceStatus::Completed => 1.5,
        GuidanceStatus::Other(_) => 1.0,
    }
}

fn degree_weight(degree: &Degree) -> f64 {
    match degree {
        Degree::PhD => 2.0,
        Degree::MPhil => 1.5,
        Degree::Other(_) => 1.0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeScore {
    pub roles: f64,
    pub hod_bonus: f64,
}

impl AdministrativeScore {
    pub fn total(&self) -> f64 {
        capped(self.roles + self.hod_bonus, ADMINISTRATIVE_CAP)
    }
}

pub(crate) fn score_administrative(roles: &[AdministrativeRole], is_hod: bool) -> AdministrativeScore {
    let role_points: f64 = roles
        .iter()
        .map(|role| role.hours_spent / ROLE_HOURS_UNIT * role_importance(&role.role_title))
        .sum();

    AdministrativeScore {
        roles: capped(role_points, ROLE_CAP),
        hod_bonus: if is_hod { HOD_BONUS } else { 0.0 },
    }
}

/// Titles are free text; "head" outranks "coordinator" wherever either appears.
fn role_importance(title: &str) -> f64 {
    let title = title.to_lowercase();
    if title.contains("head") {
        2.0
    } else if title.contains("coordinator") {
        1.5
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalScore {
    pub training: f64,
    pub certifications: f64,
}

impl ProfessionalScore {
    pub fn total(&self) -> f64 {
        capped(self.training + self.certifications, PROFESSIONAL_CAP)
    }
}

pub(crate) fn score_professional(
    programs: &[DevelopmentProgram],
    certifications: &[Certification],
) -> ProfessionalScore {
    let training_points: f64 = programs
        .iter()
        .map(|program| {
            let weight = match program.event_type {
                EventType::Workshop => 1.2,
                EventType::Conference => 1.5,
                EventType::Other(_) => 1.0,
            };
            program.duration_days * TRAINING_POINTS_PER_DAY * weight
        })
        .sum();

    let certification_points: f64 = certifications
        .iter()
        .map(|certification| {
            let weight = match certification.cert_type {
                CertificationType::Professional => 1.5,
                CertificationType::Other(_) => 1.0,
            };
            certification.duration_hours / CERTIFICATION_HOURS_UNIT * weight
        })
        .sum();

    ProfessionalScore {
        training: capped(training_points, TRAINING_CAP),
        certifications: capped(certification_points, CERTIFICATION_CAP),
    }
}

pub(crate) fn score_innovation(innovations: &[Innovation]) -> f64 {
    let points: f64 = innovations
        .iter()
        .map(|innovation| {
            let weight = if innovation.uses_tool() { 1.2 } else { 1.0 };
            innovation.hours_spent / INNOVATION_HOURS_UNIT * weight
        })
        .sum();

    capped(points, INNOVATION_CAP)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalScore {
    pub awards: f64,
    pub duties: f64,
    pub activities: f64,
}

impl AdditionalScore {
    pub fn total(&self) -> f64 {
        capped(self.awards + self.duties + self.activities, ADDITIONAL_CAP)
    }
}

pub(crate) fn score_additional(
    awards: &[Award],
    duties: &[ExamDuty],
    activities: &[CoCurricularActivity],
) -> AdditionalScore {
    let award_points: f64 = awards
        .iter()
        .map(|award| match award.level {
            RecognitionLevel::International => 2.0,
            RecognitionLevel::National => 1.5,
            RecognitionLevel::Other(_) => 1.0,
        })
        .sum();

    let duty_points: f64 = duties
        .iter()
        .map(|duty| duty.hours_spent / DUTY_HOURS_UNIT)
        .sum();

    let activity_points: f64 = activities
        .iter()
        .map(|activity| {
            let weight = match activity.level {
                RecognitionLevel::International => 1.5,
                RecognitionLevel::National => 1.2,
                RecognitionLevel::Other(_) => 1.0,
            };
            activity.hours_spent / ACTIVITY_HOURS_UNIT * weight
        })
        .sum();

    AdditionalScore {
        awards: capped(award_points, AWARDS_CAP),
        duties: capped(duty_points, DUTIES_CAP),
        activities: capped(activity_points, ACTIVITIES_CAP),
    }
}
