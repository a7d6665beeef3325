mod categories;
mod grade;
mod insights;
mod money;

pub use categories::{
    AdditionalScore, AdministrativeScore, ProfessionalScore, ResearchScore, TeachingScore,
    ADDITIONAL_CAP, ADMINISTRATIVE_CAP, INNOVATION_CAP, PROFESSIONAL_CAP, RESEARCH_CAP,
    TEACHING_CAP,
};
pub use grade::Grade;
pub use insights::MAX_INSIGHTS;
pub use money::parse_amount;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::FacultyActivityBundle;
use categories::{
    capped, score_additional, score_administrative, score_innovation, score_professional,
    score_research, score_teaching,
};
use insights::generate_insights;

/// Stateless scorer folding an activity bundle into a capped, weighted report.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceScorer;

impl PerformanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Every sub-metric the report is built from, before rounding.
    pub fn breakdown(&self, bundle: &FacultyActivityBundle) -> ScoreBreakdown {
        ScoreBreakdown {
            teaching: score_teaching(&bundle.teachings),
            research: score_research(&bundle.publications, &bundle.projects, &bundle.guidance),
            administrative: score_administrative(&bundle.roles, bundle.is_hod()),
            professional: score_professional(&bundle.development, &bundle.certifications),
            innovation: score_innovation(&bundle.innovations),
            additional: score_additional(&bundle.awards, &bundle.duties, &bundle.activities),
        }
    }

    pub fn score(&self, bundle: &FacultyActivityBundle) -> ScoreReport {
        self.score_at(bundle, Utc::now())
    }

    /// Same as [`score`](Self::score) with a caller supplied timestamp.
    pub fn score_at(&self, bundle: &FacultyActivityBundle, at: DateTime<Utc>) -> ScoreReport {
        self.breakdown(bundle).into_report(at)
    }
}

/// Sub-metrics per category; insights are driven from these rather than the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub teaching: TeachingScore,
    pub research: ResearchScore,
    pub administrative: AdministrativeScore,
    pub professional: ProfessionalScore,
    pub innovation: f64,
    pub additional: AdditionalScore,
}

impl ScoreBreakdown {
    pub fn component_scores(&self) -> ComponentScores {
        ComponentScores {
            teaching: self.teaching.total(),
            research: self.research.total(),
            administrative: self.administrative.total(),
            professional: self.professional.total(),
            innovation: capped(self.innovation, INNOVATION_CAP),
            additional: self.additional.total(),
        }
    }

    pub fn insights(&self) -> Vec<String> {
        generate_insights(self)
    }

    pub fn into_report(self, last_updated: DateTime<Utc>) -> ScoreReport {
        let component_scores = self.component_scores();
        let total_score = round_to_cents(component_scores.sum());

        ScoreReport {
            total_score,
            component_scores,
            grade: Grade::from_total(total_score),
            insights: self.insights(),
            last_updated,
        }
    }
}

/// Capped contribution of each category to the 0–100 total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub teaching: f64,
    pub research: f64,
    pub administrative: f64,
    pub professional: f64,
    pub innovation: f64,
    pub additional: f64,
}

impl ComponentScores {
    pub fn sum(&self) -> f64 {
        self.teaching
            + self.research
            + self.administrative
            + self.professional
            + self.innovation
            + self.additional
    }
}

/// Result handed to report renderers and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub total_score: f64,
    pub component_scores: ComponentScores,
    pub grade: Grade,
    pub insights: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl ScoreReport {
    /// Compares everything except `last_updated`.
    pub fn same_outcome(&self, other: &ScoreReport) -> bool {
        self.total_score == other.total_score
            && self.component_scores == other.component_scores
            && self.grade == other.grade
            && self.insights == other.insights
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
