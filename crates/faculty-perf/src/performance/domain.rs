use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier wrapper for a faculty member (email or staff id, as the data layer keys it).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacultyId(pub String);

impl FacultyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the data layer knows about one faculty member's activity.
///
/// Missing or `null` collections decode as empty and missing numbers as zero, so a
/// partially populated bundle always scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacultyActivityBundle {
    pub basic_info: Option<BasicInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub teachings: Vec<TeachingRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub publications: Vec<PublicationRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub guidance: Vec<GuidanceRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<AdministrativeRole>,
    #[serde(deserialize_with = "null_as_default")]
    pub development: Vec<DevelopmentProgram>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub innovations: Vec<Innovation>,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
    #[serde(deserialize_with = "null_as_default")]
    pub duties: Vec<ExamDuty>,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<CoCurricularActivity>,
}

impl FacultyActivityBundle {
    pub fn is_hod(&self) -> bool {
        self.basic_info.as_ref().is_some_and(|info| info.is_hod)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub is_hod: bool,
}

/// Weekly teaching load for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeachingRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub subject_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lecture_hours: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub tutorial_hours: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub practical_hours: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub extra_hours: u32,
}

impl TeachingRecord {
    /// Lecture, tutorial and practical hours; extra hours are tracked separately.
    pub fn contact_hours(&self) -> u64 {
        u64::from(self.lecture_hours)
            + u64::from(self.tutorial_hours)
            + u64::from(self.practical_hours)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub impact_factor: f64,
    pub level: RecognitionLevel,
    pub publication_type: PublicationType,
}

/// Funded research project. `amount_funded` is kept as the free-form text users enter
/// (for example `"₹12,50,000"`); numbers are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "amount_text")]
    pub amount_funded: String,
    /// Completion date as entered. Any recorded value marks the project completed,
    /// whether or not it reads as a calendar date.
    #[serde(deserialize_with = "truthy_text")]
    pub date_completed: Option<String>,
}

impl ProjectRecord {
    pub fn is_completed(&self) -> bool {
        self.date_completed.is_some()
    }

    /// The completion date when it is `YYYY-MM-DD` or RFC 3339.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.date_completed.as_deref().and_then(|raw| parse_date(raw.trim()))
    }
}

/// Research student supervised by the faculty member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidanceRecord {
    pub status: GuidanceStatus,
    pub degree: Degree,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdministrativeRole {
    #[serde(deserialize_with = "null_as_default")]
    pub role_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hours_spent: f64,
}

/// Workshop, conference or other faculty development programme attended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevelopmentProgram {
    #[serde(deserialize_with = "null_as_default")]
    pub duration_days: f64,
    pub event_type: EventType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub duration_hours: f64,
    pub cert_type: CertificationType,
}

/// Teaching innovation such as a flipped classroom or a new lab tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Innovation {
    #[serde(deserialize_with = "null_as_default")]
    pub hours_spent: f64,
    #[serde(deserialize_with = "truthy_text")]
    pub tool_used: Option<String>,
}

impl Innovation {
    /// A tool counts when any non-empty name was recorded.
    pub fn uses_tool(&self) -> bool {
        self.tool_used.as_deref().is_some_and(|tool| !tool.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub level: RecognitionLevel,
}

/// Examination duty (invigilation, paper setting, evaluation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamDuty {
    #[serde(deserialize_with = "null_as_default")]
    pub hours_spent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoCurricularActivity {
    #[serde(deserialize_with = "null_as_default")]
    pub hours_spent: f64,
    pub level: RecognitionLevel,
}

// Categorical fields arrive as the exact labels the entry forms use. Anything that is
// not one of the recognised labels (including a different casing) keeps its raw text
// and scores with the neutral multiplier.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($label => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok(match Value::deserialize(deserializer)? {
                    Value::String(label) => Self::from(label.as_str()),
                    Value::Null => Self::default(),
                    other => Self::Other(other.to_string()),
                })
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum! {
    /// Reach of a publication, award or co-curricular activity.
    RecognitionLevel {
        International => "International",
        National => "National",
    }
}

labelled_enum! {
    PublicationType {
        Journal => "Journal",
    }
}

labelled_enum! {
    GuidanceStatus {
        Completed => "Completed",
    }
}

labelled_enum! {
    Degree {
        PhD => "Ph.D.",
        MPhil => "M.Phil.",
    }
}

labelled_enum! {
    EventType {
        Workshop => "Workshop",
        Conference => "Conference",
    }
}

labelled_enum! {
    CertificationType {
        Professional => "Professional",
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Text(String),
    Number(serde_json::Number),
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AmountInput>::deserialize(deserializer)? {
        Some(AmountInput::Text(text)) => text,
        Some(AmountInput::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Keeps a loosely typed value as text. `null`, `false`, `0` and `""` count as absent;
/// anything else is kept as recorded.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(number) => (number.as_f64() != Some(0.0)).then(|| number.to_string()),
        Value::String(text) => (!text.is_empty()).then_some(text),
        other => Some(other.to_string()),
    })
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_decode_as_empty() {
        let bundle: FacultyActivityBundle = serde_json::from_value(json!({
            "teachings": null,
            "publications": [{ "impactFactor": null, "level": null }],
            "roles": [{ "roleTitle": "Exam Coordinator" }],
        }))
        .expect("bundle decodes");

        assert!(bundle.teachings.is_empty());
        assert!(bundle.basic_info.is_none());
        assert_eq!(bundle.publications[0].impact_factor, 0.0);
        assert_eq!(
            bundle.publications[0].level,
            RecognitionLevel::Other(String::new())
        );
        assert_eq!(bundle.roles[0].hours_spent, 0.0);
        assert!(!bundle.is_hod());
    }

    #[test]
    fn labels_match_exactly() {
        assert_eq!(RecognitionLevel::from("International"), RecognitionLevel::International);
        assert_eq!(
            RecognitionLevel::from("international"),
            RecognitionLevel::Other("international".to_string())
        );
        assert_eq!(Degree::from("Ph.D."), Degree::PhD);
        assert_eq!(Degree::from("PhD"), Degree::Other("PhD".to_string()));
    }

    #[test]
    fn labels_round_trip_through_json() {
        let award = Award {
            level: RecognitionLevel::Other("State".to_string()),
        };
        let value = serde_json::to_value(&award).expect("serializes");
        assert_eq!(value, json!({ "level": "State" }));

        let guidance: GuidanceRecord =
            serde_json::from_value(json!({ "status": "Completed", "degree": "M.Phil." }))
                .expect("decodes");
        assert_eq!(guidance.status, GuidanceStatus::Completed);
        assert_eq!(guidance.degree, Degree::MPhil);
    }

    #[test]
    fn project_amount_accepts_numbers_and_dates_accept_timestamps() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "amountFunded": 250000,
            "dateCompleted": "2024-03-31T00:00:00Z",
        }))
        .expect("decodes");

        assert_eq!(project.amount_funded, "250000");
        assert!(project.is_completed());
        assert_eq!(project.completed_on(), NaiveDate::from_ymd_opt(2024, 3, 31));

        let open: ProjectRecord =
            serde_json::from_value(json!({ "amountFunded": "5,00,000", "dateCompleted": "" }))
                .expect("decodes");
        assert!(!open.is_completed());
    }

    #[test]
    fn unrecognised_completion_date_still_marks_the_project_completed() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "amountFunded": "100",
            "dateCompleted": "31/03/2024",
        }))
        .expect("decodes");

        assert!(project.is_completed());
        assert_eq!(project.date_completed.as_deref(), Some("31/03/2024"));
        assert_eq!(project.completed_on(), None);

        for absent in [json!(null), json!(""), json!(false), json!(0)] {
            let project: ProjectRecord =
                serde_json::from_value(json!({ "dateCompleted": absent })).expect("decodes");
            assert!(!project.is_completed(), "{absent} should read as open");
        }
    }

    #[test]
    fn tool_used_follows_truthiness() {
        for (raw, used) in [
            (json!("Moodle"), true),
            (json!(true), true),
            (json!(1), true),
            (json!(2.5), true),
            (json!(""), false),
            (json!(false), false),
            (json!(0), false),
            (json!(null), false),
        ] {
            let innovation: Innovation =
                serde_json::from_value(json!({ "hoursSpent": 50, "toolUsed": raw }))
                    .expect("decodes");
            assert_eq!(innovation.uses_tool(), used, "toolUsed = {raw}");
        }
    }

    #[test]
    fn non_text_labels_score_as_unrecognised() {
        let award: Award = serde_json::from_value(json!({ "level": 3 })).expect("decodes");
        assert_eq!(award.level, RecognitionLevel::Other("3".to_string()));
    }

    #[test]
    fn tool_usage_requires_a_name() {
        let mut innovation = Innovation {
            hours_spent: 10.0,
            tool_used: Some(String::new()),
        };
        assert!(!innovation.uses_tool());
        innovation.tool_used = Some("Moodle".to_string());
        assert!(innovation.uses_tool());
    }
}
