use super::ScoreBreakdown;

/// Reports never carry more suggestions than this.
pub const MAX_INSIGHTS: usize = 6;

type Rule = (fn(&ScoreBreakdown) -> bool, &'static str);

// Evaluated in order; the order is the priority when truncating.
const RULES: [Rule; 10] = [
    (
        |b: &ScoreBreakdown| b.teaching.hours < 10.0,
        "Increase teaching hours and engagement in core subjects",
    ),
    (
        |b: &ScoreBreakdown| b.teaching.diversity < 3.0,
        "Consider teaching a wider variety of subjects",
    ),
    (
        |b: &ScoreBreakdown| b.research.publications < 10.0,
        "Focus on publishing in high-impact international journals",
    ),
    (
        |b: &ScoreBreakdown| b.research.projects < 3.0,
        "Seek more funded research projects",
    ),
    (
        |b: &ScoreBreakdown| b.administrative.roles < 7.0,
        "Take up more administrative responsibilities",
    ),
    (
        |b: &ScoreBreakdown| b.professional.training < 7.0,
        "Participate in more professional development programs",
    ),
    (
        |b: &ScoreBreakdown| b.professional.certifications < 3.0,
        "Obtain relevant professional certifications",
    ),
    (
        |b: &ScoreBreakdown| b.innovation < 7.0,
        "Implement more innovative teaching methodologies",
    ),
    (
        |b: &ScoreBreakdown| b.additional.awards < 2.0,
        "Work towards achieving recognition in your field",
    ),
    (
        |b: &ScoreBreakdown| b.additional.activities < 2.0,
        "Increase participation in co-curricular activities",
    ),
];

pub(crate) fn generate_insights(breakdown: &ScoreBreakdown) -> Vec<String> {
    RULES
        .iter()
        .filter(|(applies, _)| applies(breakdown))
        .take(MAX_INSIGHTS)
        .map(|(_, message)| message.to_string())
        .collect()
}
