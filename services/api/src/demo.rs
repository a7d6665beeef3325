use clap::Args;
use faculty_perf::error::AppError;
use faculty_perf::performance::{
    load_bundle_from_path, load_bundles, BundleRepository, ImportError, InMemoryBundleRepository,
    PerformanceScorer, PerformanceService, ScoreBreakdown, ScoreReport, TeachingLoadImporter,
};
use faculty_perf::performance::scoring::{
    ADDITIONAL_CAP, ADMINISTRATIVE_CAP, INNOVATION_CAP, PROFESSIONAL_CAP, RESEARCH_CAP,
    TEACHING_CAP,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Activity bundle JSON for one faculty member
    #[arg(long)]
    pub(crate) bundle: PathBuf,
    /// Teaching-load CSV export; replaces the bundle's teaching records when given
    #[arg(long)]
    pub(crate) teaching_csv: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Include per-category sub-metrics in the text output
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        bundle,
        teaching_csv,
        json,
    } = args;

    let mut activity = load_bundle_from_path(&bundle)?;
    if let Some(path) = teaching_csv {
        activity.teachings = TeachingLoadImporter::from_path(path)?;
    }

    let scorer = PerformanceScorer::new();
    let report = scorer.score(&activity);
    if json {
        print_json(&report)?;
    } else {
        let label = bundle.display().to_string();
        render_report(&label, &report, Some(&scorer.breakdown(&activity)));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { json, breakdown } = args;

    let repository = Arc::new(sample_repository()?);
    let service = PerformanceService::new(repository.clone());
    let scorer = PerformanceScorer::new();

    if !json {
        println!("Faculty performance demo");
    }

    for id in repository.faculty_ids()? {
        let report = service.calculate(&id)?;
        if json {
            print_json(&report)?;
            continue;
        }

        let sub_metrics = if breakdown {
            repository
                .fetch(&id)?
                .map(|bundle| scorer.breakdown(&bundle))
        } else {
            None
        };
        println!();
        render_report(id.as_str(), &report, sub_metrics.as_ref());
    }

    Ok(())
}

fn print_json(report: &ScoreReport) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(report)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_report(label: &str, report: &ScoreReport, breakdown: Option<&ScoreBreakdown>) {
    println!("Performance report: {label}");
    println!(
        "Total score: {:.2} / 100 | grade {}",
        report.total_score, report.grade
    );
    println!("Last updated: {}", report.last_updated.format("%Y-%m-%d %H:%M UTC"));

    let scores = &report.component_scores;
    println!("\nComponent scores");
    for (name, value, cap) in [
        ("Teaching", scores.teaching, TEACHING_CAP),
        ("Research", scores.research, RESEARCH_CAP),
        ("Administrative", scores.administrative, ADMINISTRATIVE_CAP),
        ("Professional development", scores.professional, PROFESSIONAL_CAP),
        ("Innovation", scores.innovation, INNOVATION_CAP),
        ("Additional contributions", scores.additional, ADDITIONAL_CAP),
    ] {
        println!("- {name}: {value:.2} / {cap:.0}");
    }

    if let Some(parts) = breakdown {
        println!("\nSub-metrics");
        println!(
            "- Teaching: hours {:.2} | diversity {:.2} | extra {:.2}",
            parts.teaching.hours, parts.teaching.diversity, parts.teaching.extra
        );
        println!(
            "- Research: publications {:.2} | projects {:.2} | guidance {:.2}",
            parts.research.publications, parts.research.projects, parts.research.guidance
        );
        println!(
            "- Administrative: roles {:.2} | HOD bonus {:.2}",
            parts.administrative.roles, parts.administrative.hod_bonus
        );
        println!(
            "- Professional: training {:.2} | certifications {:.2}",
            parts.professional.training, parts.professional.certifications
        );
        println!(
            "- Additional: awards {:.2} | exam duties {:.2} | activities {:.2}",
            parts.additional.awards, parts.additional.duties, parts.additional.activities
        );
    }

    if report.insights.is_empty() {
        println!("\nInsights: none");
    } else {
        println!("\nInsights");
        for insight in &report.insights {
            println!("- {insight}");
        }
    }
}

const SAMPLE_DEPARTMENT: &str = r#"{
    "hod.cse@college.edu": {
        "basicInfo": { "isHod": true },
        "teachings": [
            { "subjectName": "Operating Systems", "lectureHours": 45, "tutorialHours": 15, "practicalHours": 30, "extraHours": 10 },
            { "subjectName": "Distributed Systems", "lectureHours": 40, "tutorialHours": 10, "practicalHours": 20, "extraHours": 8 },
            { "subjectName": "Research Methodology", "lectureHours": 30, "tutorialHours": 0, "practicalHours": 0, "extraHours": 4 }
        ],
        "publications": [
            { "impactFactor": 4.1, "level": "International", "publicationType": "Journal" },
            { "impactFactor": 1.2, "level": "National", "publicationType": "Journal" }
        ],
        "projects": [
            { "amountFunded": "₹24,00,000", "dateCompleted": "2024-03-31" }
        ],
        "guidance": [
            { "status": "Completed", "degree": "Ph.D." },
            { "status": "Completed", "degree": "M.Phil." }
        ],
        "roles": [
            { "roleTitle": "Head of Department", "hoursSpent": 260 },
            { "roleTitle": "NAAC Coordinator", "hoursSpent": 80 }
        ],
        "development": [ { "durationDays": 5, "eventType": "Conference" } ],
        "certifications": [ { "durationHours": 40, "certType": "Professional" } ],
        "innovations": [ { "hoursSpent": 90, "toolUsed": "Moodle" } ],
        "awards": [ { "level": "National" } ],
        "duties": [ { "hoursSpent": 60 } ],
        "activities": [ { "hoursSpent": 30, "level": "State" } ]
    },
    "lecturer.maths@college.edu": {
        "basicInfo": { "isHod": false },
        "teachings": [
            { "subjectName": "Linear Algebra", "lectureHours": 60, "tutorialHours": 20, "practicalHours": 0, "extraHours": 6 }
        ],
        "development": [ { "durationDays": 2, "eventType": "Seminar" } ],
        "duties": [ { "hoursSpent": 45 } ]
    }
}"#;

fn sample_repository() -> Result<InMemoryBundleRepository, ImportError> {
    let bundles = load_bundles(SAMPLE_DEPARTMENT.as_bytes())?;
    Ok(InMemoryBundleRepository::with_bundles(bundles))
}
