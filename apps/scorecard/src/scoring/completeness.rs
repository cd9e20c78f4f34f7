use serde::{Deserialize, Serialize};

use crate::models::score::ScoreRecord;
use crate::scoring::normalize::normalize;
use crate::scoring::weights::Category;

/// Sections checked for the missing/low list, in report order.
const CORE_SECTIONS: &[(&str, Category)] = &[
    ("Skills", Category::SkillsAlignment),
    ("Work Experience", Category::WorkExperience),
    ("Achievements", Category::Achievements),
    ("Education", Category::EducationQuality),
];

/// Sections counted toward `section_count`. Certifications count here but are
/// never reported as missing.
const COUNTED_SECTIONS: &[Category] = &[
    Category::SkillsAlignment,
    Category::WorkExperience,
    Category::Achievements,
    Category::EducationQuality,
    Category::Certifications,
];

/// Sections below this normalized percent are reported as low.
const LOW_SECTION_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CompletenessWarningKind {
    EmptyResume,
    SingleSection,
    MultipleSectionsMissing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessWarning {
    pub kind: CompletenessWarningKind,
    pub severity: WarningSeverity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub missing_or_low_sections: Vec<String>,
    pub section_count: usize,
    pub completeness_warning: Option<CompletenessWarning>,
}

/// Falsy scores: absent, zero or NaN.
fn is_missing(raw: Option<f64>) -> bool {
    match raw {
        None => true,
        Some(v) => v == 0.0 || v.is_nan(),
    }
}

pub fn evaluate_completeness(record: &ScoreRecord) -> CompletenessReport {
    let missing_or_low_sections = CORE_SECTIONS
        .iter()
        .filter(|(_, category)| {
            let raw = category.raw_score(record);
            is_missing(raw)
                || normalize(raw.unwrap_or(0.0), category.max_points()) < LOW_SECTION_THRESHOLD
        })
        .map(|(name, _)| name.to_string())
        .collect();

    let section_count = COUNTED_SECTIONS
        .iter()
        .filter(|category| category.raw_score(record).is_some_and(|v| v > 0.0))
        .count();

    CompletenessReport {
        missing_or_low_sections,
        section_count,
        completeness_warning: completeness_warning(section_count),
    }
}

pub fn completeness_warning(section_count: usize) -> Option<CompletenessWarning> {
    let (kind, message) = match section_count {
        0 => (
            CompletenessWarningKind::EmptyResume,
            "Your resume appears empty or could not be read. Add your skills, experience and education to get an accurate score.",
        ),
        1 => (
            CompletenessWarningKind::SingleSection,
            "Your resume contains only one section. Add more sections to give recruiters a complete picture.",
        ),
        2 => (
            CompletenessWarningKind::MultipleSectionsMissing,
            "Your resume is missing multiple important sections.",
        ),
        _ => return None,
    };

    Some(CompletenessWarning {
        kind,
        severity: WarningSeverity::Critical,
        message: message.to_string(),
    })
}
