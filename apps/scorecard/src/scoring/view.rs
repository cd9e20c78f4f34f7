use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::score::{MissingQualification, Percentile, ScoreRecord, ScoringMode};
use crate::scoring::classify::{
    percentile_scope, quality_label, rank_from_overall, resolve_percentile, severity_tier,
    QualityLabel, SeverityTier,
};
use crate::scoring::completeness::{evaluate_completeness, CompletenessWarning};
use crate::scoring::normalize::normalize;
use crate::scoring::weights::{Category, CATEGORY_WEIGHTS};

/// One weighted category, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: Category,
    pub label: String,
    pub raw_value: f64,
    pub max_value: f64,
    pub normalized_percent: f64,
    pub quality_label: QualityLabel,
    pub severity_tier: SeverityTier,
    pub is_missing: bool,
}

/// Everything a score display surface needs, derived from one `ScoreRecord`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateScoreView {
    pub id: Option<String>,
    pub is_fresh: bool,
    pub overall_score: u8,
    pub overall_quality_label: QualityLabel,
    pub overall_severity_tier: SeverityTier,
    pub percentile: String,
    pub percentile_scope: String,
    pub scoring_mode: ScoringMode,
    pub industry: Option<String>,
    pub categories: Vec<CategoryView>,
    pub keyword_relevance: Option<f64>,
    pub missing_or_low_sections: Vec<String>,
    pub section_count: usize,
    pub completeness_warning: Option<CompletenessWarning>,
    pub suggested_skills: Vec<String>,
    pub improvement_tips: Vec<String>,
    pub elite_indicators: Vec<String>,
    pub missing_qualifications: Vec<MissingQualification>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl AggregateScoreView {
    pub fn category(&self, category: Category) -> Option<&CategoryView> {
        self.categories.iter().find(|c| c.category == category)
    }
}

pub fn category_view(category: Category, raw: Option<f64>) -> CategoryView {
    let raw_value = raw.filter(|v| !v.is_nan()).unwrap_or(0.0);
    let max_value = category.max_points();
    let normalized_percent = normalize(raw_value, max_value);

    CategoryView {
        category,
        label: category.label().to_string(),
        raw_value,
        max_value,
        normalized_percent,
        quality_label: quality_label(normalized_percent),
        severity_tier: severity_tier(normalized_percent),
        is_missing: raw_value == 0.0,
    }
}

/// Overall score as a display integer in `[0, 100]`.
pub fn overall_score(record: &ScoreRecord) -> u8 {
    let overall = record
        .overall_score
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    overall.round() as u8
}

pub fn build_view(record: &ScoreRecord) -> AggregateScoreView {
    let overall = overall_score(record);
    let overall_percent = f64::from(overall);

    let categories = CATEGORY_WEIGHTS
        .iter()
        .map(|(category, _)| category_view(*category, category.raw_score(record)))
        .collect();

    let percentile = match &record.percentile {
        Some(p) => resolve_percentile(p),
        None => resolve_percentile(&Percentile::Rank(rank_from_overall(overall_percent))),
    };

    let completeness = evaluate_completeness(record);

    AggregateScoreView {
        id: record.id.clone(),
        is_fresh: record.is_fresh(),
        overall_score: overall,
        overall_quality_label: quality_label(overall_percent),
        overall_severity_tier: severity_tier(overall_percent),
        percentile,
        percentile_scope: percentile_scope(record.scoring_mode(), record.industry.as_deref()),
        scoring_mode: record.scoring_mode(),
        industry: record.industry.clone(),
        categories,
        keyword_relevance: record.keyword_relevance,
        missing_or_low_sections: completeness.missing_or_low_sections,
        section_count: completeness.section_count,
        completeness_warning: completeness.completeness_warning,
        suggested_skills: record.suggested_skills.clone().unwrap_or_default(),
        improvement_tips: record.improvement_tips.clone().unwrap_or_default(),
        elite_indicators: record.elite_indicators_found.clone().unwrap_or_default(),
        missing_qualifications: record.missing_qualifications.clone().unwrap_or_default(),
        timestamp: record.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::completeness::CompletenessWarningKind;

    fn sample_record() -> ScoreRecord {
        ScoreRecord {
            id: Some("score-42".to_string()),
            overall_score: Some(78.0),
            skills_alignment: Some(21.0),
            work_experience: Some(18.0),
            achievements: Some(12.0),
            education_quality: Some(12.0),
            certifications: Some(5.0),
            content_structure: Some(4.0),
            keyword_relevance: Some(66.0),
            industry: Some("Data Science".to_string()),
            suggested_skills: Some(vec!["SQL".to_string(), "Airflow".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_view_is_idempotent() {
        let record = sample_record();
        assert_eq!(build_view(&record), build_view(&record));
    }

    #[test]
    fn test_categories_follow_weight_table_order() {
        let view = build_view(&sample_record());
        let order: Vec<Category> = view.categories.iter().map(|c| c.category).collect();
        let expected: Vec<Category> = CATEGORY_WEIGHTS.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_category_classification() {
        let view = build_view(&sample_record());

        let skills = view.category(Category::SkillsAlignment).unwrap();
        assert_eq!(skills.normalized_percent, 84.0);
        assert_eq!(skills.quality_label, QualityLabel::Excellent);
        assert_eq!(skills.severity_tier, SeverityTier::Good);

        let achievements = view.category(Category::Achievements).unwrap();
        assert_eq!(achievements.normalized_percent, 60.0);
        assert_eq!(achievements.quality_label, QualityLabel::Average);
        assert_eq!(achievements.severity_tier, SeverityTier::Warning);

        let certs = view.category(Category::Certifications).unwrap();
        assert_eq!(certs.normalized_percent, 50.0);
        assert_eq!(certs.severity_tier, SeverityTier::Critical);
        assert!(!certs.is_missing);
    }

    #[test]
    fn test_overall_fields() {
        let view = build_view(&sample_record());
        assert_eq!(view.overall_score, 78);
        assert_eq!(view.overall_quality_label, QualityLabel::Good);
        assert_eq!(view.overall_severity_tier, SeverityTier::Warning);
        // no percentile sent: rank 22 → Top 25%
        assert_eq!(view.percentile, "Top 25%");
        assert_eq!(view.percentile_scope, "among Data Science resumes");
        assert_eq!(view.section_count, 5);
        assert!(view.completeness_warning.is_none());
        assert!(!view.is_fresh);
        assert_eq!(view.keyword_relevance, Some(66.0));
    }

    #[test]
    fn test_string_percentile_ignores_overall() {
        let record = ScoreRecord {
            overall_score: Some(12.0),
            percentile: Some(Percentile::Label("Top 5%".to_string())),
            ..Default::default()
        };
        assert_eq!(build_view(&record).percentile, "Top 5%");
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let record = ScoreRecord {
            overall_score: Some(140.0),
            skills_alignment: Some(40.0),
            work_experience: Some(-5.0),
            ..Default::default()
        };
        let view = build_view(&record);
        assert_eq!(view.overall_score, 100);
        assert_eq!(
            view.category(Category::SkillsAlignment).unwrap().normalized_percent,
            100.0
        );
        let work = view.category(Category::WorkExperience).unwrap();
        assert_eq!(work.normalized_percent, 0.0);
        assert_eq!(work.raw_value, -5.0);
    }

    #[test]
    fn test_empty_record_view() {
        let view = build_view(&ScoreRecord::default());
        assert_eq!(view.overall_score, 0);
        assert!(view.is_fresh);
        assert!(view.categories.iter().all(|c| c.is_missing));
        assert_eq!(view.percentile, "Bottom 25%");
        assert!(view.suggested_skills.is_empty());
        assert!(view.improvement_tips.is_empty());
        assert!(view.missing_qualifications.is_empty());
        assert_eq!(
            view.completeness_warning.unwrap().kind,
            CompletenessWarningKind::EmptyResume
        );
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let json = serde_json::to_value(build_view(&sample_record())).unwrap();
        assert_eq!(json["overallScore"], 78);
        assert_eq!(json["categories"][0]["category"], "skillsAlignment");
        assert_eq!(json["categories"][0]["qualityLabel"], "Excellent");
        assert_eq!(json["categories"][0]["severityTier"], "good");
        assert_eq!(json["missingOrLowSections"], serde_json::json!([]));
    }
}
