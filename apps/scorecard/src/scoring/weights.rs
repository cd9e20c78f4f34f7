use serde::{Deserialize, Serialize};

use crate::models::score::ScoreRecord;

/// The six weighted score categories, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    SkillsAlignment,
    WorkExperience,
    Achievements,
    EducationQuality,
    Certifications,
    ContentStructure,
}

/// Category → max points. Sums to 100.
pub const CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::SkillsAlignment, 25.0),
    (Category::WorkExperience, 25.0),
    (Category::Achievements, 20.0),
    (Category::EducationQuality, 15.0),
    (Category::Certifications, 10.0),
    (Category::ContentStructure, 5.0),
];

impl Category {
    pub fn max_points(self) -> f64 {
        CATEGORY_WEIGHTS
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Field name in the score record, as sent over the wire.
    pub fn key(self) -> &'static str {
        match self {
            Category::SkillsAlignment => "skillsAlignment",
            Category::WorkExperience => "workExperience",
            Category::Achievements => "achievements",
            Category::EducationQuality => "educationQuality",
            Category::Certifications => "certifications",
            Category::ContentStructure => "contentStructure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::SkillsAlignment => "Skills Alignment",
            Category::WorkExperience => "Work Experience",
            Category::Achievements => "Achievements",
            Category::EducationQuality => "Education Quality",
            Category::Certifications => "Certifications",
            Category::ContentStructure => "Content Structure",
        }
    }

    /// Raw points for this category; `None` when the scoring service left it out.
    pub fn raw_score(self, record: &ScoreRecord) -> Option<f64> {
        match self {
            Category::SkillsAlignment => record.skills_alignment,
            Category::WorkExperience => record.work_experience,
            Category::Achievements => record.achievements,
            Category::EducationQuality => record.education_quality,
            Category::Certifications => record.certifications,
            Category::ContentStructure => record.content_structure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_100() {
        let total: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_points_lookup() {
        assert_eq!(Category::SkillsAlignment.max_points(), 25.0);
        assert_eq!(Category::WorkExperience.max_points(), 25.0);
        assert_eq!(Category::Achievements.max_points(), 20.0);
        assert_eq!(Category::EducationQuality.max_points(), 15.0);
        assert_eq!(Category::Certifications.max_points(), 10.0);
        assert_eq!(Category::ContentStructure.max_points(), 5.0);
    }

    #[test]
    fn test_key_matches_serialized_name() {
        for (category, _) in CATEGORY_WEIGHTS {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json.as_str(), Some(category.key()));
        }
    }

    #[test]
    fn test_raw_score_reads_matching_field() {
        let record = ScoreRecord {
            achievements: Some(14.0),
            ..Default::default()
        };
        assert_eq!(Category::Achievements.raw_score(&record), Some(14.0));
        assert_eq!(Category::Certifications.raw_score(&record), None);
    }
}
