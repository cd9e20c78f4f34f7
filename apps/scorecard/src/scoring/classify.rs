//! Percentage → qualitative label / severity tier, and percentile → band.
//!
//! Every threshold is inclusive on the better side: exactly 80 is Excellent
//! and good, exactly 60 is Average and warning.

use serde::{Deserialize, Serialize};

use crate::models::score::{Percentile, ScoringMode};

/// Five-band quality label. Variant order is the band order, worst first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLabel {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl QualityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLabel::NeedsImprovement => "Needs Improvement",
            QualityLabel::BelowAverage => "Below Average",
            QualityLabel::Average => "Average",
            QualityLabel::Good => "Good",
            QualityLabel::Excellent => "Excellent",
        }
    }
}

/// Three-band severity used for visual emphasis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical,
    Warning,
    Good,
}

pub fn quality_label(percent: f64) -> QualityLabel {
    match percent {
        p if p >= 80.0 => QualityLabel::Excellent,
        p if p >= 70.0 => QualityLabel::Good,
        p if p >= 60.0 => QualityLabel::Average,
        p if p >= 40.0 => QualityLabel::BelowAverage,
        _ => QualityLabel::NeedsImprovement,
    }
}

pub fn severity_tier(percent: f64) -> SeverityTier {
    match percent {
        p if p >= 80.0 => SeverityTier::Good,
        p if p >= 60.0 => SeverityTier::Warning,
        _ => SeverityTier::Critical,
    }
}

/// The eight fixed percentile standings, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileBand {
    Top1,
    Top5,
    Top10,
    Top25,
    AboveAverage,
    Average,
    BelowAverage,
    Bottom25,
}

impl PercentileBand {
    pub fn from_rank(rank: f64) -> Self {
        match rank {
            r if r <= 1.0 => PercentileBand::Top1,
            r if r <= 5.0 => PercentileBand::Top5,
            r if r <= 10.0 => PercentileBand::Top10,
            r if r <= 25.0 => PercentileBand::Top25,
            r if r <= 50.0 => PercentileBand::AboveAverage,
            r if r <= 65.0 => PercentileBand::Average,
            r if r <= 75.0 => PercentileBand::BelowAverage,
            // NaN lands here too
            _ => PercentileBand::Bottom25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PercentileBand::Top1 => "Top 1%",
            PercentileBand::Top5 => "Top 5%",
            PercentileBand::Top10 => "Top 10%",
            PercentileBand::Top25 => "Top 25%",
            PercentileBand::AboveAverage => "Above Average",
            PercentileBand::Average => "Average",
            PercentileBand::BelowAverage => "Below Average",
            PercentileBand::Bottom25 => "Bottom 25%",
        }
    }
}

/// Resolves a percentile to its display band. Labels pass through untouched,
/// ranks are bucketed.
pub fn resolve_percentile(percentile: &Percentile) -> String {
    match percentile {
        Percentile::Label(label) => label.clone(),
        Percentile::Rank(rank) => PercentileBand::from_rank(*rank).label().to_string(),
    }
}

/// Rank implied by an overall score when the scoring service sent no percentile.
pub fn rank_from_overall(overall_score: f64) -> f64 {
    100.0 - overall_score.clamp(0.0, 100.0)
}

/// Population the percentile band is measured against.
pub fn percentile_scope(mode: ScoringMode, industry: Option<&str>) -> String {
    match mode {
        ScoringMode::JobDescription => "among applicants for this role".to_string(),
        ScoringMode::ResumeOnly => match industry.map(str::trim).filter(|i| !i.is_empty()) {
            Some(industry) => format!("among {industry} resumes"),
            None => "among all resumes".to_string(),
        },
    }
}
