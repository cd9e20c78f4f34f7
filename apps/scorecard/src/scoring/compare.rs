//! Side-by-side comparison of two score records.
//!
//! Both sides go through `build_view`, so the comparison dialog classifies
//! exactly like the detail card does.

use serde::{Deserialize, Serialize};

use crate::models::score::ScoreRecord;
use crate::scoring::view::{build_view, AggregateScoreView};
use crate::scoring::weights::Category;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    Left,
    Right,
    Tie,
}

impl Leader {
    fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Leader::Right
        } else if delta < 0.0 {
            Leader::Left
        } else {
            Leader::Tie
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: Category,
    pub label: String,
    pub left_percent: f64,
    pub right_percent: f64,
    /// `right - left`, in percentage points.
    pub delta: f64,
    pub leader: Leader,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub left: AggregateScoreView,
    pub right: AggregateScoreView,
    pub categories: Vec<CategoryComparison>,
    pub overall_delta: i16,
    pub overall_leader: Leader,
}

pub fn compare(left: &ScoreRecord, right: &ScoreRecord) -> ComparisonReport {
    let left = build_view(left);
    let right = build_view(right);

    let categories = left
        .categories
        .iter()
        .filter_map(|l| {
            let r = right.category(l.category)?;
            let delta = r.normalized_percent - l.normalized_percent;
            Some(CategoryComparison {
                category: l.category,
                label: l.label.clone(),
                left_percent: l.normalized_percent,
                right_percent: r.normalized_percent,
                delta,
                leader: Leader::from_delta(delta),
            })
        })
        .collect();

    let overall_delta = i16::from(right.overall_score) - i16::from(left.overall_score);

    ComparisonReport {
        overall_leader: Leader::from_delta(f64::from(overall_delta)),
        overall_delta,
        categories,
        left,
        right,
    }
}
