use serde::{Deserialize, Serialize};

use crate::models::score::ScoreRecord;
use crate::scoring::view::{category_view, overall_score};
use crate::scoring::weights::CATEGORY_WEIGHTS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetric {
    pub metric: String,
    pub label: String,
    pub latest: f64,
    pub previous: Option<f64>,
    pub delta: Option<f64>,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub records: usize,
    pub latest_id: Option<String>,
    pub metrics: Vec<TrendMetric>,
}

fn metric(metric: &str, label: &str, latest: f64, previous: Option<f64>) -> TrendMetric {
    let delta = previous.map(|p| latest - p);
    let direction = match delta {
        Some(d) if d > 0.0 => Direction::Up,
        Some(d) if d < 0.0 => Direction::Down,
        _ => Direction::Flat,
    };
    TrendMetric {
        metric: metric.to_string(),
        label: label.to_string(),
        latest,
        previous,
        delta,
        direction,
    }
}

/// Latest-vs-previous movement across a score history.
///
/// Records are ordered by timestamp; undated records keep their input order
/// and sort ahead of dated ones. Category metrics are normalized percents,
/// keyword relevance is reported raw.
pub fn trend(history: &[ScoreRecord]) -> Option<TrendReport> {
    let mut ordered: Vec<&ScoreRecord> = history.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    let (latest, rest) = ordered.split_last()?;
    let previous = rest.last().copied();

    let mut metrics = vec![metric(
        "overallScore",
        "Overall Score",
        f64::from(overall_score(latest)),
        previous.map(|p| f64::from(overall_score(p))),
    )];

    for (category, _) in CATEGORY_WEIGHTS {
        let now = category_view(*category, category.raw_score(latest));
        let before = previous.map(|p| category_view(*category, category.raw_score(p)));
        metrics.push(metric(
            category.key(),
            category.label(),
            now.normalized_percent,
            before.map(|b| b.normalized_percent),
        ));
    }

    metrics.push(metric(
        "keywordRelevance",
        "Keyword Relevance",
        latest.keyword_relevance.unwrap_or(0.0),
        previous.map(|p| p.keyword_relevance.unwrap_or(0.0)),
    ));

    Some(TrendReport {
        records: history.len(),
        latest_id: latest.id.clone(),
        metrics,
    })
}
