use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Id carried by a record that was just computed and has not been cached yet.
pub const FRESH_SCORE_ID: &str = "temp";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMode {
    #[default]
    ResumeOnly,
    JobDescription,
}

/// Percentile as delivered by the scoring service: either an already resolved
/// label or a numeric rank. Resolved to a band once, in `scoring::classify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Percentile {
    Label(String),
    Rank(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissingQualification {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub importance: String,
    #[serde(default)]
    pub how_to_acquire: String,
}

/// Score record produced by the external resume-scoring service.
///
/// Every field is optional: partially populated records are normal, absent
/// numbers read as 0 and a timestamp that cannot be parsed reads as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: Option<String>,
    pub overall_score: Option<f64>,
    pub skills_alignment: Option<f64>,
    pub work_experience: Option<f64>,
    pub achievements: Option<f64>,
    pub education_quality: Option<f64>,
    pub certifications: Option<f64>,
    pub content_structure: Option<f64>,
    pub keyword_relevance: Option<f64>,
    pub industry: Option<String>,
    pub percentile: Option<Percentile>,
    pub suggested_skills: Option<Vec<String>>,
    pub improvement_tips: Option<Vec<String>>,
    #[serde(alias = "eliteIndicators")]
    pub elite_indicators_found: Option<Vec<String>>,
    pub missing_qualifications: Option<Vec<MissingQualification>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    pub scoring_mode: Option<ScoringMode>,
}

/// Display formats the scoring service has been seen to emit, tried after RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Best-effort timestamp parsing. Accepts RFC 3339, the display formats above
/// (read as UTC), a bare date and epoch milliseconds; anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_timestamp(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}

impl ScoreRecord {
    /// Scoring mode, with an absent or null mode read as `ResumeOnly`.
    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring_mode.unwrap_or_default()
    }

    pub fn is_fresh(&self) -> bool {
        match self.id.as_deref() {
            None => true,
            Some(id) => id == FRESH_SCORE_ID,
        }
    }
}
