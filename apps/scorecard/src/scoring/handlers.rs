use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::score::ScoreRecord;
use crate::scoring::{build_view, compare, trend, AggregateScoreView, ComparisonReport, TrendReport};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompareRequest {
    pub left: ScoreRecord,
    pub right: ScoreRecord,
}

#[derive(Deserialize)]
pub struct TrendRequest {
    pub history: Vec<ScoreRecord>,
}

/// Decodes a JSON body into `T`, reporting shape mismatches in the service's
/// error envelope.
fn decode<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::UnprocessableEntity(e.to_string()))
}

/// POST /api/v1/scores/view
pub async fn handle_view(Json(body): Json<Value>) -> Result<Json<AggregateScoreView>, AppError> {
    let record: ScoreRecord = decode(body)?;
    let view = build_view(&record);
    debug!(
        overall_score = view.overall_score,
        overall_label = view.overall_quality_label.as_str(),
        section_count = view.section_count,
        fresh = view.is_fresh,
        "Built score view"
    );
    Ok(Json(view))
}

/// POST /api/v1/scores/compare
pub async fn handle_compare(
    Json(body): Json<Value>,
) -> Result<Json<ComparisonReport>, AppError> {
    let req: CompareRequest = decode(body)?;
    let report = compare(&req.left, &req.right);
    debug!(
        overall_delta = report.overall_delta,
        leader = ?report.overall_leader,
        "Compared score records"
    );
    Ok(Json(report))
}

/// POST /api/v1/scores/trend
pub async fn handle_trend(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TrendReport>, AppError> {
    let req: TrendRequest = decode(body)?;

    let max = state.config.max_history_len;
    if req.history.len() > max {
        return Err(AppError::Validation(format!(
            "history has {} records; at most {max} are accepted",
            req.history.len()
        )));
    }

    let report = trend(&req.history).ok_or_else(|| {
        AppError::Validation("history must contain at least one record".to_string())
    })?;
    debug!(records = report.records, "Computed score trend");
    Ok(Json(report))
}
