//! Parses the grading model's JSON verdict. The schema is fixed: a reply
//! that does not match it exactly is an error for the caller to handle, not
//! something to repair here.

use serde::Deserialize;
use thiserror::Error;

/// Verdict returned by the grading model. Field names are Spanish because
/// they are shown to students as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeResult {
    pub es_correcto: bool,
    pub puntaje: f64,
    pub errores: Vec<String>,
    pub sugerencias: Vec<String>,
    pub observaciones: String,
}

#[derive(Debug, Error)]
pub enum GradeParseError {
    #[error("reply is not valid verdict JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("puntaje {0} is outside 0-100")]
    ScoreOutOfRange(f64),
}

/// Parses a model reply into a [`GradeResult`]. Models wrap JSON in a
/// Markdown code fence often enough that a surrounding ```` ```json ````
/// fence is tolerated; anything else must already be the bare JSON object.
pub fn parse_grade_result(raw: &str) -> Result<GradeResult, GradeParseError> {
    let result: GradeResult = serde_json::from_str(strip_code_fence(raw))?;

    if !(0.0..=100.0).contains(&result.puntaje) {
        return Err(GradeParseError::ScoreOutOfRange(result.puntaje));
    }

    Ok(result)
}

fn strip_code_fence(reply: &str) -> &str {
    let reply = reply.trim();

    // Models fence with ```json, ```JSON or a bare ``` interchangeably.
    let body = match reply.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("```json") => &reply[7..],
        _ => reply.strip_prefix("```").unwrap_or(reply),
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}
