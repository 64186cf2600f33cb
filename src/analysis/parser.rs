// src/analysis/parser.rs
//! Parsing of the LLM's analysis response into a typed record.

use crate::error::TailorError;

use super::JdAnalysis;

/// Parse the raw LLM response text into a [`JdAnalysis`].
///
/// The response must be a JSON object carrying all three expected fields;
/// anything else is a recoverable [`TailorError::MalformedAnalysis`].
/// Models sometimes wrap the object in markdown code fences, which are
/// tolerated.
pub fn parse_analysis(raw: &str) -> Result<JdAnalysis, TailorError> {
    let text = strip_code_fences(raw.trim());
    serde_json::from_str(text).map_err(|err| TailorError::malformed_analysis(err.to_string()))
}

fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim_end).unwrap_or(rest)
}
