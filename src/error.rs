// src/error.rs
use thiserror::Error;

/// Failure taxonomy for the tailoring workflow.
///
/// Every variant is recoverable: extraction misses fall back to manual
/// input, fetch and analysis failures are surfaced to the user for an
/// explicit retry. Nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum TailorError {
    /// No candidate on the page cleared the confidence threshold.
    /// This is a normal "not found" outcome, not a transport failure.
    #[error("no confident job description match found on the page")]
    ExtractionNotFound,

    /// Network or HTTP-level failure reaching the page or the LLM service.
    #[error("fetch failed: {reason}")]
    Fetch { reason: String },

    /// The LLM response could not be parsed into the expected structure.
    #[error("analysis response was malformed: {reason}")]
    MalformedAnalysis { reason: String },

    /// A required user-supplied field was empty.
    #[error("required input missing: {what}")]
    UserInputMissing { what: String },
}

impl TailorError {
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch {
            reason: reason.into(),
        }
    }

    pub fn malformed_analysis(reason: impl Into<String>) -> Self {
        Self::MalformedAnalysis {
            reason: reason.into(),
        }
    }

    pub fn missing_input(what: impl Into<String>) -> Self {
        Self::UserInputMissing { what: what.into() }
    }
}

impl From<reqwest::Error> for TailorError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch {
            reason: err.to_string(),
        }
    }
}
