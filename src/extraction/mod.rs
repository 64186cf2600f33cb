// src/extraction/mod.rs
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub mod company;
pub mod locator;
pub mod page;
pub mod scoring;
pub mod seniority;

pub use locator::locate;
pub use page::{PageDocument, PageFetcher};
pub use scoring::JdScorer;

/// Maximum stored length of an extracted job description, in characters.
pub const MAX_JD_CHARS: usize = 10_000;

/// A captured job description. Created once per extraction, immutable
/// afterwards; a later extraction supersedes it rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdRecord {
    pub jd_text: String,
    pub company: String,
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Capture time, epoch milliseconds.
    pub timestamp: i64,
}

impl JdRecord {
    /// Build a record from winning JD text, truncated to [`MAX_JD_CHARS`]
    /// and stamped with the current wall clock.
    pub fn new(jd_text: String, company: String, source_url: String, title: Option<String>) -> Self {
        Self {
            jd_text: truncate_chars(jd_text, MAX_JD_CHARS),
            company,
            source_url,
            title,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Record for pasted JD text, the manual-input fallback path.
    pub fn manual(jd_text: String) -> Self {
        Self::new(jd_text, String::new(), "manual-input".to_string(), None)
    }
}

/// A text fragment considered for being the JD, paired with its score.
/// Produced per candidate element during location and discarded once the
/// best one is chosen.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub text: String,
    pub score: f32,
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text,
    }
}
