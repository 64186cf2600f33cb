// src/extraction/locator.rs
//! Locates the job description on a page by scoring candidate elements
//! from an ordered descriptor list, with a whole-page fallback.

use tracing::{debug, info};

use super::company;
use super::page::PageDocument;
use super::scoring::JdScorer;
use super::{JdRecord, ScoredCandidate};

/// Structural descriptors likely to contain a job description. All
/// candidates are scored, so ordering does not affect which text wins.
const JD_DESCRIPTORS: &[&str] = &[
    "[class*=\"job-description\"]",
    "[class*=\"description\"]",
    "[class*=\"posting\"]",
    "[class*=\"position\"]",
    "[id*=\"job-description\"]",
    "[id*=\"description\"]",
    "article",
    ".content",
    "main",
    ".jobs-description__content",
    "#jobDescriptionText",
    ".jobDescriptionContent",
    "[class*=\"job-detail\"]",
    "[class*=\"requirement\"]",
];

/// Minimum plausible length for a job description, in characters.
const MIN_JD_CHARS: usize = 100;

/// Below this best score the whole page text is scored as well.
const FULL_PAGE_FALLBACK_BELOW: f32 = 0.5;

/// The winner must exceed this score to be accepted at all.
const ACCEPT_THRESHOLD: f32 = 0.3;

/// Locate the best job description candidate on the page.
///
/// Returns `None` when no candidate clears the confidence threshold or
/// the winning text is too short — a normal "not found" outcome, distinct
/// from a fetch error signalled by the calling layer.
pub fn locate(page: &PageDocument, scorer: &JdScorer) -> Option<JdRecord> {
    let mut best = ScoredCandidate {
        text: String::new(),
        score: 0.0,
    };

    for descriptor in JD_DESCRIPTORS {
        for text in page.select_texts(descriptor) {
            if text.chars().count() > MIN_JD_CHARS {
                let score = scorer.score(&text);
                if score > best.score {
                    best = ScoredCandidate { text, score };
                }
            }
        }
    }

    // Weak selector matches: see whether the page as a whole reads more
    // like a job description than any single container.
    if best.score < FULL_PAGE_FALLBACK_BELOW {
        let body = page.body_text();
        let score = scorer.score(&body);
        if score > best.score {
            best = ScoredCandidate { text: body, score };
        }
    }

    if best.score <= ACCEPT_THRESHOLD || best.text.chars().count() < MIN_JD_CHARS {
        debug!(
            "no confident job description on {} (best score {:.2})",
            page.url(),
            best.score
        );
        return None;
    }

    info!(
        "located job description on {} (score {:.2})",
        page.url(),
        best.score
    );

    let company = company::find_company_name(page);
    Some(JdRecord::new(
        best.text,
        company,
        page.url().to_string(),
        page.title(),
    ))
}
