// src/extraction/scoring.rs
//! Heuristic scoring of text blocks for job-description likeness.

use regex::Regex;

/// Keywords that indicate job description content. Each hit adds
/// [`KEYWORD_WEIGHT`] to the score.
const JD_KEYWORDS: &[&str] = &[
    "requirements",
    "qualifications",
    "responsibilities",
    "experience",
    "skills",
    "about the role",
    "job description",
    "position",
    "salary",
    "benefits",
    "required",
    "preferred",
    "education",
    "background",
    "knowledge",
    "opportunity",
    "team",
    "work with",
];

const KEYWORD_WEIGHT: f32 = 0.1;

/// Bonus patterns with their weights. Matched against the original-case
/// text, case-insensitively.
const BONUS_PATTERNS: &[(&str, f32)] = &[
    (r"(?i)\d+\+?\s*(year|yr)s?\s*(of\s*)?experience", 0.2),
    (r"(?i)bachelor'?s?\s*degree", 0.2),
    (r"(?i)full[\s-]time|part[\s-]time", 0.2),
    (r"(?i)we\s*(are\s*)?looking\s*for", 0.2),
    (r"(?i)apply|join|hiring", 0.1),
];

/// Scores arbitrary text for job-description-ness in `[0, 1]`.
///
/// Pure and deterministic. The patterns are compiled once at construction
/// so the locator can score many candidates cheaply.
pub struct JdScorer {
    bonus_patterns: Vec<(Regex, f32)>,
}

impl JdScorer {
    pub fn new() -> Self {
        let bonus_patterns = BONUS_PATTERNS
            .iter()
            .map(|(pattern, weight)| {
                let regex = Regex::new(pattern).expect("invalid bonus pattern");
                (regex, *weight)
            })
            .collect();

        Self { bonus_patterns }
    }

    /// Score `text`, clamped to 1.0. Keyword hits are substring matches
    /// on the lowercased text; bonus patterns run on the original text.
    pub fn score(&self, text: &str) -> f32 {
        let lowercase = text.to_lowercase();
        let mut score = 0.0;

        for keyword in JD_KEYWORDS {
            if lowercase.contains(keyword) {
                score += KEYWORD_WEIGHT;
            }
        }

        for (pattern, weight) in &self.bonus_patterns {
            if pattern.is_match(text) {
                score += weight;
            }
        }

        score.min(1.0)
    }
}

impl Default for JdScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENIOR_JD: &str = "We are looking for a Senior Software Engineer with 5+ years \
        experience. Bachelor's degree required. Full-time. Apply now!";

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = JdScorer::new();
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn test_score_is_deterministic_and_bounded() {
        let scorer = JdScorer::new();
        for text in ["", "hello world", SENIOR_JD, "requirements salary team"] {
            let first = scorer.score(text);
            let second = scorer.score(text);
            assert_eq!(first, second);
            assert!((0.0..=1.0).contains(&first));
        }
    }

    #[test]
    fn test_sample_jd_scores_high() {
        let scorer = JdScorer::new();
        assert!(scorer.score(SENIOR_JD) >= 0.9);
    }

    #[test]
    fn test_saturated_text_clamps_to_one() {
        let scorer = JdScorer::new();
        let mut text = JD_KEYWORDS.join(" ");
        text.push_str(
            " 5+ years of experience bachelor's degree full-time we are looking for apply",
        );
        assert_eq!(scorer.score(&text), 1.0);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let scorer = JdScorer::new();
        assert!(scorer.score("REQUIREMENTS AND QUALIFICATIONS") > 0.0);
    }

    #[test]
    fn test_unrelated_text_scores_low() {
        let scorer = JdScorer::new();
        assert!(scorer.score("The quick brown fox jumps over the lazy dog.") < 0.3);
    }
}
