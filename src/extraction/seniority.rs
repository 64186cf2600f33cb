// src/extraction/seniority.rs
//! Seniority detection over job description text.

use regex::Regex;

/// Ordered ladder of seniority patterns. Order matters: the patterns are
/// not mutually exclusive, and the first match anywhere in the text wins
/// (a posting mentioning both "senior" and "intern" is Senior).
const SENIORITY_LADDER: &[(&str, &str)] = &[
    (r"(?i)(senior|sr\.?|lead|principal)", "Senior"),
    (r"(?i)(mid-level|mid|experienced)", "Mid-Level"),
    (r"(?i)(junior|jr\.?|entry-level|graduate)", "Junior"),
    (r"(?i)(intern|internship)", "Intern"),
];

/// Classify JD text into a seniority label, or `""` when nothing matches.
pub fn classify(text: &str) -> &'static str {
    for &(pattern, label) in SENIORITY_LADDER {
        let regex = Regex::new(pattern).expect("invalid seniority pattern");
        if regex.is_match(text) {
            return label;
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_variants() {
        assert_eq!(classify("Senior Software Engineer"), "Senior");
        assert_eq!(classify("Sr. Backend Developer"), "Senior");
        assert_eq!(classify("Lead Data Scientist"), "Senior");
        assert_eq!(classify("principal engineer"), "Senior");
    }

    #[test]
    fn test_junior_precedes_intern() {
        assert_eq!(classify("Junior Intern position"), "Junior");
    }

    #[test]
    fn test_senior_precedes_intern() {
        assert_eq!(classify("internship on a senior team"), "Senior");
    }

    #[test]
    fn test_remaining_levels() {
        assert_eq!(classify("Mid-Level developer wanted"), "Mid-Level");
        assert_eq!(classify("entry-level role"), "Junior");
        assert_eq!(classify("Summer internship"), "Intern");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(classify("Software Engineer"), "");
    }
}
