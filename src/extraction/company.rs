// src/extraction/company.rs
//! Company name resolution: meta tags, then generic containers, then a
//! hostname-derived fallback.

use regex::Regex;

use super::page::PageDocument;

/// Meta tags consulted first, in this fixed order.
const META_DESCRIPTORS: &[&str] = &[
    "meta[property=\"og:site_name\"]",
    "meta[name=\"application-name\"]",
    "meta[property=\"og:title\"]",
];

/// Generic containers likely to carry a company name.
const COMPANY_DESCRIPTORS: &[&str] = &[
    "[class*=\"company\"]",
    "[class*=\"organization\"]",
    "[class*=\"employer\"]",
    "h1",
    "h2",
    ".title",
];

/// Resolve a plausible company name for the page, or `""` when nothing
/// survives cleanup.
pub fn find_company_name(page: &PageDocument) -> String {
    for descriptor in META_DESCRIPTORS {
        if let Some(content) = page.meta_content(descriptor) {
            let company = clean_candidate(&content);
            if !company.is_empty() {
                return company;
            }
        }
    }

    for descriptor in COMPANY_DESCRIPTORS {
        for text in page.select_texts(descriptor) {
            let company = clean_candidate(&text);
            if !company.is_empty() {
                return company;
            }
        }
    }

    match page.hostname() {
        Some(hostname) => company_from_hostname(&hostname),
        None => String::new(),
    }
}

/// Strip a trailing legal-entity suffix, then everything from the first
/// job-posting filler word to the end.
///
/// The filler strip is substring-based, so names containing "at"/"with"
/// ("At Home") are truncated to nothing. That over-stripping is the
/// documented contract of this heuristic, not a bug to fix.
pub fn clean_candidate(text: &str) -> String {
    let legal_suffix = Regex::new(r"(?i)(Inc\.|LLC|Ltd\.?|Limited|Corp\.?|Corporation)$")
        .expect("invalid legal suffix pattern");
    let filler_tail = Regex::new(r"(?i)(Hiring|Job|Position|Opening|at|with|-).*$")
        .expect("invalid filler tail pattern");

    let text = legal_suffix.replace(text.trim(), "");
    let text = filler_tail.replace(text.trim(), "");
    text.trim().to_string()
}

/// Derive a company name from a hostname: drop a known TLD, split the rest
/// on `.` and `-`, keep parts longer than 2 characters, capitalize the last
/// surviving part. `"acme-corp.io"` becomes `"Corp"` — the crude split is
/// intentional.
pub fn company_from_hostname(hostname: &str) -> String {
    let tld = Regex::new(r"(?i)\.(com|org|net|io|ai|co|jobs)$").expect("invalid TLD pattern");
    let stripped = tld.replace(hostname, "");

    match stripped.split(['.', '-']).filter(|part| part.len() > 2).last() {
        Some(part) => capitalize(part),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
