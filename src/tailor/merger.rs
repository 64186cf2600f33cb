// src/tailor/merger.rs
//! Resume tailoring as string-region surgery on a `\section{}`-marked
//! LaTeX document. No document tree is built; section markers are the
//! only structure the merger relies on.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::{NoExpand, Regex};

use crate::analysis::JdAnalysis;

use super::MergeOptions;

/// Apply the tailoring steps in fixed order: keyword emphasis, summary
/// replacement, project insertion, referral append. Keyword injection
/// runs first so the emphasis markup it adds is never re-matched by the
/// later steps.
///
/// Pure transformation; empty options return the input unchanged. Not
/// idempotent: running the same skills over already-merged output wraps
/// the emphasis markers a second time.
pub fn merge(resume: &str, analysis: &JdAnalysis, options: &MergeOptions) -> String {
    let mut document = inject_keywords(resume.to_string(), &options.selected_skills);

    if let Some(summary) = options.new_summary.as_deref() {
        if !summary.is_empty() {
            document = replace_section(&document, "summary", summary);
        }
    }

    if !options.new_projects.is_empty() {
        document = add_projects(&document, &options.new_projects);
    }

    if options.include_referral && !analysis.company.is_empty() {
        document = append_referral(&document, &analysis.company);
    }

    document
}

/// Wrap whole-word occurrences of each keyword in `\textbf{}`. Matching
/// is case-insensitive; the replacement uses the keyword as supplied, so
/// hits are canonicalized to the caller's casing.
fn inject_keywords(mut document: String, keywords: &[String]) -> String {
    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
        if let Ok(regex) = Regex::new(&pattern) {
            let replacement = format!("\\textbf{{{keyword}}}");
            document = regex.replace_all(&document, NoExpand(&replacement)).into_owned();
        }
    }
    document
}

/// Replace the body of `\section{<name>}` up to the next section marker.
/// When no such region exists the new section is prepended instead.
fn replace_section(document: &str, section: &str, content: &str) -> String {
    let pattern = format!(r"(?s)\\section\{{{}\}}.*?\\section\{{", regex::escape(section));
    let Ok(regex) = Regex::new(&pattern) else {
        return document.to_string();
    };

    if regex.is_match(document) {
        let replacement = format!("\\section{{{section}}}\n{content}\n\n\\section{{");
        regex.replace(document, NoExpand(&replacement)).into_owned()
    } else {
        format!("\\section{{{section}}}\n{content}\n\n{document}")
    }
}

/// Append a Projects section as a bulleted list, before the closing
/// marker when the document has one.
fn add_projects(document: &str, projects: &[String]) -> String {
    let items = projects
        .iter()
        .map(|project| format!("\\item {project}"))
        .collect::<Vec<_>>()
        .join("\n");
    let section = format!("\\section{{Projects}}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}");

    if document.contains("\\end{document}") {
        document.replacen("\\end{document}", &format!("{section}\n\\end{{document}}"), 1)
    } else {
        format!("{document}\n\n{section}")
    }
}

/// Append a Referral section with a people-search link for the company.
/// Always lands at the very end, after any closing marker.
fn append_referral(document: &str, company: &str) -> String {
    let encoded = utf8_percent_encode(company, NON_ALPHANUMERIC);
    format!(
        "{document}\n\\section{{Referral}}\nConnect with employees at {company}: \
         \\href{{https://linkedin.com/search/results/people/?company={encoded}}}{{LinkedIn Search}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_for(company: &str) -> JdAnalysis {
        JdAnalysis {
            tech_skills: vec!["Rust".to_string()],
            keywords: vec!["async".to_string()],
            company: company.to_string(),
        }
    }

    fn options_with_skills(skills: &[&str]) -> MergeOptions {
        MergeOptions {
            selected_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..MergeOptions::default()
        }
    }

    #[test]
    fn test_whole_word_keyword_injection() {
        let resume = "Experience with JavaScript and Java.";
        let merged = merge(resume, &analysis_for(""), &options_with_skills(&["Java"]));
        assert_eq!(merged, "Experience with JavaScript and \\textbf{Java}.");
    }

    #[test]
    fn test_injection_canonicalizes_case() {
        let resume = "Deep JAVA expertise.";
        let merged = merge(resume, &analysis_for(""), &options_with_skills(&["Java"]));
        assert_eq!(merged, "Deep \\textbf{Java} expertise.");
    }

    #[test]
    fn test_keyword_metacharacters_are_literal() {
        let resume = "Shipped services on Node.js; also used Nodexjs once.";
        let merged = merge(resume, &analysis_for(""), &options_with_skills(&["Node.js"]));
        assert!(merged.contains("\\textbf{Node.js};"));
        assert!(merged.contains("Nodexjs once"));
    }

    #[test]
    fn test_empty_options_are_identity() {
        let resume = "\\section{summary}\nHello\n\\section{Experience}\nWork\n\\end{document}";
        let merged = merge(resume, &analysis_for("Acme"), &MergeOptions::default());
        assert_eq!(merged, resume);
    }

    #[test]
    fn test_double_merge_double_wraps() {
        let resume = "Knows Java well.";
        let options = options_with_skills(&["Java"]);
        let once = merge(resume, &analysis_for(""), &options);
        let twice = merge(&once, &analysis_for(""), &options);
        assert!(once.contains("\\textbf{Java}"));
        assert!(twice.contains("\\textbf{\\textbf{Java}}"));
    }

    #[test]
    fn test_summary_replacement() {
        let resume = "\\section{summary}\nOld tired summary.\n\\section{Experience}\nWork history.";
        let options = MergeOptions {
            new_summary: Some("Sharp new summary.".to_string()),
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for(""), &options);
        assert!(merged.contains("\\section{summary}\nSharp new summary.\n\n\\section{Experience}"));
        assert!(!merged.contains("Old tired summary."));
    }

    #[test]
    fn test_summary_prepended_when_absent() {
        let resume = "\\section{Experience}\nWork history.";
        let options = MergeOptions {
            new_summary: Some("Fresh summary.".to_string()),
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for(""), &options);
        assert!(merged.starts_with("\\section{summary}\nFresh summary.\n\n"));
        assert!(merged.contains("\\section{Experience}"));
    }

    #[test]
    fn test_projects_inserted_before_closing_marker() {
        let resume = "\\section{Experience}\nWork.\n\\end{document}";
        let options = MergeOptions {
            new_projects: vec!["Built a parser".to_string(), "Wrote a scraper".to_string()],
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for(""), &options);
        let projects_at = merged.find("\\section{Projects}").unwrap();
        let closing_at = merged.find("\\end{document}").unwrap();
        assert!(projects_at < closing_at);
        assert!(merged.contains("\\item Built a parser\n\\item Wrote a scraper"));
        assert!(merged.contains("\\begin{itemize}"));
    }

    #[test]
    fn test_projects_appended_without_closing_marker() {
        let resume = "\\section{Experience}\nWork.";
        let options = MergeOptions {
            new_projects: vec!["Built a parser".to_string()],
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for(""), &options);
        assert!(merged.ends_with("\\end{itemize}"));
    }

    #[test]
    fn test_referral_lands_at_the_very_end() {
        let resume = "\\section{Experience}\nWork.\n\\end{document}";
        let options = MergeOptions {
            new_projects: vec!["Built a parser".to_string()],
            include_referral: true,
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for("Acme Labs"), &options);
        let referral_at = merged.find("\\section{Referral}").unwrap();
        let closing_at = merged.find("\\end{document}").unwrap();
        assert!(referral_at > closing_at);
        assert!(merged.contains("company=Acme%20Labs"));
        assert!(merged.contains("Connect with employees at Acme Labs"));
    }

    #[test]
    fn test_referral_skipped_without_company() {
        let resume = "\\section{Experience}\nWork.";
        let options = MergeOptions {
            include_referral: true,
            ..MergeOptions::default()
        };
        let merged = merge(resume, &analysis_for(""), &options);
        assert_eq!(merged, resume);
    }
}
