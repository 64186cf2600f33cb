// src/analysis/prompts.rs
//! The two prompt templates sent to the LLM service.

/// At most this many characters of JD text are embedded in the analysis
/// prompt.
pub const JD_PROMPT_CHAR_LIMIT: usize = 3000;

/// Prompt requesting skills, keywords and company as a single JSON object.
pub fn jd_analysis_prompt(jd_text: &str) -> String {
    let excerpt: String = jd_text.chars().take(JD_PROMPT_CHAR_LIMIT).collect();
    format!(
        r#"Extract from this job description:
1. Technical skills (comma-separated list)
2. High-priority keywords
3. Company name

Format response as JSON:
{{
  "techSkills": [],
  "keywords": [],
  "company": ""
}}

Job Description:
{excerpt}"#
    )
}

/// Prompt requesting a free-text rewrite of a resume summary emphasizing
/// the selected skills.
pub fn summary_rewrite_prompt(original_summary: &str, skills: &[String]) -> String {
    format!(
        r#"Rewrite this resume summary to emphasize {}:

Original Summary:
"{original_summary}"

Revised Summary:"#,
        skills.join(", ")
    )
}
