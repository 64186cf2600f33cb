// src/analysis/mod.rs
use serde::{Deserialize, Serialize};

pub mod llm;
pub mod parser;
pub mod prompts;

pub use llm::LlmClient;
pub use parser::parse_analysis;

/// Structured result of the LLM's job description analysis. Skill and
/// keyword lists keep the model's order and are deduplicated only by
/// source text, so near-duplicates can occur.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdAnalysis {
    #[serde(rename = "techSkills")]
    pub tech_skills: Vec<String>,
    pub keywords: Vec<String>,
    pub company: String,
}

/// Markers that flag a skill as must-have when they appear inside the
/// skill text itself.
const CRITICAL_MARKERS: &[&str] = &["required", "must have", "mandatory"];

#[derive(Debug, Clone)]
pub struct PrioritizedSkill {
    pub name: String,
    pub critical: bool,
}

/// Flag skills whose text carries a must-have marker, keeping order.
pub fn prioritize_skills(skills: &[String]) -> Vec<PrioritizedSkill> {
    skills
        .iter()
        .map(|skill| {
            let lowered = skill.to_lowercase();
            PrioritizedSkill {
                name: skill.clone(),
                critical: CRITICAL_MARKERS
                    .iter()
                    .any(|marker| lowered.contains(marker)),
            }
        })
        .collect()
}
