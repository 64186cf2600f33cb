// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::{prioritize_skills, JdAnalysis};
use crate::error::TailorError;
use crate::extraction::{seniority, JdRecord};
use crate::tailor::MergeOptions;
use crate::workflow::TailorWorkflow;

const PREVIEW_CHARS: usize = 500;

#[derive(Parser)]
#[command(name = "jobtailor")]
#[command(about = "Extract job descriptions from the web and tailor a LaTeX resume to them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a job posting URL and extract its description
    Fetch { url: String },
    /// Store a job description pasted into a text file (manual fallback)
    Set { file: PathBuf },
    /// Show the currently stored job description
    Show,
    /// Clear the stored job description
    Clear,
    /// Analyze the stored job description with the LLM
    Analyze,
    /// Rewrite a summary paragraph to emphasize selected skills
    RewriteSummary {
        /// File containing the original summary text
        file: PathBuf,
        /// Skill to emphasize; repeatable
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Analyze the stored JD and produce a tailored copy of a resume
    Tailor {
        /// LaTeX resume to tailor
        #[arg(long)]
        resume: PathBuf,
        /// Skill to emphasize; repeatable. Defaults to every skill the
        /// analysis returns.
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// File containing a replacement summary
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Project bullet to append; repeatable
        #[arg(long = "project")]
        projects: Vec<String>,
        /// Append a referral section for the analyzed company
        #[arg(long)]
        referral: bool,
        /// Output path for the tailored document
        #[arg(long, default_value = "tailored_resume.tex")]
        output: PathBuf,
    },
}

pub async fn run(cli: Cli, workflow: TailorWorkflow) -> Result<()> {
    match cli.command {
        Command::Fetch { url } => {
            let record = match workflow.extract_from_url(&url).await {
                Ok(record) => record,
                Err(err) => {
                    if is_extraction_miss(&err) {
                        eprintln!("No confident job description found on that page.");
                        eprintln!("Paste the text into a file and run: jobtailor set <file>");
                    }
                    return Err(err);
                }
            };
            print_record(&record);
        }

        Command::Set { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read JD file: {}", file.display()))?;
            let record = workflow.set_manual(&text).await?;
            print_record(&record);
        }

        Command::Show => {
            let record = require_current_jd(&workflow).await?;
            print_record(&record);
        }

        Command::Clear => {
            workflow.clear_jd().await?;
            println!("Stored job description cleared.");
        }

        Command::Analyze => {
            let record = require_current_jd(&workflow).await?;
            let llm = workflow.llm_client()?;
            let analysis = workflow.analyze(&llm, &record).await?;
            print_analysis(&analysis);
        }

        Command::RewriteSummary { file, skills } => {
            let original = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read summary file: {}", file.display()))?;
            let llm = workflow.llm_client()?;
            let revised = workflow.rewrite_summary(&llm, original.trim(), &skills).await?;
            println!("{revised}");
        }

        Command::Tailor {
            resume,
            skills,
            summary,
            projects,
            referral,
            output,
        } => {
            let record = require_current_jd(&workflow).await?;
            let resume_text = tokio::fs::read_to_string(&resume)
                .await
                .with_context(|| format!("Failed to read resume: {}", resume.display()))?;

            let llm = workflow.llm_client()?;
            let analysis = workflow.analyze(&llm, &record).await?;

            let selected_skills = if skills.is_empty() {
                analysis.tech_skills.clone()
            } else {
                skills
            };

            let new_summary = match summary {
                Some(path) => Some(
                    tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read summary: {}", path.display()))?
                        .trim()
                        .to_string(),
                ),
                None => None,
            };

            let options = MergeOptions {
                selected_skills,
                new_summary,
                new_projects: projects,
                include_referral: referral,
            };

            let tailored = workflow.tailor_resume(&resume_text, &analysis, &options)?;

            tokio::fs::write(&output, &tailored)
                .await
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            println!("Tailored resume written to {}", output.display());
        }
    }

    Ok(())
}

async fn require_current_jd(workflow: &TailorWorkflow) -> Result<JdRecord> {
    workflow.current_jd().await?.ok_or_else(|| {
        anyhow::anyhow!(
            "no job description stored yet; run `jobtailor fetch <url>` or `jobtailor set <file>` first"
        )
    })
}

fn is_extraction_miss(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<TailorError>(),
        Some(TailorError::ExtractionNotFound)
    )
}

fn print_record(record: &JdRecord) {
    let source = reqwest::Url::parse(&record.source_url)
        .ok()
        .and_then(|url| url.host_str().map(String::from))
        .unwrap_or_else(|| record.source_url.clone());
    println!("JD loaded from {source}");

    let company = if record.company.is_empty() {
        "Unknown Company"
    } else {
        &record.company
    };
    let level = seniority::classify(&record.jd_text);
    if level.is_empty() {
        println!("Company: {company}");
    } else {
        println!("Company: {company} | {level}");
    }

    println!();
    println!("{}", preview(&record.jd_text, PREVIEW_CHARS));
}

fn print_analysis(analysis: &JdAnalysis) {
    if analysis.company.is_empty() {
        println!("Company: (not detected)");
    } else {
        println!("Company: {}", analysis.company);
    }

    println!("Technical skills:");
    for skill in prioritize_skills(&analysis.tech_skills) {
        if skill.critical {
            println!("  * {} (critical)", skill.name);
        } else {
            println!("  * {}", skill.name);
        }
    }

    if !analysis.keywords.is_empty() {
        println!("Keywords: {}", analysis.keywords.join(", "));
    }
}

fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
