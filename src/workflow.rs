// src/workflow.rs
//! Workflow controller: owns the session state (the stored "current JD")
//! explicitly and sequences extraction, analysis and tailoring. One
//! workflow runs at a time per session; a newer extraction supersedes the
//! stored record, and only completed extractions are committed.

use anyhow::Result;
use tracing::info;

use crate::analysis::{parser, prompts, JdAnalysis, LlmClient};
use crate::environment::EnvironmentConfig;
use crate::error::TailorError;
use crate::extraction::{self, JdRecord, JdScorer, PageDocument, PageFetcher};
use crate::store::JdStore;
use crate::tailor::{self, MergeOptions};

pub struct TailorWorkflow {
    fetcher: PageFetcher,
    scorer: JdScorer,
    store: JdStore,
    config: EnvironmentConfig,
}

impl TailorWorkflow {
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
            scorer: JdScorer::new(),
            store: JdStore::new(config.state_path.clone()),
            config,
        })
    }

    /// Client for the configured LLM service. Built on demand so commands
    /// that never reach the LLM don't require the API key.
    pub fn llm_client(&self) -> Result<LlmClient> {
        LlmClient::new(
            self.config.llm_base_url.clone(),
            self.config.llm_model.clone(),
        )
    }

    /// Fetch a job page and extract its description. The record is
    /// committed to the store only after a successful extraction.
    pub async fn extract_from_url(&self, url: &str) -> Result<JdRecord> {
        let html = self.fetcher.fetch(url).await?;

        let record = {
            let page = PageDocument::parse(&html, url);
            extraction::locate(&page, &self.scorer).ok_or(TailorError::ExtractionNotFound)?
        };

        self.store.save(&record).await?;
        Ok(record)
    }

    /// Manual-input fallback: store pasted JD text as the current record.
    pub async fn set_manual(&self, text: &str) -> Result<JdRecord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TailorError::missing_input("job description text").into());
        }

        let record = JdRecord::manual(text.to_string());
        self.store.save(&record).await?;
        Ok(record)
    }

    /// The most recently committed JD, if any.
    pub async fn current_jd(&self) -> Result<Option<JdRecord>> {
        self.store.load().await
    }

    pub async fn clear_jd(&self) -> Result<()> {
        self.store.clear().await
    }

    /// Ask the LLM for skills, keywords and company name, and parse the
    /// reply into a typed analysis.
    pub async fn analyze(&self, llm: &LlmClient, jd: &JdRecord) -> Result<JdAnalysis> {
        let prompt = prompts::jd_analysis_prompt(&jd.jd_text);
        let response = llm.complete("JD analysis", &prompt).await?;
        let analysis = parser::parse_analysis(&response)?;

        info!(
            "Analysis extracted {} skills and {} keywords",
            analysis.tech_skills.len(),
            analysis.keywords.len()
        );
        Ok(analysis)
    }

    /// Ask the LLM to rewrite a summary paragraph emphasizing the
    /// selected skills. Returns the revised free text.
    pub async fn rewrite_summary(
        &self,
        llm: &LlmClient,
        original: &str,
        skills: &[String],
    ) -> Result<String> {
        if original.trim().is_empty() {
            return Err(TailorError::missing_input("original summary").into());
        }

        let prompt = prompts::summary_rewrite_prompt(original, skills);
        let revised = llm.complete("summary rewrite", &prompt).await?;
        Ok(revised)
    }

    /// Apply the tailoring steps to the resume text.
    pub fn tailor_resume(
        &self,
        resume: &str,
        analysis: &JdAnalysis,
        options: &MergeOptions,
    ) -> Result<String> {
        if resume.trim().is_empty() {
            return Err(TailorError::missing_input("resume text").into());
        }
        Ok(tailor::merge(resume, analysis, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn workflow_in(dir: &tempfile::TempDir) -> TailorWorkflow {
        let config = EnvironmentConfig {
            state_path: dir.path().join("current_jd.json"),
            ..EnvironmentConfig::default()
        };
        TailorWorkflow::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_manual_input_is_committed() {
        let dir = tempfile::tempdir().unwrap();
        let workflow = workflow_in(&dir);

        let record = workflow
            .set_manual("  A pasted job description.  ")
            .await
            .unwrap();
        assert_eq!(record.jd_text, "A pasted job description.");
        assert_eq!(record.source_url, "manual-input");

        let stored = workflow.current_jd().await.unwrap().unwrap();
        assert_eq!(stored.jd_text, "A pasted job description.");
    }

    #[tokio::test]
    async fn test_empty_manual_input_is_rejected_and_not_committed() {
        let dir = tempfile::tempdir().unwrap();
        let workflow = workflow_in(&dir);

        workflow.set_manual("An earlier description.").await.unwrap();

        let err = workflow.set_manual("   ").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TailorError>(),
            Some(TailorError::UserInputMissing { .. })
        ));

        // The failed call must not disturb the stored record.
        let stored = workflow.current_jd().await.unwrap().unwrap();
        assert_eq!(stored.jd_text, "An earlier description.");
    }

    #[tokio::test]
    async fn test_clear_empties_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let workflow = workflow_in(&dir);

        workflow.set_manual("A description.").await.unwrap();
        workflow.clear_jd().await.unwrap();
        assert!(workflow.current_jd().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_resume_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let workflow = workflow_in(&dir);

        let analysis = JdAnalysis {
            tech_skills: vec![],
            keywords: vec![],
            company: String::new(),
        };
        let err = workflow
            .tailor_resume("", &analysis, &MergeOptions::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TailorError>(),
            Some(TailorError::UserInputMissing { .. })
        ));
    }

    #[test]
    fn test_workflow_uses_configured_state_path() {
        let config = EnvironmentConfig {
            state_path: PathBuf::from("/tmp/jobtailor-test/current_jd.json"),
            ..EnvironmentConfig::default()
        };
        let workflow = TailorWorkflow::new(config).unwrap();
        assert_eq!(
            workflow.store.path(),
            &PathBuf::from("/tmp/jobtailor-test/current_jd.json")
        );
    }
}
