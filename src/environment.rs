// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_STATE_PATH: &str = "data/current_jd.json";
const DEFAULT_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_LLM_MODEL: &str = "mistralai/mistral-7b-instruct";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Location of the single cached JD record.
    pub state_path: PathBuf,
    /// Base URL of the chat-completions service.
    pub llm_base_url: String,
    /// Model identifier sent with every completion request.
    pub llm_model: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration for the current environment from `config.yaml`,
    /// falling back to defaults when the file is absent. The LLM API key
    /// is not part of this file; it is read from the environment when the
    /// client is constructed.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using default configuration");
            return Ok(Self::default());
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let env_config = match environment.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            state_path: Self::resolve_path(&env_config.state_path)?,
            ..env_config
        })
    }

    fn get_environment() -> String {
        std::env::var("JOBTAILOR_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
        }
    }
}
