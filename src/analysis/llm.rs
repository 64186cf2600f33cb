// src/analysis/llm.rs
//! Client for the hosted LLM service (OpenRouter-compatible chat
//! completions API).

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info};

use crate::error::TailorError;

const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
const LLM_TIMEOUT_SECS: u64 = 60;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmClient {
    /// Build a client for the configured service. The API key comes from
    /// the environment only, never from config files.
    pub fn new(base_url: String, model: String) -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .with_context(|| format!("{} environment variable not set", API_KEY_ENV))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(LLM_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
        })
    }

    /// Send a single-turn prompt and return the trimmed completion text.
    /// `context` is a short label for logging only.
    pub async fn complete(&self, context: &str, prompt: &str) -> Result<String, TailorError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
        };

        info!("Sending request to LLM service: {}", context);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("LLM service error {}: {}", status, body);
            return Err(TailorError::fetch(format!(
                "LLM service returned {status}"
            )));
        }

        let parsed: ChatResponse = response.json().await?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TailorError::fetch("LLM response contained no choices"))?;

        info!("Received response from LLM service: {}", context);
        Ok(content.trim().to_string())
    }
}
