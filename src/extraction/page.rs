// src/extraction/page.rs
//! Page collaborator: a parsed HTML document plus the bounded fetch that
//! produces it. The locator and company lookup only ever see this surface.

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

use crate::error::TailorError;

/// Page fetches are bounded so the workflow can fall back to manual input
/// instead of hanging.
const FETCH_TIMEOUT_SECS: u64 = 5;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A rendered page as the extraction heuristics see it: queryable elements,
/// visible text, meta tags, title, and source URL.
pub struct PageDocument {
    html: Html,
    url: String,
}

impl PageDocument {
    pub fn parse(html: &str, url: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hostname(&self) -> Option<String> {
        let parsed = reqwest::Url::parse(&self.url).ok()?;
        parsed.host_str().map(|host| host.to_string())
    }

    /// Visible text of every element matching `descriptor`, in document
    /// order. Unparseable descriptors yield no candidates.
    pub fn select_texts(&self, descriptor: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(descriptor) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(visible_text)
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Content attribute of the first element matching `descriptor`.
    pub fn meta_content(&self, descriptor: &str) -> Option<String> {
        let selector = Selector::parse(descriptor).ok()?;
        let element = self.html.select(&selector).next()?;
        element
            .value()
            .attr("content")
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }

    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let element = self.html.select(&selector).next()?;
        let title = element.text().collect::<String>().trim().to_string();
        (!title.is_empty()).then_some(title)
    }

    /// Visible text of the whole page, for the full-page scoring fallback.
    pub fn body_text(&self) -> String {
        let Ok(selector) = Selector::parse("body") else {
            return String::new();
        };
        self.html
            .select(&selector)
            .next()
            .map(visible_text)
            .unwrap_or_default()
    }
}

/// Collects an element's text nodes, skipping script/style content and
/// collapsing whitespace, approximating what a browser would render.
fn visible_text(element: ElementRef) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in element.descendants() {
        if let Some(text) = node.value().as_text() {
            let skipped = node
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| {
                    matches!(parent.value().name(), "script" | "style" | "noscript")
                });
            if !skipped {
                parts.push(text);
            }
        }
    }
    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// HTTP fetcher for job pages, with a browser user agent and a short
/// timeout.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the page body as HTML. PDF URLs are rejected up front.
    pub async fn fetch(&self, url: &str) -> Result<String, TailorError> {
        if url.to_lowercase().ends_with(".pdf") {
            return Err(TailorError::fetch("PDF parsing not supported"));
        }

        info!("Fetching job page: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TailorError::fetch(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head>
            <title> Acme Careers </title>
            <meta property="og:site_name" content="Acme">
            <script>var tracking = "noise";</script>
          </head>
          <body>
            <style>.hidden { display: none; }</style>
            <div class="job-description">
              We are   hiring a
              Rust engineer.
            </div>
            <script>console.log("more noise");</script>
          </body>
        </html>
    "#;

    #[test]
    fn test_select_texts_collapses_whitespace() {
        let page = PageDocument::parse(PAGE, "https://jobs.acme.com/123");
        let texts = page.select_texts("[class*=\"job-description\"]");
        assert_eq!(texts, vec!["We are hiring a Rust engineer.".to_string()]);
    }

    #[test]
    fn test_body_text_skips_script_and_style() {
        let page = PageDocument::parse(PAGE, "https://jobs.acme.com/123");
        let body = page.body_text();
        assert!(body.contains("Rust engineer"));
        assert!(!body.contains("noise"));
        assert!(!body.contains("display"));
    }

    #[test]
    fn test_meta_and_title() {
        let page = PageDocument::parse(PAGE, "https://jobs.acme.com/123");
        assert_eq!(
            page.meta_content("meta[property=\"og:site_name\"]"),
            Some("Acme".to_string())
        );
        assert_eq!(page.title(), Some("Acme Careers".to_string()));
        assert_eq!(page.meta_content("meta[name=\"missing\"]"), None);
    }

    #[test]
    fn test_hostname() {
        let page = PageDocument::parse(PAGE, "https://jobs.acme.com/123");
        assert_eq!(page.hostname(), Some("jobs.acme.com".to_string()));

        let page = PageDocument::parse(PAGE, "manual-input");
        assert_eq!(page.hostname(), None);
    }

    #[test]
    fn test_invalid_descriptor_yields_nothing() {
        let page = PageDocument::parse(PAGE, "https://jobs.acme.com/123");
        assert!(page.select_texts("[[[").is_empty());
    }
}
