// src/scraping/generative.rs
use super::{clean_text, PartialJob};
use crate::error::PipelineError;
use crate::llm::{ChatClient, ChatOptions};
use scraper::Html;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Character budget for page text fed to the model. Keeps the prompt
/// inside context limits; postings front-load the relevant content.
const PAGE_TEXT_BUDGET: usize = 5000;

/// Exact shape the extraction prompt demands. Parsing into this struct is
/// the schema check: a missing key or wrong type is a format error, not
/// something to paper over with defaults.
#[derive(Debug, Deserialize)]
struct ExtractedFields {
    role: String,
    company: String,
    skills: Vec<String>,
    description: String,
}

/// Language-model fallback for layouts the registry does not know.
pub struct GenerativeExtractor {
    chat: Arc<dyn ChatClient>,
}

impl GenerativeExtractor {
    pub fn new(chat: Arc<dyn ChatClient>) -> Self {
        Self { chat }
    }

    /// Ask the model for strict JSON over the page's visible text.
    ///
    /// This is the last extraction stage, so failures here are terminal:
    /// transport problems surface as network errors and malformed or
    /// schema-violating replies as generation-format errors.
    pub async fn extract(&self, page_html: &str) -> Result<PartialJob, PipelineError> {
        let page_text = truncate_chars(&page_text(page_html), PAGE_TEXT_BUDGET);
        info!(
            "Generative extraction over {} characters of page text",
            page_text.chars().count()
        );

        let prompt = extraction_prompt(&page_text);

        let reply = self
            .chat
            .complete(&prompt, ChatOptions::extraction())
            .await
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        let fields: ExtractedFields = serde_json::from_str(&reply).map_err(|e| {
            PipelineError::GenerationFormat(format!("model returned malformed extraction JSON: {}", e))
        })?;

        Ok(PartialJob {
            role: Some(fields.role),
            company: Some(fields.company),
            description: Some(fields.description),
            skills: fields.skills,
        })
    }
}

fn extraction_prompt(page_text: &str) -> String {
    format!(
        r#"**Website Content**: {page_text}

Extract these fields STRICTLY as JSON:
{{
    "role": "Job title (exact match)",
    "company": "Company name (official name)",
    "skills": ["list", "of", "technical", "skills"],
    "description": "Full job description (min 200 characters)"
}}

RULES:
1. NEVER use "Not specified" - find the actual value
2. Company name MUST appear in the page text
3. If unsure, make educated guesses
"#
    )
}

/// Visible text of the page: every text node outside script/style/noscript,
/// whitespace-normalized.
fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();

    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
        });
        if !hidden {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }

    clean_text(&parts.join(" "))
}

fn truncate_chars(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}
