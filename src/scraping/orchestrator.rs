// src/scraping/orchestrator.rs
use super::{
    fetcher::PageFetcher, generative::GenerativeExtractor, site_registry, JobRecord, PartialJob,
    EXPERIENCE_UNSPECIFIED,
};
use crate::error::PipelineError;
use crate::llm::ChatClient;
use anyhow::Result;
use scraper::Html;
use std::sync::Arc;
use tracing::{info, warn};

/// Placeholder phrases that disqualify a required field. Checked
/// case-insensitively, and re-checked after normalization.
const SENTINEL_PHRASES: &[&str] = &["not found", "not specified"];

/// Two-stage extraction: deterministic site rules first, generative
/// fallback when role or company is missing. The fallback result replaces
/// the site result wholesale rather than merging with it.
pub struct JobScraper {
    fetcher: PageFetcher,
    generative: GenerativeExtractor,
}

impl JobScraper {
    pub fn new(chat: Arc<dyn ChatClient>) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
            generative: GenerativeExtractor::new(chat),
        })
    }

    /// Fetch the posting and extract a validated, normalized record.
    pub async fn scrape(&self, url: &str) -> Result<JobRecord, PipelineError> {
        let page = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        self.extract(url, &page.body).await
    }

    /// Extraction over an already-fetched body. Split out from [`scrape`]
    /// so the fallback decision and normalization are exercisable without
    /// network access.
    pub async fn extract(&self, url: &str, body: &str) -> Result<JobRecord, PipelineError> {
        let document = Html::parse_document(body);
        let site_result = site_registry::extract(url, &document).into_partial();

        let partial = if site_result.has_essentials() {
            info!("Using site-specific extraction for {}", url);
            site_result
        } else {
            warn!("Essential fields missing after site-specific pass, falling back");
            self.generative.extract(body).await?
        };

        finalize(partial)
    }
}

/// Normalize and validate a raw extraction result.
fn finalize(partial: PartialJob) -> Result<JobRecord, PipelineError> {
    let role = partial.role.as_deref().map(normalize_role);
    let company = partial.company.as_deref().map(normalize_company);
    let description = partial.description.map(|d| d.trim().to_string());

    let mut missing = Vec::new();
    if !is_usable(role.as_deref()) {
        missing.push("Missing Job Title in job post".to_string());
    }
    if !is_usable(company.as_deref()) {
        missing.push("Missing Company Name in job post".to_string());
    }
    if !is_usable(description.as_deref()) {
        missing.push("Missing Job Description in job post".to_string());
    }
    if !missing.is_empty() {
        return Err(PipelineError::Validation(missing));
    }

    // Safe: is_usable rejects None for all three.
    Ok(JobRecord {
        role: role.unwrap_or_default(),
        company: company.unwrap_or_default(),
        description: description.unwrap_or_default(),
        skills: partial.skills,
        experience: EXPERIENCE_UNSPECIFIED.to_string(),
    })
}

/// Cut the role at the first `|` and the first `-`; both are suffix
/// separators on listing sites ("| Remote", "- Full Time").
pub fn normalize_role(role: &str) -> String {
    role.split('|')
        .next()
        .unwrap_or(role)
        .split('-')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Cut the company at the first middle dot, the separator aggregators use
/// for follower counts and locations ("Acme Corp · 500 employees").
pub fn normalize_company(company: &str) -> String {
    company.split('·').next().unwrap_or(company).trim().to_string()
}

fn is_usable(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let lowered = value.trim().to_lowercase();
    !lowered.is_empty() && !SENTINEL_PHRASES.iter().any(|s| lowered.contains(s))
}
