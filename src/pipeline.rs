// src/pipeline.rs
use crate::composer::{CandidateProfile, EmailComposer, Length, StyleOptions, Tone};
use crate::error::PipelineError;
use crate::llm::ChatClient;
use crate::scraping::JobScraper;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Inbound request record: what the presentation layer collects from the
/// user for one generation run.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub job_url: String,
    pub recipient_name: String,
    pub recipient_role: String,
    pub candidate_name: Option<String>,
    pub candidate_skills: Option<String>,
    pub tone: Tone,
    pub length: Length,
}

impl EmailRequest {
    fn validate(&self) -> Result<(), PipelineError> {
        let required = [
            (&self.job_url, "Job Posting URL"),
            (&self.recipient_name, "Recipient Name"),
            (&self.recipient_role, "Recipient Role"),
        ];
        for (value, _) in &required {
            if value.trim().is_empty() {
                return Err(PipelineError::Request(
                    "Please fill all required fields (*)".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Result handed back to the presentation layer. The role travels along so
/// the caller can label its history entry without keeping the record.
#[derive(Debug, Clone)]
pub struct GeneratedEmail {
    pub email: String,
    pub job_role: String,
}

/// The external boundary: request in, email text or typed error out.
/// One linear run per call; stages execute sequentially with no retries.
pub struct EmailPipeline {
    scraper: JobScraper,
    composer: EmailComposer,
}

impl EmailPipeline {
    pub fn new(chat: Arc<dyn ChatClient>) -> Result<Self> {
        Ok(Self {
            scraper: JobScraper::new(chat.clone())?,
            composer: EmailComposer::new(chat),
        })
    }

    pub async fn generate(&self, request: &EmailRequest) -> Result<GeneratedEmail, PipelineError> {
        request.validate()?;

        info!("Pipeline run for {}", request.job_url);
        let record = self.scraper.scrape(&request.job_url).await?;
        self.compose(request, record).await
    }

    /// Same pipeline over an already-fetched page body; the network-free
    /// entry point.
    pub async fn generate_from_page(
        &self,
        request: &EmailRequest,
        page_body: &str,
    ) -> Result<GeneratedEmail, PipelineError> {
        request.validate()?;

        let record = self.scraper.extract(&request.job_url, page_body).await?;
        self.compose(request, record).await
    }

    async fn compose(
        &self,
        request: &EmailRequest,
        record: crate::scraping::JobRecord,
    ) -> Result<GeneratedEmail, PipelineError> {
        let profile = CandidateProfile {
            name: request.candidate_name.clone(),
            skills: request.candidate_skills.clone(),
            experience: None,
        };
        let style = StyleOptions {
            tone: request.tone,
            length: request.length,
        };

        let email = self.composer.compose(&record, &profile, &style).await?;
        info!("Generated email for {} at {}", record.role, record.company);

        Ok(GeneratedEmail {
            email,
            job_role: record.role,
        })
    }
}
