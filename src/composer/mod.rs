// src/composer/mod.rs
use crate::error::PipelineError;
use crate::llm::{ChatClient, ChatOptions};
use crate::scraping::JobRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub mod prompts;

/// Voice the email is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Tone {
    Professional,
    Friendly,
    Formal,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Professional => write!(f, "Professional"),
            Tone::Friendly => write!(f, "Friendly"),
            Tone::Formal => write!(f, "Formal"),
        }
    }
}

/// Email length, expressed to the model as a target word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    pub fn word_target(&self) -> u32 {
        match self {
            Length::Short => 160,
            Length::Medium => 220,
            Length::Long => 300,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Short => write!(f, "Short"),
            Length::Medium => write!(f, "Medium"),
            Length::Long => write!(f, "Long"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StyleOptions {
    pub tone: Tone,
    pub length: Length,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            length: Length::Medium,
        }
    }
}

/// Self-reported candidate details, constructed per request and never
/// persisted. Absent fields become literal placeholders in the prompt.
#[derive(Debug, Clone, Default)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
}

/// Turns a validated job record plus candidate profile into email text.
/// The model's output is returned verbatim; content quality is the
/// model's problem, not this component's contract.
pub struct EmailComposer {
    chat: Arc<dyn ChatClient>,
}

impl EmailComposer {
    pub fn new(chat: Arc<dyn ChatClient>) -> Self {
        Self { chat }
    }

    pub async fn compose(
        &self,
        record: &JobRecord,
        profile: &CandidateProfile,
        style: &StyleOptions,
    ) -> Result<String, PipelineError> {
        let prompt = prompts::build_email_prompt(record, profile, style);
        info!(
            "Composing email for {} at {} ({}, {})",
            record.role, record.company, style.tone, style.length
        );

        self.chat
            .complete(&prompt, ChatOptions::composition())
            .await
            .map_err(|e| PipelineError::Composition(e.to_string()))
    }
}
