//! Job application email generator: scrapes a job posting URL through a
//! two-stage extraction pipeline (site-specific selectors with a
//! language-model fallback) and composes a personalized application email.

pub mod composer;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod pipeline;
pub mod scraping;

pub use composer::{CandidateProfile, EmailComposer, Length, StyleOptions, Tone};
pub use config::AppConfig;
pub use error::PipelineError;
pub use history::{EmailHistory, EmailHistoryEntry};
pub use llm::{ChatClient, ChatOptions, GroqClient};
pub use pipeline::{EmailPipeline, EmailRequest, GeneratedEmail};
pub use scraping::{JobRecord, JobScraper};
