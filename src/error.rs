// src/error.rs
use thiserror::Error;

/// Failures that cross the pipeline boundary. Selector misses during
/// site-specific extraction never appear here; they degrade to missing
/// fields and trigger the generative fallback instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Page fetch failed outright (timeout, DNS, connection refused).
    #[error("Scraping failed: {0}")]
    Network(String),

    /// The model returned non-JSON or schema-violating content during
    /// extraction. Terminal: there is no fallback stage after this one.
    #[error("Scraping failed: {0}")]
    GenerationFormat(String),

    /// The extracted record failed the usability check after normalization.
    /// One message per missing required field.
    #[error("{}", .0.join(" | "))]
    Validation(Vec<String>),

    /// Email generation call failed. No partial output is surfaced.
    #[error("Email generation failed: {0}")]
    Composition(String),

    /// The inbound request was missing a required field.
    #[error("{0}")]
    Request(String),
}
