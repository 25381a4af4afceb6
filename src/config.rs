// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama3-70b-8192";
const SECRETS_FILE: &str = "secrets.yaml";

/// Runtime configuration for the language-model provider.
///
/// The API credential is resolved from `secrets.yaml` first and the
/// `GROQ_API_KEY` environment variable second; neither being present is a
/// startup error, since every pipeline run ends in a model call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    groq_api_key: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(SECRETS_FILE))
    }

    pub fn load_from(secrets_path: &Path) -> Result<Self> {
        let api_key = Self::resolve_api_key(secrets_path)?;

        let base_url =
            std::env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        info!("Using model {} at {}", model, base_url);

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    fn resolve_api_key(secrets_path: &Path) -> Result<String> {
        if secrets_path.exists() {
            let content = std::fs::read_to_string(secrets_path)
                .with_context(|| format!("Failed to read {}", secrets_path.display()))?;
            let secrets: SecretsFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", secrets_path.display()))?;
            if let Some(key) = secrets.groq_api_key.filter(|k| !k.trim().is_empty()) {
                info!("Loaded API credential from {}", secrets_path.display());
                return Ok(key.trim().to_string());
            }
        }

        std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(|k| k.trim().to_string())
            .context(
                "No API credential found: set groq_api_key in secrets.yaml or the GROQ_API_KEY environment variable",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_file_key_parses() {
        let secrets: SecretsFile = serde_yaml::from_str("groq_api_key: gsk_test123\n").unwrap();
        assert_eq!(secrets.groq_api_key.as_deref(), Some("gsk_test123"));
    }

    #[test]
    fn secrets_file_tolerates_missing_key() {
        let secrets: SecretsFile = serde_yaml::from_str("other: value\n").unwrap();
        assert!(secrets.groq_api_key.is_none());
    }
}
