// src/llm.rs
use crate::config::AppConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Per-call knobs. Extraction runs cold with a JSON-mode constraint;
/// composition runs warmer with free text.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

impl ChatOptions {
    pub fn extraction() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 500,
            json_mode: true,
        }
    }

    pub fn composition() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 350,
            json_mode: false,
        }
    }
}

/// Seam between the pipeline and the model provider. Tests substitute
/// scripted implementations; production uses [`GroqClient`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str, options: ChatOptions) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenAI-compatible chat-completions client for Groq.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, prompt: &str, options: ChatOptions) -> Result<String> {
        let request = ChatCompletionsRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            response_format: options.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        info!(
            "Calling chat completions: model={} temperature={} json_mode={}",
            self.model, options.temperature, options.json_mode
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat completions API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Chat completions error {}: {}", status, error_text);
            anyhow::bail!("Chat API returned error {}: {}", status, error_text);
        }

        let parsed: ChatCompletionsResponse = response
            .json()
            .await
            .context("Failed to parse chat completions response")?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("Chat completions response contained no choices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_request_carries_json_mode() {
        let request = ChatCompletionsRequest {
            model: "llama3-70b-8192".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "extract".to_string(),
            }],
            temperature: 0.3,
            max_tokens: 500,
            response_format: Some(ResponseFormat {
                format_type: "json_object",
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn composition_request_omits_response_format() {
        let request = ChatCompletionsRequest {
            model: "llama3-70b-8192".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "compose".to_string(),
            }],
            temperature: 0.7,
            max_tokens: 350,
            response_format: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn response_content_deserializes() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Dear hiring manager"}}]}"#;
        let parsed: ChatCompletionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Dear hiring manager");
    }
}
