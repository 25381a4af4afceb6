// src/scraping/fetcher.rs
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Raw fetch result. A non-2xx status is not an error here: job boards
/// sometimes serve usable markup alongside a 403, so the caller decides.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

/// Plain HTTP GET with a desktop-browser identity. No retries, no cookies,
/// no JavaScript execution.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        info!("Fetching job post: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Non-success status {} for {}", status, url);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(FetchedPage { status, body })
    }
}
