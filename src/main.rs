use anyhow::Result;
use clap::Parser;
use email_generator::{
    AppConfig, EmailHistory, EmailPipeline, EmailRequest, GroqClient, Length, Tone,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Generate a personalized job application email from a posting URL.
#[derive(Parser, Debug)]
#[command(name = "jobmail", version)]
struct Cli {
    /// Job posting URL
    #[arg(long)]
    url: String,

    /// Recipient name (e.g. "John Doe")
    #[arg(long)]
    recipient_name: String,

    /// Recipient role (e.g. "Hiring Manager")
    #[arg(long)]
    recipient_role: String,

    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Your relevant skills, comma-separated
    #[arg(long)]
    skills: Option<String>,

    #[arg(long, value_enum, default_value = "professional")]
    tone: Tone,

    #[arg(long, value_enum, default_value = "medium")]
    length: Length,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let chat = Arc::new(GroqClient::new(&config)?);
    let pipeline = EmailPipeline::new(chat)?;

    let request = EmailRequest {
        job_url: cli.url,
        recipient_name: cli.recipient_name,
        recipient_role: cli.recipient_role,
        candidate_name: cli.name,
        candidate_skills: cli.skills,
        tone: cli.tone,
        length: cli.length,
    };

    // Session history: in-memory only, bounded to the last three runs.
    let mut history = EmailHistory::new();

    match pipeline.generate(&request).await {
        Ok(generated) => {
            history.push(generated.email, generated.job_role);
            for entry in history.recent() {
                println!("--- {} ({}) ---", entry.job_role, entry.timestamp);
                println!("{}", entry.email);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
