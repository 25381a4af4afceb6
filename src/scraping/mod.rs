// src/scraping/mod.rs
pub mod fetcher;
pub mod generative;
pub mod orchestrator;
pub mod site_registry;

pub use fetcher::PageFetcher;
pub use generative::GenerativeExtractor;
pub use orchestrator::JobScraper;

/// Sentinel fed into the composition prompt when the posting carries no
/// experience requirement. Matches the placeholder the validation gate
/// rejects for required fields, which is why `experience` is not required.
pub const EXPERIENCE_UNSPECIFIED: &str = "Not specified";

/// Normalized, validated job posting. Only the orchestrator constructs
/// these; everything downstream can rely on the required fields being
/// non-empty and free of "not found"/"not specified" placeholders.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub role: String,
    pub company: String,
    pub description: String,
    pub skills: Vec<String>,
    pub experience: String,
}

/// Pre-validation extraction result. Either stage may leave any field
/// absent; the orchestrator decides what that means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialJob {
    pub role: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

impl PartialJob {
    /// Role and company are the fields the fallback decision keys on.
    pub fn has_essentials(&self) -> bool {
        self.role.is_some() && self.company.is_some()
    }
}

/// Collapse whitespace runs and join lines into a single clean string.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(
            clean_text("  Senior\n   Engineer \t Remote "),
            "Senior Engineer Remote"
        );
    }

    #[test]
    fn essentials_require_role_and_company() {
        let mut partial = PartialJob {
            role: Some("Engineer".to_string()),
            ..Default::default()
        };
        assert!(!partial.has_essentials());
        partial.company = Some("Acme".to_string());
        assert!(partial.has_essentials());
    }
}
