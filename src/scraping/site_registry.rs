// src/scraping/site_registry.rs
use super::{clean_text, PartialJob};
use scraper::{Html, Selector};
use tracing::{info, warn};

/// One known job-board layout. Selector lists are ordered: the first one
/// that yields non-empty text wins, so layout variants are handled by
/// appending selectors rather than branching.
pub struct SiteRules {
    pub host: &'static str,
    pub role_selectors: &'static [&'static str],
    pub company_selectors: &'static [&'static str],
    pub description_selectors: &'static [&'static str],
}

/// Known layouts, matched by host substring. Adding a board is a data
/// change: append an entry, never touch the dispatch below.
const REGISTRY: &[SiteRules] = &[
    SiteRules {
        host: "linkedin.com",
        role_selectors: &[
            "main.main h1",
            "h1.top-card-layout__title",
            ".job-details-jobs-unified-top-card__job-title",
        ],
        company_selectors: &[
            "a.topcard__org-name-link",
            ".job-details-jobs-unified-top-card__company-name",
            ".jobs-unified-top-card__company-name",
        ],
        description_selectors: &[
            "div.description__text",
            ".jobs-box__html-content",
            ".jobs-description-content__text",
        ],
    },
    SiteRules {
        host: "indeed.com",
        role_selectors: &["h1.jobsearch-JobInfoHeader-title"],
        company_selectors: &[
            "[data-testid='inlineHeader-companyName']",
            "div.jobsearch-CompanyInfoContainer",
        ],
        description_selectors: &["#jobDescriptionText"],
    },
];

/// Typed outcome of the site-specific stage. Selector misses are data,
/// not errors; the orchestrator drives its fallback decision off this.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteExtraction {
    /// Role, company and description all resolved.
    Full(PartialJob),
    /// At least one field resolved.
    Partial(PartialJob),
    /// No registry entry matched the host, or nothing resolved.
    Empty,
}

impl SiteExtraction {
    pub fn into_partial(self) -> PartialJob {
        match self {
            SiteExtraction::Full(p) | SiteExtraction::Partial(p) => p,
            SiteExtraction::Empty => PartialJob::default(),
        }
    }
}

/// Apply the first matching registry entry to the parsed page.
pub fn extract(url: &str, document: &Html) -> SiteExtraction {
    let Some(rules) = REGISTRY.iter().find(|r| url.contains(r.host)) else {
        info!("No site-specific rules for {}", url);
        return SiteExtraction::Empty;
    };

    let partial = PartialJob {
        role: select_text(document, rules.role_selectors),
        company: select_first_line(document, rules.company_selectors),
        description: select_text(document, rules.description_selectors),
        skills: Vec::new(),
    };

    match (
        partial.role.is_some(),
        partial.company.is_some(),
        partial.description.is_some(),
    ) {
        (true, true, true) => SiteExtraction::Full(partial),
        (false, false, false) => {
            warn!("Site rules for {} matched nothing on page", rules.host);
            SiteExtraction::Empty
        }
        _ => SiteExtraction::Partial(partial),
    }
}

fn select_text(document: &Html, selectors: &[&str]) -> Option<String> {
    select_with(document, selectors, |element| {
        clean_text(&element.text().collect::<Vec<_>>().join(" "))
    })
}

/// Company containers on listing sites carry the rating and location on
/// their own lines below the name; only the first non-empty line is the
/// company.
fn select_first_line(document: &Html, selectors: &[&str]) -> Option<String> {
    select_with(document, selectors, |element| {
        element
            .text()
            .collect::<String>()
            .lines()
            .map(clean_text)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
    })
}

fn select_with(
    document: &Html,
    selectors: &[&str],
    extract_text: impl Fn(scraper::ElementRef<'_>) -> String,
) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            warn!("Invalid selector skipped: {}", selector_str);
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = extract_text(element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKEDIN_PAGE: &str = r#"
        <html><body>
        <main class="main">
            <h1>Software Engineer | ExampleCorp</h1>
            <a class="topcard__org-name-link">ExampleCorp · Remote</a>
        </main>
        <div class="description__text">
            We are looking for an engineer with Rust and distributed systems
            experience to join our platform team.
        </div>
        </body></html>
    "#;

    #[test]
    fn linkedin_page_resolves_all_fields() {
        let document = Html::parse_document(LINKEDIN_PAGE);
        let outcome = extract("https://www.linkedin.com/jobs/view/123", &document);
        let SiteExtraction::Full(partial) = outcome else {
            panic!("expected full extraction, got {:?}", outcome);
        };
        assert_eq!(partial.role.as_deref(), Some("Software Engineer | ExampleCorp"));
        assert_eq!(partial.company.as_deref(), Some("ExampleCorp · Remote"));
        assert!(partial.description.unwrap().contains("Rust"));
    }

    #[test]
    fn missing_company_yields_partial() {
        let html = r#"
            <main class="main"><h1>Data Analyst</h1></main>
            <div class="description__text">Analyze data all day.</div>
        "#;
        let document = Html::parse_document(html);
        let outcome = extract("https://linkedin.com/jobs/view/9", &document);
        let SiteExtraction::Partial(partial) = outcome else {
            panic!("expected partial extraction, got {:?}", outcome);
        };
        assert_eq!(partial.role.as_deref(), Some("Data Analyst"));
        assert!(partial.company.is_none());
    }

    #[test]
    fn unknown_host_is_empty() {
        let document = Html::parse_document("<h1>Some Job</h1>");
        assert_eq!(
            extract("https://jobs.example.org/1", &document),
            SiteExtraction::Empty
        );
    }

    #[test]
    fn indeed_selectors_resolve() {
        let html = r#"
            <h1 class="jobsearch-JobInfoHeader-title">Backend Developer</h1>
            <div class="jobsearch-CompanyInfoContainer">Acme Corp</div>
            <div id="jobDescriptionText">Build APIs in Rust.</div>
        "#;
        let document = Html::parse_document(html);
        let outcome = extract("https://www.indeed.com/viewjob?jk=1", &document);
        let SiteExtraction::Full(partial) = outcome else {
            panic!("expected full extraction, got {:?}", outcome);
        };
        assert_eq!(partial.role.as_deref(), Some("Backend Developer"));
        assert_eq!(partial.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn indeed_company_container_keeps_only_the_name_line() {
        let html = r#"
            <h1 class="jobsearch-JobInfoHeader-title">Backend Developer</h1>
            <div class="jobsearch-CompanyInfoContainer">
                <div>Acme Corp</div>
                <div>3.5 out of 5 stars</div>
                <div>New York, NY 10001</div>
            </div>
            <div id="jobDescriptionText">Build APIs in Rust.</div>
        "#;
        let document = Html::parse_document(html);
        let SiteExtraction::Full(partial) =
            extract("https://www.indeed.com/viewjob?jk=2", &document)
        else {
            panic!("expected full extraction");
        };
        assert_eq!(partial.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn precise_company_selector_wins_over_container() {
        let html = r#"
            <h1 class="jobsearch-JobInfoHeader-title">Backend Developer</h1>
            <div class="jobsearch-CompanyInfoContainer">
                <span data-testid="inlineHeader-companyName">Acme Corp</span>
                <span>3.5 out of 5 stars</span>
            </div>
            <div id="jobDescriptionText">Build APIs in Rust.</div>
        "#;
        let document = Html::parse_document(html);
        let SiteExtraction::Full(partial) =
            extract("https://www.indeed.com/viewjob?jk=3", &document)
        else {
            panic!("expected full extraction");
        };
        assert_eq!(partial.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn matched_host_with_no_fields_is_empty() {
        let document = Html::parse_document("<p>login required</p>");
        assert_eq!(
            extract("https://linkedin.com/jobs/view/1", &document),
            SiteExtraction::Empty
        );
    }
}
