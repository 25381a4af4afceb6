// src/composer/prompts.rs
//! Prompt assembly for email composition. One large instructional prompt;
//! no post-processing of the model's reply.

use super::{CandidateProfile, StyleOptions, Tone};
use crate::scraping::JobRecord;

/// At most this many extracted skills are surfaced to the model; beyond
/// that the list stops adding signal.
const MAX_PROMPT_SKILLS: usize = 10;

pub fn build_email_prompt(
    record: &JobRecord,
    profile: &CandidateProfile,
    style: &StyleOptions,
) -> String {
    let candidate_skills = profile
        .skills
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("Not provided");
    let experience = profile
        .experience
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&record.experience);

    let emoji_note = if style.tone == Tone::Friendly {
        " (use 1-2 emojis in subject line)"
    } else {
        ""
    };

    let key_requirements = if record.skills.is_empty() {
        "Analyze JD text directly".to_string()
    } else {
        record
            .skills
            .iter()
            .take(MAX_PROMPT_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"**Objective**: Create a job application email that demonstrates strong skill alignment between candidate and position.

**Job Analysis Requirements**:
1. Carefully analyze this job description for sections titled:
   - "Qualifications"
   - "Skills Required"
   - "Requirements"
   - "Technical Skills"
   - "What We're Looking For"
2. Extract ALL technical/hard skills and tools mentioned (prioritize repeated terms)
3. Identify 3-5 CORE requirements (e.g., "Python", "AWS", "Agile methodologies")

**Candidate Profile**:
- My Skills: {candidate_skills}
- Relevant Experience: {experience}

**Email Composition Rules**:
1. STRUCTURE:
   - Opening: Express enthusiasm for specific role aspects
   - Skill Matching: Create bullet points matching 3-4 JD requirements with my skills
   - Experience Proof: Add 1 brief achievement statement per matched skill
   - Closing: Request next steps

2. Match Priorities:
   a) Direct tool/technology matches (Python -> Python)
   b) Conceptual matches (Problem solving -> Analytical skills)
   c) Transferable skills (Team leadership -> Project management)

3. Style Guidelines:
   - Tone: {tone}{emoji_note}
   - Length: {length} ({words} words)
   - Use industry-specific terminology from JD
   - Mirror language from skills section ("We require Python" -> "My Python experience...")
   - Keep paragraphs under 3 lines
   - Use active voice and metrics when possible

**Example Structure**:
"Having developed [SKILL 1] experience through [CONTEXT],
I successfully [ACHIEVEMENT]. This aligns with your need for [JD REQUIREMENT]..."

**Job Details**:
- Role: {role}
- Company: {company}
- Key Requirements: {key_requirements}
- Job Description: {description}
"#,
        tone = style.tone,
        length = style.length,
        words = style.length.word_target(),
        role = record.role,
        company = record.company,
        description = record.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::Length;
    use crate::scraping::EXPERIENCE_UNSPECIFIED;

    fn sample_record(skills: Vec<&str>) -> JobRecord {
        JobRecord {
            role: "Software Engineer".to_string(),
            company: "ExampleCorp".to_string(),
            description: "Build and run Rust services.".to_string(),
            skills: skills.into_iter().map(String::from).collect(),
            experience: EXPERIENCE_UNSPECIFIED.to_string(),
        }
    }

    fn style(tone: Tone, length: Length) -> StyleOptions {
        StyleOptions { tone, length }
    }

    #[test]
    fn word_targets_appear_literally() {
        let record = sample_record(vec![]);
        let profile = CandidateProfile::default();
        for (length, target) in [
            (Length::Short, "(160 words)"),
            (Length::Medium, "(220 words)"),
            (Length::Long, "(300 words)"),
        ] {
            let prompt = build_email_prompt(&record, &profile, &style(Tone::Professional, length));
            assert!(prompt.contains(target), "missing {} in prompt", target);
        }
    }

    #[test]
    fn emoji_directive_only_for_friendly_tone() {
        let record = sample_record(vec![]);
        let profile = CandidateProfile::default();

        let friendly = build_email_prompt(&record, &profile, &style(Tone::Friendly, Length::Medium));
        assert!(friendly.contains("use 1-2 emojis in subject line"));

        let formal = build_email_prompt(&record, &profile, &style(Tone::Formal, Length::Medium));
        assert!(!formal.contains("emojis"));
    }

    #[test]
    fn skills_are_capped_at_ten() {
        let skills: Vec<String> = (1..=15).map(|i| format!("Skill{}", i)).collect();
        let record = sample_record(skills.iter().map(String::as_str).collect());
        let prompt = build_email_prompt(
            &record,
            &CandidateProfile::default(),
            &StyleOptions::default(),
        );
        assert!(prompt.contains("Skill10"));
        assert!(!prompt.contains("Skill11"));
    }

    #[test]
    fn empty_skills_fall_back_to_direct_analysis() {
        let record = sample_record(vec![]);
        let prompt = build_email_prompt(
            &record,
            &CandidateProfile::default(),
            &StyleOptions::default(),
        );
        assert!(prompt.contains("Key Requirements: Analyze JD text directly"));
    }

    #[test]
    fn absent_candidate_fields_use_placeholders() {
        let record = sample_record(vec![]);
        let prompt = build_email_prompt(
            &record,
            &CandidateProfile::default(),
            &StyleOptions::default(),
        );
        assert!(prompt.contains("My Skills: Not provided"));
        assert!(prompt.contains("Relevant Experience: Not specified"));
    }

    #[test]
    fn provided_candidate_fields_are_embedded() {
        let record = sample_record(vec!["Rust"]);
        let profile = CandidateProfile {
            name: Some("Alex Smith".to_string()),
            skills: Some("Rust, Kubernetes".to_string()),
            experience: Some("5 years of backend work".to_string()),
        };
        let prompt = build_email_prompt(&record, &profile, &StyleOptions::default());
        assert!(prompt.contains("My Skills: Rust, Kubernetes"));
        assert!(prompt.contains("Relevant Experience: 5 years of backend work"));
    }
}
