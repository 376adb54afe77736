//! Match engine: compares a candidate profile's aggregated text against
//! a job posting and scores the keyword overlap.

use serde::{Deserialize, Serialize};

use crate::models::job::JobOffer;
use crate::models::profile::UserProfile;
use crate::scoring::keywords::extract_keywords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Reorder,
    Highlight,
    Add,
    Modify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

/// Reserved extension point: the engine itself never emits these; an AI
/// collaborator may append them downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub section: String,
    pub description: String,
    pub priority: SuggestionPriority,
}

/// Result of matching one profile against one job offer. Immutable;
/// built fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of job keywords found in the profile text, 0–100.
    pub score: u32,
    /// Job keywords found in the profile, in job-keyword iteration order.
    pub matched_skills: Vec<String>,
    /// Job keywords absent from the profile, same ordering.
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<MatchSuggestion>,
}

/// Scores `profile` against `job_offer`.
///
/// Every keyword extracted from the offer is classified exactly once:
/// matched if it occurs anywhere in the profile text as a plain
/// substring, missing otherwise. The substring test is deliberately not
/// word-boundary-aware: a job keyword that is a fragment of a longer
/// profile word still counts. Documented approximation, kept as-is.
pub fn calculate_match(profile: &UserProfile, job_offer: &JobOffer) -> MatchResult {
    let profile_text = build_profile_text(profile);

    let job_text = format!(
        "{} {}",
        job_offer.description,
        job_offer.requirements.join(" ")
    );
    let job_keywords = extract_keywords(&job_text);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for keyword in &job_keywords {
        if profile_text.contains(keyword.as_str()) {
            matched_skills.push(keyword.clone());
        } else {
            missing_skills.push(keyword.clone());
        }
    }

    let score = if job_keywords.is_empty() {
        0
    } else {
        ((matched_skills.len() as f64 / job_keywords.len() as f64) * 100.0).round() as u32
    };

    MatchResult {
        score,
        matched_skills,
        missing_skills,
        suggestions: Vec::new(),
    }
}

/// Concatenates the profile's summary, experience entries (title,
/// description, technologies) and skill names, lowercased once.
fn build_profile_text(profile: &UserProfile) -> String {
    let mut parts: Vec<&str> = vec![&profile.summary];
    for experience in &profile.experience {
        parts.push(&experience.title);
        parts.push(&experience.description);
        for technology in &experience.technologies {
            parts.push(technology);
        }
    }
    for skill in &profile.skills {
        parts.push(&skill.name);
    }
    parts.join(" ").to_lowercase()
}
