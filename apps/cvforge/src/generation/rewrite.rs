//! AI rewrite suggestions for a single CV section.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts;
use crate::llm_client::TextGenerator;
use crate::models::job::JobOffer;
use crate::models::profile::UserProfile;

/// Asks the provider for a punchier rewrite of `current_text`. The
/// returned string is the rewritten text only, per the prompt contract.
pub async fn generate_rewrite_suggestion(
    generator: &dyn TextGenerator,
    section: &str,
    current_text: &str,
    profile: &UserProfile,
    job_offer: Option<&JobOffer>,
) -> Result<String, AppError> {
    if current_text.trim().is_empty() {
        return Err(AppError::Validation(
            "nothing to rewrite: the section text is empty".to_string(),
        ));
    }

    let prompt = prompts::rewrite_prompt(section, current_text, profile, job_offer);
    let suggestion = generator.generate(&prompt).await?;

    info!("Generated rewrite suggestion for section '{section}'");

    Ok(suggestion)
}
