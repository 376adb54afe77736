//! Cover-letter generation against the configured provider.

use tracing::info;

use crate::errors::AppError;
use crate::generation::{prompts, GenerationOptions};
use crate::llm_client::TextGenerator;
use crate::models::job::JobOffer;
use crate::models::profile::UserProfile;

/// Generates a cover letter for `profile` applying to `job_offer`.
/// Returns the raw generated text; the caller decides whether to keep it.
pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    job_offer: &JobOffer,
    profile: &UserProfile,
    options: &GenerationOptions,
) -> Result<String, AppError> {
    if job_offer.description.trim().is_empty() && job_offer.requirements.is_empty() {
        return Err(AppError::Validation(
            "job offer has no description or requirements to write against".to_string(),
        ));
    }

    let prompt = prompts::cover_letter_prompt(job_offer, profile, options);
    let letter = generator.generate(&prompt).await?;

    info!(
        "Generated cover letter for '{}' at {} ({} chars)",
        job_offer.title,
        job_offer.company,
        letter.len()
    );

    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Fake backend that records the prompt and replies with canned text.
    struct FakeGenerator {
        reply: &'static str,
        last_prompt: Mutex<Option<String>>,
    }

    impl FakeGenerator {
        fn new(reply: &'static str) -> Self {
            FakeGenerator {
                reply,
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    fn make_profile() -> UserProfile {
        UserProfile::empty("Alexandre Dubois".to_string(), "alex@example.com".to_string())
    }

    #[tokio::test]
    async fn test_generates_letter_from_backend_reply() {
        let generator = FakeGenerator::new("Madame, Monsieur, ...");
        let offer = JobOffer::manual(
            "Lead Developer".to_string(),
            "Acme".to_string(),
            "Construire la plateforme data.".to_string(),
        );

        let letter = generate_cover_letter(
            &generator,
            &offer,
            &make_profile(),
            &GenerationOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(letter, "Madame, Monsieur, ...");
        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Lead Developer"));
        assert!(prompt.contains("Alexandre Dubois"));
    }

    #[tokio::test]
    async fn test_empty_job_offer_is_rejected_before_any_call() {
        let generator = FakeGenerator::new("unused");
        let offer = JobOffer::manual("Titre".to_string(), "Acme".to_string(), "   ".to_string());

        let result = generate_cover_letter(
            &generator,
            &offer,
            &make_profile(),
            &GenerationOptions::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(generator.last_prompt.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_requirements_alone_are_enough() {
        let generator = FakeGenerator::new("Lettre");
        let mut offer = JobOffer::manual("Titre".to_string(), "Acme".to_string(), "".to_string());
        offer.requirements = vec!["5 ans d'expérience React".to_string()];

        let letter = generate_cover_letter(
            &generator,
            &offer,
            &make_profile(),
            &GenerationOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(letter, "Lettre");
    }
}
