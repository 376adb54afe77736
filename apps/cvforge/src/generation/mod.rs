//! Generation: cover letters and section rewrites via the configured
//! completion provider. Prompt text is French, matching the product's
//! primary audience; `language` only changes the language the letter is
//! requested in.

pub mod letter;
pub mod prompts;
pub mod rewrite;

use serde::{Deserialize, Serialize};

use crate::models::settings::UiLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterTone {
    Professional,
    Enthusiastic,
    Confident,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterLength {
    Short,
    Medium,
    Long,
}

/// Knobs for a cover-letter generation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub language: UiLanguage,
    pub tone: LetterTone,
    pub length: LetterLength,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            language: UiLanguage::Fr,
            tone: LetterTone::Professional,
            length: LetterLength::Medium,
        }
    }
}

impl LetterTone {
    /// French descriptor injected into the prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            LetterTone::Professional => "professionnel et formel",
            LetterTone::Enthusiastic => "enthousiaste et motivé",
            LetterTone::Confident => "confiant et déterminé",
            LetterTone::Creative => "créatif et original",
        }
    }
}

impl LetterLength {
    pub fn descriptor(&self) -> &'static str {
        match self {
            LetterLength::Short => "courte (200-300 mots)",
            LetterLength::Medium => "moyenne (400-500 mots)",
            LetterLength::Long => "longue (600-800 mots)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.tone, LetterTone::Professional);
        assert_eq!(options.length, LetterLength::Medium);
        assert_eq!(options.language, UiLanguage::Fr);
    }

    #[test]
    fn test_tone_serde_lowercase() {
        let tone: LetterTone = serde_json::from_str(r#""enthusiastic""#).unwrap();
        assert_eq!(tone, LetterTone::Enthusiastic);
    }

    #[test]
    fn test_length_descriptors_name_word_counts() {
        assert!(LetterLength::Short.descriptor().contains("200-300"));
        assert!(LetterLength::Medium.descriptor().contains("400-500"));
        assert!(LetterLength::Long.descriptor().contains("600-800"));
    }
}
