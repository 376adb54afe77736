use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::UserProfile;

/// The reorderable blocks a CV document is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    Projects,
}

/// A named section. The title is user-editable and drives the ATS
/// section-headings check; the id decides what content gets rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvSection {
    pub id: SectionType,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvColors {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

/// Font values are CSS family lists ("Georgia, serif"); only the first
/// family matters for ATS scoring and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvFonts {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvLayout {
    pub colors: CvColors,
    pub fonts: CvFonts,
}

impl Default for CvLayout {
    fn default() -> Self {
        CvLayout {
            colors: CvColors {
                primary: "#2563EB".to_string(),
                secondary: "#4F46E5".to_string(),
                text: "#111827".to_string(),
                background: "#FFFFFF".to_string(),
            },
            fonts: CvFonts {
                heading: "Georgia, serif".to_string(),
                body: "Arial, sans-serif".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Link,
}

/// Record of a past export of this CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvExport {
    pub id: Uuid,
    pub format: ExportFormat,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub views: u32,
}

/// A CV document: a snapshot of the profile plus presentation choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cv {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub name: String,
    pub template_id: String,
    pub target_job: Option<String>,
    pub target_company: Option<String>,
    pub content: UserProfile,
    pub layout: CvLayout,
    pub sections: Vec<CvSection>,
    /// Last computed job-match score, carried into the ATS keyword check.
    pub score: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub exports: Vec<CvExport>,
    pub views: u32,
}

impl Cv {
    /// Creates a new CV from a profile snapshot with the default section
    /// order and layout.
    pub fn from_profile(profile: &UserProfile, name: String, template_id: String) -> Self {
        let now = Utc::now();
        Cv {
            id: Uuid::new_v4(),
            profile_id: profile.id,
            name,
            template_id,
            target_job: None,
            target_company: None,
            content: profile.clone(),
            layout: CvLayout::default(),
            sections: default_sections(),
            score: None,
            created_at: now,
            updated_at: now,
            exports: Vec::new(),
            views: 0,
        }
    }
}

/// Default section order for a freshly created CV.
pub fn default_sections() -> Vec<CvSection> {
    [
        (SectionType::Summary, "Résumé"),
        (SectionType::Experience, "Expérience Professionnelle"),
        (SectionType::Education, "Formation"),
        (SectionType::Skills, "Compétences"),
        (SectionType::Languages, "Langues"),
    ]
    .into_iter()
    .map(|(id, title)| CvSection {
        id,
        title: title.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Classic,
    Modern,
    Creative,
    Minimal,
}

/// A visual template a CV can be rendered against. Output-only: the
/// catalog is compiled in, never read back.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
}

/// The built-in template catalog. `creative` is the only multi-column
/// layout, which the ATS checker penalizes.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "modern",
            name: "Moderne",
            category: TemplateCategory::Modern,
        },
        Template {
            id: "classic",
            name: "Classique",
            category: TemplateCategory::Classic,
        },
        Template {
            id: "creative",
            name: "Créatif",
            category: TemplateCategory::Creative,
        },
        Template {
            id: "ats",
            name: "ATS Optimisé",
            category: TemplateCategory::Minimal,
        },
    ]
}
