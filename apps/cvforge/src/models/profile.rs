use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate's master profile. CVs snapshot it into their `content`
/// field so later profile edits never rewrite an existing document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// An empty profile shell with fresh timestamps.
    pub fn empty(name: String, email: String) -> Self {
        let now = Utc::now();
        UserProfile {
            id: Uuid::new_v4(),
            name,
            email,
            phone: None,
            address: None,
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Dates are kept as the user typed them ("2021-01", "2019"); the app
/// never does date arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_serde_lowercase() {
        let level: SkillLevel = serde_json::from_str(r#""expert""#).unwrap();
        assert_eq!(level, SkillLevel::Expert);
        assert_eq!(serde_json::to_string(&SkillLevel::Beginner).unwrap(), r#""beginner""#);
    }

    #[test]
    fn test_experience_missing_technologies_defaults_empty() {
        let json = r#"{
            "id": "7b2e9b7e-9f43-4df1-a41d-111111111111",
            "title": "Développeur Frontend",
            "company": "Web Agency Creativ",
            "location": null,
            "start_date": "2019-06",
            "end_date": "2020-12",
            "current": false,
            "description": "Création d'interfaces utilisateur.",
            "achievements": []
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();
        assert!(exp.technologies.is_empty());
    }

    #[test]
    fn test_empty_profile_has_no_entries() {
        let profile = UserProfile::empty("Alex".to_string(), "alex@example.com".to_string());
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.summary, "");
    }
}
