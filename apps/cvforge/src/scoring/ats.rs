//! ATS compatibility checker: a fixed battery of independent checks
//! over a CV document, aggregated into a 0–100 score with per-check
//! recommendations.
//!
//! The checklist is a static table of (predicate, penalty, builders)
//! records evaluated exhaustively in declared order by a fold, with no
//! short-circuiting, no running mutable score. Some checks report a
//! positive "good" recommendation when they pass; three of them
//! (section-headings, keyword-match, action-verbs) intentionally have no
//! positive counterpart.

use serde::{Deserialize, Serialize};

use crate::models::cv::Cv;

/// Font families ATS parsers are assumed to handle. Compared against the
/// first comma-separated family of each configured font stack.
const STANDARD_FONTS: [&str; 5] = ["arial", "verdana", "times new roman", "georgia", "garamond"];

/// Substrings every CV is expected to carry among its section titles.
const STANDARD_TITLES: [&str; 5] = ["résumé", "expérience", "formation", "compétences", "langues"];

/// Strong opening verbs for experience descriptions.
const ACTION_VERBS: [&str; 8] = [
    "développé",
    "géré",
    "optimisé",
    "créé",
    "mis en place",
    "dirigé",
    "augmenté",
    "réduit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtsSeverity {
    High,
    Medium,
    Low,
    /// A passed check reported positively; carries no penalty.
    Good,
}

/// One finding, positive or negative, from a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsRecommendation {
    pub id: String,
    pub severity: AtsSeverity,
    pub title: String,
    pub description: String,
}

/// Aggregated result: clamped score plus findings in check order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsCheckResult {
    pub score: u32,
    pub recommendations: Vec<AtsRecommendation>,
}

/// One entry of the fixed checklist. `fires` decides whether the
/// penalty applies; builders take the CV because some descriptions
/// interpolate its data (fonts, stored match score).
struct AtsCheck {
    fires: fn(&Cv) -> bool,
    penalty: u32,
    on_fire: fn(&Cv) -> AtsRecommendation,
    on_pass: Option<fn(&Cv) -> AtsRecommendation>,
}

static CHECKS: &[AtsCheck] = &[
    AtsCheck {
        fires: uses_multi_column_template,
        penalty: 25,
        on_fire: layout_columns,
        on_pass: Some(layout_columns_ok),
    },
    AtsCheck {
        fires: uses_non_standard_fonts,
        penalty: 10,
        on_fire: font_choice,
        on_pass: Some(font_choice_ok),
    },
    AtsCheck {
        fires: missing_standard_headings,
        penalty: 15,
        on_fire: section_headings,
        on_pass: None,
    },
    AtsCheck {
        fires: missing_contact_info,
        penalty: 20,
        on_fire: contact_info,
        on_pass: Some(contact_info_ok),
    },
    AtsCheck {
        fires: low_keyword_match,
        penalty: 5,
        on_fire: keyword_match,
        on_pass: None,
    },
    AtsCheck {
        fires: lacks_action_verbs,
        penalty: 5,
        on_fire: action_verbs,
        on_pass: None,
    },
    AtsCheck {
        fires: lacks_quantified_achievements,
        penalty: 10,
        on_fire: quantify_achievements,
        on_pass: Some(quantify_achievements_ok),
    },
];

/// Runs the full checklist against `cv`.
///
/// Every check executes regardless of earlier results; recommendations
/// accumulate in table order and the final score is
/// `max(0, 100 − Σ penalties)`. Never fails, never mutates the CV.
pub fn check_cv_for_ats(cv: &Cv) -> AtsCheckResult {
    let (penalties, recommendations) = CHECKS.iter().fold(
        (0u32, Vec::with_capacity(CHECKS.len())),
        |(penalties, mut recommendations), check| {
            if (check.fires)(cv) {
                recommendations.push((check.on_fire)(cv));
                (penalties + check.penalty, recommendations)
            } else {
                if let Some(on_pass) = check.on_pass {
                    recommendations.push(on_pass(cv));
                }
                (penalties, recommendations)
            }
        },
    );

    AtsCheckResult {
        score: 100u32.saturating_sub(penalties),
        recommendations,
    }
}

// ── predicates ──────────────────────────────────────────────────────────

fn uses_multi_column_template(cv: &Cv) -> bool {
    cv.template_id == "creative"
}

fn uses_non_standard_fonts(cv: &Cv) -> bool {
    !is_standard_font(&cv.layout.fonts.heading) || !is_standard_font(&cv.layout.fonts.body)
}

/// Only the first comma-separated family counts; fallback families in
/// the stack are ignored.
fn is_standard_font(stack: &str) -> bool {
    let first = stack.split(',').next().unwrap_or("").to_lowercase();
    STANDARD_FONTS.contains(&first.as_str())
}

fn missing_standard_headings(cv: &Cv) -> bool {
    let titles: Vec<String> = cv.sections.iter().map(|s| s.title.to_lowercase()).collect();
    !STANDARD_TITLES
        .iter()
        .all(|required| titles.iter().any(|title| title.contains(required)))
}

fn missing_contact_info(cv: &Cv) -> bool {
    cv.content.email.is_empty()
        || cv.content.phone.as_deref().map_or(true, str::is_empty)
}

/// Fires only when the CV targets a job and carries a previously
/// computed match score below 70. A stored score of 0 still counts as
/// present.
fn low_keyword_match(cv: &Cv) -> bool {
    cv.target_job.is_some() && cv.score.is_some_and(|score| score < 70)
}

fn lacks_action_verbs(cv: &Cv) -> bool {
    !cv.content.experience.iter().any(|experience| {
        let description = experience.description.to_lowercase();
        ACTION_VERBS.iter().any(|verb| description.starts_with(verb))
    })
}

fn lacks_quantified_achievements(cv: &Cv) -> bool {
    !cv.content.experience.iter().any(|experience| {
        has_digit(&experience.description)
            || experience.achievements.iter().any(|a| has_digit(a))
    })
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

// ── recommendation builders ─────────────────────────────────────────────

fn recommendation(
    id: &str,
    severity: AtsSeverity,
    title: &str,
    description: String,
) -> AtsRecommendation {
    AtsRecommendation {
        id: id.to_string(),
        severity,
        title: title.to_string(),
        description,
    }
}

fn layout_columns(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "layout-columns",
        AtsSeverity::High,
        "Mise en page multi-colonnes",
        "Les mises en page à plusieurs colonnes peuvent perturber les ATS. Préférez un modèle à \
         une seule colonne comme \"Moderne\" ou \"ATS Optimisé\" pour une meilleure compatibilité."
            .to_string(),
    )
}

fn layout_columns_ok(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "layout-columns-ok",
        AtsSeverity::Good,
        "Mise en page sur une colonne",
        "Votre CV utilise une mise en page à colonne unique, ce qui est idéal pour la \
         compatibilité avec les ATS."
            .to_string(),
    )
}

fn font_choice(cv: &Cv) -> AtsRecommendation {
    recommendation(
        "font-choice",
        AtsSeverity::Medium,
        "Polices non standards",
        format!(
            "Utilisez des polices standards comme Arial, Times New Roman, ou Georgia. Votre CV \
             utilise \"{}\" et \"{}\", qui pourraient ne pas être reconnues.",
            cv.layout.fonts.heading, cv.layout.fonts.body
        ),
    )
}

fn font_choice_ok(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "font-choice-ok",
        AtsSeverity::Good,
        "Polices standards",
        "Vous utilisez des polices standards, bien lisibles par les ATS.".to_string(),
    )
}

fn section_headings(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "section-headings",
        AtsSeverity::Medium,
        "En-têtes de section non standards",
        "Utilisez des en-têtes de section clairs et standards (ex: \"Expérience \
         Professionnelle\", \"Formation\"). Les titres trop créatifs peuvent être mal interprétés."
            .to_string(),
    )
}

fn contact_info(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "contact-info",
        AtsSeverity::High,
        "Informations de contact manquantes",
        "Votre email ou numéro de téléphone semble manquant ou n'est pas dans un format \
         standard. Assurez-vous qu'ils sont clairement indiqués."
            .to_string(),
    )
}

fn contact_info_ok(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "contact-info-ok",
        AtsSeverity::Good,
        "Informations de contact claires",
        "Vos informations de contact sont présentes et devraient être faciles à analyser."
            .to_string(),
    )
}

fn keyword_match(cv: &Cv) -> AtsRecommendation {
    recommendation(
        "keyword-match",
        AtsSeverity::Low,
        "Optimisation des mots-clés",
        format!(
            "Votre score de compatibilité avec l'offre est de {}%. Pensez à intégrer plus de \
             mots-clés de l'offre d'emploi dans votre CV.",
            cv.score.unwrap_or(0)
        ),
    )
}

fn action_verbs(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "action-verbs",
        AtsSeverity::Low,
        "Utilisation de verbes d'action",
        "Commencez les descriptions de vos expériences par des verbes d'action forts (ex: \
         \"Développé\", \"Géré\", \"Optimisé\") pour plus d'impact."
            .to_string(),
    )
}

fn quantify_achievements(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "quantify-achievements",
        AtsSeverity::Medium,
        "Manque de résultats chiffrés",
        "Vos réalisations ne sont pas quantifiées. Ajoutez des chiffres, pourcentages ou \
         métriques pour démontrer concrètement votre impact (ex: \"Augmentation des ventes de \
         20%\")."
            .to_string(),
    )
}

fn quantify_achievements_ok(_cv: &Cv) -> AtsRecommendation {
    recommendation(
        "quantify-achievements-ok",
        AtsSeverity::Good,
        "Résultats chiffrés",
        "Excellent ! Vous avez inclus des résultats chiffrés, ce qui est très apprécié par les \
         recruteurs et les ATS."
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Cv, CvSection, SectionType};
    use crate::models::profile::{Experience, UserProfile};
    use uuid::Uuid;

    fn make_experience(description: &str, achievements: Vec<&str>) -> Experience {
        Experience {
            id: Uuid::new_v4(),
            title: "Développeur Full-Stack Senior".to_string(),
            company: "Tech Solutions".to_string(),
            location: None,
            start_date: "2021-01".to_string(),
            end_date: None,
            current: true,
            description: description.to_string(),
            achievements: achievements.into_iter().map(String::from).collect(),
            technologies: vec![],
        }
    }

    /// A CV that passes every check: standard template and fonts, full
    /// heading set, contact info, high stored score, strong verbs,
    /// quantified results.
    fn make_clean_cv() -> Cv {
        let mut profile =
            UserProfile::empty("Alexandre Dubois".to_string(), "alex@example.com".to_string());
        profile.phone = Some("06 12 34 56 78".to_string());
        profile.experience = vec![make_experience(
            "Développé une plateforme SaaS utilisée par 200 clients.",
            vec!["Réduction de 50% du temps de chargement."],
        )];

        let mut cv = Cv::from_profile(&profile, "CV Dev".to_string(), "modern".to_string());
        cv.target_job = Some("Développeur Full-Stack Senior".to_string());
        cv.score = Some(90);
        cv
    }

    fn ids(result: &AtsCheckResult) -> Vec<&str> {
        result
            .recommendations
            .iter()
            .map(|r| r.id.as_str())
            .collect()
    }

    #[test]
    fn test_clean_cv_scores_100() {
        let result = check_cv_for_ats(&make_clean_cv());
        assert_eq!(result.score, 100);
        assert_eq!(
            ids(&result),
            vec![
                "layout-columns-ok",
                "font-choice-ok",
                "contact-info-ok",
                "quantify-achievements-ok",
            ]
        );
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.severity == AtsSeverity::Good));
    }

    /// Creative template on an otherwise clean CV: only the layout check
    /// fires, final score 75.
    #[test]
    fn test_creative_template_scores_75() {
        let mut cv = make_clean_cv();
        cv.template_id = "creative".to_string();

        let result = check_cv_for_ats(&cv);
        assert_eq!(result.score, 75);
        assert_eq!(
            ids(&result),
            vec![
                "layout-columns",
                "font-choice-ok",
                "contact-info-ok",
                "quantify-achievements-ok",
            ]
        );
        assert_eq!(result.recommendations[0].severity, AtsSeverity::High);
    }

    /// Minimal CV failing fonts, headings, contact, verbs and
    /// quantification: 100−10−15−20−5−10 = 40.
    #[test]
    fn test_minimal_cv_scores_40() {
        let mut profile = UserProfile::empty(String::new(), String::new());
        profile.phone = Some("06 12 34 56 78".to_string());

        let mut cv = Cv::from_profile(&profile, "CV".to_string(), "modern".to_string());
        cv.layout.fonts.heading = "Comic Sans, cursive".to_string();
        cv.layout.fonts.body = "Comic Sans, cursive".to_string();
        cv.sections = vec![
            CvSection {
                id: SectionType::Summary,
                title: "Summary".to_string(),
            },
            CvSection {
                id: SectionType::Experience,
                title: "Work".to_string(),
            },
        ];

        let result = check_cv_for_ats(&cv);
        assert_eq!(result.score, 40);
        assert_eq!(
            ids(&result),
            vec![
                "layout-columns-ok",
                "font-choice",
                "section-headings",
                "contact-info",
                "action-verbs",
                "quantify-achievements",
            ]
        );
    }

    #[test]
    fn test_font_check_uses_first_family_only() {
        let mut cv = make_clean_cv();
        // Fallback families beyond the first are ignored.
        cv.layout.fonts.heading = "Georgia, Comic Sans".to_string();
        cv.layout.fonts.body = "Arial, sans-serif".to_string();
        assert!(!uses_non_standard_fonts(&cv));

        cv.layout.fonts.body = "Roboto, Arial".to_string();
        assert!(uses_non_standard_fonts(&cv));
    }

    #[test]
    fn test_font_recommendation_names_both_stacks() {
        let mut cv = make_clean_cv();
        cv.layout.fonts.heading = "Roboto, sans-serif".to_string();
        cv.layout.fonts.body = "Lato, sans-serif".to_string();

        let result = check_cv_for_ats(&cv);
        let font = result
            .recommendations
            .iter()
            .find(|r| r.id == "font-choice")
            .unwrap();
        assert!(font.description.contains("Roboto, sans-serif"));
        assert!(font.description.contains("Lato, sans-serif"));
    }

    #[test]
    fn test_section_headings_substring_and_case_insensitive() {
        let mut cv = make_clean_cv();
        // "EXPÉRIENCE PROFESSIONNELLE" still contains "expérience" after
        // lowercasing; the default section set passes.
        for section in &mut cv.sections {
            section.title = section.title.to_uppercase();
        }
        assert!(!missing_standard_headings(&cv));

        // Dropping one required heading fires the check.
        cv.sections.retain(|s| s.id != SectionType::Languages);
        assert!(missing_standard_headings(&cv));
    }

    #[test]
    fn test_section_headings_has_no_positive_counterpart() {
        let result = check_cv_for_ats(&make_clean_cv());
        assert!(!ids(&result).contains(&"section-headings-ok"));
    }

    #[test]
    fn test_contact_info_requires_both_email_and_phone() {
        let mut cv = make_clean_cv();
        cv.content.phone = None;
        assert!(missing_contact_info(&cv));

        let mut cv = make_clean_cv();
        cv.content.phone = Some(String::new());
        assert!(missing_contact_info(&cv));

        let mut cv = make_clean_cv();
        cv.content.email = String::new();
        assert!(missing_contact_info(&cv));

        assert!(!missing_contact_info(&make_clean_cv()));
    }

    #[test]
    fn test_keyword_match_fires_below_70_with_target_job() {
        let mut cv = make_clean_cv();
        cv.score = Some(69);
        let result = check_cv_for_ats(&cv);
        assert_eq!(result.score, 95);
        let rec = result
            .recommendations
            .iter()
            .find(|r| r.id == "keyword-match")
            .unwrap();
        assert!(rec.description.contains("69%"));
    }

    #[test]
    fn test_keyword_match_silent_at_70_or_above() {
        let mut cv = make_clean_cv();
        cv.score = Some(70);
        assert!(!low_keyword_match(&cv));
    }

    #[test]
    fn test_keyword_match_silent_without_target_job() {
        let mut cv = make_clean_cv();
        cv.target_job = None;
        cv.score = Some(10);
        assert!(!low_keyword_match(&cv));
    }

    #[test]
    fn test_keyword_match_silent_without_score() {
        let mut cv = make_clean_cv();
        cv.score = None;
        assert!(!low_keyword_match(&cv));
    }

    #[test]
    fn test_stored_score_of_zero_counts_as_present() {
        let mut cv = make_clean_cv();
        cv.score = Some(0);
        assert!(low_keyword_match(&cv));
    }

    #[test]
    fn test_action_verb_prefix_is_case_insensitive() {
        let mut cv = make_clean_cv();
        cv.content.experience = vec![make_experience("DÉVELOPPÉ une API.", vec![])];
        assert!(!lacks_action_verbs(&cv));

        cv.content.experience = vec![make_experience("Mis en place une CI.", vec![])];
        assert!(!lacks_action_verbs(&cv));

        // Verb present but not at the start does not count.
        cv.content.experience = vec![make_experience("J'ai développé une API.", vec![])];
        assert!(lacks_action_verbs(&cv));
    }

    #[test]
    fn test_no_experience_fails_verb_and_quantify_checks() {
        let mut cv = make_clean_cv();
        cv.content.experience.clear();
        assert!(lacks_action_verbs(&cv));
        assert!(lacks_quantified_achievements(&cv));
    }

    #[test]
    fn test_digits_in_achievements_satisfy_quantify_check() {
        let mut cv = make_clean_cv();
        cv.content.experience = vec![make_experience(
            "Géré une équipe.",
            vec!["Augmentation de 20% des ventes."],
        )];
        assert!(!lacks_quantified_achievements(&cv));

        cv.content.experience = vec![make_experience("Géré une équipe.", vec!["Aucun chiffre."])];
        assert!(lacks_quantified_achievements(&cv));
    }

    /// Worst case: every negative check fires at once. Penalties total
    /// 90, so the clamp never actually drops below zero, but the score
    /// must stay non-negative by construction.
    #[test]
    fn test_all_checks_failing_never_goes_below_zero() {
        let profile = UserProfile::empty(String::new(), String::new());
        let mut cv = Cv::from_profile(&profile, "CV".to_string(), "creative".to_string());
        cv.layout.fonts.heading = "Comic Sans".to_string();
        cv.layout.fonts.body = "Papyrus".to_string();
        cv.sections = vec![];
        cv.target_job = Some("Développeur".to_string());
        cv.score = Some(10);

        let result = check_cv_for_ats(&cv);
        assert_eq!(result.score, 10); // 100 − 25 − 10 − 15 − 20 − 5 − 5 − 10
        assert_eq!(
            ids(&result),
            vec![
                "layout-columns",
                "font-choice",
                "section-headings",
                "contact-info",
                "keyword-match",
                "action-verbs",
                "quantify-achievements",
            ]
        );
    }

    #[test]
    fn test_every_check_runs_no_short_circuit() {
        // Even with the heaviest check firing first, later positives
        // still appear.
        let mut cv = make_clean_cv();
        cv.template_id = "creative".to_string();
        let result = check_cv_for_ats(&cv);
        assert!(ids(&result).contains(&"quantify-achievements-ok"));
    }

    #[test]
    fn test_result_is_deterministic() {
        let cv = make_clean_cv();
        let first = check_cv_for_ats(&cv);
        let second = check_cv_for_ats(&cv);
        assert_eq!(first.score, second.score);
        assert_eq!(ids(&first), ids(&second));
    }
}
