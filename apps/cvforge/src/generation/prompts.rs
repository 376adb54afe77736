//! Prompt builders for the generation module. All prompts are plain
//! strings; the provider returns plain text.

use crate::generation::GenerationOptions;
use crate::models::job::JobOffer;
use crate::models::profile::UserProfile;
use crate::models::settings::UiLanguage;

const NOT_SPECIFIED: &str = "Non spécifié";

/// Builds the cover-letter prompt: job block, candidate block, writing
/// directives calibrated by tone/length/language.
pub fn cover_letter_prompt(
    job_offer: &JobOffer,
    profile: &UserProfile,
    options: &GenerationOptions,
) -> String {
    let language = match options.language {
        UiLanguage::Fr => "français",
        UiLanguage::En => "anglais",
    };

    let education = join_or(
        profile
            .education
            .iter()
            .map(|e| format!("{} - {}", e.degree, e.institution)),
        NOT_SPECIFIED,
    );
    let experience = join_or(
        profile
            .experience
            .iter()
            .map(|e| format!("{} chez {}", e.title, e.company)),
        NOT_SPECIFIED,
    );
    let skills = join_or(profile.skills.iter().map(|s| s.name.clone()), NOT_SPECIFIED);
    let achievements = join_or(
        profile
            .experience
            .iter()
            .flat_map(|e| e.achievements.iter().cloned()),
        "Non spécifiées",
    );

    format!(
        "Tu es un expert en rédaction de lettres de motivation. Génère une lettre de motivation \
         personnalisée en {language} avec les caractéristiques suivantes :

**INFORMATIONS SUR LE POSTE :**
- Titre : {title}
- Entreprise : {company}
- Localisation : {location}
- Type : {job_type}
- Description : {description}
- Compétences requises : {requirements}

**PROFIL DU CANDIDAT :**
- Nom : {name}
- Email : {email}
- Téléphone : {phone}
- Formation : {education}
- Expérience : {experience}
- Compétences : {skills}
- Résumé professionnel : {summary}
- Réalisations : {achievements}

**CONSIGNES DE RÉDACTION :**
- Ton : {tone}
- Longueur : {length}
- Langue : {language}
- Structure : Introduction, développement (adéquation profil/poste), conclusion
- Personnalisation : Mettre en avant les compétences et expériences du candidat qui \
         correspondent spécifiquement aux exigences du poste
- Éviter les formulations génériques et clichés
- Montrer une connaissance de l'entreprise si possible
- Inclure les coordonnées du candidat en en-tête

Génère une lettre de motivation complète, professionnelle et convaincante qui maximise les \
         chances d'obtenir un entretien.",
        language = language,
        title = job_offer.title,
        company = job_offer.company,
        location = job_offer.location.as_deref().unwrap_or(NOT_SPECIFIED),
        job_type = job_offer.job_type.as_deref().unwrap_or(NOT_SPECIFIED),
        description = job_offer.description,
        requirements = join_or(job_offer.requirements.iter().cloned(), NOT_SPECIFIED),
        name = profile.name,
        email = profile.email,
        phone = profile.phone.as_deref().unwrap_or(NOT_SPECIFIED),
        education = education,
        experience = experience,
        skills = skills,
        summary = if profile.summary.is_empty() {
            NOT_SPECIFIED
        } else {
            profile.summary.as_str()
        },
        achievements = achievements,
        tone = options.tone.descriptor(),
        length = options.length.descriptor(),
    )
}

/// Builds the section-rewrite prompt. The job context block is only
/// present when an offer is targeted.
pub fn rewrite_prompt(
    section: &str,
    current_text: &str,
    profile: &UserProfile,
    job_offer: Option<&JobOffer>,
) -> String {
    let job_context = job_offer
        .map(|job| {
            format!(
                "\n**OFFRE D'EMPLOI CIBLÉE :**\n- Titre: {}\n- Entreprise: {}\n- Mots-clés: {}\n",
                job.title,
                job.company,
                job.keywords.join(", ")
            )
        })
        .unwrap_or_default();

    let profession = profile
        .experience
        .first()
        .map(|e| e.title.as_str())
        .unwrap_or("Candidat");
    let key_experience = join_or(
        profile.experience.iter().map(|e| e.title.clone()),
        NOT_SPECIFIED,
    );
    let key_skills = join_or(
        profile.skills.iter().take(5).map(|s| s.name.clone()),
        NOT_SPECIFIED,
    );

    format!(
        "En tant qu'expert en recrutement et en rédaction de CV, réécris la section suivante \
         d'un CV pour la rendre plus percutante et professionnelle.
Adapte la réécriture pour correspondre au mieux à l'offre d'emploi ciblée si elle est fournie.

**PROFIL DU CANDIDAT :**
- Profession: {profession}
- Expérience clé: {key_experience}
- Compétences clés: {key_skills}
{job_context}
**SECTION À RÉÉCRIRE :**
- Type de section: \"{section}\"
- Contenu actuel: \"{current_text}\"

**INSTRUCTIONS :**
1.  Utilise un langage d'action et des verbes forts.
2.  Quantifie les réalisations avec des chiffres lorsque c'est possible.
3.  Mets en évidence l'alignement avec l'offre d'emploi.
4.  Sois concis et direct.
5.  Ne retourne QUE le texte réécrit, sans introduction ni conclusion.

**RÉÉCRITURE PROPOSÉE :**"
    )
}

fn join_or(parts: impl Iterator<Item = String>, fallback: &str) -> String {
    let joined: Vec<String> = parts.collect();
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined.join(", ")
    }
}
