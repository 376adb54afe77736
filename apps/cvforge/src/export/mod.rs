//! Export: renders a CV into Markdown or a standalone HTML document,
//! walking the sections in their stored order. Binary PDF/DOCX
//! packaging is left to the consuming renderer.

use crate::models::cv::{Cv, SectionType};
use crate::models::profile::UserProfile;

/// Renders the CV as Markdown.
pub fn render_markdown(cv: &Cv) -> String {
    let profile = &cv.content;
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", profile.name));
    out.push_str(&contact_line(profile));
    out.push_str("\n\n");

    for section in &cv.sections {
        match section.id {
            SectionType::Header => {} // already rendered above
            SectionType::Summary => {
                if !profile.summary.is_empty() {
                    out.push_str(&format!("## {}\n\n{}\n\n", section.title, profile.summary));
                }
            }
            SectionType::Experience => {
                if profile.experience.is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n", section.title));
                for experience in &profile.experience {
                    out.push_str(&format!(
                        "### {} | {}\n*{}*\n\n",
                        experience.title,
                        experience.company,
                        period(
                            &experience.start_date,
                            experience.end_date.as_deref(),
                            experience.current
                        )
                    ));
                    if !experience.description.is_empty() {
                        out.push_str(&experience.description);
                        out.push_str("\n\n");
                    }
                    for achievement in &experience.achievements {
                        out.push_str(&format!("- {achievement}\n"));
                    }
                    if !experience.achievements.is_empty() {
                        out.push('\n');
                    }
                }
            }
            SectionType::Education => {
                if profile.education.is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n", section.title));
                for education in &profile.education {
                    out.push_str(&format!(
                        "- **{}** - {} ({})\n",
                        education.degree,
                        education.institution,
                        period(&education.start_date, education.end_date.as_deref(), false)
                    ));
                }
                out.push('\n');
            }
            SectionType::Skills => {
                if profile.skills.is_empty() {
                    continue;
                }
                let names: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
                out.push_str(&format!("## {}\n\n{}\n\n", section.title, names.join(" • ")));
            }
            SectionType::Languages => {
                if profile.languages.is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n", section.title));
                for language in &profile.languages {
                    out.push_str(&format!("- **{}**: {}\n", language.name, language.level));
                }
                out.push('\n');
            }
            SectionType::Certifications => {
                if profile.certifications.is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n", section.title));
                for certification in &profile.certifications {
                    out.push_str(&format!(
                        "- {} ({}, {})\n",
                        certification.name, certification.issuer, certification.date
                    ));
                }
                out.push('\n');
            }
            SectionType::Projects => {
                if profile.projects.is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n", section.title));
                for project in &profile.projects {
                    out.push_str(&format!(
                        "### {}\n\n{}\n\n{}\n\n",
                        project.name,
                        project.description,
                        project.technologies.join(", ")
                    ));
                }
            }
        }
    }

    out.trim_end().to_string() + "\n"
}

/// Renders the CV as a standalone HTML document styled with the CV's
/// layout fonts and colors.
pub fn render_html(cv: &Cv) -> String {
    let profile = &cv.content;
    let fonts = &cv.layout.fonts;
    let colors = &cv.layout.colors;

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&profile.name)));
    body.push_str(&format!(
        "<p class=\"contact\">{}</p>\n",
        escape_html(&contact_line(profile))
    ));

    for section in &cv.sections {
        let title = escape_html(&section.title);
        match section.id {
            SectionType::Header => {}
            SectionType::Summary => {
                if !profile.summary.is_empty() {
                    body.push_str(&format!(
                        "<h2>{title}</h2>\n<p>{}</p>\n",
                        escape_html(&profile.summary)
                    ));
                }
            }
            SectionType::Experience => {
                if profile.experience.is_empty() {
                    continue;
                }
                body.push_str(&format!("<h2>{title}</h2>\n"));
                for experience in &profile.experience {
                    body.push_str(&format!(
                        "<h3>{} | {}</h3>\n<p class=\"period\">{}</p>\n<p>{}</p>\n",
                        escape_html(&experience.title),
                        escape_html(&experience.company),
                        escape_html(&period(
                            &experience.start_date,
                            experience.end_date.as_deref(),
                            experience.current
                        )),
                        escape_html(&experience.description),
                    ));
                    if !experience.achievements.is_empty() {
                        body.push_str("<ul>\n");
                        for achievement in &experience.achievements {
                            body.push_str(&format!("<li>{}</li>\n", escape_html(achievement)));
                        }
                        body.push_str("</ul>\n");
                    }
                }
            }
            SectionType::Education => {
                if profile.education.is_empty() {
                    continue;
                }
                body.push_str(&format!("<h2>{title}</h2>\n<ul>\n"));
                for education in &profile.education {
                    body.push_str(&format!(
                        "<li><strong>{}</strong> - {}</li>\n",
                        escape_html(&education.degree),
                        escape_html(&education.institution)
                    ));
                }
                body.push_str("</ul>\n");
            }
            SectionType::Skills => {
                if profile.skills.is_empty() {
                    continue;
                }
                let names: Vec<String> = profile
                    .skills
                    .iter()
                    .map(|s| escape_html(&s.name))
                    .collect();
                body.push_str(&format!(
                    "<h2>{title}</h2>\n<p>{}</p>\n",
                    names.join(" • ")
                ));
            }
            SectionType::Languages => {
                if profile.languages.is_empty() {
                    continue;
                }
                body.push_str(&format!("<h2>{title}</h2>\n<ul>\n"));
                for language in &profile.languages {
                    body.push_str(&format!(
                        "<li><strong>{}</strong>: {}</li>\n",
                        escape_html(&language.name),
                        escape_html(&language.level)
                    ));
                }
                body.push_str("</ul>\n");
            }
            SectionType::Certifications => {
                if profile.certifications.is_empty() {
                    continue;
                }
                body.push_str(&format!("<h2>{title}</h2>\n<ul>\n"));
                for certification in &profile.certifications {
                    body.push_str(&format!(
                        "<li>{} ({})</li>\n",
                        escape_html(&certification.name),
                        escape_html(&certification.issuer)
                    ));
                }
                body.push_str("</ul>\n");
            }
            SectionType::Projects => {
                if profile.projects.is_empty() {
                    continue;
                }
                body.push_str(&format!("<h2>{title}</h2>\n"));
                for project in &profile.projects {
                    body.push_str(&format!(
                        "<h3>{}</h3>\n<p>{}</p>\n",
                        escape_html(&project.name),
                        escape_html(&project.description)
                    ));
                }
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n\
         body {{ font-family: {}; color: {}; background: {}; max-width: 48rem; margin: 2rem auto; }}\n\
         h1, h2, h3 {{ font-family: {}; color: {}; }}\n\
         .contact, .period {{ color: {}; }}\n\
         </style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(&profile.name),
        fonts.body,
        colors.text,
        colors.background,
        fonts.heading,
        colors.primary,
        colors.secondary,
        body
    )
}

fn contact_line(profile: &UserProfile) -> String {
    let mut parts = vec![profile.email.as_str()];
    if let Some(phone) = profile.phone.as_deref() {
        parts.push(phone);
    }
    if let Some(address) = profile.address.as_deref() {
        parts.push(address);
    }
    parts.retain(|part| !part.is_empty());
    parts.join(" | ")
}

fn period(start: &str, end: Option<&str>, current: bool) -> String {
    let end = if current {
        "Aujourd'hui"
    } else {
        match end {
            Some(end) if !end.is_empty() => end,
            _ => "Aujourd'hui",
        }
    };
    format!("{start} - {end}")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
