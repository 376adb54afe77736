mod config;
mod errors;
mod export;
mod generation;
mod import;
mod jobs;
mod llm_client;
mod models;
mod scoring;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::letter::generate_cover_letter;
use crate::generation::rewrite::generate_rewrite_suggestion;
use crate::generation::{GenerationOptions, LetterLength, LetterTone};
use crate::jobs::JobSearchClient;
use crate::llm_client::{LlmClient, Provider};
use crate::models::cv::{builtin_templates, Cv, CvExport, ExportFormat};
use crate::models::job::JobOffer;
use crate::models::letter::CoverLetter;
use crate::models::profile::UserProfile;
use crate::models::settings::{ApiConfig, UiLanguage};
use crate::scoring::ats::{check_cv_for_ats, AtsSeverity};
use crate::scoring::matching::calculate_match;
use crate::store::DataStore;

#[derive(Parser)]
#[command(name = "cvforge", version, about = "Local-first CV and cover-letter builder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the master profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage CV documents
    Cv {
        #[command(subcommand)]
        action: CvAction,
    },
    /// Score a CV against a stored job offer and persist the result
    Match {
        #[arg(long)]
        cv: Uuid,
        /// Id of a stored job offer
        #[arg(long)]
        job: String,
    },
    /// Run the ATS compatibility checklist on a CV
    Ats {
        #[arg(long)]
        cv: Uuid,
    },
    /// Generate and save a cover letter for a stored job offer
    Letter {
        #[arg(long)]
        job: String,
        #[arg(long, value_enum, default_value = "professional")]
        tone: ToneArg,
        #[arg(long, value_enum, default_value = "medium")]
        length: LengthArg,
        #[arg(long, value_enum, default_value = "fr")]
        language: LangArg,
    },
    /// Manage saved cover letters
    Letters {
        #[command(subcommand)]
        action: LettersAction,
    },
    /// Ask for an AI rewrite of a section's text
    Rewrite {
        #[arg(long)]
        section: String,
        #[arg(long)]
        text: String,
        /// Optional stored job offer to tailor the rewrite to
        #[arg(long)]
        job: Option<String>,
    },
    /// Manage job offers
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
    /// Import a CV file and print its extracted text
    Import {
        #[arg(long)]
        file: PathBuf,
    },
    /// Export a CV to Markdown or HTML
    Export {
        #[arg(long)]
        cv: Uuid,
        #[arg(long, value_enum, default_value = "md")]
        format: FormatArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the built-in templates
    Templates,
    /// Show or change application settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile as JSON
    Show,
    /// Start a fresh, empty profile
    Init {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Replace the profile from a JSON file
    Set {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CvAction {
    List,
    /// Create a CV from the current profile
    New {
        #[arg(long)]
        name: String,
        #[arg(long)]
        template: Option<String>,
    },
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum JobsAction {
    /// Search postings via the configured job-search API
    Search {
        #[arg(long)]
        keywords: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Add an offer by hand
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        /// Text file with the offer description
        #[arg(long)]
        file: PathBuf,
    },
    List,
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand)]
enum LettersAction {
    List,
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    /// Configure the completion provider used for generation
    SetProvider {
        #[arg(long)]
        provider: String,
        #[arg(long)]
        api_key: String,
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ToneArg {
    Professional,
    Enthusiastic,
    Confident,
    Creative,
}

#[derive(Clone, Copy, ValueEnum)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    Fr,
    En,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Md,
    Html,
}

impl From<ToneArg> for LetterTone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Professional => LetterTone::Professional,
            ToneArg::Enthusiastic => LetterTone::Enthusiastic,
            ToneArg::Confident => LetterTone::Confident,
            ToneArg::Creative => LetterTone::Creative,
        }
    }
}

impl From<LengthArg> for LetterLength {
    fn from(length: LengthArg) -> Self {
        match length {
            LengthArg::Short => LetterLength::Short,
            LengthArg::Medium => LetterLength::Medium,
            LengthArg::Long => LetterLength::Long,
        }
    }
}

impl From<LangArg> for UiLanguage {
    fn from(language: LangArg) -> Self {
        match language {
            LangArg::Fr => UiLanguage::Fr,
            LangArg::En => UiLanguage::En,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvforge v{}", env!("CARGO_PKG_VERSION"));

    let store = DataStore::open(&config.data_dir)?;

    run(cli.command, &config, &store).await?;

    Ok(())
}

async fn run(command: Command, config: &Config, store: &DataStore) -> Result<(), AppError> {
    match command {
        Command::Profile { action } => match action {
            ProfileAction::Show => {
                let profile = store.profile()?;
                println!("{}", serde_json::to_string_pretty(&profile)?);
            }
            ProfileAction::Init { name, email } => {
                let profile = UserProfile::empty(name, email);
                println!("{}", profile.id);
                store.set_profile(profile)?;
            }
            ProfileAction::Set { file } => {
                let raw = std::fs::read_to_string(&file)?;
                let profile: UserProfile = serde_json::from_str(&raw)?;
                info!("Profile set to '{}' <{}>", profile.name, profile.email);
                store.set_profile(profile)?;
            }
        },

        Command::Cv { action } => match action {
            CvAction::List => {
                for cv in store.load().cvs {
                    let score = cv
                        .score
                        .map(|s| format!("{s}%"))
                        .unwrap_or_else(|| "-".to_string());
                    println!("{}  {}  [{}]  score: {}", cv.id, cv.name, cv.template_id, score);
                }
            }
            CvAction::New { name, template } => {
                let profile = store.profile()?;
                let template_id =
                    template.unwrap_or_else(|| store.load_settings().default_template);
                if !builtin_templates().iter().any(|t| t.id == template_id) {
                    return Err(AppError::Validation(format!(
                        "unknown template '{template_id}'"
                    )));
                }
                let cv = Cv::from_profile(&profile, name, template_id);
                println!("{}", cv.id);
                store.upsert_cv(cv)?;
            }
            CvAction::Delete { id } => {
                store.delete_cv(id)?;
                println!("deleted {id}");
            }
        },

        Command::Match { cv, job } => {
            let mut document = store.get_cv(cv)?;
            let offer = store.get_job_offer(&job)?;

            let result = calculate_match(&document.content, &offer);

            println!("score: {}%", result.score);
            println!(
                "matched ({}): {}",
                result.matched_skills.len(),
                result.matched_skills.join(", ")
            );
            println!(
                "missing ({}): {}",
                result.missing_skills.len(),
                result.missing_skills.join(", ")
            );

            // Persist the score and the targeted job onto the CV so the
            // ATS keyword check can pick them up later.
            document.target_job = Some(offer.title.clone());
            document.score = Some(result.score);
            document.updated_at = chrono::Utc::now();
            store.upsert_cv(document)?;
        }

        Command::Ats { cv } => {
            let document = store.get_cv(cv)?;
            let result = check_cv_for_ats(&document);

            println!("ATS score: {}/100", result.score);
            for recommendation in &result.recommendations {
                println!(
                    "  [{}] {}: {}",
                    severity_label(recommendation.severity),
                    recommendation.title,
                    recommendation.description
                );
            }
        }

        Command::Letter {
            job,
            tone,
            length,
            language,
        } => {
            let offer = store.get_job_offer(&job)?;
            let profile = store.profile()?;
            let llm = resolve_llm(config, store)?;

            let options = GenerationOptions {
                language: language.into(),
                tone: tone.into(),
                length: length.into(),
            };
            let content = generate_cover_letter(&llm, &offer, &profile, &options).await?;

            store.add_letter(CoverLetter::new(
                offer.title.clone(),
                offer.company.clone(),
                content.clone(),
                options.tone,
                options.length,
            ))?;

            println!("{content}");
        }

        Command::Letters { action } => match action {
            LettersAction::List => {
                for letter in store.load().letters {
                    println!(
                        "{}  {} ({})  {}",
                        letter.id,
                        letter.job_title,
                        letter.company,
                        letter.created_at.format("%Y-%m-%d")
                    );
                }
            }
            LettersAction::Delete { id } => {
                store.delete_letter(id)?;
                println!("deleted {id}");
            }
        },

        Command::Rewrite { section, text, job } => {
            let profile = store.profile()?;
            let offer = match job {
                Some(id) => Some(store.get_job_offer(&id)?),
                None => None,
            };
            let llm = resolve_llm(config, store)?;

            let suggestion =
                generate_rewrite_suggestion(&llm, &section, &text, &profile, offer.as_ref())
                    .await?;
            println!("{suggestion}");
        }

        Command::Jobs { action } => match action {
            JobsAction::Search { keywords, location } => {
                let client = JobSearchClient::new(config.jooble_api_key.clone());
                let offers = client.search(&keywords, &location).await?;

                for offer in &offers {
                    println!(
                        "{} | {} ({})",
                        offer.title,
                        offer.company,
                        offer.location.as_deref().unwrap_or("?")
                    );
                    println!("  id: {}", offer.id);
                }
                let count = offers.len();
                for offer in offers {
                    store.add_job_offer(offer)?;
                }
                println!("{count} offers stored");
            }
            JobsAction::Add {
                title,
                company,
                file,
            } => {
                let description = std::fs::read_to_string(&file)?;
                let offer = JobOffer::manual(title, company, description);
                println!("{}", offer.id);
                store.add_job_offer(offer)?;
            }
            JobsAction::List => {
                for offer in store.load().job_offers {
                    println!("{}  {} ({})", offer.id, offer.title, offer.company);
                }
            }
            JobsAction::Delete { id } => {
                store.delete_job_offer(&id)?;
                println!("deleted {id}");
            }
        },

        Command::Import { file } => {
            let text = import::parse_cv_file(&file)?;
            println!("{text}");
        }

        Command::Export { cv, format, out } => {
            let document = store.get_cv(cv)?;
            let rendered = match format {
                FormatArg::Md => export::render_markdown(&document),
                FormatArg::Html => export::render_html(&document),
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    store.record_export(
                        cv,
                        CvExport {
                            id: Uuid::new_v4(),
                            format: ExportFormat::Link,
                            url: path.display().to_string(),
                            created_at: chrono::Utc::now(),
                            views: 0,
                        },
                    )?;
                    println!("written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Command::Templates => {
            for template in builtin_templates() {
                println!("{}  {}", template.id, template.name);
            }
        }

        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = store.load_settings();
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
            SettingsAction::SetProvider {
                provider,
                api_key,
                model,
            } => {
                let provider = Provider::parse(&provider).ok_or_else(|| {
                    AppError::Validation(format!(
                        "unknown provider '{provider}' (openai, deepseek, gemini, openrouter)"
                    ))
                })?;
                let mut settings = store.load_settings();
                settings.api_config = Some(ApiConfig {
                    provider,
                    api_key,
                    model,
                });
                store.save_settings(&settings)?;
                println!("provider set");
            }
        },
    }

    Ok(())
}

/// Env config wins over stored settings; neither configured is an error.
fn resolve_llm(config: &Config, store: &DataStore) -> Result<LlmClient, AppError> {
    let api_config = config
        .llm
        .clone()
        .or_else(|| store.load_settings().api_config)
        .ok_or_else(|| {
            AppError::Validation(
                "no AI provider configured (set LLM_PROVIDER and LLM_API_KEY, or settings.api_config)"
                    .to_string(),
            )
        })?;
    Ok(LlmClient::new(api_config))
}

fn severity_label(severity: AtsSeverity) -> &'static str {
    match severity {
        AtsSeverity::High => "high",
        AtsSeverity::Medium => "medium",
        AtsSeverity::Low => "low",
        AtsSeverity::Good => "ok",
    }
}
