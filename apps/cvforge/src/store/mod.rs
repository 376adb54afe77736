//! Client-side persistence: two pretty-printed JSON files under the
//! data directory, mirroring the browser original's two storage keys:
//! `data.json` for documents and `settings.json` for preferences.
//!
//! Loading is forgiving: a missing or corrupt file yields defaults with
//! a warning, never a startup failure. Saving replaces atomically via a
//! temp file and rename.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{Cv, CvExport};
use crate::models::job::JobOffer;
use crate::models::letter::CoverLetter;
use crate::models::profile::UserProfile;
use crate::models::settings::AppSettings;

const DATA_FILE: &str = "data.json";
const SETTINGS_FILE: &str = "settings.json";

/// Everything the app persists besides preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub cvs: Vec<Cv>,
    #[serde(default)]
    pub job_offers: Vec<JobOffer>,
    #[serde(default)]
    pub letters: Vec<CoverLetter>,
}

pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(data_dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(data_dir)?;
        Ok(DataStore {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn load(&self) -> AppData {
        self.read_or_default(DATA_FILE)
    }

    pub fn save(&self, data: &AppData) -> Result<(), AppError> {
        self.write_atomic(DATA_FILE, data)
    }

    pub fn load_settings(&self) -> AppSettings {
        self.read_or_default(SETTINGS_FILE)
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), AppError> {
        self.write_atomic(SETTINGS_FILE, settings)
    }

    // ── document operations ─────────────────────────────────────────────

    pub fn set_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        let mut data = self.load();
        data.profile = Some(profile);
        self.save(&data)
    }

    /// The current profile, or NotFound when none has been set yet.
    pub fn profile(&self) -> Result<UserProfile, AppError> {
        self.load()
            .profile
            .ok_or_else(|| AppError::NotFound("no profile has been set yet".to_string()))
    }

    pub fn get_cv(&self, cv_id: Uuid) -> Result<Cv, AppError> {
        self.load()
            .cvs
            .into_iter()
            .find(|cv| cv.id == cv_id)
            .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))
    }

    /// Inserts or replaces a CV, newest first like the original list.
    pub fn upsert_cv(&self, cv: Cv) -> Result<(), AppError> {
        let mut data = self.load();
        data.cvs.retain(|existing| existing.id != cv.id);
        data.cvs.insert(0, cv);
        self.save(&data)
    }

    pub fn delete_cv(&self, cv_id: Uuid) -> Result<(), AppError> {
        let mut data = self.load();
        let before = data.cvs.len();
        data.cvs.retain(|cv| cv.id != cv_id);
        if data.cvs.len() == before {
            return Err(AppError::NotFound(format!("CV {cv_id} not found")));
        }
        self.save(&data)
    }

    /// Stores a freshly computed match score on a CV.
    pub fn set_cv_score(&self, cv_id: Uuid, score: u32) -> Result<(), AppError> {
        let mut data = self.load();
        let cv = data
            .cvs
            .iter_mut()
            .find(|cv| cv.id == cv_id)
            .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))?;
        cv.score = Some(score);
        cv.updated_at = Utc::now();
        self.save(&data)
    }

    /// Appends an export record to a CV's history.
    pub fn record_export(&self, cv_id: Uuid, export: CvExport) -> Result<(), AppError> {
        let mut data = self.load();
        let cv = data
            .cvs
            .iter_mut()
            .find(|cv| cv.id == cv_id)
            .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))?;
        cv.exports.push(export);
        cv.updated_at = Utc::now();
        self.save(&data)
    }

    pub fn add_job_offer(&self, offer: JobOffer) -> Result<(), AppError> {
        let mut data = self.load();
        data.job_offers.retain(|existing| existing.id != offer.id);
        data.job_offers.insert(0, offer);
        self.save(&data)
    }

    pub fn get_job_offer(&self, offer_id: &str) -> Result<JobOffer, AppError> {
        self.load()
            .job_offers
            .into_iter()
            .find(|offer| offer.id == offer_id)
            .ok_or_else(|| AppError::NotFound(format!("job offer {offer_id} not found")))
    }

    pub fn delete_job_offer(&self, offer_id: &str) -> Result<(), AppError> {
        let mut data = self.load();
        let before = data.job_offers.len();
        data.job_offers.retain(|offer| offer.id != offer_id);
        if data.job_offers.len() == before {
            return Err(AppError::NotFound(format!(
                "job offer {offer_id} not found"
            )));
        }
        self.save(&data)
    }

    pub fn add_letter(&self, letter: CoverLetter) -> Result<(), AppError> {
        let mut data = self.load();
        data.letters.insert(0, letter);
        self.save(&data)
    }

    pub fn delete_letter(&self, letter_id: Uuid) -> Result<(), AppError> {
        let mut data = self.load();
        let before = data.letters.len();
        data.letters.retain(|letter| letter.id != letter_id);
        if data.letters.len() == before {
            return Err(AppError::NotFound(format!("letter {letter_id} not found")));
        }
        self.save(&data)
    }

    // ── file plumbing ───────────────────────────────────────────────────

    fn read_or_default<T: Default + for<'de> Deserialize<'de>>(&self, file: &str) -> T {
        let path = self.data_dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("No {} yet ({e}); starting from defaults", file);
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse {}: {e}; starting from defaults", file);
                T::default()
            }
        }
    }

    fn write_atomic<T: Serialize>(&self, file: &str, value: &T) -> Result<(), AppError> {
        let path = self.data_dir.join(file);
        let tmp = self.data_dir.join(format!("{file}.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::ExportFormat;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> DataStore {
        DataStore::open(dir.path()).unwrap()
    }

    fn make_profile() -> UserProfile {
        UserProfile::empty("Alexandre Dubois".to_string(), "alex@example.com".to_string())
    }

    #[test]
    fn test_load_on_empty_dir_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let data = store.load();
        assert!(data.profile.is_none());
        assert!(data.cvs.is_empty());
        assert_eq!(store.load_settings().default_template, "modern");
    }

    #[test]
    fn test_data_roundtrip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let profile = make_profile();
        store.set_profile(profile.clone()).unwrap();
        let cv = Cv::from_profile(&profile, "CV Dev".to_string(), "modern".to_string());
        store.upsert_cv(cv.clone()).unwrap();

        let data = store.load();
        assert_eq!(data.profile.unwrap().id, profile.id);
        assert_eq!(data.cvs.len(), 1);
        assert_eq!(store.get_cv(cv.id).unwrap().name, "CV Dev");
    }

    #[test]
    fn test_corrupt_data_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        fs::write(dir.path().join(DATA_FILE), "{not valid json").unwrap();
        let data = store.load();
        assert!(data.profile.is_none());
        assert!(data.cvs.is_empty());
    }

    #[test]
    fn test_upsert_replaces_and_puts_newest_first() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let profile = make_profile();

        let first = Cv::from_profile(&profile, "Premier".to_string(), "modern".to_string());
        let mut second = Cv::from_profile(&profile, "Second".to_string(), "classic".to_string());
        store.upsert_cv(first.clone()).unwrap();
        store.upsert_cv(second.clone()).unwrap();
        assert_eq!(store.load().cvs[0].name, "Second");

        second.name = "Second (renommé)".to_string();
        store.upsert_cv(second).unwrap();
        let data = store.load();
        assert_eq!(data.cvs.len(), 2);
        assert_eq!(data.cvs[0].name, "Second (renommé)");
    }

    #[test]
    fn test_delete_unknown_cv_is_not_found() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let result = store.delete_cv(Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_set_cv_score_updates_score_and_timestamp() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let profile = make_profile();
        let cv = Cv::from_profile(&profile, "CV".to_string(), "modern".to_string());
        store.upsert_cv(cv.clone()).unwrap();

        store.set_cv_score(cv.id, 72).unwrap();
        let reloaded = store.get_cv(cv.id).unwrap();
        assert_eq!(reloaded.score, Some(72));
        assert!(reloaded.updated_at >= cv.updated_at);
    }

    #[test]
    fn test_record_export_appends_history() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let profile = make_profile();
        let cv = Cv::from_profile(&profile, "CV".to_string(), "modern".to_string());
        store.upsert_cv(cv.clone()).unwrap();

        store
            .record_export(
                cv.id,
                CvExport {
                    id: Uuid::new_v4(),
                    format: ExportFormat::Pdf,
                    url: "cv.pdf".to_string(),
                    created_at: Utc::now(),
                    views: 0,
                },
            )
            .unwrap();
        assert_eq!(store.get_cv(cv.id).unwrap().exports.len(), 1);
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let mut settings = store.load_settings();
        settings.default_template = "classic".to_string();
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().default_template, "classic");
    }

    #[test]
    fn test_job_offer_add_and_delete() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let offer = JobOffer::manual(
            "Dev Rust".to_string(),
            "Acme".to_string(),
            "Services réseau.".to_string(),
        );
        let offer_id = offer.id.clone();
        store.add_job_offer(offer).unwrap();
        assert_eq!(store.get_job_offer(&offer_id).unwrap().title, "Dev Rust");

        store.delete_job_offer(&offer_id).unwrap();
        assert!(matches!(
            store.get_job_offer(&offer_id),
            Err(AppError::NotFound(_))
        ));
    }
}
