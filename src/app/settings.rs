// Settings store: optional catalog_settings.json in the working directory, loaded once at startup.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::catalog::TagFilter;
use crate::localization::SupportedLang;

fn default_tag() -> String {
    "Spicy".to_string()
}

fn default_load_delay_ms() -> u64 {
    crate::ui_constants::RENDER_DELAY_MS
}

fn default_asset_root() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSettings {
    // Filter selected at startup; "All" selects the show-all sentinel
    #[serde(default = "default_tag")]
    pub default_tag: String,
    // Artificial latency before a grid render commits
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    // UI language (None = system locale). Stored as "en"/"tl" or null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_tag: default_tag(),
            load_delay_ms: default_load_delay_ms(),
            asset_root: default_asset_root(),
            language: None,
        }
    }
}

impl CatalogSettings {
    pub fn default_filter(&self) -> TagFilter {
        TagFilter::from_value(&self.default_tag)
    }

    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    // "auto" or any unknown code means system locale
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|s| SupportedLang::from_code(&s)))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<CatalogSettings> = RwLock::new(CatalogSettings::default());
}

fn settings_file_path() -> PathBuf {
    PathBuf::from("catalog_settings.json")
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match CatalogSettings::load_from_file(&path) {
        Ok(s) => {
            log::info!("settings loaded from {}", path.display());
            if let Ok(mut st) = APP_SETTINGS.write() {
                *st = s;
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no {} found, using defaults", path.display());
        }
        Err(e) => {
            log::warn!("failed to read {}: {e}; using defaults", path.display());
        }
    }
}

/// Read settings through a closure; a poisoned lock yields the defaults.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&CatalogSettings) -> R,
{
    match APP_SETTINGS.read() {
        Ok(st) => f(&st),
        Err(_) => f(&CatalogSettings::default()),
    }
}
