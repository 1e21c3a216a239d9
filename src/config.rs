use crate::history::DEFAULT_CAPACITY;
use crate::models::Singularization;
use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

/// Words added on top of the bundled lexicon.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    pub extra_acronyms: Vec<String>,
    pub extra_stopwords: Vec<String>,
    pub extra_uncountables: Vec<String>,
    pub extra_connectors: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub history_capacity: usize,
    pub copy_to_clipboard: bool,
    pub singularize: Singularization,
    /// where the word bank lives, defaults to the platform data dir
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            copy_to_clipboard: true,
            singularize: Singularization::default(),
            data_dir: None,
            lexicon: LexiconConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = ProjectDirs::from("", "", "recase")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .filter(|path| path.exists());
        Self::load_from(path)
    }

    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let defaults = AppConfig::default();

        let mut builder = Config::builder()
            .set_default("history_capacity", defaults.history_capacity as u64)?
            .set_default("copy_to_clipboard", defaults.copy_to_clipboard)?
            .set_default("singularize", "ies-only")?;

        if let Some(path) = path {
            log::debug!("reading config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let cfg = builder.build()?;
        let mut app_config: AppConfig = cfg.try_deserialize()?;

        // a zero-sized history could not hold the initial buffer
        app_config.history_capacity = app_config.history_capacity.max(1);

        Ok(app_config)
    }
}
