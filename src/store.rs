//! Persistence for the word bank.
//!
//! The bank is stored as two independent entries, `wordBank` (a JSON array of
//! strings) and `bankActive` (a JSON boolean). They are written together but
//! read separately, so one corrupt entry never costs the other.

use crate::models::PersistedBank;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

pub const WORD_BANK_KEY: &str = "wordBank";
pub const BANK_ACTIVE_KEY: &str = "bankActive";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {key} entry: {source}")]
    Json {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub trait BankStore {
    fn load(&self) -> StoreResult<PersistedBank>;
    fn save(&self, bank: &PersistedBank) -> StoreResult<()>;
}

impl<T: BankStore + ?Sized> BankStore for Rc<T> {
    fn load(&self) -> StoreResult<PersistedBank> {
        (**self).load()
    }

    fn save(&self, bank: &PersistedBank) -> StoreResult<()> {
        (**self).save(bank)
    }
}

/// Keeps the bank in memory only. Used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<PersistedBank>>,
    fail_loads: bool,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bank(bank: PersistedBank) -> Self {
        Self {
            saved: RefCell::new(Some(bank)),
            ..Self::default()
        }
    }

    /// A store whose every save fails, for exercising the error path.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// A store that cannot be read but still accepts saves.
    pub fn unreadable() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<PersistedBank> {
        self.saved.borrow().clone()
    }
}

impl BankStore for MemoryStore {
    fn load(&self) -> StoreResult<PersistedBank> {
        if self.fail_loads {
            return Err(StoreError::Unavailable("memory store set to fail loads".to_string()));
        }
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, bank: &PersistedBank) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("memory store set to fail".to_string()));
        }
        *self.saved.borrow_mut() = Some(bank.clone());
        Ok(())
    }
}

/// One JSON file per entry inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform data directory, if the platform has one.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from("", "", "recase").map(|dirs| Self::new(dirs.data_local_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &'static str) -> StoreResult<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io { path, source })?;
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Json { key, source })?;
        Ok(Some(value))
    }

    fn write_entry<T: Serialize>(&self, key: &'static str, value: &T) -> StoreResult<()> {
        let path = self.entry_path(key);
        let json =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::Json { key, source })?;
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }

    /// Reads one entry, falling back to `default` when it is missing or broken.
    fn entry_or<T: DeserializeOwned>(&self, key: &'static str, default: T) -> T {
        match self.read_entry(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log::warn!("ignoring stored {}: {}", key, err);
                default
            }
        }
    }
}

impl BankStore for JsonFileStore {
    fn load(&self) -> StoreResult<PersistedBank> {
        let defaults = PersistedBank::default();
        Ok(PersistedBank {
            word_bank: self.entry_or(WORD_BANK_KEY, defaults.word_bank),
            bank_active: self.entry_or(BANK_ACTIVE_KEY, defaults.bank_active),
        })
    }

    fn save(&self, bank: &PersistedBank) -> StoreResult<()> {
        // create the data directory if it doesn't exist yet
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        self.write_entry(WORD_BANK_KEY, &bank.word_bank)?;
        self.write_entry(BANK_ACTIVE_KEY, &bank.bank_active)
    }
}
