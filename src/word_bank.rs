use crate::models::PersistedBank;
use crate::store::BankStore;
use crate::utils::strings;

/// User-curated tokens kept for re-insertion into the buffer.
///
/// Insertion ordered, no duplicates (case-sensitive). Every mutator returns
/// whether anything changed so the caller knows when to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
    active: bool,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::from(PersistedBank::default())
    }
}

impl From<PersistedBank> for WordBank {
    fn from(saved: PersistedBank) -> Self {
        let mut bank = Self {
            words: Vec::with_capacity(saved.word_bank.len()),
            active: saved.bank_active,
        };
        // stored data may predate the dedup rule
        for word in saved.word_bank {
            bank.add(&word);
        }
        bank
    }
}

impl WordBank {
    /// Loads the saved bank, starting empty and active when the store fails.
    pub fn load(store: &dyn BankStore) -> Self {
        match store.load() {
            Ok(saved) => Self::from(saved),
            Err(err) => {
                log::warn!("could not load word bank, starting empty: {}", err);
                Self::default()
            }
        }
    }

    pub fn add(&mut self, token: &str) -> bool {
        if token.trim().is_empty() || self.contains(token) {
            return false;
        }
        self.words.push(token.to_string());
        true
    }

    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != token);
        self.words.len() != before
    }

    pub fn clear(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.words.clear();
        true
    }

    pub fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    /// Handles a text selection made in the editor.
    pub fn capture(&mut self, selection: &str) -> bool {
        if !self.active {
            return false;
        }
        self.add(selection.trim())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.iter().any(|w| w == token)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_persisted(&self) -> PersistedBank {
        PersistedBank {
            word_bank: self.words.clone(),
            bank_active: self.active,
        }
    }
}

/// Appends `token` to `buffer` unless the buffer already holds it as whole
/// words. Multi-word tokens match a contiguous run of the buffer's words.
pub fn insert_into(buffer: &str, token: &str) -> String {
    let token = token.trim();
    if token.is_empty() || strings::contains_phrase(buffer, token) {
        return buffer.to_string();
    }
    if buffer.is_empty() {
        return token.to_string();
    }
    format!("{} {}", buffer, token)
}
