//! Case conversion for an editor buffer, with headline-style title casing,
//! bounded undo/redo and a persisted word bank.

pub mod clipboard;
pub mod config;
pub mod display;
pub mod history;
pub mod lexicon;
pub mod models;
pub mod repl;
pub mod session;
pub mod store;
pub mod transform;
pub mod utils;
pub mod word_bank;

pub use history::EditHistory;
pub use lexicon::LexicalTables;
pub use models::{CaseStyle, PersistedBank, Singularization};
pub use session::Session;
pub use store::{BankStore, JsonFileStore, MemoryStore};
pub use transform::TitleCaser;
pub use word_bank::WordBank;
