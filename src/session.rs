use crate::clipboard::ClipboardSink;
use crate::history::EditHistory;
use crate::lexicon::LexicalTables;
use crate::models::{CaseStyle, Singularization};
use crate::store::BankStore;
use crate::transform::{self, TitleCaser};
use crate::word_bank::{self, WordBank};

/// One editor session: the buffer plus everything that acts on it.
///
/// Every user-visible change goes through here so the history always ends
/// with the current buffer, the bank is saved after it changes, and a
/// finished transform lands on the clipboard.
pub struct Session {
    buffer: String,
    history: EditHistory,
    bank: WordBank,
    tables: LexicalTables,
    singularize: Singularization,
    store: Box<dyn BankStore>,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl Session {
    pub fn new(tables: LexicalTables, store: Box<dyn BankStore>) -> Self {
        let bank = WordBank::load(&*store);

        Self {
            buffer: String::new(),
            history: EditHistory::new(String::new()),
            bank,
            tables,
            singularize: Singularization::default(),
            store,
            clipboard: None,
        }
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = EditHistory::with_capacity(self.buffer.clone(), capacity);
        self
    }

    pub fn with_singularization(mut self, rule: Singularization) -> Self {
        self.singularize = rule;
        self
    }

    pub fn with_clipboard(mut self, sink: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(sink);
        self
    }

    /// Starts the session with `text` already in the buffer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.buffer = text.into();
        self.history = EditHistory::with_capacity(self.buffer.clone(), self.history.capacity());
        self
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn title_caser(&self) -> TitleCaser<'_> {
        TitleCaser::new(&self.tables).with_singularization(self.singularize)
    }

    /// Runs a transform over the whole buffer and returns the result.
    pub fn apply(&mut self, style: CaseStyle) -> &str {
        self.history.snapshot(self.buffer.clone());
        let next = transform::apply(style, &self.buffer, &self.title_caser());
        log::debug!("{} transform: {} -> {} bytes", style, self.buffer.len(), next.len());
        self.commit(next);
        self.copy_buffer();
        &self.buffer
    }

    /// Replaces the buffer with text the user typed.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.commit(text.into());
    }

    pub fn clear(&mut self) {
        self.commit(String::new());
    }

    pub fn undo(&mut self) -> &str {
        self.buffer = self.history.undo();
        &self.buffer
    }

    pub fn redo(&mut self) -> &str {
        if let Some(value) = self.history.redo() {
            self.buffer = value;
        }
        &self.buffer
    }

    fn commit(&mut self, next: String) {
        self.history.snapshot(next.clone());
        self.buffer = next;
    }

    /// A selection made in the editor, captured only while the bank is active.
    pub fn select(&mut self, selection: &str) -> bool {
        let changed = self.bank.capture(selection);
        self.persist_if(changed)
    }

    pub fn bank_add(&mut self, token: &str) -> bool {
        let changed = self.bank.add(token);
        self.persist_if(changed)
    }

    pub fn bank_remove(&mut self, token: &str) -> bool {
        let changed = self.bank.remove(token);
        self.persist_if(changed)
    }

    pub fn bank_clear(&mut self) -> bool {
        let changed = self.bank.clear();
        self.persist_if(changed)
    }

    pub fn set_bank_active(&mut self, active: bool) -> bool {
        let changed = self.bank.set_active(active);
        self.persist_if(changed)
    }

    /// Appends a bank word to the buffer unless it is already there.
    pub fn insert_from_bank(&mut self, token: &str) -> bool {
        let next = word_bank::insert_into(&self.buffer, token);
        if next == self.buffer {
            return false;
        }
        self.commit(next);
        true
    }

    fn persist_if(&self, changed: bool) -> bool {
        if changed {
            if let Err(err) = self.store.save(&self.bank.to_persisted()) {
                log::warn!("could not save word bank: {}", err);
            }
        }
        changed
    }

    fn copy_buffer(&self) {
        let Some(sink) = &self.clipboard else {
            return;
        };
        if let Err(err) = sink.set_contents(&self.buffer) {
            log::debug!("clipboard copy via {} failed: {}", sink.name(), err);
        }
    }
}
