use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded undo/redo over whole-buffer snapshots.
///
/// The undo stack keeps the most recent snapshot at the back and drops the
/// oldest one when it grows past `capacity`. Consecutive duplicates are never
/// stored. Once seeded, the undo stack is only emptied by undoing past the
/// first snapshot, which is how the buffer gets cleared.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo: VecDeque<String>,
    redo: Vec<String>,
    capacity: usize,
}

impl EditHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(initial: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut undo = VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY));
        undo.push_back(initial.into());
        Self {
            undo,
            redo: Vec::new(),
            capacity,
        }
    }

    /// Records `value` as the newest state. Any redo branch is discarded,
    /// even when `value` repeats the current top and is not pushed.
    pub fn snapshot(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.redo.clear();
        if self.undo.back() == Some(&value) {
            return;
        }
        self.push_bounded(value);
    }

    /// Steps back one state and returns what the buffer should now hold.
    ///
    /// Undoing the last remaining snapshot empties the stack and yields "".
    /// With nothing left to undo this is a no-op that also yields "".
    pub fn undo(&mut self) -> String {
        let Some(top) = self.undo.pop_back() else {
            return String::new();
        };
        self.redo.push(top);
        self.undo.back().cloned().unwrap_or_default()
    }

    /// Re-applies the most recently undone state, if any.
    pub fn redo(&mut self) -> Option<String> {
        let value = self.redo.pop()?;
        self.push_bounded(value.clone());
        Some(value)
    }

    fn push_bounded(&mut self, value: String) {
        self.undo.push_back(value);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.undo.back().map(String::as_str)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> EditHistory {
        let mut history = EditHistory::new("a");
        history.snapshot("ab");
        history.snapshot("abc");
        history
    }

    #[test]
    fn undo_walks_back_then_clears() {
        let mut history = abc();
        assert_eq!(history.undo(), "ab");
        assert_eq!(history.undo(), "a");
        assert!(history.can_undo());
        assert_eq!(history.undo(), "");
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert_eq!(history.undo(), "");
        assert_eq!(history.redo_len(), 3);
    }

    #[test]
    fn redo_after_undo_restores_latest() {
        let mut history = abc();
        history.undo();
        assert_eq!(history.redo(), Some("abc".to_string()));
        assert_eq!(history.current(), Some("abc"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn redo_replays_in_reverse_undo_order() {
        let mut history = abc();
        history.undo();
        history.undo();
        history.undo();
        assert_eq!(history.redo().as_deref(), Some("a"));
        assert_eq!(history.redo().as_deref(), Some("ab"));
        assert_eq!(history.redo().as_deref(), Some("abc"));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn snapshot_skips_consecutive_duplicates() {
        let mut history = EditHistory::new("a");
        history.snapshot("a");
        history.snapshot("b");
        history.snapshot("b");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn snapshot_clears_redo() {
        let mut history = abc();
        history.undo();
        assert!(history.can_redo());
        history.snapshot("abd");
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut history = EditHistory::with_capacity("0", DEFAULT_CAPACITY);
        for i in 1..=DEFAULT_CAPACITY {
            history.snapshot(i.to_string());
        }
        assert_eq!(history.len(), DEFAULT_CAPACITY);
        // "0" was the oldest of 101 distinct snapshots
        for _ in 0..DEFAULT_CAPACITY - 1 {
            history.undo();
        }
        assert_eq!(history.current(), Some("1"));
    }

    #[test]
    fn redo_respects_capacity() {
        let mut history = EditHistory::with_capacity("a", 2);
        history.snapshot("b");
        history.undo();
        history.snapshot("c");
        history.snapshot("d");
        history.undo();
        history.redo();
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("d"));
    }
}
