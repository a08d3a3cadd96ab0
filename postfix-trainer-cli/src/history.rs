use postfix_trainer::validator::ValidationResult;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 5;

/// The most recent validation results of a practice session, newest
/// first. Recording past capacity evicts the oldest entry. Lives only in
/// memory for the duration of the session.
pub struct History {
    entries: VecDeque<ValidationResult>,
}

impl History {
    pub fn new() -> History {
        History {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn record(&mut self, result: ValidationResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationResult> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
