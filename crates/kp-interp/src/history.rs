//! Bounded command history with a repeat-last shorthand.

use std::collections::VecDeque;

use crate::command::Command;

/// Default number of entries kept.
const DEFAULT_CAPACITY: usize = 20;

/// A bounded, most-recent-last ring of canonical command strings.
///
/// Meta-commands are never recorded, so replaying `!!` cannot chain into
/// accidental loops, and failed or unrecognized input never lands here.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl CommandHistory {
    /// Create a history ring with the given capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a successfully interpreted command. Meta-commands are skipped;
    /// the oldest entry is evicted once the ring is full.
    pub fn record(&mut self, command: &Command) {
        if command.is_meta() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.canonical());
    }

    /// The most recent canonical command, if any.
    pub fn repeat_last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_canonical_text() {
        let mut history = CommandHistory::default();
        history.record(&Command::Take {
            target: "axe".to_string(),
        });
        assert_eq!(history.repeat_last(), Some("take axe"));
    }

    #[test]
    fn empty_history_has_no_last() {
        let history = CommandHistory::default();
        assert!(history.repeat_last().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn meta_commands_are_not_recorded() {
        let mut history = CommandHistory::default();
        history.record(&Command::History);
        history.record(&Command::Retry);
        history.record(&Command::Rephrase);
        history.record(&Command::SelectItem {
            target: "axe".to_string(),
        });
        assert!(history.is_empty());
    }

    #[test]
    fn oldest_entry_evicted_first() {
        let mut history = CommandHistory::new(3);
        for target in ["one", "two", "three", "four"] {
            history.record(&Command::Take {
                target: target.to_string(),
            });
        }
        assert_eq!(history.len(), 3);
        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["take two", "take three", "take four"]);
        assert_eq!(history.repeat_last(), Some("take four"));
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let mut history = CommandHistory::new(0);
        history.record(&Command::Look);
        history.record(&Command::Inventory);
        assert_eq!(history.len(), 1);
        assert_eq!(history.repeat_last(), Some("inventory"));
    }
}
