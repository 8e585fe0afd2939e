//! The command-synonym table and closest-command suggestions.

use strsim::jaro_winkler;

use super::Parsed;
use crate::command::Command;

/// Minimum similarity for a closest-command suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Canonical verbs reachable through the synonym table.
///
/// Compound-only commands (give, persuade) have no entry here; they are
/// extracted by the compound patterns before synonym lookup runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Describe the current location.
    Look,
    /// Examine a specific entity.
    Examine,
    /// Move toward an exit.
    MoveTo,
    /// Pick up an item.
    Take,
    /// Start a conversation.
    TalkTo,
    /// Use an item on its own.
    Use,
    /// Select a previously listed item.
    SelectItem,
    /// List carried items.
    Inventory,
    /// Show the command history.
    History,
    /// Retry the last narrative beat.
    Retry,
    /// Rephrase the last narrative beat.
    Rephrase,
    /// Show help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Synonym table: every synonym maps to its canonical verb. Matching is
/// longest-token-wins, so order within a list does not matter.
pub(super) const SYNONYMS: &[(Verb, &[&str])] = &[
    (Verb::Look, &["look", "look around", "l"]),
    (Verb::Examine, &["examine", "look at", "inspect", "study", "x"]),
    (
        Verb::MoveTo,
        &["move to", "go to", "move", "go", "walk to", "head to", "enter"],
    ),
    (Verb::Take, &["take", "pick up", "grab", "get"]),
    (
        Verb::TalkTo,
        &["talk to", "talk with", "talk", "speak to", "speak with", "chat with"],
    ),
    (Verb::Use, &["use", "apply"]),
    (Verb::SelectItem, &["select", "choose", "pick"]),
    (Verb::Inventory, &["inventory", "inv", "i", "items"]),
    (Verb::History, &["history"]),
    (Verb::Retry, &["retry"]),
    (Verb::Rephrase, &["rephrase"]),
    (Verb::Help, &["help", "h", "?"]),
    (Verb::Quit, &["quit", "exit", "q"]),
];

impl Verb {
    /// The canonical token for this verb.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Examine => "examine",
            Self::MoveTo => "move to",
            Self::Take => "take",
            Self::TalkTo => "talk to",
            Self::Use => "use",
            Self::SelectItem => "select",
            Self::Inventory => "inventory",
            Self::History => "history",
            Self::Retry => "retry",
            Self::Rephrase => "rephrase",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Build the parsed outcome for this verb and an optional remainder.
    pub(super) fn build(self, rest: Option<String>) -> Parsed {
        use crate::command::{UseArgs, UseMode};

        match (self, rest) {
            // A bare look describes the location; a look with a target is
            // an examine.
            (Self::Look, None) => Parsed::Command(Command::Look),
            (Self::Look, Some(target)) => Parsed::Command(Command::Examine { target }),
            (Self::Examine, Some(target)) => Parsed::Command(Command::Examine { target }),
            (Self::MoveTo, Some(target)) => Parsed::Command(Command::MoveTo { target }),
            (Self::Take, Some(target)) => Parsed::Command(Command::Take { target }),
            (Self::TalkTo, Some(target)) => Parsed::Command(Command::TalkTo { target }),
            (Self::Use, Some(item)) => Parsed::Command(Command::Use(UseArgs {
                item,
                target: None,
                mode: UseMode::UseSelf,
            })),
            (Self::SelectItem, Some(target)) => Parsed::Command(Command::SelectItem { target }),
            (Self::Examine, None) => Parsed::Incomplete {
                verb: "examine",
                prompt: "examine what?",
            },
            (Self::MoveTo, None) => Parsed::Incomplete {
                verb: "move to",
                prompt: "go where?",
            },
            (Self::Take, None) => Parsed::Incomplete {
                verb: "take",
                prompt: "take what?",
            },
            (Self::TalkTo, None) => Parsed::Incomplete {
                verb: "talk to",
                prompt: "talk to whom?",
            },
            (Self::Use, None) => Parsed::Incomplete {
                verb: "use",
                prompt: "use what?",
            },
            (Self::SelectItem, None) => Parsed::Incomplete {
                verb: "select",
                prompt: "select what?",
            },
            // Trailing words after an argument-free verb are ignored.
            (Self::Inventory, _) => Parsed::Command(Command::Inventory),
            (Self::History, _) => Parsed::Command(Command::History),
            (Self::Retry, _) => Parsed::Command(Command::Retry),
            (Self::Rephrase, _) => Parsed::Command(Command::Rephrase),
            (Self::Help, _) => Parsed::Command(Command::Help),
            (Self::Quit, _) => Parsed::Command(Command::Quit),
        }
    }
}

/// Suggest the closest known commands for an unrecognized head token.
///
/// Scores every synonym with Jaro-Winkler similarity and returns the
/// canonical tokens of the best-scoring verbs, deduplicated, bounded by
/// `limit`.
pub fn closest_commands(input: &str, limit: usize) -> Vec<String> {
    let input = input.to_lowercase();
    let mut scored: Vec<(&'static str, f64)> = Vec::new();

    for (verb, synonyms) in SYNONYMS {
        let best = synonyms
            .iter()
            .map(|syn| jaro_winkler(&input, syn))
            .fold(0.0_f64, f64::max);
        if best >= SUGGEST_THRESHOLD {
            scored.push((verb.token(), best));
        }
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(token, _)| token.to_string())
        .collect()
}
