//! Canonical commands and their argument shapes.

use std::fmt;

/// How an item is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseMode {
    /// Hand the item to someone.
    Give,
    /// Read the item.
    Read,
    /// Apply the item to a target.
    UseOn,
    /// Use the item on its own.
    UseSelf,
}

/// Arguments for a [`Command::Use`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseArgs {
    /// The item being used.
    pub item: String,
    /// Who or what the item is used on, when the mode requires one.
    pub target: Option<String>,
    /// How the item is being used.
    pub mode: UseMode,
}

/// A parsed player command.
///
/// Each variant carries exactly the argument shape its handler needs, so
/// handlers never re-inspect what kind of argument they were given. Targets
/// are raw name fragments; resolution against candidate pools happens in the
/// handlers, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the current location.
    Look,
    /// Examine a specific entity.
    Examine {
        /// Name fragment of the thing to examine.
        target: String,
    },
    /// Move toward an exit.
    MoveTo {
        /// Name fragment of the exit or destination.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// Name fragment of the item.
        target: String,
    },
    /// Start a conversation.
    TalkTo {
        /// Name fragment of the character.
        target: String,
    },
    /// Use an item, in one of the [`UseMode`] shapes.
    Use(UseArgs),
    /// Try to convince a character of something.
    Persuade {
        /// Name fragment of the character.
        target: String,
        /// What the player is arguing.
        statement: String,
    },
    /// Select a previously listed item.
    SelectItem {
        /// Name fragment of the item.
        target: String,
    },
    /// List carried items.
    Inventory,
    /// Show the command history.
    History,
    /// Retry the last narrative beat.
    Retry,
    /// Ask for the last narrative beat to be rephrased.
    Rephrase,
    /// Show help text.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Whether this is a meta-command, excluded from the history ring.
    pub fn is_meta(&self) -> bool {
        matches!(
            self,
            Self::History | Self::Retry | Self::Rephrase | Self::SelectItem { .. }
        )
    }

    /// Canonical display string, independent of the synonym actually typed.
    ///
    /// Every canonical string re-parses to the same command, which is what
    /// makes `!!` replay safe.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Look => write!(f, "look"),
            Self::Examine { target } => write!(f, "examine {target}"),
            Self::MoveTo { target } => write!(f, "move to {target}"),
            Self::Take { target } => write!(f, "take {target}"),
            Self::TalkTo { target } => write!(f, "talk to {target}"),
            Self::Use(args) => match (&args.mode, &args.target) {
                (UseMode::Give, Some(target)) => write!(f, "give {} to {target}", args.item),
                (UseMode::Read, _) => write!(f, "read {}", args.item),
                (UseMode::UseOn, Some(target)) => write!(f, "use {} on {target}", args.item),
                // Give/UseOn without a target cannot be produced by the
                // parser; render them as a bare use.
                _ => write!(f, "use {}", args.item),
            },
            Self::Persuade { target, statement } => {
                write!(f, "persuade {target} that {statement}")
            }
            Self::SelectItem { target } => write!(f, "select {target}"),
            Self::Inventory => write!(f, "inventory"),
            Self::History => write!(f, "history"),
            Self::Retry => write!(f, "retry"),
            Self::Rephrase => write!(f, "rephrase"),
            Self::Help => write!(f, "help"),
            Self::Quit => write!(f, "quit"),
        }
    }
}
