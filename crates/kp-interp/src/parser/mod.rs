//! Verb/argument parsing with an ordered strategy list.
//!
//! Strategies are tried strictly in order — compound extraction patterns,
//! then longest-match synonym lookup, then a first-token fallback that
//! always matches. Parsing is pure: same line, same result.

mod strategy;
mod synonyms;

pub use strategy::{CompoundStrategy, FirstTokenStrategy, ParseStrategy, SynonymStrategy};
pub use synonyms::{Verb, closest_commands};

use crate::command::Command;

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A fully formed command.
    Command(Command),
    /// A recognized verb missing its required argument ("take what?").
    Incomplete {
        /// Canonical token of the recognized verb.
        verb: &'static str,
        /// Prompt to show the player.
        prompt: &'static str,
    },
    /// Nothing recognized; the raw first token and the remainder, so the
    /// caller can decide what to do with it.
    Unknown {
        /// First whitespace-separated token, lower-cased.
        head: String,
        /// Everything after the first token, if anything.
        rest: Option<String>,
    },
}

/// Parse a raw input line against the fixed strategy order.
///
/// The final strategy always matches, so this total function never fails;
/// whether an [`Parsed::Unknown`] head is a real command is the caller's
/// problem.
pub fn parse(line: &str) -> Parsed {
    let line = line.trim().to_lowercase();
    let strategies: [&dyn ParseStrategy; 3] =
        [&CompoundStrategy, &SynonymStrategy, &FirstTokenStrategy];
    for strategy in strategies {
        if let Some(parsed) = strategy.try_parse(&line) {
            return parsed;
        }
    }
    // FirstTokenStrategy matches every line, including the empty one.
    Parsed::Unknown {
        head: line,
        rest: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{UseArgs, UseMode};
    use proptest::prelude::*;

    #[test]
    fn compound_beats_synonyms() {
        assert_eq!(
            parse("give sword to Razumikhin"),
            Parsed::Command(Command::Use(UseArgs {
                item: "sword".to_string(),
                target: Some("razumikhin".to_string()),
                mode: UseMode::Give,
            }))
        );
    }

    #[test]
    fn read_without_clause() {
        assert_eq!(
            parse("read letter"),
            Parsed::Command(Command::Use(UseArgs {
                item: "letter".to_string(),
                target: None,
                mode: UseMode::Read,
            }))
        );
    }

    #[test]
    fn use_on_target() {
        assert_eq!(
            parse("use key on door"),
            Parsed::Command(Command::Use(UseArgs {
                item: "key".to_string(),
                target: Some("door".to_string()),
                mode: UseMode::UseOn,
            }))
        );
    }

    #[test]
    fn bare_use_is_use_self() {
        assert_eq!(
            parse("use bandage"),
            Parsed::Command(Command::Use(UseArgs {
                item: "bandage".to_string(),
                target: None,
                mode: UseMode::UseSelf,
            }))
        );
    }

    #[test]
    fn persuade_with_that() {
        assert_eq!(
            parse("persuade Sonia that we should leave"),
            Parsed::Command(Command::Persuade {
                target: "sonia".to_string(),
                statement: "we should leave".to_string(),
            })
        );
    }

    #[test]
    fn argue_with_to() {
        assert_eq!(
            parse("argue with Luzhin to apologize"),
            Parsed::Command(Command::Persuade {
                target: "luzhin".to_string(),
                statement: "apologize".to_string(),
            })
        );
    }

    #[test]
    fn longest_synonym_wins() {
        // "pick up" (take) must out-rank the shorter "pick" (select).
        assert_eq!(
            parse("pick up the axe"),
            Parsed::Command(Command::Take {
                target: "the axe".to_string()
            })
        );
        assert_eq!(
            parse("pick the axe"),
            Parsed::Command(Command::SelectItem {
                target: "the axe".to_string()
            })
        );
    }

    #[test]
    fn look_around_is_bare_look() {
        assert_eq!(parse("look around"), Parsed::Command(Command::Look));
        assert_eq!(parse("look"), Parsed::Command(Command::Look));
    }

    #[test]
    fn look_with_target_examines() {
        assert_eq!(
            parse("look at the mirror"),
            Parsed::Command(Command::Examine {
                target: "the mirror".to_string()
            })
        );
        assert_eq!(
            parse("look mirror"),
            Parsed::Command(Command::Examine {
                target: "mirror".to_string()
            })
        );
    }

    #[test]
    fn move_to_synonyms() {
        for line in ["move to haymarket", "go to haymarket", "go haymarket"] {
            assert_eq!(
                parse(line),
                Parsed::Command(Command::MoveTo {
                    target: "haymarket".to_string()
                }),
                "failed for {line:?}"
            );
        }
    }

    #[test]
    fn missing_argument_prompts() {
        assert_eq!(
            parse("take"),
            Parsed::Incomplete {
                verb: "take",
                prompt: "take what?"
            }
        );
        assert_eq!(
            parse("talk to"),
            Parsed::Incomplete {
                verb: "talk to",
                prompt: "talk to whom?"
            }
        );
        assert_eq!(
            parse("read"),
            Parsed::Incomplete {
                verb: "read",
                prompt: "read what?"
            }
        );
    }

    #[test]
    fn unknown_falls_through_with_first_token() {
        assert_eq!(
            parse("dance wildly"),
            Parsed::Unknown {
                head: "dance".to_string(),
                rest: Some("wildly".to_string()),
            }
        );
        assert_eq!(
            parse("xyzzy"),
            Parsed::Unknown {
                head: "xyzzy".to_string(),
                rest: None,
            }
        );
    }

    #[test]
    fn input_is_case_insensitive_and_trimmed() {
        assert_eq!(
            parse("  TAKE AXE  "),
            Parsed::Command(Command::Take {
                target: "axe".to_string()
            })
        );
    }

    proptest! {
        #[test]
        fn parse_is_deterministic(line in ".{0,60}") {
            prop_assert_eq!(parse(&line), parse(&line));
        }

        #[test]
        fn known_synonyms_keep_their_argument(arg in "[a-z]{1,12}( [a-z]{1,12}){0,2}") {
            for (verb, line) in [
                ("take", format!("grab {arg}")),
                ("examine", format!("inspect {arg}")),
                ("talk to", format!("speak with {arg}")),
            ] {
                let expected = match verb {
                    "take" => Command::Take { target: arg.clone() },
                    "examine" => Command::Examine { target: arg.clone() },
                    _ => Command::TalkTo { target: arg.clone() },
                };
                prop_assert_eq!(parse(&line), Parsed::Command(expected));
            }
        }
    }
}
