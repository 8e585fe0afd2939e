//! Parsing strategies, evaluated in a fixed order.

use super::Parsed;
use super::synonyms::SYNONYMS;
use crate::command::{Command, UseArgs, UseMode};

/// One step in the parsing pipeline.
///
/// A strategy either claims the line (`Some`) or lets the next strategy try
/// (`None`). New compound patterns slot in as new strategies without
/// touching the synonym engine.
pub trait ParseStrategy {
    /// Try to parse a lower-cased, trimmed line.
    fn try_parse(&self, line: &str) -> Option<Parsed>;
}

/// Fixed multi-argument extraction patterns, first match wins.
pub struct CompoundStrategy;

/// Longest-match lookup against the command-synonym table.
pub struct SynonymStrategy;

/// Unconditional fallback: the first token and whatever follows it.
pub struct FirstTokenStrategy;

impl ParseStrategy for CompoundStrategy {
    fn try_parse(&self, line: &str) -> Option<Parsed> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let head = *words.first()?;

        match head {
            "give" | "offer" => Some(parse_give(&words[1..])),
            "read" | "peruse" => Some(parse_read(&words[1..])),
            "use" | "apply" => parse_use_on(&words[1..]),
            "persuade" | "convince" => Some(parse_persuade(&words[1..])),
            "argue" if words.get(1) == Some(&"with") => Some(parse_persuade(&words[2..])),
            _ => None,
        }
    }
}

fn parse_give(rest: &[&str]) -> Parsed {
    match rest.iter().position(|w| *w == "to") {
        Some(pos) if pos > 0 && pos + 1 < rest.len() => Parsed::Command(Command::Use(UseArgs {
            item: rest[..pos].join(" "),
            target: Some(rest[pos + 1..].join(" ")),
            mode: UseMode::Give,
        })),
        _ => Parsed::Incomplete {
            verb: "give",
            prompt: "give what to whom?",
        },
    }
}

fn parse_read(rest: &[&str]) -> Parsed {
    if rest.is_empty() {
        return Parsed::Incomplete {
            verb: "read",
            prompt: "read what?",
        };
    }
    Parsed::Command(Command::Use(UseArgs {
        item: rest.join(" "),
        target: None,
        mode: UseMode::Read,
    }))
}

/// `use X on Y` only; a bare `use X` falls through to the synonym table.
fn parse_use_on(rest: &[&str]) -> Option<Parsed> {
    let pos = rest.iter().position(|w| *w == "on")?;
    if pos == 0 || pos + 1 >= rest.len() {
        return Some(Parsed::Incomplete {
            verb: "use",
            prompt: "use what on what?",
        });
    }
    Some(Parsed::Command(Command::Use(UseArgs {
        item: rest[..pos].join(" "),
        target: Some(rest[pos + 1..].join(" ")),
        mode: UseMode::UseOn,
    })))
}

fn parse_persuade(rest: &[&str]) -> Parsed {
    match rest.iter().position(|w| *w == "that" || *w == "to") {
        Some(pos) if pos > 0 && pos + 1 < rest.len() => Parsed::Command(Command::Persuade {
            target: rest[..pos].join(" "),
            statement: rest[pos + 1..].join(" "),
        }),
        _ => Parsed::Incomplete {
            verb: "persuade",
            prompt: "persuade whom of what?",
        },
    }
}

impl ParseStrategy for SynonymStrategy {
    fn try_parse(&self, line: &str) -> Option<Parsed> {
        // Longest matching synonym wins; a longer token is the more
        // specific match ("move to" must out-rank "move").
        let mut best: Option<(super::synonyms::Verb, &str)> = None;

        for (verb, synonyms) in SYNONYMS {
            for syn in *synonyms {
                let hit = line == *syn
                    || (line.starts_with(syn) && line[syn.len()..].starts_with(' '));
                if hit && best.is_none_or(|(_, b)| syn.len() > b.len()) {
                    best = Some((*verb, syn));
                }
            }
        }

        let (verb, syn) = best?;
        let rest = line[syn.len()..].trim();
        let rest = (!rest.is_empty()).then(|| rest.to_string());
        Some(verb.build(rest))
    }
}

impl ParseStrategy for FirstTokenStrategy {
    fn try_parse(&self, line: &str) -> Option<Parsed> {
        let (head, rest) = match line.split_once(' ') {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        Some(Parsed::Unknown {
            head: head.to_string(),
            rest: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }
}
