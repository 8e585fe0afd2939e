//! Partial-name resolution against candidate pools.
//!
//! Pools are read-only, point-in-time snapshots pulled from a [`WorldView`]
//! at resolution time. The resolver is a single generic algorithm over any
//! pool: case-insensitive prefix matching, never substring, never fuzzy.
//! Predictability matters more than cleverness here — "ap" against apple
//! and apricot is ambiguous, "app" is not.

use kp_world::WorldView;

/// Upper bound on candidates shown in a disambiguation prompt.
const MAX_SHOWN: usize = 5;

/// A named, point-in-time pool of referenceable entity names.
///
/// The descriptor capability keeps the resolver entity-agnostic: the pool
/// knows how to describe its own members, the resolver only calls it when
/// building an ambiguity prompt.
pub struct CandidatePool<'v> {
    /// Human-readable label used in prompts ("item", "person", ...).
    label: &'static str,
    names: Vec<String>,
    describe: Box<dyn Fn(&str) -> String + 'v>,
}

impl<'v> CandidatePool<'v> {
    /// Build a pool from explicit parts.
    pub fn new(
        label: &'static str,
        names: Vec<String>,
        describe: impl Fn(&str) -> String + 'v,
    ) -> Self {
        Self {
            label,
            names,
            describe: Box::new(describe),
        }
    }

    /// Items visible in the current location.
    pub fn location_items(view: &'v dyn WorldView) -> Self {
        let names = view.location_items().into_iter().map(|i| i.name).collect();
        Self::new("item", names, move |name| view.describe_item_brief(name))
    }

    /// Items in the player's possession.
    pub fn inventory(view: &'v dyn WorldView) -> Self {
        let names = view.inventory_items().into_iter().map(|i| i.name).collect();
        Self::new("item", names, move |name| view.describe_item_brief(name))
    }

    /// Characters present in the current location.
    pub fn npcs(view: &'v dyn WorldView) -> Self {
        let names = view.npcs_present().into_iter().map(|n| n.name).collect();
        Self::new("person", names, move |name| view.describe_npc_brief(name))
    }

    /// The pool's label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The pool's member names, in snapshot order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Outcome of resolving one name fragment against one pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// Exactly one member matched.
    Resolved(String),
    /// No member matched.
    NotFound,
    /// Two or more members matched; the resolver never silently guesses.
    Ambiguous {
        /// Matching names, bounded to the first five.
        candidates: Vec<String>,
        /// Ready-to-show disambiguation prompt.
        prompt: String,
    },
}

/// Resolve a name fragment against a pool with case-insensitive prefix
/// matching.
///
/// Deterministic for an unchanged pool. The only output beyond the match
/// itself is the prompt carried by the `Ambiguous` case.
pub fn resolve(fragment: &str, pool: &CandidatePool<'_>) -> ResolutionResult {
    let fragment = fragment.trim().to_lowercase();
    let matches: Vec<&String> = pool
        .names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&fragment))
        .collect();

    match matches.len() {
        0 => ResolutionResult::NotFound,
        1 => ResolutionResult::Resolved(matches[0].clone()),
        _ => {
            let shown: Vec<&String> = matches.iter().take(MAX_SHOWN).copied().collect();
            let listing = shown
                .iter()
                .map(|name| format!("{name} ({})", (pool.describe)(name)))
                .collect::<Vec<_>>()
                .join("; ");
            ResolutionResult::Ambiguous {
                candidates: shown.into_iter().cloned().collect(),
                prompt: format!("Which {} did you mean? {listing}", pool.label),
            }
        }
    }
}

/// Resolve an exit reference with the relaxed exit rule.
///
/// Exits are usually referenced by their descriptive text rather than an
/// internal key, so the rule is: exact target-key match, or description
/// prefix, or description substring. Returns matching target keys.
pub fn resolve_exits(fragment: &str, exits: &[kp_world::ExitView]) -> ResolutionResult {
    let fragment = fragment.trim().to_lowercase();
    let matches: Vec<&kp_world::ExitView> = exits
        .iter()
        .filter(|exit| {
            let key = exit.target_key.to_lowercase();
            let desc = exit.description.to_lowercase();
            key == fragment || desc.starts_with(&fragment) || desc.contains(&fragment)
        })
        .collect();

    match matches.len() {
        0 => ResolutionResult::NotFound,
        1 => ResolutionResult::Resolved(matches[0].target_key.clone()),
        _ => {
            let shown: Vec<&kp_world::ExitView> =
                matches.iter().take(MAX_SHOWN).copied().collect();
            let listing = shown
                .iter()
                .map(|exit| format!("{} ({})", exit.target_key, exit.description))
                .collect::<Vec<_>>()
                .join("; ");
            ResolutionResult::Ambiguous {
                candidates: shown.iter().map(|e| e.target_key.clone()).collect(),
                prompt: format!("Which exit did you mean? {listing}"),
            }
        }
    }
}
