//! Confidence-gated fallback to an external free-text intent classifier.
//!
//! Invoked only when the deterministic parser came up empty and a
//! classifier is configured. The classifier sees the raw input plus the
//! current candidate names — never full descriptions — and its answer is
//! honored only above a fixed confidence threshold. Every failure mode
//! (transport error, timeout, malformed payload, unsafe input) degrades to
//! the same unknown-at-zero outcome; nothing here is ever fatal.

use kp_world::WorldView;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierResult;

/// Minimum confidence at which a classification is honored.
pub const CONFIDENCE_THRESHOLD: f64 = 0.70;

/// Phrases that short-circuit classification without any external call.
const UNSAFE_PHRASES: &[&str] = &[
    "kill myself",
    "hurt myself",
    "end my life",
    "suicide",
    "self harm",
    "self-harm",
    "kill you",
];

/// The fixed intent vocabulary. Anything else coerces to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Move somewhere.
    Move,
    /// Pick something up.
    Take,
    /// Examine something.
    Examine,
    /// Talk to someone.
    Talk,
    /// Not understood.
    Unknown,
}

impl Intent {
    fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "move" => Self::Move,
            "take" => Self::Take,
            "examine" => Self::Examine,
            "talk" => Self::Talk,
            _ => Self::Unknown,
        }
    }
}

/// Candidate names handed to the classifier, never full descriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierContext {
    /// Exit keys of the current location.
    pub exits: Vec<String>,
    /// Item names visible in the location.
    pub items: Vec<String>,
    /// Characters present.
    pub npcs: Vec<String>,
    /// Item names in the player's possession.
    pub inventory: Vec<String>,
}

impl ClassifierContext {
    /// Snapshot the candidate names from a world view.
    pub fn from_view(view: &dyn WorldView) -> Self {
        Self {
            exits: view.exits().into_iter().map(|e| e.target_key).collect(),
            items: view.location_items().into_iter().map(|i| i.name).collect(),
            npcs: view.npcs_present().into_iter().map(|n| n.name).collect(),
            inventory: view.inventory_items().into_iter().map(|i| i.name).collect(),
        }
    }
}

/// The classifier's answer as it comes off the wire, before sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawClassification {
    /// Intent label; anything outside the fixed vocabulary is unknown.
    pub intent: String,
    /// Target string; missing means empty.
    #[serde(default)]
    pub target: Option<String>,
    /// Confidence; missing or non-finite means 0.0.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// A sanitized classification: fixed intent enum, non-null target,
/// confidence clamped to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct IntentClassification {
    /// The classified intent.
    pub intent: Intent,
    /// The entity the intent applies to; may be empty.
    pub target: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl IntentClassification {
    /// The degenerate answer every failure mode collapses to.
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            target: String::new(),
            confidence: 0.0,
        }
    }

    /// Sanitize a raw payload.
    pub fn from_raw(raw: RawClassification) -> Self {
        let confidence = raw
            .confidence
            .filter(|c| c.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        Self {
            intent: Intent::parse(&raw.intent),
            target: raw.target.unwrap_or_default(),
            confidence,
        }
    }

    /// Whether this classification clears the acceptance gate.
    pub fn accepted(&self) -> bool {
        self.intent != Intent::Unknown && self.confidence >= CONFIDENCE_THRESHOLD
    }
}

/// An injectable external free-text intent classifier.
///
/// A single blocking request-response with no retry; implementations own
/// their timeout. The engine runs fully without one, deterministic-only.
pub trait IntentClassifier {
    /// Classify raw player input against the current candidate names.
    fn classify(&self, input: &str, context: &ClassifierContext)
    -> ClassifierResult<RawClassification>;
}

/// Whether input trips the unsafe-content filter.
pub fn is_unsafe(input: &str) -> bool {
    let input = input.to_lowercase();
    UNSAFE_PHRASES.iter().any(|phrase| input.contains(phrase))
}

/// Run the full gate: unsafe filter, external call, sanitization.
///
/// The returned classification still has to pass
/// [`IntentClassification::accepted`]; rejection handling belongs to the
/// caller.
pub fn classify_gated(
    classifier: &dyn IntentClassifier,
    input: &str,
    view: &dyn WorldView,
) -> IntentClassification {
    if is_unsafe(input) {
        return IntentClassification::unknown();
    }
    let context = ClassifierContext::from_view(view);
    match classifier.classify(input, &context) {
        Ok(raw) => IntentClassification::from_raw(raw),
        Err(_) => IntentClassification::unknown(),
    }
}

/// Up to four deduplicated example commands for a didn't-understand
/// response, one per category, skipping categories with no candidates.
pub fn contextual_examples(view: &dyn WorldView) -> Vec<String> {
    let mut examples = vec!["look".to_string()];
    if let Some(npc) = view.npcs_present().first() {
        examples.push(format!("talk to {}", npc.name));
    }
    if let Some(item) = view.location_items().first() {
        examples.push(format!("take {}", item.name));
    }
    if let Some(exit) = view.exits().first() {
        examples.push(format!("go to {}", exit.target_key));
    }
    examples.dedup();
    examples
}
