//! Snapshot types and the world-view trait.

use serde::{Deserialize, Serialize};

/// An item visible in the location or carried by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Display name used for reference resolution.
    pub name: String,
    /// Stack size, when the item is countable.
    pub quantity: Option<u32>,
}

impl ItemView {
    /// Create an item view with no quantity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }

    /// Set the stack size.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// A character present in the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcView {
    /// Display name used for reference resolution.
    pub name: String,
    /// How the character currently appears, if anything stands out.
    pub apparent_state: Option<String>,
}

impl NpcView {
    /// Create an NPC view with no apparent state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            apparent_state: None,
        }
    }

    /// Set the apparent state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.apparent_state = Some(state.into());
        self
    }
}

/// An exit leading out of the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitView {
    /// Internal key of the destination location.
    pub target_key: String,
    /// Descriptive text players usually refer to the exit by.
    pub description: String,
}

impl ExitView {
    /// Create an exit view.
    pub fn new(target_key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            target_key: target_key.into(),
            description: description.into(),
        }
    }
}

/// Read-only access to everything currently referenceable by the player.
///
/// Implementations must reflect world state at call time: the interpreter
/// re-queries on every resolution and never caches results across turns.
/// The `describe_*` methods supply short tag strings used only in
/// disambiguation prompts.
pub trait WorldView {
    /// Items visible in the current location.
    fn location_items(&self) -> Vec<ItemView>;

    /// Items in the player's possession.
    fn inventory_items(&self) -> Vec<ItemView>;

    /// Characters present in the current location.
    fn npcs_present(&self) -> Vec<NpcView>;

    /// Exits leading out of the current location.
    fn exits(&self) -> Vec<ExitView>;

    /// Short descriptor for an item, for ambiguity prompts.
    fn describe_item_brief(&self, name: &str) -> String;

    /// Short descriptor for a character, for ambiguity prompts.
    fn describe_npc_brief(&self, name: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_builder() {
        let item = ItemView::new("loaf of bread").with_quantity(2);
        assert_eq!(item.name, "loaf of bread");
        assert_eq!(item.quantity, Some(2));
    }

    #[test]
    fn npc_builder() {
        let npc = NpcView::new("Sonia").with_state("weeping quietly");
        assert_eq!(npc.apparent_state.as_deref(), Some("weeping quietly"));
    }

    #[test]
    fn exit_serde_roundtrip() {
        let exit = ExitView::new("haymarket", "the bustling Haymarket square");
        let json = serde_json::to_string(&exit).unwrap();
        let back: ExitView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exit);
    }
}
