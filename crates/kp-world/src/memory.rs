//! In-memory world view with builder-style construction.

use std::collections::HashMap;

use crate::view::{ExitView, ItemView, NpcView, WorldView};

/// A fixed, in-memory [`WorldView`].
///
/// Used as the backing view for the demo CLI and as the test double
/// throughout the workspace. Descriptors default to `"an item"` /
/// `"a person"` when none was registered.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    location_items: Vec<ItemView>,
    inventory_items: Vec<ItemView>,
    npcs: Vec<NpcView>,
    exits: Vec<ExitView>,
    descriptors: HashMap<String, String>,
}

impl StaticWorld {
    /// Create an empty world view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the current location.
    pub fn with_location_item(mut self, item: ItemView) -> Self {
        self.location_items.push(item);
        self
    }

    /// Add an item to the player's inventory.
    pub fn with_inventory_item(mut self, item: ItemView) -> Self {
        self.inventory_items.push(item);
        self
    }

    /// Add a character to the current location.
    pub fn with_npc(mut self, npc: NpcView) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Add an exit.
    pub fn with_exit(mut self, exit: ExitView) -> Self {
        self.exits.push(exit);
        self
    }

    /// Register a brief descriptor for an entity name.
    pub fn with_descriptor(mut self, name: impl Into<String>, brief: impl Into<String>) -> Self {
        self.descriptors.insert(name.into().to_lowercase(), brief.into());
        self
    }

    fn descriptor_or(&self, name: &str, fallback: &str) -> String {
        self.descriptors
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl WorldView for StaticWorld {
    fn location_items(&self) -> Vec<ItemView> {
        self.location_items.clone()
    }

    fn inventory_items(&self) -> Vec<ItemView> {
        self.inventory_items.clone()
    }

    fn npcs_present(&self) -> Vec<NpcView> {
        self.npcs.clone()
    }

    fn exits(&self) -> Vec<ExitView> {
        self.exits.clone()
    }

    fn describe_item_brief(&self, name: &str) -> String {
        self.descriptor_or(name, "an item")
    }

    fn describe_npc_brief(&self, name: &str) -> String {
        self.descriptor_or(name, "a person")
    }
}
