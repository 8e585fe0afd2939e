//! The built-in demo scenario: three locations in St. Petersburg.
//!
//! This stands in for the persistent world model the interpreter treats as
//! an external collaborator. It owns the only mutable state in the demo
//! (current location and inventory); the interpreter sees it purely through
//! the read-only [`WorldView`] trait.

use std::collections::HashMap;

use kp_world::{ExitView, ItemView, NpcView, WorldView};

/// One location in the demo scenario.
pub struct Location {
    /// Display name.
    pub name: String,
    /// A sentence or two shown on a full look.
    pub description: String,
    /// Items lying around.
    pub items: Vec<ItemView>,
    /// Characters present.
    pub npcs: Vec<NpcView>,
    /// Exits leading away.
    pub exits: Vec<ExitView>,
}

/// A small mutable demo world.
pub struct DemoWorld {
    locations: HashMap<String, Location>,
    current: String,
    inventory: Vec<ItemView>,
    descriptors: HashMap<String, String>,
}

impl DemoWorld {
    /// Build the demo scenario.
    pub fn petersburg() -> Self {
        let mut locations = HashMap::new();

        locations.insert(
            "garret".to_string(),
            Location {
                name: "Your Garret".to_string(),
                description: "A tiny room under the roof, more cupboard than lodging. \
                              The ceiling presses down on you."
                    .to_string(),
                items: vec![ItemView::new("letter")],
                npcs: vec![],
                exits: vec![ExitView::new(
                    "street",
                    "the rickety stairwell down to the street",
                )],
            },
        );

        locations.insert(
            "street".to_string(),
            Location {
                name: "The Street".to_string(),
                description: "Dust, heat, and the smell of the canals. Passers-by hurry \
                              along without looking up."
                    .to_string(),
                items: vec![ItemView::new("loaf of bread")],
                npcs: vec![
                    NpcView::new("Sonia").with_state("waiting by the gate"),
                    NpcView::new("Razumikhin"),
                ],
                exits: vec![
                    ExitView::new("garret", "the stairwell up to your garret"),
                    ExitView::new("haymarket", "the road south toward the Haymarket"),
                ],
            },
        );

        locations.insert(
            "haymarket".to_string(),
            Location {
                name: "The Haymarket".to_string(),
                description: "Stalls, shouting, spilled straw. Half the city seems to \
                              pass through here by evening."
                    .to_string(),
                items: vec![ItemView::new("apple"), ItemView::new("apricot")],
                npcs: vec![NpcView::new("Trader").with_state("hawking fruit")],
                exits: vec![ExitView::new("street", "the road north, back the way you came")],
            },
        );

        let mut descriptors = HashMap::new();
        descriptors.insert("letter".to_string(), "a letter from your mother".to_string());
        descriptors.insert("loaf of bread".to_string(), "yesterday's bread".to_string());
        descriptors.insert("apple".to_string(), "a bruised apple".to_string());
        descriptors.insert("apricot".to_string(), "a soft apricot".to_string());
        descriptors.insert("sonia".to_string(), "pale, in a worn shawl".to_string());
        descriptors.insert("razumikhin".to_string(), "your loud, loyal friend".to_string());
        descriptors.insert("trader".to_string(), "red-faced, impatient".to_string());

        Self {
            locations,
            current: "garret".to_string(),
            inventory: vec![],
            descriptors,
        }
    }

    fn here(&self) -> &Location {
        // The current key is only ever set from a resolved exit.
        &self.locations[&self.current]
    }

    /// The current location.
    pub fn location(&self) -> &Location {
        self.here()
    }

    /// Move through an exit to a known location key. Returns false if the
    /// key does not name a location.
    pub fn travel(&mut self, key: &str) -> bool {
        if self.locations.contains_key(key) {
            self.current = key.to_string();
            true
        } else {
            false
        }
    }

    /// Remove an item from the current location and add it to the
    /// inventory. The name must already be resolved.
    pub fn take(&mut self, name: &str) -> bool {
        let Some(location) = self.locations.get_mut(&self.current) else {
            return false;
        };
        match location.items.iter().position(|i| i.name == name) {
            Some(pos) => {
                let item = location.items.remove(pos);
                self.inventory.push(item);
                true
            }
            None => false,
        }
    }

    /// Remove an item from the inventory. The name must already be
    /// resolved.
    pub fn give_away(&mut self, name: &str) -> bool {
        match self.inventory.iter().position(|i| i.name == name) {
            Some(pos) => {
                self.inventory.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl WorldView for DemoWorld {
    fn location_items(&self) -> Vec<ItemView> {
        self.here().items.clone()
    }

    fn inventory_items(&self) -> Vec<ItemView> {
        self.inventory.clone()
    }

    fn npcs_present(&self) -> Vec<NpcView> {
        self.here().npcs.clone()
    }

    fn exits(&self) -> Vec<ExitView> {
        self.here().exits.clone()
    }

    fn describe_item_brief(&self, name: &str) -> String {
        self.descriptors
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| "an item".to_string())
    }

    fn describe_npc_brief(&self, name: &str) -> String {
        self.descriptors
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| "a person".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_the_garret() {
        let world = DemoWorld::petersburg();
        assert_eq!(world.location().name, "Your Garret");
        assert_eq!(world.location_items().len(), 1);
    }

    #[test]
    fn travel_follows_exit_keys() {
        let mut world = DemoWorld::petersburg();
        assert!(world.travel("street"));
        assert_eq!(world.location().name, "The Street");
        assert!(!world.travel("siberia"));
    }

    #[test]
    fn take_moves_item_to_inventory() {
        let mut world = DemoWorld::petersburg();
        assert!(world.take("letter"));
        assert!(world.location_items().is_empty());
        assert_eq!(world.inventory_items().len(), 1);
        assert!(!world.take("letter"));
    }

    #[test]
    fn give_away_removes_from_inventory() {
        let mut world = DemoWorld::petersburg();
        world.take("letter");
        assert!(world.give_away("letter"));
        assert!(world.inventory_items().is_empty());
        assert!(!world.give_away("letter"));
    }
}
