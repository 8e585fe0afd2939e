//! Numbered action context for numeric shorthand input.
//!
//! Every time a full location view is rendered, the context is rebuilt from
//! scratch in a fixed section order — people first (a look-at and a talk-to
//! entry each), then loose items, then exits — so the numeric layout stays
//! stable and learnable across turns. Stale numbers from a previous view
//! simply miss the bounds check.

use kp_world::WorldView;

/// What a numbered entry does when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Examine the target.
    LookAt,
    /// Talk to the target.
    TalkTo,
    /// Select the target item.
    Select,
    /// Move through the target exit.
    Move,
}

/// One entry in the numbered action list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedAction {
    /// 1-based index as displayed to the player.
    pub index: usize,
    /// What selecting this entry does.
    pub kind: ActionKind,
    /// The entity or exit key the action applies to.
    pub target: String,
    /// Rendered label, e.g. `"Talk to Sonia"`.
    pub label: String,
}

/// The transient index-to-entity mapping behind numeric shorthand.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    actions: Vec<NumberedAction>,
}

impl ActionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list from the current view.
    pub fn rebuild(&mut self, view: &dyn WorldView) {
        self.actions.clear();
        let mut push = |kind, target: String, label: String| {
            let index = self.actions.len() + 1;
            self.actions.push(NumberedAction {
                index,
                kind,
                target,
                label,
            });
        };

        for npc in view.npcs_present() {
            push(
                ActionKind::LookAt,
                npc.name.clone(),
                format!("Look at {}", npc.name),
            );
            push(
                ActionKind::TalkTo,
                npc.name.clone(),
                format!("Talk to {}", npc.name),
            );
        }
        for item in view.location_items() {
            push(
                ActionKind::Select,
                item.name.clone(),
                format!("Select {}", item.name),
            );
        }
        for exit in view.exits() {
            push(
                ActionKind::Move,
                exit.target_key.clone(),
                format!("Go to {}", exit.description),
            );
        }
    }

    /// Look up a displayed index. Zero and out-of-range miss gracefully.
    pub fn resolve(&self, n: usize) -> Option<&NumberedAction> {
        if n == 0 {
            return None;
        }
        self.actions.get(n - 1)
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[NumberedAction] {
        &self.actions
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
