//! Read-only world-view contract for the Kopeck interpreter.
//!
//! The interpreter never mutates world state; it only needs point-in-time
//! snapshots of what the player can currently reference. This crate defines
//! those snapshot types, the [`WorldView`] trait that supplies them, and an
//! in-memory [`StaticWorld`] used by the demo CLI and by tests.

/// In-memory world view with builder-style construction.
pub mod memory;
/// Snapshot types and the world-view trait.
pub mod view;

pub use memory::StaticWorld;
pub use view::{ExitView, ItemView, NpcView, WorldView};
