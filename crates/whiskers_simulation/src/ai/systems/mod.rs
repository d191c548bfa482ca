//! Cat AI systems
//!
//! Update lane: perception → commands → brain → walk sound → contacts.
//! FixedUpdate lane: movement.

pub mod brain;
pub mod movement;
pub mod perception;
pub mod reactions;

// Re-export all systems
pub use brain::*;
pub use movement::*;
pub use perception::*;
pub use reactions::*;
