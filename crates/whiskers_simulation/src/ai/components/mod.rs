//! AI components

pub mod brain;
pub mod cat;
pub mod states;


// Re-export all components
pub use brain::*;
pub use cat::*;
pub use states::*;
