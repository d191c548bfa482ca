//! Общие ECS компоненты, не привязанные к одному домену
//!
//! - player: marker игрока (Player)
//! - render: sorting layer для хоста (SortingLayer)

pub mod player;
pub mod render;

// Re-exports для удобного импорта
pub use player::*;
pub use render::*;
