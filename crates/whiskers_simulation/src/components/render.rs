//! Render-only метаданные (движок-хост читает, ECS не рисует)

use bevy::prelude::*;

/// Sorting layer + порядок внутри слоя
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SortingLayer {
    pub name: String,
    pub order: i32,
}

impl SortingLayer {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Слой размещённого объекта: "LevelLayer{max(layers)}"
    pub fn for_level_layers(layers: &[u8]) -> Self {
        let top = layers.iter().copied().max().unwrap_or(0);
        Self::new(format!("LevelLayer{}", top), 0)
    }
}

impl Default for SortingLayer {
    fn default() -> Self {
        Self::new("Default", 0)
    }
}
