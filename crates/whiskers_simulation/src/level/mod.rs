//! Level domain — сетка, метаданные объектов, загрузка
//!
//! Сам формат файла уровня и loader — внешние. Здесь:
//! - GridPosition / LevelGrid (snap, world ↔ cell)
//! - InGameObject / Persisted контракты объектов
//! - Traversability (запрос для pathfinding коллаборатора)
//! - Post-load проход (LevelLoaded)

use bevy::prelude::*;

pub mod grid;
pub mod persist;
pub mod post_load;

#[cfg(test)]
mod level_tests;

pub use grid::*;
pub use persist::*;
pub use post_load::*;

use crate::ai::Cat;

pub struct LevelPlugin {
    pub cell_size: f32,
}

impl Default for LevelPlugin {
    fn default() -> Self {
        Self { cell_size: 1.0 }
    }
}

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LevelGrid::new(self.cell_size))
            .add_event::<LevelLoaded>()
            .add_systems(
                Update,
                (apply_persisted_data, suppress_same_species_collisions::<Cat>).chain(),
            );
    }
}
