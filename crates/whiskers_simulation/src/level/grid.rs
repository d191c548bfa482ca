//! Дискретная сетка уровня: клетки, snap, traversability

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::Cat;
use crate::hazard::LaserGrid;

/// Целочисленная клетка сетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Reflect)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<IVec2> for GridPosition {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridPosition> for IVec2 {
    fn from(p: GridPosition) -> Self {
        IVec2::new(p.x, p.y)
    }
}

/// Геометрия сетки (world ↔ cell)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelGrid {
    pub cell_size: f32,
    /// World позиция угла клетки (0, 0)
    pub origin: Vec2,
}

impl Default for LevelGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LevelGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            origin: Vec2::ZERO,
        }
    }

    pub fn world_to_cell(&self, position: Vec2) -> GridPosition {
        let local = (position - self.origin) / self.cell_size;
        GridPosition::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    pub fn cell_center(&self, cell: GridPosition) -> Vec2 {
        self.origin + (Vec2::new(cell.x as f32, cell.y as f32) + Vec2::splat(0.5)) * self.cell_size
    }

    /// World позиция → центр её клетки
    pub fn snap(&self, position: Vec2) -> Vec2 {
        self.cell_center(self.world_to_cell(position))
    }
}

/// Общий контракт объектов уровня (слой отрисовки, динамика, проходимость)
pub trait InGameObject {
    fn layer(&self) -> u8;

    fn is_dynamic(&self) -> bool;

    /// Для внешнего pathfinding'а
    fn is_traversable_at(&self, position: GridPosition) -> bool;
}

/// Статичный обитатель клетки (рельеф, декор, объекты редактора)
///
/// Коты и лазеры его не несут: их клетка считается из `Transform`,
/// так что движущийся кот не требует отдельной синхронизации.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct GridOccupant {
    pub cell: GridPosition,
    pub traversable: bool,
}

impl GridOccupant {
    pub fn blocking(cell: GridPosition) -> Self {
        Self { cell, traversable: false }
    }

    pub fn passable(cell: GridPosition) -> Self {
        Self { cell, traversable: true }
    }
}

/// SystemParam для pathfinding коллаборатора: `is_traversable_at(cell)`
///
/// Клетка проходима, если проходимы все её обитатели; пустая клетка проходима.
#[derive(SystemParam)]
pub struct Traversability<'w, 's> {
    grid: Res<'w, LevelGrid>,
    statics: Query<'w, 's, &'static GridOccupant, (Without<Cat>, Without<LaserGrid>)>,
    cats: Query<'w, 's, (&'static Cat, &'static Transform)>,
    lasers: Query<'w, 's, (&'static LaserGrid, &'static Transform)>,
}

impl Traversability<'_, '_> {
    pub fn cell_of(&self, transform: &Transform) -> GridPosition {
        self.grid.world_to_cell(transform.translation.truncate())
    }

    pub fn is_traversable_at(&self, cell: GridPosition) -> bool {
        let statics = self
            .statics
            .iter()
            .filter(|occupant| occupant.cell == cell)
            .all(|occupant| occupant.traversable);

        let cats = self
            .cats
            .iter()
            .filter(|(_, transform)| self.cell_of(transform) == cell)
            .all(|(cat, _)| cat.is_traversable_at(cell));

        let lasers = self
            .lasers
            .iter()
            .filter(|(_, transform)| self.cell_of(transform) == cell)
            .all(|(laser, _)| laser.is_traversable_at(cell));

        statics && cats && lasers
    }
}
