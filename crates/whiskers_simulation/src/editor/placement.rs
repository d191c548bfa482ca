//! Placement tool: ToolAction → размещённые объекты уровня

use bevy::prelude::*;
use std::collections::BTreeMap;

use super::components::{PlacedObject, PlacedObjectKind, PlacedObjectRecord, ToolKind};
use super::cursor::{Activation, ToolAction};
use crate::hazard::LaserGrid;
use crate::level::{GridOccupant, GridPosition, LevelGrid, Persisted, StartRotation};

/// Занятость клеток редактором (не больше одного объекта на клетку)
#[derive(Resource, Debug, Default)]
pub struct PlacedObjects {
    by_cell: BTreeMap<GridPosition, Entity>,
}

impl PlacedObjects {
    pub fn get(&self, cell: GridPosition) -> Option<Entity> {
        self.by_cell.get(&cell).copied()
    }

    pub fn is_occupied(&self, cell: GridPosition) -> bool {
        self.by_cell.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.by_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }

    /// false если клетка уже занята
    pub fn insert(&mut self, cell: GridPosition, entity: Entity) -> bool {
        if self.is_occupied(cell) {
            return false;
        }
        self.by_cell.insert(cell, entity);
        true
    }

    pub fn remove(&mut self, cell: GridPosition) -> Option<Entity> {
        self.by_cell.remove(&cell)
    }

    /// Убрать entity, где бы она ни стояла (despawn в обход редактора)
    pub fn forget(&mut self, entity: Entity) -> bool {
        let before = self.by_cell.len();
        self.by_cell.retain(|_, placed| *placed != entity);
        self.by_cell.len() != before
    }

    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        self.by_cell.keys().copied()
    }
}

/// Что сделать по активации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOp {
    Place(PlacedObjectKind),
    Remove,
}

pub fn placement_op(kind: ToolKind, activation: Activation) -> PlacementOp {
    match (kind, activation) {
        (ToolKind::Place(object), Activation::Primary) => PlacementOp::Place(object),
        (ToolKind::Place(_), Activation::Secondary) | (ToolKind::Erase, _) => PlacementOp::Remove,
    }
}

/// Система: применение ToolAction к уровню
///
/// Занятость обновляется сразу, так что несколько действий за кадр
/// (клик + drag) видят друг друга до применения commands.
pub fn apply_tool_actions(
    mut commands: Commands,
    mut actions: EventReader<ToolAction>,
    mut placed: ResMut<PlacedObjects>,
    grid: Res<LevelGrid>,
) {
    for action in actions.read() {
        let cell = grid.world_to_cell(action.position);

        match placement_op(action.kind, action.activation) {
            PlacementOp::Place(kind) => {
                if placed.is_occupied(cell) {
                    continue;
                }
                let object = PlacedObject { kind, cell };
                let mut entity_commands = commands.spawn((
                    object,
                    object.sorting_layer(),
                    GridOccupant {
                        cell,
                        traversable: kind.is_traversable(),
                    },
                    Transform::from_translation(grid.cell_center(cell).extend(0.0)),
                ));
                if kind == PlacedObjectKind::Cat {
                    entity_commands.insert(StartRotation::default());
                }
                let entity = entity_commands.id();
                placed.insert(cell, entity);
                crate::log(&format!("🧱 Placed {:?} at {:?} → {:?}", kind, cell, entity));
            }
            PlacementOp::Remove => {
                let Some(entity) = placed.remove(cell) else {
                    continue;
                };
                if let Ok(mut entity_commands) = commands.get_entity(entity) {
                    entity_commands.despawn();
                }
                crate::log(&format!("🧹 Removed {:?} at {:?}", entity, cell));
            }
        }
    }
}

/// Система: чистим PlacedObjects от объектов, despawned не через инструмент
pub fn forget_removed_objects(
    mut removed: RemovedComponents<PlacedObject>,
    mut placed: ResMut<PlacedObjects>,
) {
    for entity in removed.read() {
        if placed.forget(entity) {
            crate::log(&format!("🧹 Forgot despawned {:?}", entity));
        }
    }
}

/// Снимок уровня для внешнего writer'а, упорядочен по клетке
///
/// `data` — `Persisted::serialize` игрового компонента объекта
/// (StartRotation / LaserGrid), без него — данные по умолчанию.
pub fn export_level(world: &mut World) -> Vec<PlacedObjectRecord> {
    let mut query = world.query::<(&PlacedObject, Option<&StartRotation>, Option<&LaserGrid>)>();
    let mut records: Vec<PlacedObjectRecord> = query
        .iter(world)
        .map(|(object, rotation, laser)| {
            let data = match (rotation, laser) {
                (Some(rotation), _) => rotation.serialize(),
                (None, Some(laser)) => laser.serialize(),
                (None, None) => object.kind.default_data(),
            };
            object.to_record(data)
        })
        .collect();
    records.sort_by_key(|record| record.cell);
    records
}
