//! Editor компоненты: палитра, инструменты, размещённые объекты

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::Cat;
use crate::components::SortingLayer;
use crate::hazard::LaserGrid;
use crate::level::GridPosition;

/// Что можно разместить на уровне
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum PlacedObjectKind {
    Floor,
    Wall,
    Cat,
    LaserGrid,
}

impl PlacedObjectKind {
    /// Слои отрисовки, которые занимает объект
    pub fn layers(self) -> &'static [u8] {
        match self {
            PlacedObjectKind::Floor => &[0],
            PlacedObjectKind::Wall => &[0, 1, 2],
            PlacedObjectKind::Cat => &[Cat::LAYER],
            PlacedObjectKind::LaserGrid => &[LaserGrid::LAYER],
        }
    }

    /// Проходимость для pathfinding'а; лазер считаем включённым (порог по умолчанию)
    pub fn is_traversable(self) -> bool {
        match self {
            PlacedObjectKind::Floor | PlacedObjectKind::Cat => true,
            PlacedObjectKind::Wall | PlacedObjectKind::LaserGrid => false,
        }
    }

    /// Per-entity данные нового объекта (формат `Persisted` его игрового двойника)
    pub fn default_data(self) -> String {
        match self {
            PlacedObjectKind::Cat => "0".to_string(),
            PlacedObjectKind::LaserGrid => LaserGrid::DEFAULT_LEVEL.to_string(),
            PlacedObjectKind::Floor | PlacedObjectKind::Wall => String::new(),
        }
    }
}

/// Действие инструмента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ToolKind {
    /// Primary — поставить объект, secondary — убрать
    Place(PlacedObjectKind),
    /// Любая активация убирает объект
    Erase,
}

/// Кнопка палитры: прямоугольник экрана → инструмент
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PaletteItem {
    pub rect: Rect,
    pub tool: ToolKind,
    pub snap_to_grid: bool,
}

impl PaletteItem {
    pub fn new(rect: Rect, tool: ToolKind) -> Self {
        Self {
            rect,
            tool,
            snap_to_grid: true,
        }
    }

    pub fn without_snap(mut self) -> Self {
        self.snap_to_grid = false;
        self
    }
}

/// Инструмент в руке курсора; позиция — Transform entity
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Tool {
    pub kind: ToolKind,
    pub snap_to_grid: bool,
}

/// Объект, поставленный редактором
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(Transform, SortingLayer)]
pub struct PlacedObject {
    pub kind: PlacedObjectKind,
    pub cell: GridPosition,
}

impl PlacedObject {
    pub fn layers(&self) -> &'static [u8] {
        self.kind.layers()
    }

    pub fn sorting_layer(&self) -> SortingLayer {
        SortingLayer::for_level_layers(self.layers())
    }

    pub fn to_record(&self, data: impl Into<String>) -> PlacedObjectRecord {
        PlacedObjectRecord {
            kind: self.kind,
            cell: self.cell,
            data: data.into(),
        }
    }
}

/// Строка файла уровня для внешнего writer'а
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObjectRecord {
    pub kind: PlacedObjectKind,
    pub cell: GridPosition,
    /// `Persisted::serialize` объекта
    #[serde(default)]
    pub data: String,
}
