//! Состояние курсора редактора и события инструментов

use bevy::prelude::*;

use super::components::ToolKind;
use crate::level::GridPosition;

/// Курсор редактора: не больше одного инструмента в руке
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorCursor {
    /// Зеркалит pointer 1:1 каждый кадр
    pub screen_position: Vec2,
    pub held_tool: Option<Entity>,
    /// Клетка последнего срабатывания (для drag-snap)
    pub last_grid_cell: Option<GridPosition>,
    /// Системный курсор скрыт, пока активен курсор редактора
    pub os_cursor_visible: bool,
}

impl Default for EditorCursor {
    fn default() -> Self {
        Self {
            screen_position: Vec2::ZERO,
            held_tool: None,
            last_grid_cell: None,
            os_cursor_visible: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Primary,
    Secondary,
}

/// Активация инструмента в точке мира (его текущая позиция)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ToolAction {
    pub tool: Entity,
    pub kind: ToolKind,
    pub activation: Activation,
    pub position: Vec2,
}

/// Новый инструмент взят из палитры
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ToolPicked {
    pub tool: Entity,
    pub kind: ToolKind,
}
