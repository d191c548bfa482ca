//! Editor pipeline (Update lane), по порядку:
//! 1. update_cursor_position — screen позиция курсора
//! 2. track_held_tool — инструмент следует за указателем (snap к центру клетки)
//! 3. handle_clicks — клик: палитра (взять инструмент) или мир (активировать)
//! 4. handle_drag_snap — удержание кнопки: повтор при смене клетки
//! 5. apply_tool_actions — см. placement

use bevy::prelude::*;

use super::components::{PaletteItem, Tool};
use super::cursor::{Activation, EditorCursor, ToolAction, ToolPicked};
use super::input::{ClickRegion, EditorCamera, EditorRegions, PointerButton, PointerInput};
use crate::level::LevelGrid;

/// Primary если удерживается кнопка 0, иначе secondary
fn activation_for(pointer: &PointerInput) -> Activation {
    if pointer.is_pressed(PointerButton::Primary) {
        Activation::Primary
    } else {
        Activation::Secondary
    }
}

pub fn update_cursor_position(pointer: Res<PointerInput>, mut cursor: ResMut<EditorCursor>) {
    cursor.screen_position = pointer.position;
}

/// Система: held tool следует за world-проекцией указателя
///
/// Если инструмент despawned снаружи — курсор его забывает.
pub fn track_held_tool(
    pointer: Res<PointerInput>,
    camera: Res<EditorCamera>,
    grid: Res<LevelGrid>,
    mut cursor: ResMut<EditorCursor>,
    mut tools: Query<(&Tool, &mut Transform)>,
) {
    let Some(held) = cursor.held_tool else {
        return;
    };
    let Ok((tool, mut transform)) = tools.get_mut(held) else {
        cursor.held_tool = None;
        cursor.last_grid_cell = None;
        return;
    };

    let world = camera.screen_to_world(pointer.position);
    let position = if tool.snap_to_grid { grid.snap(world) } else { world };
    transform.translation = position.extend(transform.translation.z);
}

/// Система: обработка клика (ровно одна кнопка нажата на этом кадре)
pub fn handle_clicks(
    mut commands: Commands,
    pointer: Res<PointerInput>,
    regions: Res<EditorRegions>,
    camera: Res<EditorCamera>,
    grid: Res<LevelGrid>,
    mut cursor: ResMut<EditorCursor>,
    palette: Query<(Entity, &PaletteItem)>,
    tools: Query<(&Tool, &Transform)>,
    mut actions: EventWriter<ToolAction>,
    mut picked: EventWriter<ToolPicked>,
) {
    if !pointer.one_button_just_pressed() {
        return;
    }

    match regions.classify(pointer.position) {
        ClickRegion::Palette => {
            // Первый по Entity при пересечении кнопок
            let Some((_, item)) = palette
                .iter()
                .filter(|(_, item)| item.rect.contains(pointer.position))
                .min_by_key(|(entity, _)| *entity)
            else {
                return;
            };

            if let Some(old) = cursor.held_tool.take() {
                if let Ok(mut entity) = commands.get_entity(old) {
                    entity.despawn();
                }
            }

            let world = camera.screen_to_world(pointer.position);
            let tool = commands
                .spawn((
                    Tool {
                        kind: item.tool,
                        snap_to_grid: item.snap_to_grid,
                    },
                    Transform::from_translation(world.extend(0.0)),
                ))
                .id();

            cursor.held_tool = Some(tool);
            cursor.last_grid_cell = None;
            picked.write(ToolPicked { tool, kind: item.tool });
            crate::log(&format!("🖱️ Picked {:?} from palette → tool {:?}", item.tool, tool));
        }
        ClickRegion::World => {
            let Some(held) = cursor.held_tool else {
                return;
            };
            let Ok((tool, transform)) = tools.get(held) else {
                return;
            };

            let position = transform.translation.truncate();
            actions.write(ToolAction {
                tool: held,
                kind: tool.kind,
                activation: activation_for(&pointer),
                position,
            });
            cursor.last_grid_cell = Some(grid.world_to_cell(position));
        }
        ClickRegion::Outside => {}
    }
}

/// Система: paint-by-drag
///
/// Кнопка удерживается (но не нажата на этом кадре), инструмент со snap,
/// указатель в мире — срабатываем один раз на каждую новую клетку.
pub fn handle_drag_snap(
    pointer: Res<PointerInput>,
    regions: Res<EditorRegions>,
    grid: Res<LevelGrid>,
    mut cursor: ResMut<EditorCursor>,
    tools: Query<(&Tool, &Transform)>,
    mut actions: EventWriter<ToolAction>,
) {
    if pointer.one_button_just_pressed() || !pointer.one_button_down() {
        return;
    }
    let Some(held) = cursor.held_tool else {
        return;
    };
    let Ok((tool, transform)) = tools.get(held) else {
        return;
    };
    if !tool.snap_to_grid || !regions.world.contains(pointer.position) {
        return;
    }

    let position = transform.translation.truncate();
    let cell = grid.world_to_cell(position);
    if cursor.last_grid_cell != Some(cell) {
        actions.write(ToolAction {
            tool: held,
            kind: tool.kind,
            activation: activation_for(&pointer),
            position,
        });
    }
    cursor.last_grid_cell = Some(cell);
}
