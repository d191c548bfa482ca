//! Level editor — курсор, палитра, инструменты размещения
//!
//! Поток данных:
//! PointerInput (хост) → регион (палитра/мир) → ToolPicked / ToolAction
//! → apply_tool_actions → PlacedObject entities
//! despawn PlacedObject в обход инструмента → forget_removed_objects
//!
//! Все системы в одной цепочке Update: порядок внутри кадра фиксирован.

use bevy::prelude::*;

pub mod components;
pub mod cursor;
pub mod input;
pub mod placement;
pub mod systems;


pub use components::*;
pub use cursor::*;
pub use input::*;
pub use placement::*;
pub use systems::*;

/// Editor Plugin
///
/// Требует `LevelGrid` (ставит `LevelPlugin`) — без неё вставляет дефолтную.
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<crate::level::LevelGrid>() {
            app.init_resource::<crate::level::LevelGrid>();
        }

        app.init_resource::<PointerInput>()
            .init_resource::<EditorCamera>()
            .init_resource::<EditorRegions>()
            .init_resource::<EditorCursor>()
            .init_resource::<PlacedObjects>()
            .add_event::<ToolAction>()
            .add_event::<ToolPicked>()
            .add_systems(
                Update,
                (
                    forget_removed_objects,
                    update_cursor_position,
                    track_held_tool,
                    handle_clicks,
                    handle_drag_snap,
                    apply_tool_actions,
                )
                    .chain(),
            );
    }
}

/// Кнопка палитры
pub fn spawn_palette_item(commands: &mut Commands, item: PaletteItem) -> Entity {
    commands.spawn(item).id()
}
