//! Cat AI — perception → state machine → movement
//!
//! Состояния: Patrol, Chase, DisabledByRunner (см. components::states).
//! Два lane'а:
//! - Update: perception, команды взлома, тик автомата, звук, контакты
//! - FixedUpdate: move_cats (интеграция на постоянном delta)

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::*;
pub use events::*;
pub use systems::*;

use crate::level::StartRotation;
use crate::physics::BodyTag;
use crate::vision::{VisionCone, VisionSet};

/// AI Plugin
///
/// Update chain идёт после VisionSet — Perception видит события этого кадра.
pub struct CatAIPlugin;

impl Plugin for CatAIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DisableCat>()
            .add_event::<EnableCat>()
            .add_event::<CatStateChanged>()
            .add_systems(
                Update,
                (
                    apply_vision_events,
                    handle_cat_commands,
                    update_cat_brains,
                    update_walk_sounds,
                    handle_cat_contacts,
                )
                    .chain()
                    .after(VisionSet),
            )
            .add_systems(FixedUpdate, move_cats);
    }
}

/// Спавн кота: конфиг, конус из конфига, начальный поворот (градусы)
pub fn spawn_cat(commands: &mut Commands, position: Vec2, config: &CatConfig, rotation_degrees: i32) -> Entity {
    spawn_cat_with_brain(commands, position, config, rotation_degrees, CatBrain::default())
}

/// Спавн кота с фиксированным маршрутом патруля
pub fn spawn_cat_with_route(
    commands: &mut Commands,
    position: Vec2,
    config: &CatConfig,
    rotation_degrees: i32,
    route: Vec<Vec2>,
) -> Entity {
    spawn_cat_with_brain(commands, position, config, rotation_degrees, CatBrain::with_route(route))
}

fn spawn_cat_with_brain(
    commands: &mut Commands,
    position: Vec2,
    config: &CatConfig,
    rotation_degrees: i32,
    brain: CatBrain,
) -> Entity {
    let rotation = StartRotation(rotation_degrees);
    commands
        .spawn((
            Cat,
            BodyTag::Cat,
            brain,
            config.clone(),
            VisionCone::new(config.field_of_view, config.length_of_view),
            Transform::from_translation(position.extend(0.0)).with_rotation(rotation.to_quat()),
            rotation,
        ))
        .id()
}
