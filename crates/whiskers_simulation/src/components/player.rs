//! Player marker component
//!
//! Отмечает entity игрока-бегуна (мышь). Коты ищут цель по `With<Player>`.

use bevy::prelude::*;

use crate::physics::BodyTag;

/// Marker component для runner entity
///
/// # Single-player
/// В уровне обычно ровно один entity с этим компонентом; если их несколько,
/// vision sensor берёт ближайшего к наблюдателю.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Player;

/// Спавн игрока в точке мира
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Player,
            BodyTag::Player,
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}
