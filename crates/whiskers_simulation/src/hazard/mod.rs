//! Hazard domain — лазерные решётки, управляемые глобальным питанием
//!
//! Поток данных:
//! PowerChanged → broadcast_power_changes → LaserGrid.armed + LaserVisual + cue
//! ContactEvent(Player) → handle_laser_contacts → PlayerDied + cue

use bevy::prelude::*;

pub mod components;
pub mod systems;

#[cfg(test)]
mod hazard_tests;

pub use components::*;
pub use systems::*;

use crate::physics::BodyTag;

pub struct HazardPlugin;

impl Plugin for HazardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (broadcast_power_changes, handle_laser_contacts).chain(),
        );
    }
}

/// Спавн решётки с порогом `level` в точке `position`
pub fn spawn_laser_grid(commands: &mut Commands, position: Vec2, level: i32) -> Entity {
    commands
        .spawn((
            LaserGrid::new(level),
            BodyTag::Laser,
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}
