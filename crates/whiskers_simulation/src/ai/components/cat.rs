//! Cat entity компоненты: marker, config, perception, movement output

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::brain::CatBrain;
use crate::level::{GridPosition, InGameObject, StartRotation};
use crate::vision::VisionCone;

/// Кот — мобильная опасность с vision cone
///
/// Required Components подтягивают мозг, конфиг, конус и sensor.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, CatBrain, CatConfig, VisionCone, Perception, DesiredVelocity, WalkSound, StartRotation)]
pub struct Cat;

impl Cat {
    pub const LAYER: u8 = 2;
}

impl InGameObject for Cat {
    fn layer(&self) -> u8 {
        Self::LAYER
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    /// Коты не блокируют pathfinding — это динамическая опасность, не рельеф
    fn is_traversable_at(&self, _position: GridPosition) -> bool {
        true
    }
}

/// Параметры кота
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatConfig {
    /// Скорость патруля (units/sec)
    pub patrol_speed: f32,
    /// Скорость погони (units/sec)
    pub chase_speed: f32,
    /// Сколько секунд Chase держится без игрока в конусе
    pub lose_sight_grace: f32,
    /// Дистанция "дошёл до точки"
    pub arrive_distance: f32,
    /// Радиус случайного патруля вокруг home (без маршрута)
    pub wander_radius: f32,
    pub field_of_view: f32,
    pub length_of_view: f32,
    /// Looping звук шагов (в релизной игре выключен)
    pub walk_sound: bool,
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 2.0,
            chase_speed: 4.0,
            lose_sight_grace: 2.0,
            arrive_distance: 0.1,
            wander_radius: 4.0,
            field_of_view: 90.0,
            length_of_view: 10.0,
            walk_sound: false,
        }
    }
}

/// Какого игрока кот видит прямо сейчас (из VisionEvent)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perception {
    pub target: Option<Entity>,
}

impl Perception {
    pub fn sees_player(&self) -> bool {
        self.target.is_some()
    }
}

/// Последняя желаемая скорость (units/sec), пишется каждый fixed step
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct DesiredVelocity(pub Vec2);

/// Состояние looping звука шагов (start/stop без дублей)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSound {
    pub playing: bool,
}
