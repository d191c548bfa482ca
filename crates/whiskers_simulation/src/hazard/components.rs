//! Laser grid компоненты

use bevy::ecs::component::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;

use crate::game_state::{PowerGrid, PowerListener};
use crate::level::{parse_int_or, GridPosition, InGameObject, Persisted};

/// Переход состояния решётки (для звуковых cue)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaserTransition {
    Armed,
    Disarmed,
}

/// Лазерная решётка, синхронизированная с глобальным питанием
///
/// Инвариант: `armed == (level > power)` после каждого broadcast'а.
/// `armed` наружу только на чтение — меняется исключительно через
/// `apply_power` / `resync`.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(PowerListener, LaserVisual, Transform)]
#[component(on_add = sync_laser_with_power_grid)]
pub struct LaserGrid {
    level: i32,
    armed: bool,
}

impl Default for LaserGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

impl LaserGrid {
    pub const DEFAULT_LEVEL: i32 = 3;
    pub const LAYER: u8 = 1;

    pub fn new(level: i32) -> Self {
        Self { level, armed: true }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn should_be_armed(&self, power: i32) -> bool {
        self.level > power
    }

    /// Применить broadcast питания
    ///
    /// Возвращает переход только если состояние реально сменилось —
    /// повторный broadcast того же состояния не даёт повторного cue.
    pub fn apply_power(&mut self, power: i32) -> Option<LaserTransition> {
        let target = self.should_be_armed(power);
        if target == self.armed {
            return None;
        }

        self.armed = target;
        Some(if target {
            LaserTransition::Armed
        } else {
            LaserTransition::Disarmed
        })
    }

    /// Тихая синхронизация (spawn / загрузка уровня) — без cue
    pub fn resync(&mut self, power: i32) {
        self.armed = self.should_be_armed(power);
    }
}

impl InGameObject for LaserGrid {
    fn layer(&self) -> u8 {
        Self::LAYER
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    fn is_traversable_at(&self, _position: GridPosition) -> bool {
        !self.armed
    }
}

impl Persisted for LaserGrid {
    fn serialize(&self) -> String {
        self.level.to_string()
    }

    /// Только порог; `armed` пересчитывается вызывающим через `resync`
    fn deserialize(&mut self, serialized: &str) {
        self.level = parse_int_or(serialized, Self::DEFAULT_LEVEL, "laser level");
    }
}

/// Render-side состояние решётки (спрайт лучей)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct LaserVisual {
    pub visible: bool,
}

impl Default for LaserVisual {
    fn default() -> Self {
        Self { visible: true }
    }
}

fn sync_laser_with_power_grid(mut world: DeferredWorld, context: HookContext) {
    let Some(power) = world.get_resource::<PowerGrid>().map(|grid| grid.level()) else {
        return;
    };

    let armed = match world.get_mut::<LaserGrid>(context.entity) {
        Some(mut laser) => {
            laser.resync(power);
            laser.is_armed()
        }
        None => return,
    };

    if let Some(mut visual) = world.get_mut::<LaserVisual>(context.entity) {
        visual.visible = armed;
    }
}
