//! Game state signals: смерть игрока + глобальный уровень питания ловушек
//!
//! Вместо синглтонов — Resource `PowerGrid` и события. Подписка на питание
//! явная: компонент `PowerListener` регистрирует entity в `PowerGrid` через
//! component hooks (on_add / on_remove), так что despawn ловушки
//! гарантированно снимает подписку.

use bevy::ecs::component::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use std::collections::BTreeSet;

/// Кто убил игрока (для HUD/статистики внешнего game-state контроллера)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Cat,
    Laser,
}

/// Терминальный сигнал "player died" для внешнего game-state контроллера
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlayerDied {
    pub killer: Entity,
    pub cause: DeathCause,
}

/// Broadcast: новый уровень питания ловушек
///
/// Пишет внешний "hacker interface" (или тесты); применяет
/// `hazard::broadcast_power_changes`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerChanged {
    pub level: i32,
}

/// Текущий уровень питания + список подписчиков
///
/// BTreeSet — детерминированный порядок рассылки (порядок звуковых cue).
#[derive(Resource, Debug, Default)]
pub struct PowerGrid {
    level: i32,
    subscribers: BTreeSet<Entity>,
}

impl PowerGrid {
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    pub fn subscribe(&mut self, entity: Entity) -> bool {
        self.subscribers.insert(entity)
    }

    pub fn unsubscribe(&mut self, entity: Entity) -> bool {
        self.subscribers.remove(&entity)
    }

    pub fn is_subscribed(&self, entity: Entity) -> bool {
        self.subscribers.contains(&entity)
    }

    pub fn subscribers(&self) -> impl Iterator<Item = Entity> + '_ {
        self.subscribers.iter().copied()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Маркер: entity слушает `PowerChanged`
///
/// Required component у `LaserGrid`. Hooks держат `PowerGrid` в синхронизации
/// с жизненным циклом entity.
#[derive(Component, Debug, Clone, Copy, Default)]
#[component(on_add = subscribe_power_listener, on_remove = unsubscribe_power_listener)]
pub struct PowerListener;

fn subscribe_power_listener(mut world: DeferredWorld, context: HookContext) {
    match world.get_resource_mut::<PowerGrid>() {
        Some(mut grid) => {
            grid.subscribe(context.entity);
        }
        None => crate::log_warning(&format!(
            "PowerListener added to {:?} without PowerGrid resource — power changes will not reach it",
            context.entity
        )),
    }
}

fn unsubscribe_power_listener(mut world: DeferredWorld, context: HookContext) {
    if let Some(mut grid) = world.get_resource_mut::<PowerGrid>() {
        if grid.unsubscribe(context.entity) {
            crate::log(&format!("🔌 {:?} unsubscribed from power grid", context.entity));
        }
    }
}

pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PowerGrid>()
            .add_event::<PlayerDied>()
            .add_event::<PowerChanged>()
            .add_systems(Update, log_player_deaths);
    }
}

/// Система: лог терминального сигнала (сам сигнал обрабатывает хост)
pub fn log_player_deaths(mut deaths: EventReader<PlayerDied>) {
    for death in deaths.read() {
        crate::log_info(&format!("☠️ Player died ({:?} {:?})", death.cause, death.killer));
    }
}
