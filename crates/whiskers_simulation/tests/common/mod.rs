//! Общие helpers для integration тестов

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;
use whiskers_simulation::{create_headless_app, SimulationConfig, SimulationPlugin};

/// Шаг кадра в тестах (Update), FixedUpdate при 60Hz успевает 6 раз
pub const DT: f32 = 0.1;

/// Все события типа `E`, прочитанные в `Last` (ровно по одному разу)
#[derive(Resource)]
pub struct Recorded<E: Event>(pub Vec<E>);

impl<E: Event> Default for Recorded<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record_events<E: Event + Clone>(mut reader: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(reader.read().cloned());
}

/// Подписать recorder на события `E`
pub fn record<E: Event + Clone>(app: &mut App) {
    app.init_resource::<Recorded<E>>();
    app.add_systems(Last, record_events::<E>);
}

pub fn recorded<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world().resource::<Recorded<E>>().0.clone()
}

pub fn clear_recorded<E: Event>(app: &mut App) {
    app.world_mut().resource_mut::<Recorded<E>>().0.clear();
}

/// Headless игровой App: SimulationPlugin + ручное время (DT за кадр)
pub fn create_game_app(seed: u64, config: SimulationConfig) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::new(config))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(DT)));
    app
}

/// Спавн через Commands мира + flush (entity сразу доступна для get)
pub fn spawn_with<F>(app: &mut App, spawn: F) -> Entity
where
    F: FnOnce(&mut Commands) -> Entity,
{
    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        spawn(&mut commands)
    };
    world.flush();
    entity
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
