//! Headless симуляция Whiskers
//!
//! Уровень-песочница: кот патрулирует, решётка на питании, игрок стоит
//! в конусе. Печатает переходы кота и смерть игрока.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use whiskers_simulation::ai::CatStateChanged;
use whiskers_simulation::{
    create_headless_app, spawn_cat, spawn_laser_grid, spawn_player, PlayerDied, PowerChanged, SimulationConfig,
    SimulationPlugin,
};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|json| SimulationConfig::from_json_str(&json).map_err(|err| err.to_string()))
        {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    println!("Starting Whiskers headless simulation (seed: {})", config.rng_seed);

    let mut app = create_headless_app(config.rng_seed);
    app.add_plugins(SimulationPlugin::new(config.clone()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / config.fixed_hz)));

    let world = app.world_mut();
    {
        let mut commands = world.commands();
        spawn_cat(&mut commands, Vec2::ZERO, &config.cat, 0);
        spawn_laser_grid(&mut commands, Vec2::new(-3.0, 0.0), config.laser_default_level);
        spawn_player(&mut commands, Vec2::new(6.0, 0.5));
    }
    world.flush();

    for tick in 0..600 {
        if tick == 120 {
            app.world_mut().send_event(PowerChanged { level: 5 });
        }
        app.update();

        let world = app.world_mut();
        for change in world.resource_mut::<Events<CatStateChanged>>().drain() {
            println!("Tick {}: cat {:?} {:?} → {:?}", tick, change.cat, change.from, change.to);
        }
        for death in world.resource_mut::<Events<PlayerDied>>().drain() {
            println!("Tick {}: player died ({:?})", tick, death.cause);
        }
    }

    println!("Simulation complete!");
}
