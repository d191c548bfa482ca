//! Whiskers Simulation Core
//!
//! ECS-логика стелс-головоломки на Bevy 0.16: коты с конусом зрения,
//! лазерные решётки на общем питании, редактор уровней.
//!
//! Движок-хост (рендер, физика, звук, загрузка уровней) — внешний:
//! - в ECS приходят ContactEvent, PointerInput, LevelLoaded, PowerChanged
//! - из ECS уходят AudioCue, PlayerDied, IgnoreCollision, Transform/visual state
//!
//! Два lane'а: Update (решения, ввод, vision) и FixedUpdate (движение).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod audio;
pub mod components;
pub mod config;
pub mod editor;
pub mod game_state;
pub mod hazard;
pub mod level;
pub mod logger;
pub mod physics;
pub mod vision;

// Re-export базовых типов для удобства
pub use ai::{spawn_cat, spawn_cat_with_route, Cat, CatAIPlugin, CatBrain, CatConfig, CatStateId};
pub use audio::{AudioCue, AudioCuePlugin};
pub use components::*;
pub use config::{ConfigError, SimulationConfig};
pub use editor::EditorPlugin;
pub use game_state::{DeathCause, GameStatePlugin, PlayerDied, PowerChanged, PowerGrid};
pub use hazard::{spawn_laser_grid, HazardPlugin, LaserGrid};
pub use level::{GridPosition, LevelGrid, LevelLoaded, LevelPlugin};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use physics::{BodyTag, ContactEvent, ContactPlugin, IgnoreCollision};
pub use vision::{VisionCone, VisionPlugin};

/// Главный plugin игровой симуляции (объединяет все подсистемы, без редактора)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app приоритетнее конфига
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(self.config.rng_seed));
        }

        app.insert_resource(Time::<Fixed>::from_hz(self.config.fixed_hz))
            .insert_resource(self.config.clone())
            .add_plugins((
                AudioCuePlugin,
                GameStatePlugin,
                ContactPlugin,
                LevelPlugin {
                    cell_size: self.config.grid_cell_size,
                },
                VisionPlugin,
                HazardPlugin,
                CatAIPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
