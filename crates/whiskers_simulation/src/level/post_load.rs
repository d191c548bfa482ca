//! Post-load проход: один раз после десериализации всех объектов уровня
//!
//! Порядок (chain в `LevelPlugin`):
//! 1. apply_persisted_data — PersistedData → StartRotation / LaserGrid level
//! 2. suppress_same_species_collisions::<Cat> — попарное отключение коллизий

use bevy::prelude::*;

use crate::game_state::PowerGrid;
use crate::hazard::{LaserGrid, LaserVisual};
use crate::level::{Persisted, PersistedData, StartRotation};
use crate::physics::{CollisionFilter, IgnoreCollision};

/// Сигнал от внешнего loader'а: все объекты уровня заспавнены
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LevelLoaded;

/// Система: применяем сырые данные объектов
///
/// StartRotation также выставляет Transform.rotation; LaserGrid после смены
/// порога молча синхронизируется с текущим питанием.
pub fn apply_persisted_data(
    mut commands: Commands,
    mut loaded: EventReader<LevelLoaded>,
    mut objects: Query<(
        Entity,
        &PersistedData,
        Option<&mut StartRotation>,
        Option<&mut LaserGrid>,
        Option<&mut LaserVisual>,
        Option<&mut Transform>,
    )>,
    power: Res<PowerGrid>,
) {
    if loaded.read().last().is_none() {
        return;
    }

    for (entity, data, rotation, laser, visual, transform) in objects.iter_mut() {
        if let Some(mut rotation) = rotation {
            rotation.deserialize(&data.0);
            if let Some(mut transform) = transform {
                transform.rotation = rotation.to_quat();
            }
        } else if let Some(mut laser) = laser {
            laser.deserialize(&data.0);
            laser.resync(power.level());
            if let Some(mut visual) = visual {
                visual.visible = laser.is_armed();
            }
        }

        commands.entity(entity).remove::<PersistedData>();
    }
}

/// Система: попарно отключаем коллизии внутри вида `S`
///
/// N(N−1)/2 уникальных пар, каждая ровно один раз (повторный LevelLoaded
/// не дублирует уже разведённые пары).
pub fn suppress_same_species_collisions<S: Component>(
    mut loaded: EventReader<LevelLoaded>,
    species: Query<Entity, With<S>>,
    mut filter: ResMut<CollisionFilter>,
    mut ignores: EventWriter<IgnoreCollision>,
) {
    if loaded.read().last().is_none() {
        return;
    }

    // O(n²), один раз на загрузку
    let mut members: Vec<Entity> = species.iter().collect();
    members.sort();

    let mut suppressed = 0usize;
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            if filter.ignore(a, b) {
                ignores.write(IgnoreCollision { a, b });
                suppressed += 1;
            }
        }
    }

    crate::log_info(&format!(
        "Post-load: {} same-species bodies ({}), {} collision pairs suppressed",
        members.len(),
        std::any::type_name::<S>().rsplit("::").next().unwrap_or("?"),
        suppressed
    ));
}
