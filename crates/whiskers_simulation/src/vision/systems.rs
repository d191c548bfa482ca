//! Vision systems (Update lane)
//!
//! 1. regenerate_vision_meshes — dirty-check параметров, ленивая перегенерация
//! 2. detect_targets_in_vision — point-in-cone для Player → VisionEvent

use bevy::prelude::*;

use super::components::{VisionCone, VisionMesh, VisionSensor};
use super::VisionEvent;
use crate::components::Player;

/// Система: перегенерация конусов с изменёнными параметрами
///
/// Каждый кадр; при неизменных параметрах — no-op (change detection не трогаем).
pub fn regenerate_vision_meshes(mut observers: Query<(Entity, &VisionCone, &mut VisionMesh)>) {
    for (entity, cone, mut mesh) in observers.iter_mut() {
        if !mesh.needs_regeneration(cone) {
            continue;
        }

        mesh.refresh(cone);
        crate::log(&format!(
            "👁️ {:?} vision cone regenerated (fov {:.1}°, length {:.2})",
            entity, cone.field_of_view, cone.length_of_view
        ));
    }
}

/// Перевод точки мира в локальные координаты наблюдателя
pub fn to_local(observer: &Transform, world_point: Vec2) -> Vec2 {
    let offset = world_point.extend(0.0) - observer.translation;
    (observer.rotation.inverse() * offset).truncate()
}

/// Система: sensor — игрок внутри конуса?
///
/// Скрытый конус ничего не видит. Сравниваем с прошлым кадром →
/// TargetSpotted / TargetLost (как poll overlap'ов у Area в движке).
pub fn detect_targets_in_vision(
    mut observers: Query<(Entity, &Transform, &VisionMesh, &mut VisionSensor)>,
    players: Query<(Entity, &Transform), With<Player>>,
    mut events: EventWriter<VisionEvent>,
) {
    for (observer, transform, mesh, mut sensor) in observers.iter_mut() {
        let observer_pos = transform.translation.truncate();

        let seen = match mesh.mesh() {
            Some(cone) if mesh.visible => players
                .iter()
                .filter(|(_, player)| cone.contains(to_local(transform, player.translation.truncate())))
                .min_by(|(_, a), (_, b)| {
                    let da = a.translation.truncate().distance_squared(observer_pos);
                    let db = b.translation.truncate().distance_squared(observer_pos);
                    da.total_cmp(&db)
                })
                .map(|(entity, player)| (entity, player.translation.truncate())),
            _ => None,
        };

        let previous = sensor.target;
        let current = seen.map(|(entity, _)| entity);

        if let Some((_, position)) = seen {
            sensor.last_seen = Some(position);
        }

        if previous == current {
            continue;
        }

        if let Some(target) = previous {
            events.write(VisionEvent::TargetLost { observer, target });
        }
        if let Some(target) = current {
            events.write(VisionEvent::TargetSpotted { observer, target });
        }
        sensor.target = current;
    }
}
