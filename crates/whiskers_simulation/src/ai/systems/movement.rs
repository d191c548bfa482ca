//! Fixed-step движение котов

use bevy::prelude::*;

use crate::ai::{Cat, CatBrain, CatConfig, DesiredVelocity, MoveContext};
use crate::DeterministicRng;

/// Квадрат скорости, ниже которого движение не применяется (float шум)
pub const MIN_MOVE_SQ: f32 = 1e-3;

/// Система: fixed_update активного состояния → интеграция позиции
///
/// Порядок обхода — по Entity (RNG патруля детерминирован между запусками).
/// Кот разворачивается по направлению движения, конус смотрит туда же.
pub fn move_cats(
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut cats: Query<(Entity, &mut CatBrain, &CatConfig, &mut Transform, &mut DesiredVelocity), With<Cat>>,
) {
    let delta = time.delta_secs();

    let mut order: Vec<Entity> = cats.iter().map(|(entity, ..)| entity).collect();
    order.sort();

    for entity in order {
        let Ok((_, mut brain, config, mut transform, mut desired)) = cats.get_mut(entity) else {
            continue;
        };

        let mut ctx = MoveContext {
            delta,
            position: transform.translation.truncate(),
            config,
            rng: &mut rng.rng,
        };
        let velocity = brain.fixed_update(&mut ctx);
        desired.0 = velocity;

        if velocity.length_squared() < MIN_MOVE_SQ {
            continue;
        }

        transform.translation += (velocity * delta).extend(0.0);
        transform.rotation = Quat::from_rotation_z(velocity.to_angle());
    }
}
