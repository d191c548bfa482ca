//! Laser grid systems (Update lane)

use bevy::prelude::*;

use crate::audio::{AudioCue, LASER_CUT, LASER_OFF, LASER_ON};
use crate::game_state::{DeathCause, PlayerDied, PowerChanged, PowerGrid};
use crate::hazard::{LaserGrid, LaserTransition, LaserVisual};
use crate::physics::ContactEvent;

/// Система: рассылка `PowerChanged` подписчикам `PowerGrid`
///
/// События обрабатываются по порядку — каждая решётка видит всю
/// последовательность уровней, а не только последний.
pub fn broadcast_power_changes(
    mut power_events: EventReader<PowerChanged>,
    mut grid: ResMut<PowerGrid>,
    mut lasers: Query<(&mut LaserGrid, &mut LaserVisual, &Transform)>,
    mut audio: EventWriter<AudioCue>,
) {
    for event in power_events.read() {
        grid.set_level(event.level);
        let subscribers: Vec<Entity> = grid.subscribers().collect();

        for entity in subscribers {
            let Ok((mut laser, mut visual, transform)) = lasers.get_mut(entity) else {
                continue;
            };

            let Some(transition) = laser.apply_power(event.level) else {
                continue;
            };

            let position = transform.translation.truncate();
            match transition {
                LaserTransition::Armed => {
                    visual.visible = true;
                    audio.write(AudioCue::one_shot(LASER_ON, position));
                }
                LaserTransition::Disarmed => {
                    visual.visible = false;
                    audio.write(AudioCue::one_shot(LASER_OFF, position));
                }
            }

            crate::log(&format!(
                "⚡ Laser {:?} (level {}) → {:?} at power {}",
                entity,
                laser.level(),
                transition,
                event.level
            ));
        }
    }
}

/// Система: контакт игрока с решёткой
///
/// Enter и Stay одинаково смертельны, пока решётка armed. Stay срабатывает
/// каждый кадр пересечения — сигнал не дедуплицируется.
pub fn handle_laser_contacts(
    mut contacts: EventReader<ContactEvent>,
    lasers: Query<(&LaserGrid, &Transform)>,
    mut deaths: EventWriter<PlayerDied>,
    mut audio: EventWriter<AudioCue>,
) {
    for contact in contacts.read() {
        if !contact.is_player() {
            continue;
        }
        let Ok((laser, transform)) = lasers.get(contact.receiver) else {
            continue;
        };
        if !laser.is_armed() {
            continue;
        }

        audio.write(AudioCue::one_shot(LASER_CUT, transform.translation.truncate()));
        deaths.write(PlayerDied {
            killer: contact.receiver,
            cause: DeathCause::Laser,
        });
    }
}
