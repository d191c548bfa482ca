//! Perception: VisionEvent → Perception кота

use bevy::prelude::*;

use crate::ai::{Cat, Perception};
use crate::components::Player;
use crate::vision::VisionEvent;

/// Система: обновление Perception из VisionEvent
///
/// Интересны только цели с `Player`. Источник событий — vision sensor
/// или line-of-sight проверки хоста.
pub fn apply_vision_events(
    mut events: EventReader<VisionEvent>,
    mut cats: Query<&mut Perception, With<Cat>>,
    players: Query<(), With<Player>>,
) {
    for event in events.read() {
        let Ok(mut perception) = cats.get_mut(event.observer()) else {
            continue;
        };

        match *event {
            VisionEvent::TargetSpotted { observer, target } => {
                if !players.contains(target) {
                    continue;
                }
                perception.target = Some(target);
                crate::log(&format!("👁️ Cat {:?} spotted player {:?}", observer, target));
            }
            VisionEvent::TargetLost { observer, target } => {
                if perception.target != Some(target) {
                    continue;
                }
                perception.target = None;
                crate::log(&format!("👻 Cat {:?} lost sight of {:?}", observer, target));
            }
        }
    }
}
