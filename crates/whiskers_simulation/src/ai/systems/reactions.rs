//! Cat reactions: контакт с игроком, звук шагов

use bevy::prelude::*;

use crate::ai::{Cat, CatBrain, CatConfig, DesiredVelocity, WalkSound, MIN_MOVE_SQ};
use crate::audio::{AudioCue, CAT_MOVEMENT, MOUSE_DEATH};
use crate::game_state::{DeathCause, PlayerDied};
use crate::physics::{ContactEvent, ContactKind};

/// Система: кот поймал игрока
///
/// Только Enter (Stay не повторяет сигнал). Взломанный кот безопасен.
pub fn handle_cat_contacts(
    mut contacts: EventReader<ContactEvent>,
    cats: Query<(&CatBrain, &Transform), With<Cat>>,
    mut deaths: EventWriter<PlayerDied>,
    mut audio: EventWriter<AudioCue>,
) {
    for contact in contacts.read() {
        if contact.kind != ContactKind::Enter || !contact.is_player() {
            continue;
        }
        let Ok((brain, transform)) = cats.get(contact.receiver) else {
            continue;
        };
        if brain.is_disabled() {
            crate::log(&format!("🐈 Cat {:?} touched player while disabled, ignored", contact.receiver));
            continue;
        }

        audio.write(AudioCue::one_shot(MOUSE_DEATH, transform.translation.truncate()));
        deaths.write(PlayerDied {
            killer: contact.receiver,
            cause: DeathCause::Cat,
        });
    }
}

/// Система: looping звук шагов (start/stop без дублей)
///
/// При выключенном `walk_sound` играющий loop останавливается.
pub fn update_walk_sounds(
    mut cats: Query<(Entity, &CatConfig, &DesiredVelocity, &mut WalkSound), With<Cat>>,
    mut audio: EventWriter<AudioCue>,
) {
    for (cat, config, desired, mut sound) in cats.iter_mut() {
        let moving = config.walk_sound && desired.0.length_squared() >= MIN_MOVE_SQ;

        if moving && !sound.playing {
            sound.playing = true;
            audio.write(AudioCue::StartLoop { emitter: cat, event: CAT_MOVEMENT });
        } else if !moving && sound.playing {
            sound.playing = false;
            audio.write(AudioCue::StopLoop { emitter: cat, event: CAT_MOVEMENT });
        }
    }
}
