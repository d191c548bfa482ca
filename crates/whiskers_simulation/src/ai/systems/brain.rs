//! Per-frame логика кота: команды взлома и тик CatBrain

use bevy::prelude::*;

use crate::ai::{Cat, CatBrain, CatConfig, CatStateChanged, DisableCat, EnableCat, Perception, StateTransition, ThinkContext};
use crate::audio::AudioCue;
use crate::components::Player;
use crate::vision::VisionMesh;

/// Применяет выходы ThinkContext: видимость конуса, cue, событие перехода
fn apply_think_outputs(
    cat: Entity,
    ctx: ThinkContext,
    transition: Option<StateTransition>,
    vision: &mut VisionMesh,
    audio: &mut EventWriter<AudioCue>,
    changes: &mut EventWriter<CatStateChanged>,
) {
    if let Some(visible) = ctx.vision_visible {
        vision.visible = visible;
    }

    for cue in ctx.cues {
        audio.write(AudioCue::one_shot(cue, ctx.position));
    }

    if let Some(StateTransition { from, to }) = transition {
        changes.write(CatStateChanged { cat, from, to });
        crate::log(&format!("🐈 Cat {:?}: {:?} → {:?}", cat, from, to));
    }
}

/// Система: DisableCat / EnableCat
///
/// Команды для entity без `Cat` молча игнорируются.
pub fn handle_cat_commands(
    mut disables: EventReader<DisableCat>,
    mut enables: EventReader<EnableCat>,
    mut cats: Query<(&mut CatBrain, &CatConfig, &Transform, &mut VisionMesh), With<Cat>>,
    mut audio: EventWriter<AudioCue>,
    mut changes: EventWriter<CatStateChanged>,
) {
    for command in disables.read() {
        let Ok((mut brain, config, transform, mut vision)) = cats.get_mut(command.cat) else {
            continue;
        };

        let mut ctx = ThinkContext::new(config, transform.translation.truncate(), 0.0);
        let transition = brain.disable(command.duration, &mut ctx);
        if transition.is_none() {
            crate::log(&format!(
                "🐈 Cat {:?} already disabled, timer refreshed to {:.2}s",
                command.cat, command.duration
            ));
        }
        apply_think_outputs(command.cat, ctx, transition, &mut vision, &mut audio, &mut changes);
    }

    for command in enables.read() {
        let Ok((mut brain, config, transform, mut vision)) = cats.get_mut(command.cat) else {
            continue;
        };

        let mut ctx = ThinkContext::new(config, transform.translation.truncate(), 0.0);
        let transition = brain.enable(&mut ctx);
        apply_think_outputs(command.cat, ctx, transition, &mut vision, &mut audio, &mut changes);
    }
}

/// Система: per-frame тик автомата
///
/// Позиция цели берётся из Transform игрока на этом кадре; despawned цель
/// считается потерянной.
pub fn update_cat_brains(
    time: Res<Time>,
    mut cats: Query<(Entity, &mut CatBrain, &CatConfig, &Perception, &Transform, &mut VisionMesh), With<Cat>>,
    players: Query<&Transform, (With<Player>, Without<Cat>)>,
    mut audio: EventWriter<AudioCue>,
    mut changes: EventWriter<CatStateChanged>,
) {
    let delta = time.delta_secs();

    for (cat, mut brain, config, perception, transform, mut vision) in cats.iter_mut() {
        let last_seen = perception
            .target
            .and_then(|target| players.get(target).ok())
            .map(|player| player.translation.truncate());

        let mut ctx = ThinkContext::new(config, transform.translation.truncate(), delta)
            .with_sight(last_seen.is_some(), last_seen);
        let transition = brain.update(&mut ctx);
        apply_think_outputs(cat, ctx, transition, &mut vision, &mut audio, &mut changes);
    }
}
