//! Audio cues — запросы к внешнему audio middleware
//!
//! ECS не проигрывает звук сам: системы пишут `AudioCue`, хост читает и
//! дёргает middleware по символьному имени события.

use bevy::prelude::*;

pub const CAT_GROWL: &str = "event:/Cat_Growl";
pub const CAT_HISS: &str = "event:/Cat_Hiss";
pub const CAT_MOVEMENT: &str = "event:/Cat_movement";
pub const MOUSE_DEATH: &str = "event:/Mouse_death";
pub const LASER_ON: &str = "event:/laser_on";
pub const LASER_OFF: &str = "event:/laser_off";
pub const LASER_CUT: &str = "event:/laser_cut";

#[derive(Event, Debug, Clone, PartialEq)]
pub enum AudioCue {
    /// One-shot в точке мира
    OneShot {
        event: &'static str,
        position: Vec2,
    },

    /// Старт looping инстанса, привязанного к emitter entity
    StartLoop {
        emitter: Entity,
        event: &'static str,
    },

    /// Остановка looping инстанса (с fade-out)
    StopLoop {
        emitter: Entity,
        event: &'static str,
    },
}

impl AudioCue {
    pub fn one_shot(event: &'static str, position: Vec2) -> Self {
        Self::OneShot { event, position }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            AudioCue::OneShot { event, .. }
            | AudioCue::StartLoop { event, .. }
            | AudioCue::StopLoop { event, .. } => event,
        }
    }
}

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AudioCue>();
    }
}
