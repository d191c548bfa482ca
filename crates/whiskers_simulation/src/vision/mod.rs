//! Vision domain — vision cone (mesh) как perception volume
//!
//! VisionCone (параметры) → VisionMesh (ленивый mesh) → VisionSensor (кого видим)
//! → VisionEvent для AI. Хост может слать те же события из своих
//! line-of-sight проверок.

use bevy::prelude::*;

pub mod components;
pub mod mesh;
pub mod systems;


pub use components::*;
pub use mesh::*;
pub use systems::*;

/// Perception события (аналог enter/exit trigger'а конуса)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionEvent {
    /// Цель вошла в конус
    TargetSpotted { observer: Entity, target: Entity },
    /// Цель вышла из конуса (или конус скрыт)
    TargetLost { observer: Entity, target: Entity },
}

impl VisionEvent {
    pub fn observer(&self) -> Entity {
        match self {
            VisionEvent::TargetSpotted { observer, .. } | VisionEvent::TargetLost { observer, .. } => *observer,
        }
    }
}

/// Порядок относительно AI задаётся в `CatAIPlugin`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisionSet;

pub struct VisionPlugin;

impl Plugin for VisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<VisionEvent>().add_systems(
            Update,
            (regenerate_vision_meshes, detect_targets_in_vision)
                .chain()
                .in_set(VisionSet),
        );
    }
}
