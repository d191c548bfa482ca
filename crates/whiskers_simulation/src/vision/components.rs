//! Vision компоненты: параметры восприятия, сгенерированный mesh, sensor state

use bevy::prelude::*;

use super::mesh::VisionConeMesh;
use crate::components::SortingLayer;

/// Допуск dirty-проверки параметров (перегенерация только при реальном изменении)
pub const PARAM_EPSILON: f32 = 1e-3;

pub const VISION_SORTING_LAYER: &str = "RunnerOnTop";
pub const VISION_SORTING_ORDER: i32 = 50000;

/// Параметры восприятия (редактируются дизайнером / конфигом)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(VisionMesh, VisionSensor)]
pub struct VisionCone {
    /// Градусы, 0–360 (генератор клампит до рабочего диапазона)
    pub field_of_view: f32,
    /// Дальность взгляда (world units)
    pub length_of_view: f32,
}

impl Default for VisionCone {
    fn default() -> Self {
        Self {
            field_of_view: 90.0,
            length_of_view: 10.0,
        }
    }
}

impl VisionCone {
    pub fn new(field_of_view: f32, length_of_view: f32) -> Self {
        Self {
            field_of_view,
            length_of_view,
        }
    }
}

/// Сгенерированный конус — производный, одноразовый, не сериализуется
///
/// Render-only слой поверх сцены; на коллизии движка не влияет.
/// Для sensor'а используется тот же mesh.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct VisionMesh {
    mesh: Option<VisionConeMesh>,
    /// (fov, length) последней генерации
    applied: Option<(f32, f32)>,
    generation: u32,
    pub visible: bool,
    pub sorting: SortingLayer,
}

impl Default for VisionMesh {
    fn default() -> Self {
        Self {
            mesh: None,
            applied: None,
            generation: 0,
            visible: true,
            sorting: SortingLayer::new(VISION_SORTING_LAYER, VISION_SORTING_ORDER),
        }
    }
}

impl VisionMesh {
    pub fn mesh(&self) -> Option<&VisionConeMesh> {
        self.mesh.as_ref()
    }

    /// Сколько раз mesh перестраивался
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn needs_regeneration(&self, cone: &VisionCone) -> bool {
        match self.applied {
            None => true,
            Some((fov, length)) => {
                (fov - cone.field_of_view).abs() > PARAM_EPSILON
                    || (length - cone.length_of_view).abs() > PARAM_EPSILON
            }
        }
    }

    /// Перестроить mesh если параметры изменились; true если перестроен
    pub fn refresh(&mut self, cone: &VisionCone) -> bool {
        if !self.needs_regeneration(cone) {
            return false;
        }

        self.mesh = Some(VisionConeMesh::generate(cone.field_of_view, cone.length_of_view));
        self.applied = Some((cone.field_of_view, cone.length_of_view));
        self.generation += 1;
        true
    }
}

/// Состояние sensor'а (кого видит наблюдатель)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct VisionSensor {
    pub target: Option<Entity>,
    /// Последняя позиция цели, пока она была в конусе
    pub last_seen: Option<Vec2>,
}
