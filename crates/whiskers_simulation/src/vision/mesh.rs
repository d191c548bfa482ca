//! Генератор vision cone (2D triangle fan в локальных координатах наблюдателя)
//!
//! Вершины: [apex, top, mid, bottom], ось взгляда = +X.
//!
//! ```text
//!        top
//!       / |
//! apex ---mid
//!       \ |
//!        bottom
//! ```

use bevy::prelude::*;

/// Нижняя граница FOV (градусы) — 0 даёт треугольник нулевой площади
pub const MIN_FIELD_OF_VIEW: f32 = 0.01;
/// Верхняя граница FOV (градусы): больше 180 конус выворачивается назад.
/// Ровно 180 — полуплоскость, top/bottom на оси Y, площадь L²
pub const MAX_FIELD_OF_VIEW: f32 = 180.0;
pub const MIN_VIEW_DISTANCE: f32 = 1e-3;

const DEFAULT_FIELD_OF_VIEW: f32 = 90.0;

pub const CONE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionConeMesh {
    pub vertices: [Vec3; 4],
    pub indices: [u32; 6],
    pub uvs: [Vec2; 4],
}

/// FOV в допустимый диапазон; NaN/inf → 90°
pub fn clamp_field_of_view(field_of_view: f32) -> f32 {
    if field_of_view.is_finite() {
        field_of_view.clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW)
    } else {
        DEFAULT_FIELD_OF_VIEW
    }
}

pub fn clamp_view_distance(length_of_view: f32) -> f32 {
    if length_of_view.is_finite() {
        length_of_view.max(MIN_VIEW_DISTANCE)
    } else {
        MIN_VIEW_DISTANCE
    }
}

impl VisionConeMesh {
    /// Построить конус по FOV (градусы) и дальности
    ///
    /// Внешние вершины лежат на окружности радиуса `length_of_view`,
    /// top/bottom — под углом ±FOV/2 от оси взгляда.
    pub fn generate(field_of_view: f32, length_of_view: f32) -> Self {
        let field_of_view = clamp_field_of_view(field_of_view);
        let length = clamp_view_distance(length_of_view);

        let half = (field_of_view * 0.5).to_radians();
        let (sin, cos) = half.sin_cos();

        let height = length * sin;
        // Проекция top/bottom на ось взгляда (L·cos θ) — без tan, нет деления на 0
        let along = length * cos;

        Self {
            vertices: [
                Vec3::ZERO,
                Vec3::new(along, height, 0.0),
                Vec3::new(length, 0.0, 0.0),
                Vec3::new(along, -height, 0.0),
            ],
            indices: CONE_INDICES,
            uvs: [Vec2::ZERO, Vec2::ONE, Vec2::ONE, Vec2::ONE],
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].truncate(),
                self.vertices[tri[1] as usize].truncate(),
                self.vertices[tri[2] as usize].truncate(),
            ]
        })
    }

    /// Точка (локальные координаты) внутри конуса, граница включительно
    pub fn contains(&self, point: Vec2) -> bool {
        self.triangles().any(|[a, b, c]| triangle_contains(a, b, c, point))
    }

    /// Дальность: максимум расстояния вершин от apex
    pub fn reach(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }

    /// Половина угла между внешними рёбрами (градусы)
    pub fn half_angle_degrees(&self) -> f32 {
        let top = self.vertices[1];
        top.y.atan2(top.x).to_degrees()
    }

    pub fn area(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| ((b - a).perp_dot(c - a) * 0.5).abs())
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }
}

fn triangle_contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    const EPS: f32 = 1e-6;

    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);

    let has_neg = d1 < -EPS || d2 < -EPS || d3 < -EPS;
    let has_pos = d1 > EPS || d2 > EPS || d3 > EPS;

    !(has_neg && has_pos)
}
