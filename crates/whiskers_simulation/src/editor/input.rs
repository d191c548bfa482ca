//! Editor input: сырой pointer, камера (screen → world), регионы экрана

use bevy::prelude::*;

/// Кнопка указателя (индекс в массивах `PointerInput`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
}

/// Сырой ввод указателя за кадр
///
/// Хост вызывает `update` ровно один раз за кадр до `EditorPlugin` систем;
/// `just_pressed` считается относительно прошлого вызова.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PointerInput {
    /// Screen координаты (px, начало в левом нижнем углу)
    pub position: Vec2,
    pressed: [bool; 2],
    just_pressed: [bool; 2],
}

impl PointerInput {
    pub fn update(&mut self, position: Vec2, down: [bool; 2]) {
        self.position = position;
        for button in 0..2 {
            self.just_pressed[button] = down[button] && !self.pressed[button];
        }
        self.pressed = down;
    }

    pub fn is_pressed(&self, button: PointerButton) -> bool {
        self.pressed[button as usize]
    }

    pub fn just_pressed(&self, button: PointerButton) -> bool {
        self.just_pressed[button as usize]
    }

    /// Клик — ровно одна кнопка нажата на этом кадре (обе или ни одной — не клик)
    pub fn one_button_just_pressed(&self) -> bool {
        self.just_pressed[0] ^ self.just_pressed[1]
    }

    /// Ровно одна кнопка удерживается
    pub fn one_button_down(&self) -> bool {
        self.pressed[0] ^ self.pressed[1]
    }
}

/// Ортографическая камера редактора
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EditorCamera {
    /// World позиция центра экрана
    pub position: Vec2,
    pub pixels_per_unit: f32,
    pub viewport_size: Vec2,
}

impl Default for EditorCamera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            pixels_per_unit: 32.0,
            viewport_size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl EditorCamera {
    /// Unprojection screen px → world
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.position + (screen - self.viewport_size * 0.5) / self.pixels_per_unit
    }
}

/// Где оказался указатель
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    Palette,
    World,
    Outside,
}

/// Экранные прямоугольники палитры и мира (могут пересекаться)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EditorRegions {
    pub palette: Rect,
    pub world: Rect,
}

impl Default for EditorRegions {
    fn default() -> Self {
        Self {
            palette: Rect::new(0.0, 0.0, 200.0, 720.0),
            world: Rect::new(0.0, 0.0, 1280.0, 720.0),
        }
    }
}

impl EditorRegions {
    /// Палитра приоритетнее мира
    pub fn classify(&self, screen: Vec2) -> ClickRegion {
        if self.palette.contains(screen) {
            ClickRegion::Palette
        } else if self.world.contains(screen) {
            ClickRegion::World
        } else {
            ClickRegion::Outside
        }
    }
}
