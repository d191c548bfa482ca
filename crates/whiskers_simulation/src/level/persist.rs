//! Per-entity сериализация (строка на объект, формат у каждого свой)

use bevy::prelude::*;

/// Хук сериализации размещённого объекта
///
/// `deserialize` никогда не падает: битые данные → значение по умолчанию.
pub trait Persisted {
    fn serialize(&self) -> String;

    fn deserialize(&mut self, serialized: &str);
}

/// Сырые данные объекта из файла уровня (ставит внешний loader)
///
/// Потребляется post-load проходом и удаляется.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedData(pub String);

impl PersistedData {
    pub fn new(serialized: impl Into<String>) -> Self {
        Self(serialized.into())
    }
}

/// Начальный поворот (градусы вокруг Z), один int в файле уровня
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct StartRotation(pub i32);

impl StartRotation {
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_z((self.0 as f32).to_radians())
    }
}

impl Persisted for StartRotation {
    fn serialize(&self) -> String {
        self.0.to_string()
    }

    fn deserialize(&mut self, serialized: &str) {
        self.0 = parse_int_or(serialized, 0, "start rotation");
    }
}

/// Разбор целого с откатом на default (+ warning в лог)
pub fn parse_int_or(serialized: &str, default: i32, what: &str) -> i32 {
    match serialized.trim().parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            crate::log_warning(&format!(
                "Malformed {} {:?} in level data, falling back to {}",
                what, serialized, default
            ));
            default
        }
    }
}
