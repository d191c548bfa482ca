//! AI Events — команды коту и уведомления о переходах
//!
//! DisableCat/EnableCat шлёт "hacker interface" бегуна (хост или тесты),
//! CatStateChanged — для HUD/отладки.

use bevy::prelude::*;

use super::components::CatStateId;

/// Взлом кота на `duration` секунд
///
/// Повторная команда во время DisabledByRunner только обновляет таймер.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DisableCat {
    pub cat: Entity,
    pub duration: f32,
}

/// Досрочное включение взломанного кота
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnableCat {
    pub cat: Entity,
}

/// Кот сменил состояние
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatStateChanged {
    pub cat: Entity,
    pub from: CatStateId,
    pub to: CatStateId,
}
