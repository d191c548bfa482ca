//! CatBrain — конечный автомат кота
//!
//! Таблица состояний индексируется `CatStateId` (O(1), без reflection):
//! каждое состояние — отдельное поле со своими данными, `behaviour_mut`
//! отдаёт его как `&mut dyn CatBehaviour`.

use bevy::prelude::*;

use super::states::{CatBehaviour, CatStateId, Chase, DisabledByRunner, MoveContext, Patrol, ThinkContext};

#[derive(Component, Debug, Clone, Default)]
pub struct CatBrain {
    current: CatStateId,
    started: bool,
    patrol: Patrol,
    chase: Chase,
    disabled: DisabledByRunner,
}

/// Переход (from → to), для событий и логов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: CatStateId,
    pub to: CatStateId,
}

impl CatBrain {
    pub fn with_route(route: Vec<Vec2>) -> Self {
        Self {
            patrol: Patrol::with_route(route),
            ..Default::default()
        }
    }

    pub fn current(&self) -> CatStateId {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_disabled(&self) -> bool {
        self.current == CatStateId::DisabledByRunner
    }

    pub fn patrol(&self) -> &Patrol {
        &self.patrol
    }

    pub fn chase(&self) -> &Chase {
        &self.chase
    }

    pub fn disabled(&self) -> &DisabledByRunner {
        &self.disabled
    }

    fn behaviour_mut(&mut self, id: CatStateId) -> &mut dyn CatBehaviour {
        match id {
            CatStateId::Patrol => &mut self.patrol,
            CatStateId::Chase => &mut self.chase,
            CatStateId::DisabledByRunner => &mut self.disabled,
        }
    }

    /// Старт автомата (on_enter начального Patrol), идемпотентно
    pub fn start(&mut self, ctx: &mut ThinkContext) {
        if self.started {
            return;
        }
        self.started = true;
        self.current = CatStateId::Patrol;
        self.behaviour_mut(CatStateId::Patrol).on_enter(ctx);
    }

    /// on_exit старого → on_enter нового; переход в текущее состояние — no-op
    pub fn transition(&mut self, to: CatStateId, ctx: &mut ThinkContext) -> Option<StateTransition> {
        self.start(ctx);

        let from = self.current;
        if from == to {
            return None;
        }

        self.behaviour_mut(from).on_exit(ctx);
        self.current = to;
        self.behaviour_mut(to).on_enter(ctx);

        Some(StateTransition { from, to })
    }

    /// Per-frame тик активного состояния
    pub fn update(&mut self, ctx: &mut ThinkContext) -> Option<StateTransition> {
        self.start(ctx);

        let requested = self.behaviour_mut(self.current).update(ctx)?;
        self.transition(requested, ctx)
    }

    /// Fixed step: желаемая скорость активного состояния (до старта — ноль)
    pub fn fixed_update(&mut self, ctx: &mut MoveContext) -> Vec2 {
        if !self.started {
            return Vec2::ZERO;
        }
        self.behaviour_mut(self.current).fixed_update(ctx)
    }

    /// Взлом бегуном на `duration` секунд
    ///
    /// Повторный взлом во время DisabledByRunner только обновляет таймер —
    /// состояние для возврата остаётся исходным.
    pub fn disable(&mut self, duration: f32, ctx: &mut ThinkContext) -> Option<StateTransition> {
        self.start(ctx);

        self.disabled.set_time(duration);
        if self.is_disabled() {
            return None;
        }

        self.disabled.set_resume_to(self.current);
        self.transition(CatStateId::DisabledByRunner, ctx)
    }

    /// Досрочное включение — возврат в состояние до взлома
    pub fn enable(&mut self, ctx: &mut ThinkContext) -> Option<StateTransition> {
        if !self.is_disabled() {
            return None;
        }
        let resume_to = self.disabled.resume_to();
        self.transition(resume_to, ctx)
    }
}
