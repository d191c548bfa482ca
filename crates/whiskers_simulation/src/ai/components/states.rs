//! Состояния кота и их поведение
//!
//! Каждое состояние реализует `CatBehaviour`:
//! - on_enter / on_exit — побочные эффекты перехода (cue, видимость конуса)
//! - update — per-frame логика, возвращает запрошенный переход
//! - fixed_update — per-physics-step, возвращает желаемую скорость

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::cat::CatConfig;
use crate::audio::{CAT_GROWL, CAT_HISS};

/// Идентификатор состояния (ключ таблицы состояний в `CatBrain`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatStateId {
    #[default]
    Patrol,
    Chase,
    DisabledByRunner,
}

/// Контекст per-frame логики
pub struct ThinkContext<'a> {
    pub delta: f32,
    pub position: Vec2,
    pub sees_player: bool,
    pub last_seen: Option<Vec2>,
    pub config: &'a CatConfig,
    /// Выход: показать/скрыть vision cone
    pub vision_visible: Option<bool>,
    /// Выход: one-shot cue в позиции кота
    pub cues: Vec<&'static str>,
}

impl<'a> ThinkContext<'a> {
    pub fn new(config: &'a CatConfig, position: Vec2, delta: f32) -> Self {
        Self {
            delta,
            position,
            sees_player: false,
            last_seen: None,
            config,
            vision_visible: None,
            cues: Vec::new(),
        }
    }

    pub fn with_sight(mut self, sees_player: bool, last_seen: Option<Vec2>) -> Self {
        self.sees_player = sees_player;
        self.last_seen = last_seen;
        self
    }
}

/// Контекст fixed step (движение)
pub struct MoveContext<'a> {
    pub delta: f32,
    pub position: Vec2,
    pub config: &'a CatConfig,
    pub rng: &'a mut ChaCha8Rng,
}

pub trait CatBehaviour {
    fn on_enter(&mut self, _ctx: &mut ThinkContext) {}

    fn update(&mut self, ctx: &mut ThinkContext) -> Option<CatStateId>;

    fn fixed_update(&mut self, ctx: &mut MoveContext) -> Vec2;

    fn on_exit(&mut self, _ctx: &mut ThinkContext) {}
}

/// Скорость к точке, без перелёта за один шаг
fn steer_towards(position: Vec2, target: Vec2, speed: f32, delta: f32) -> Vec2 {
    let to_target = target - position;
    if delta <= 0.0 {
        return to_target.normalize_or_zero() * speed;
    }
    (to_target / delta).clamp_length_max(speed)
}

/// Patrol — обход маршрута (или случайные точки вокруг home)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patrol {
    pub route: Vec<Vec2>,
    next_waypoint: usize,
    home: Option<Vec2>,
    target: Option<Vec2>,
}

impl Patrol {
    pub fn with_route(route: Vec<Vec2>) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn home(&self) -> Option<Vec2> {
        self.home
    }

    fn pick_target(&mut self, home: Vec2, ctx: &mut MoveContext) -> Vec2 {
        if !self.route.is_empty() {
            return self.route[self.next_waypoint % self.route.len()];
        }

        let radius = ctx.config.wander_radius;
        if radius <= 0.0 {
            return home;
        }
        let angle = ctx.rng.gen::<f32>() * std::f32::consts::TAU;
        let distance = ctx.rng.gen_range(0.5..=1.0) * radius;
        home + Vec2::from_angle(angle) * distance
    }
}

impl CatBehaviour for Patrol {
    fn on_enter(&mut self, _ctx: &mut ThinkContext) {
        // Маршрут продолжаем с текущей точки, но цель выбираем заново
        self.target = None;
    }

    fn update(&mut self, ctx: &mut ThinkContext) -> Option<CatStateId> {
        ctx.sees_player.then_some(CatStateId::Chase)
    }

    fn fixed_update(&mut self, ctx: &mut MoveContext) -> Vec2 {
        let home = *self.home.get_or_insert(ctx.position);

        let target = match self.target {
            Some(target) => target,
            None => {
                let target = self.pick_target(home, ctx);
                self.target = Some(target);
                target
            }
        };

        if ctx.position.distance(target) <= ctx.config.arrive_distance {
            self.target = None;
            if !self.route.is_empty() {
                self.next_waypoint = (self.next_waypoint + 1) % self.route.len();
            }
            return Vec2::ZERO;
        }

        steer_towards(ctx.position, target, ctx.config.patrol_speed, ctx.delta)
    }
}

/// Chase — бежим к последней известной позиции игрока
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chase {
    target: Option<Vec2>,
    grace_left: f32,
}

impl Chase {
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn grace_left(&self) -> f32 {
        self.grace_left
    }
}

impl CatBehaviour for Chase {
    fn on_enter(&mut self, ctx: &mut ThinkContext) {
        self.grace_left = ctx.config.lose_sight_grace;
        self.target = ctx.last_seen;
        ctx.cues.push(CAT_GROWL);
    }

    fn update(&mut self, ctx: &mut ThinkContext) -> Option<CatStateId> {
        if ctx.sees_player {
            self.grace_left = ctx.config.lose_sight_grace;
            if ctx.last_seen.is_some() {
                self.target = ctx.last_seen;
            }
            return None;
        }

        self.grace_left -= ctx.delta;
        (self.grace_left <= 0.0).then_some(CatStateId::Patrol)
    }

    fn fixed_update(&mut self, ctx: &mut MoveContext) -> Vec2 {
        let Some(target) = self.target else {
            return Vec2::ZERO;
        };
        if ctx.position.distance(target) <= ctx.config.arrive_distance {
            return Vec2::ZERO;
        }
        steer_towards(ctx.position, target, ctx.config.chase_speed, ctx.delta)
    }
}

/// DisabledByRunner — кот взломан: стоит, конус скрыт, игрок безопасен
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisabledByRunner {
    remaining: f32,
    resume_to: CatStateId,
}

impl DisabledByRunner {
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn resume_to(&self) -> CatStateId {
        self.resume_to
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    pub(crate) fn set_resume_to(&mut self, state: CatStateId) {
        self.resume_to = state;
    }
}

impl CatBehaviour for DisabledByRunner {
    fn on_enter(&mut self, ctx: &mut ThinkContext) {
        ctx.vision_visible = Some(false);
        ctx.cues.push(CAT_HISS);
    }

    /// Детекция игнорируется — только таймер
    fn update(&mut self, ctx: &mut ThinkContext) -> Option<CatStateId> {
        self.remaining -= ctx.delta;
        (self.remaining <= 0.0).then_some(self.resume_to)
    }

    fn fixed_update(&mut self, _ctx: &mut MoveContext) -> Vec2 {
        Vec2::ZERO
    }

    fn on_exit(&mut self, ctx: &mut ThinkContext) {
        self.remaining = 0.0;
        ctx.vision_visible = Some(true);
    }
}
