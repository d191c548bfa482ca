//! Physics seam — контакты и фильтрация коллизий
//!
//! Физику считает движок-хост. ECS только:
//! - читает `ContactEvent` (enter/stay callbacks от хоста)
//! - пишет `IgnoreCollision` (пары тел, которые хост должен развести)

use bevy::prelude::*;
use std::collections::BTreeSet;

/// Категория тела (аналог tag в движке)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum BodyTag {
    Player,
    Cat,
    Laser,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Первый кадр пересечения
    Enter,
    /// Каждый следующий кадр пересечения
    Stay,
}

/// Контакт от физического коллаборатора
///
/// `receiver` — чей callback сработал, `other_tag` — категория второго тела.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub kind: ContactKind,
    pub receiver: Entity,
    pub other: Entity,
    pub other_tag: BodyTag,
}

impl ContactEvent {
    pub fn enter(receiver: Entity, other: Entity, other_tag: BodyTag) -> Self {
        Self { kind: ContactKind::Enter, receiver, other, other_tag }
    }

    pub fn stay(receiver: Entity, other: Entity, other_tag: BodyTag) -> Self {
        Self { kind: ContactKind::Stay, receiver, other, other_tag }
    }

    pub fn is_player(&self) -> bool {
        self.other_tag == BodyTag::Player
    }
}

/// Команда хосту: тела `a` и `b` больше не сталкиваются
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreCollision {
    pub a: Entity,
    pub b: Entity,
}

/// Уже разведённые пары (неупорядоченные, хранятся как (min, max))
#[derive(Resource, Debug, Default)]
pub struct CollisionFilter {
    ignored: BTreeSet<(Entity, Entity)>,
}

impl CollisionFilter {
    fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b { (a, b) } else { (b, a) }
    }

    /// true если пара новая
    pub fn ignore(&mut self, a: Entity, b: Entity) -> bool {
        if a == b {
            return false;
        }
        self.ignored.insert(Self::key(a, b))
    }

    pub fn is_ignored(&self, a: Entity, b: Entity) -> bool {
        self.ignored.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    /// Забыть пары с участием despawned entity
    pub fn forget(&mut self, entity: Entity) {
        self.ignored.retain(|&(a, b)| a != entity && b != entity);
    }
}

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionFilter>()
            .add_event::<ContactEvent>()
            .add_event::<IgnoreCollision>()
            .add_systems(Update, forget_despawned_bodies);
    }
}

/// Система: чистим CollisionFilter от despawned тел
pub fn forget_despawned_bodies(
    mut removed: RemovedComponents<BodyTag>,
    mut filter: ResMut<CollisionFilter>,
) {
    for entity in removed.read() {
        filter.forget(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs_are_unordered() {
        let mut filter = CollisionFilter::default();
        let a = Entity::from_raw(3);
        let b = Entity::from_raw(9);

        assert!(filter.ignore(b, a));
        assert!(!filter.ignore(a, b));
        assert!(filter.is_ignored(a, b));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_filter_rejects_self_pair() {
        let mut filter = CollisionFilter::default();
        let a = Entity::from_raw(1);
        assert!(!filter.ignore(a, a));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_forget_drops_pairs_of_entity() {
        let mut filter = CollisionFilter::default();
        let (a, b, c) = (Entity::from_raw(1), Entity::from_raw(2), Entity::from_raw(3));
        filter.ignore(a, b);
        filter.ignore(a, c);
        filter.ignore(b, c);

        filter.forget(a);
        assert_eq!(filter.len(), 1);
        assert!(filter.is_ignored(b, c));
    }
}
