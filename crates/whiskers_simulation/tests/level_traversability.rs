//! Traversability integration test
//!
//! Коты и лазеры — клетка из Transform; объекты редактора — GridOccupant.
//!
//! Раскладка (cell_size = 1):
//! (0,0) armed laser, (1,0) disarmed laser, (2,0) cat,
//! (3,0) floor, (4,0) wall, (5,0) пусто.

mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use common::*;
use whiskers_simulation::ai::{spawn_cat, CatConfig};
use whiskers_simulation::editor::{Activation, EditorPlugin, PlacedObjectKind, ToolAction, ToolKind};
use whiskers_simulation::hazard::{spawn_laser_grid, LaserGrid};
use whiskers_simulation::level::{GridPosition, Traversability};
use whiskers_simulation::SimulationConfig;

const ROW: [GridPosition; 7] = [
    GridPosition::new(0, 0),
    GridPosition::new(1, 0),
    GridPosition::new(2, 0),
    GridPosition::new(3, 0),
    GridPosition::new(4, 0),
    GridPosition::new(5, 0),
    GridPosition::new(6, 0),
];

fn traversable_row(traversability: Traversability) -> [bool; 7] {
    ROW.map(|cell| traversability.is_traversable_at(cell))
}

fn query_row(app: &mut App) -> [bool; 7] {
    app.world_mut()
        .run_system_once(traversable_row)
        .expect("traversability query runs")
}

fn place(app: &mut App, kind: PlacedObjectKind, position: Vec2) {
    app.world_mut().send_event(ToolAction {
        tool: Entity::PLACEHOLDER,
        kind: ToolKind::Place(kind),
        activation: Activation::Primary,
        position,
    });
}

fn create_level_app() -> (App, Entity) {
    let mut app = create_game_app(3, SimulationConfig::default());
    app.add_plugins(EditorPlugin);

    let config = CatConfig {
        wander_radius: 0.0,
        ..Default::default()
    };

    // PowerGrid = 0: порог 3 → armed, порог 0 → disarmed
    let armed = spawn_with(&mut app, |commands| spawn_laser_grid(commands, Vec2::new(0.5, 0.5), 3));
    spawn_with(&mut app, |commands| spawn_laser_grid(commands, Vec2::new(1.5, 0.5), 0));
    spawn_with(&mut app, |commands| spawn_cat(commands, Vec2::new(2.5, 0.5), &config, 0));

    place(&mut app, PlacedObjectKind::Floor, Vec2::new(3.5, 0.5));
    place(&mut app, PlacedObjectKind::Wall, Vec2::new(4.5, 0.5));
    app.update();

    (app, armed)
}

#[test]
fn test_traversability_per_occupant_kind() {
    let (mut app, armed) = create_level_app();
    assert!(app.world().get::<LaserGrid>(armed).unwrap().is_armed());

    assert_eq!(
        query_row(&mut app),
        [false, true, true, true, false, true, true],
        "armed laser, disarmed laser, cat, floor, wall, empty, empty"
    );
}

#[test]
fn test_laser_cell_follows_transform() {
    let (mut app, armed) = create_level_app();

    app.world_mut().get_mut::<Transform>(armed).unwrap().translation = Vec3::new(6.5, 0.5, 0.0);

    let row = query_row(&mut app);
    assert!(row[0], "старая клетка лазера освободилась");
    assert!(!row[6], "новая клетка лазера заблокирована");
}
