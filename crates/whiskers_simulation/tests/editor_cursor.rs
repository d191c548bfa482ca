//! Editor cursor integration test
//!
//! PointerInput → палитра/мир → ToolAction → PlacedObject.
//!
//! Камера: центр экрана (100, 50) = world (0, 0), 10 px на unit.
//! Палитра x ∈ [0, 20], мир x ∈ [20, 200].

mod common;

use bevy::prelude::*;
use common::*;
use whiskers_simulation::editor::*;
use whiskers_simulation::hazard::LaserGrid;
use whiskers_simulation::level::{GridPosition, StartRotation};
use whiskers_simulation::SimulationConfig;

const WALL_BUTTON: Vec2 = Vec2::new(10.0, 10.0);
const ERASER_BUTTON: Vec2 = Vec2::new(10.0, 30.0);

fn create_editor_app() -> App {
    let mut app = create_game_app(1, SimulationConfig::default());
    app.add_plugins(EditorPlugin)
        .insert_resource(EditorCamera {
            position: Vec2::ZERO,
            pixels_per_unit: 10.0,
            viewport_size: Vec2::new(200.0, 100.0),
        })
        .insert_resource(EditorRegions {
            palette: Rect::new(0.0, 0.0, 20.0, 100.0),
            world: Rect::new(20.0, 0.0, 200.0, 100.0),
        });
    record::<ToolAction>(&mut app);
    record::<ToolPicked>(&mut app);

    app.world_mut().spawn(PaletteItem::new(
        Rect::new(0.0, 0.0, 20.0, 20.0),
        ToolKind::Place(PlacedObjectKind::Wall),
    ));
    app.world_mut()
        .spawn(PaletteItem::new(Rect::new(0.0, 20.0, 20.0, 40.0), ToolKind::Erase));
    app
}

/// Один кадр: pointer в `screen`, кнопки `down`
fn frame(app: &mut App, screen: Vec2, down: [bool; 2]) {
    app.world_mut().resource_mut::<PointerInput>().update(screen, down);
    app.update();
}

fn click(app: &mut App, screen: Vec2, down: [bool; 2]) {
    frame(app, screen, down);
    frame(app, screen, [false, false]);
}

fn held_tool(app: &App) -> Option<Entity> {
    app.world().resource::<EditorCursor>().held_tool
}

#[test]
fn test_cursor_mirrors_pointer() {
    let mut app = create_editor_app();
    frame(&mut app, Vec2::new(123.0, 45.0), [false, false]);

    let cursor = app.world().resource::<EditorCursor>();
    assert_eq!(cursor.screen_position, Vec2::new(123.0, 45.0));
    assert!(!cursor.os_cursor_visible);
}

#[test]
fn test_palette_click_picks_tool_and_replaces_previous() {
    let mut app = create_editor_app();

    click(&mut app, WALL_BUTTON, [true, false]);
    let first = held_tool(&app).expect("wall tool held");
    assert_eq!(
        app.world().get::<Tool>(first).unwrap().kind,
        ToolKind::Place(PlacedObjectKind::Wall)
    );

    click(&mut app, ERASER_BUTTON, [false, true]);
    let second = held_tool(&app).expect("eraser held");
    assert_ne!(first, second);
    assert!(app.world().get_entity(first).is_err(), "old tool must be destroyed");
    assert_eq!(app.world().get::<Tool>(second).unwrap().kind, ToolKind::Erase);

    assert_eq!(recorded::<ToolPicked>(&app).len(), 2);
    assert!(recorded::<ToolAction>(&app).is_empty());
}

#[test]
fn test_palette_click_outside_items_keeps_tool() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);
    let tool = held_tool(&app);

    // Палитра, но мимо кнопок
    click(&mut app, Vec2::new(10.0, 90.0), [true, false]);
    assert_eq!(held_tool(&app), tool);
}

#[test]
fn test_both_buttons_is_not_a_click() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    let world_point = Vec2::new(155.0, 55.0);
    frame(&mut app, world_point, [false, false]);

    frame(&mut app, world_point, [true, true]);
    assert!(recorded::<ToolAction>(&app).is_empty());
    frame(&mut app, world_point, [false, false]);

    frame(&mut app, world_point, [true, false]);
    let actions = recorded::<ToolAction>(&app);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].activation, Activation::Primary);
    // Snap к центру клетки (5, 0)
    assert_eq!(actions[0].position, Vec2::new(5.5, 0.5));
}

#[test]
fn test_world_click_without_tool_is_noop() {
    let mut app = create_editor_app();
    click(&mut app, Vec2::new(155.0, 55.0), [true, false]);

    assert!(recorded::<ToolAction>(&app).is_empty());
    assert!(app.world().resource::<PlacedObjects>().is_empty());
}

#[test]
fn test_drag_across_three_cells_places_three_objects() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    frame(&mut app, Vec2::new(155.0, 55.0), [false, false]);

    // Нажали в клетке 5, тянем через 6 и 7 (несколько кадров в каждой)
    frame(&mut app, Vec2::new(155.0, 55.0), [true, false]);
    for x in [157.0, 159.0, 162.0, 165.0, 168.0, 172.0, 175.0, 178.0] {
        frame(&mut app, Vec2::new(x, 55.0), [true, false]);
    }
    frame(&mut app, Vec2::new(178.0, 55.0), [false, false]);

    let actions = recorded::<ToolAction>(&app);
    assert_eq!(actions.len(), 3);
    assert!(actions.iter().all(|action| action.activation == Activation::Primary));

    let placed = app.world().resource::<PlacedObjects>();
    assert_eq!(
        placed.cells().collect::<Vec<_>>(),
        vec![GridPosition::new(5, 0), GridPosition::new(6, 0), GridPosition::new(7, 0)]
    );
}

#[test]
fn test_drag_into_palette_stops_painting() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    frame(&mut app, Vec2::new(35.0, 55.0), [false, false]);
    frame(&mut app, Vec2::new(35.0, 55.0), [true, false]);
    // x = 15 — палитра, клетка другая, но вне мира
    frame(&mut app, Vec2::new(15.0, 55.0), [true, false]);
    frame(&mut app, Vec2::new(5.0, 55.0), [true, false]);

    assert_eq!(recorded::<ToolAction>(&app).len(), 1);
}

#[test]
fn test_secondary_click_removes_and_eraser_erases() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    let a = Vec2::new(155.0, 55.0);
    let b = Vec2::new(165.0, 55.0);
    frame(&mut app, a, [false, false]);
    click(&mut app, a, [true, false]);
    frame(&mut app, b, [false, false]);
    click(&mut app, b, [true, false]);
    assert_eq!(app.world().resource::<PlacedObjects>().len(), 2);

    // Повторный primary в занятой клетке — без дубликата
    click(&mut app, b, [true, false]);
    assert_eq!(app.world().resource::<PlacedObjects>().len(), 2);

    // Secondary той же place-тулзой убирает
    click(&mut app, b, [false, true]);
    assert_eq!(app.world().resource::<PlacedObjects>().len(), 1);

    click(&mut app, ERASER_BUTTON, [true, false]);
    frame(&mut app, a, [false, false]);
    click(&mut app, a, [true, false]);
    assert!(app.world().resource::<PlacedObjects>().is_empty());

    let mut query = app.world_mut().query::<&PlacedObject>();
    assert_eq!(query.iter(app.world()).count(), 0);
}

#[test]
fn test_export_level_lists_placed_objects_by_cell() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    for x in [175.0, 155.0] {
        frame(&mut app, Vec2::new(x, 55.0), [false, false]);
        click(&mut app, Vec2::new(x, 55.0), [true, false]);
    }

    let records = export_level(app.world_mut());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].cell, GridPosition::new(5, 0));
    assert_eq!(records[1].cell, GridPosition::new(7, 0));
    assert!(records.iter().all(|record| record.kind == PlacedObjectKind::Wall));
}

#[test]
fn test_despawned_object_frees_its_cell() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);

    let cell = Vec2::new(155.0, 55.0);
    frame(&mut app, cell, [false, false]);
    click(&mut app, cell, [true, false]);
    let wall = app
        .world()
        .resource::<PlacedObjects>()
        .get(GridPosition::new(5, 0))
        .expect("wall placed");

    // Despawn мимо инструмента (undo, загрузка, внешний скрипт)
    app.world_mut().despawn(wall);
    frame(&mut app, cell, [false, false]);
    assert!(app.world().resource::<PlacedObjects>().is_empty());

    click(&mut app, cell, [true, false]);
    let placed = app.world().resource::<PlacedObjects>();
    assert_eq!(placed.len(), 1);
    assert_ne!(placed.get(GridPosition::new(5, 0)), Some(wall));
}

#[test]
fn test_export_level_serializes_object_data() {
    let mut app = create_editor_app();
    click(&mut app, WALL_BUTTON, [true, false]);
    frame(&mut app, Vec2::new(155.0, 55.0), [false, false]);
    click(&mut app, Vec2::new(155.0, 55.0), [true, false]);

    for (kind, x) in [(PlacedObjectKind::Cat, 6.5), (PlacedObjectKind::LaserGrid, 7.5)] {
        app.world_mut().send_event(ToolAction {
            tool: Entity::PLACEHOLDER,
            kind: ToolKind::Place(kind),
            activation: Activation::Primary,
            position: Vec2::new(x, 0.5),
        });
    }
    app.update();

    let placed = app.world().resource::<PlacedObjects>();
    let cat = placed.get(GridPosition::new(6, 0)).expect("cat placed");
    let laser = placed.get(GridPosition::new(7, 0)).expect("laser placed");

    // Ещё не отредактированы — данные по умолчанию
    let records = export_level(app.world_mut());
    assert_eq!(records[1].data, "0");
    assert_eq!(records[2].data, LaserGrid::DEFAULT_LEVEL.to_string());

    app.world_mut().get_mut::<StartRotation>(cat).unwrap().0 = 90;
    app.world_mut().entity_mut(laser).insert(LaserGrid::new(5));

    let records = export_level(app.world_mut());
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, PlacedObjectKind::Wall);
    assert_eq!(records[0].data, "");
    assert_eq!(records[1].kind, PlacedObjectKind::Cat);
    assert_eq!(records[1].data, "90");
    assert_eq!(records[2].kind, PlacedObjectKind::LaserGrid);
    assert_eq!(records[2].data, "5");
}
