//! Tests for level grid and persistence.

#[cfg(test)]
mod tests {
    use crate::ai::Cat;
    use crate::hazard::LaserGrid;
    use crate::level::{parse_int_or, GridPosition, InGameObject, LevelGrid, Persisted, StartRotation};
    use bevy::prelude::*;

    #[test]
    fn test_world_to_cell_floors_negative_coordinates() {
        let grid = LevelGrid::new(1.0);

        assert_eq!(grid.world_to_cell(Vec2::new(0.2, 0.9)), GridPosition::new(0, 0));
        assert_eq!(grid.world_to_cell(Vec2::new(-0.1, 2.5)), GridPosition::new(-1, 2));
    }

    #[test]
    fn test_snap_to_cell_center() {
        let grid = LevelGrid {
            cell_size: 2.0,
            origin: Vec2::new(1.0, 0.0),
        };

        let snapped = grid.snap(Vec2::new(3.9, 0.1));
        assert_eq!(snapped, Vec2::new(4.0, 1.0));
        assert_eq!(grid.world_to_cell(snapped), GridPosition::new(1, 0));
    }

    #[test]
    fn test_start_rotation_parses_integer() {
        let mut rotation = StartRotation::default();
        rotation.deserialize("270");
        assert_eq!(rotation.0, 270);
        assert_eq!(rotation.serialize(), "270");
    }

    #[test]
    fn test_start_rotation_malformed_defaults_to_zero() {
        let mut rotation = StartRotation(90);
        rotation.deserialize("ninety");
        assert_eq!(rotation.0, 0);

        rotation.deserialize("");
        assert_eq!(rotation.0, 0);
    }

    #[test]
    fn test_parse_int_trims_whitespace() {
        assert_eq!(parse_int_or(" 45\n", 0, "test"), 45);
        assert_eq!(parse_int_or("4.5", 7, "test"), 7);
    }

    #[test]
    fn test_start_rotation_quat() {
        let quat = StartRotation(90).to_quat();
        let forward = quat * Vec3::X;
        assert!((forward - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_occupant_traversability() {
        let cell = GridPosition::new(2, 3);
        let cat = Cat;
        let armed = LaserGrid::default();
        let mut disarmed = LaserGrid::default();
        disarmed.apply_power(10);

        assert!(cat.is_traversable_at(cell));
        assert!(!armed.is_traversable_at(cell));
        assert!(disarmed.is_traversable_at(cell));
    }
}
