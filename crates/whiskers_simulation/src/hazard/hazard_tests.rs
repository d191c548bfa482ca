//! Tests for laser grid power sync.

#[cfg(test)]
mod tests {
    use crate::hazard::{LaserGrid, LaserTransition};
    use crate::level::{GridPosition, InGameObject, Persisted};

    #[test]
    fn test_laser_default_armed_at_level_three() {
        let laser = LaserGrid::default();
        assert!(laser.is_armed());
        assert_eq!(laser.level(), 3);
        assert_eq!(laser.layer(), 1);
        assert!(laser.is_dynamic());
    }

    #[test]
    fn test_power_sequence_hysteresis() {
        // level > power → armed, level <= power → disarmed
        let mut laser = LaserGrid::new(3);
        let mut armed = Vec::new();
        let mut transitions = Vec::new();

        for power in [2, 3, 4, 2] {
            if let Some(t) = laser.apply_power(power) {
                transitions.push(t);
            }
            armed.push(laser.is_armed());
        }

        assert_eq!(armed, vec![true, false, false, true]);
        assert_eq!(transitions, vec![LaserTransition::Disarmed, LaserTransition::Armed]);
    }

    #[test]
    fn test_repeated_same_state_broadcast_is_noop() {
        let mut laser = LaserGrid::new(3);
        assert_eq!(laser.apply_power(0), None);
        assert_eq!(laser.apply_power(1), None);

        assert_eq!(laser.apply_power(5), Some(LaserTransition::Disarmed));
        assert_eq!(laser.apply_power(6), None);
        assert_eq!(laser.apply_power(3), None);
    }

    #[test]
    fn test_traversable_only_when_disarmed() {
        let mut laser = LaserGrid::new(2);
        let cell = GridPosition::new(0, 0);
        assert!(!laser.is_traversable_at(cell));

        laser.apply_power(2);
        assert!(laser.is_traversable_at(cell));
    }

    #[test]
    fn test_deserialize_level_with_default_fallback() {
        let mut laser = LaserGrid::new(1);
        laser.deserialize("5");
        assert_eq!(laser.level(), 5);
        assert_eq!(laser.serialize(), "5");

        laser.deserialize("high");
        assert_eq!(laser.level(), LaserGrid::DEFAULT_LEVEL);
    }

    #[test]
    fn test_resync_is_silent_and_consistent() {
        let mut laser = LaserGrid::new(3);
        laser.resync(4);
        assert!(!laser.is_armed());
        // Уже синхронизирована — broadcast того же уровня ничего не меняет
        assert_eq!(laser.apply_power(4), None);
    }
}
