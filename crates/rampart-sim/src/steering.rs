//! Homing steering for the seeking effect family.
//!
//! A homing effect never snaps onto its target: each tick its heading
//! rotates toward the line-of-sight bearing by at most `turn_rate * dt`
//! radians, then the effect advances along the heading at constant speed.

use glam::DVec2;

use rampart_core::types::{turn_toward, wrap_angle, Position};

/// Rotate `heading` toward the bearing from `pos` to `target`, limited to
/// `turn_rate * dt` radians of turn this tick.
pub fn steer_heading(heading: f64, pos: &Position, target: &Position, turn_rate: f64, dt: f64) -> f64 {
    let desired = pos.bearing_to(target);
    turn_toward(heading, desired, turn_rate * dt)
}

/// Signed heading error relative to the straight-line bearing to `target`.
pub fn heading_error(heading: f64, pos: &Position, target: &Position) -> f64 {
    wrap_angle(pos.bearing_to(target) - heading)
}

/// Advance `pos` along `heading` at `speed` for `dt` seconds.
pub fn advance(pos: &Position, heading: f64, speed: f64, dt: f64) -> Position {
    Position::from_vec2(pos.to_vec2() + DVec2::from_angle(heading) * speed * dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::constants::DT;

    #[test]
    fn test_steering_converges_on_stationary_target() {
        // Effect starts heading due east; target sits to the north-west.
        let target = Position::new(-120.0, -80.0);
        let mut pos = Position::new(100.0, 100.0);
        let mut heading = 0.0;
        let speed = 260.0;
        let turn_rate = 6.0;

        let mut min_range = f64::MAX;
        for _ in 0..300 {
            let range = pos.distance_to(&target);
            if range < min_range {
                min_range = range;
            }
            if range < 5.0 {
                break;
            }
            heading = steer_heading(heading, &pos, &target, turn_rate, DT);
            pos = advance(&pos, heading, speed, DT);
        }

        assert!(
            min_range < 5.0,
            "homing should converge on a stationary target, min range: {min_range:.1}"
        );
    }

    #[test]
    fn test_heading_error_approaches_zero() {
        let target = Position::new(0.0, -300.0);
        let mut pos = Position::new(200.0, 200.0);
        // Start pointed the wrong way entirely.
        let mut heading = std::f64::consts::FRAC_PI_2;
        let turn_rate = 6.0;

        for _ in 0..60 {
            heading = steer_heading(heading, &pos, &target, turn_rate, DT);
            pos = advance(&pos, heading, 120.0, DT);
        }

        let error = heading_error(heading, &pos, &target).abs();
        assert!(
            error < 1e-6,
            "heading error should settle to zero well before contact, got {error}"
        );
    }

    #[test]
    fn test_turn_rate_is_respected_each_tick() {
        let target = Position::new(0.0, 100.0);
        let pos = Position::new(0.0, -100.0);
        // Desired bearing is +PI/2; starting heading is -PI/2.
        let before = -std::f64::consts::FRAC_PI_2;
        let after = steer_heading(before, &pos, &target, 2.0, DT);
        let turned = wrap_angle(after - before).abs();
        assert!(
            turned <= 2.0 * DT + 1e-12,
            "a single tick must not turn more than turn_rate * dt, turned {turned}"
        );
    }

    #[test]
    fn test_steering_tracks_moving_target() {
        let mut target = Position::new(0.0, 150.0);
        let mut pos = Position::new(-200.0, 0.0);
        let mut heading = 0.0;
        let speed = 260.0;

        let mut min_range = f64::MAX;
        for _ in 0..400 {
            // Target marches steadily east, slower than the effect.
            target = Position::new(target.x + 50.0 * DT, target.y);
            heading = steer_heading(heading, &pos, &target, 6.0, DT);
            pos = advance(&pos, heading, speed, DT);
            min_range = min_range.min(pos.distance_to(&target));
            if min_range < 5.0 {
                break;
            }
        }

        assert!(
            min_range < 5.0,
            "homing should catch a slower moving target, min range: {min_range:.1}"
        );
    }
}
