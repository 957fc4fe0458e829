//! Aim preview: where a shot along a given angle first runs into something.

use crate::components::ball::Ball;
use crate::components::table::{Pocket, Table};
use crate::core::config::AimConfig;
use crate::core::math::{direction, Vector2};

/// March from `start` along `angle` in `aim.step` increments and return where
/// the guide line should end.
///
/// At each sample point, in order:
/// - inside a non-cue ball (radius + margin): two steps back
/// - outside the ball-centre bounds: one step back
/// - inside a pocket: the sample point itself
///
/// With nothing hit the line runs the full `aim.max_distance`. A non-finite
/// start or angle yields `start` unchanged.
pub fn trajectory_endpoint(
    start: Vector2,
    angle: f64,
    balls: &[Ball],
    table: &Table,
    pockets: &[Pocket],
    aim: &AimConfig,
    ball_radius: f64,
) -> Vector2 {
    if !angle.is_finite() || !start.is_finite() {
        return start;
    }

    let step = direction(angle) * aim.step;
    let reach = ball_radius + aim.ball_margin;
    let steps = (aim.max_distance / aim.step).floor() as u32;

    for k in 1..=steps {
        let p = start + step * k as f64;

        let hits_ball = balls
            .iter()
            .filter(|b| !b.is_cue())
            .any(|b| p.distance(b.position) <= reach);
        if hits_ball {
            return start + step * k.saturating_sub(2) as f64;
        }

        if !table.contains(p) {
            return p - step;
        }

        if pockets.iter().any(|pocket| p.distance(pocket.position) <= pocket.capture_radius) {
            return p;
        }
    }

    start + direction(angle) * aim.max_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BallCategory, BallId};
    use crate::components::table::pockets;
    use crate::core::config::TableConfig;
    use approx::assert_abs_diff_eq;

    const R: f64 = 19.0;

    fn setup() -> (Table, [Pocket; 6], AimConfig) {
        let config = TableConfig::default();
        (Table::from_config(&config, R), pockets(&config), AimConfig::default())
    }

    #[test]
    fn stops_two_steps_short_of_a_ball() {
        let (table, pockets, aim) = setup();
        let balls = vec![
            Ball::new(BallId(0), BallCategory::Cue, Vector2::new(300.0, 348.0)),
            Ball::new(BallId(1), BallCategory::GroupA, Vector2::new(500.0, 348.0)),
        ];
        let end = trajectory_endpoint(Vector2::new(319.0, 348.0), 0.0, &balls, &table, &pockets, &aim, R);
        // first sample inside 21 of x=500 is x=479; two steps back
        assert_abs_diff_eq!(end.x, 477.0, epsilon = 1e-6);
        assert_abs_diff_eq!(end.y, 348.0, epsilon = 1e-6);
    }

    #[test]
    fn cue_ball_is_not_an_obstacle() {
        let (table, pockets, aim) = setup();
        let balls = vec![Ball::new(BallId(0), BallCategory::Cue, Vector2::new(300.0, 348.0))];
        let end = trajectory_endpoint(Vector2::new(300.0, 348.0), 0.0, &balls, &table, &pockets, &aim, R);
        // runs to the right rail: 1143 is outside, so one step back
        assert_abs_diff_eq!(end.x, 1142.0, epsilon = 1e-6);
    }

    #[test]
    fn stops_inside_a_pocket() {
        let (_, pockets, aim) = setup();
        // a table whose bounds never trigger, so only the pocket can stop the line
        let open = Table {
            top: -1.0e6,
            bottom: 1.0e6,
            left: -1.0e6,
            right: 1.0e6,
        };
        let start = Vector2::new(600.0, 300.0);
        let end = trajectory_endpoint(start, -std::f64::consts::FRAC_PI_2, &[], &open, &pockets, &aim, R);
        // mid-top pocket at (600, 38), radius 39: first sample at y <= 77
        assert_abs_diff_eq!(end.x, 600.0, epsilon = 1e-6);
        assert_abs_diff_eq!(end.y, 77.0, epsilon = 1e-6);
    }

    #[test]
    fn unobstructed_line_runs_full_length() {
        let (_, _, aim) = setup();
        let open = Table {
            top: -1.0e6,
            bottom: 1.0e6,
            left: -1.0e6,
            right: 1.0e6,
        };
        let start = Vector2::new(10.0, 20.0);
        let end = trajectory_endpoint(start, 0.0, &[], &open, &[], &aim, R);
        assert_abs_diff_eq!(end.x, 1810.0, epsilon = 1e-6);
        assert_abs_diff_eq!(end.y, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn non_finite_angle_returns_start() {
        let (table, pockets, aim) = setup();
        let start = Vector2::new(300.0, 348.0);
        assert_eq!(
            trajectory_endpoint(start, f64::NAN, &[], &table, &pockets, &aim, R),
            start
        );
    }
}
