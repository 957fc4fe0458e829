//! Motion integration: one fixed logical step per call.
//!
//! Friction is a flat multiplier per invocation, so ball travel depends on how
//! often the caller ticks. Callers must tick at a stable cadence.

use crate::components::ball::Ball;
use crate::core::config::PhysicsConfig;
use crate::core::math::Vector2;

/// Advance every ball by one step.
pub fn integrate(balls: &mut [Ball], physics: &PhysicsConfig) {
    for ball in balls.iter_mut() {
        advance(ball, physics);
    }
}

/// Advance a single ball: move, apply friction, snap to rest below the stop threshold.
pub fn advance(ball: &mut Ball, physics: &PhysicsConfig) {
    if ball.is_at_rest() {
        return;
    }

    ball.position += ball.velocity * physics.step;
    ball.velocity *= physics.friction;

    if ball.velocity.length() < physics.stop_threshold {
        ball.velocity = Vector2::ZERO;
        ball.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BallCategory, BallId};
    use approx::assert_relative_eq;

    fn rolling(velocity: Vector2) -> Ball {
        Ball::new(BallId(1), BallCategory::GroupA, Vector2::new(500.0, 300.0)).with_velocity(velocity)
    }

    #[test]
    fn moves_by_velocity_times_step_then_decays() {
        let physics = PhysicsConfig::default();
        let mut ball = rolling(Vector2::new(1770.0, 0.0));
        advance(&mut ball, &physics);
        assert_relative_eq!(ball.position.x, 510.0, epsilon = 1e-9);
        assert_relative_eq!(ball.velocity.x, 1770.0 * 0.98, epsilon = 1e-9);
        assert!(ball.moving);
    }

    #[test]
    fn speed_never_increases_and_ends_at_exactly_zero() {
        let physics = PhysicsConfig::default();
        let mut ball = rolling(Vector2::new(300.0, -400.0));
        let mut last = ball.speed();
        let mut ticks = 0;
        while ball.moving {
            advance(&mut ball, &physics);
            assert!(ball.speed() <= last);
            last = ball.speed();
            ticks += 1;
            assert!(ticks < 10_000, "ball never stopped");
        }
        assert_eq!(ball.velocity, Vector2::ZERO);
    }

    #[test]
    fn slow_ball_stops_immediately() {
        let physics = PhysicsConfig::default();
        let mut ball = rolling(Vector2::new(5.0, 0.0));
        advance(&mut ball, &physics);
        assert!(!ball.moving);
        assert_eq!(ball.velocity, Vector2::ZERO);
    }

    #[test]
    fn resting_ball_is_untouched() {
        let physics = PhysicsConfig::default();
        let mut balls = vec![Ball::new(BallId(2), BallCategory::GroupB, Vector2::new(10.0, 20.0))];
        integrate(&mut balls, &physics);
        assert_eq!(balls[0].position, Vector2::new(10.0, 20.0));
    }
}
