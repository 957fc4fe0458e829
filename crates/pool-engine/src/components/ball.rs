use crate::api::types::{BallCategory, BallId};
use crate::core::math::Vector2;

/// A ball on the table, modelled as a non-spinning disc.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub category: BallCategory,
    /// Centre position in table units.
    pub position: Vector2,
    /// Velocity in table units per logical step.
    pub velocity: Vector2,
    /// Cleared by the integrator once the ball comes to rest.
    pub moving: bool,
}

impl Ball {
    /// A ball at rest.
    pub fn new(id: BallId, category: BallCategory, position: Vector2) -> Self {
        Self {
            id,
            category,
            position,
            velocity: Vector2::ZERO,
            moving: false,
        }
    }

    // -- Builder pattern --

    /// Set an initial velocity. A non-zero velocity marks the ball as moving.
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self.moving = velocity != Vector2::ZERO;
        self
    }

    pub fn is_cue(&self) -> bool {
        self.category == BallCategory::Cue
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Not moving and no residual velocity; the integrator skips these.
    pub fn is_at_rest(&self) -> bool {
        !self.moving && self.velocity == Vector2::ZERO
    }

    /// Put the ball down at `position` with no velocity.
    pub fn place(&mut self, position: Vector2) {
        self.position = position;
        self.velocity = Vector2::ZERO;
        self.moving = false;
    }
}
