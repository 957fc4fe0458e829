use crate::api::types::BallId;
use crate::components::ball::Ball;
use crate::core::math::Vector2;

/// The balls currently in play, stored in a flat Vec.
/// At most 16 balls, so linear lookups are fine. Order is kept stable
/// because pair resolution and pocket evaluation walk it front to back.
pub struct Scene {
    balls: Vec<Ball>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            balls: Vec::with_capacity(16),
        }
    }

    pub fn from_balls(balls: Vec<Ball>) -> Self {
        Self { balls }
    }

    /// Add a ball to the table.
    pub fn spawn(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Take a ball off the table for good. Returns it if it was present.
    pub fn despawn(&mut self, id: BallId) -> Option<Ball> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        Some(self.balls.remove(idx))
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn as_slice(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable slice for systems that need pairwise access.
    pub fn as_mut_slice(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn cue(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.is_cue())
    }

    pub fn cue_mut(&mut self) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.is_cue())
    }

    /// Put the cue ball back on `spot`, stopped. Returns false if there is no cue ball.
    pub fn reset_cue(&mut self, spot: Vector2) -> bool {
        match self.cue_mut() {
            Some(cue) => {
                cue.place(spot);
                true
            }
            None => false,
        }
    }

    pub fn any_moving(&self) -> bool {
        self.balls.iter().any(|b| b.moving)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
