//! Ball-cushion and ball-ball collision response.
//!
//! Balls are equal-mass, non-spinning discs. A ball-ball contact swaps the
//! normal velocity components and keeps the tangential ones.

use crate::api::types::BallId;
use crate::components::ball::Ball;
use crate::components::table::Table;
use crate::core::config::PhysicsConfig;
use crate::core::math::{compose, decompose, unit_normal, unit_tangent, Vector2};

/// Overlap at or below this is treated as touching by the relaxation sweeps.
const OVERLAP_SLOP: f64 = 1e-6;

/// Upper bound on relaxation sweeps per tick.
const MAX_RELAXATION_PASSES: usize = 64;

/// What a ball can run into. Resolved at a single dispatch point in `collide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collidable {
    /// Another ball, by index into the ball slice.
    Ball(usize),
    /// The table rails.
    Cushion,
}

/// Two balls that touched during the last resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub ball_a: BallId,
    pub ball_b: BallId,
}

impl CollisionPair {
    /// If `id` took part, the other ball.
    pub fn other(&self, id: BallId) -> Option<BallId> {
        if self.ball_a == id {
            Some(self.ball_b)
        } else if self.ball_b == id {
            Some(self.ball_a)
        } else {
            None
        }
    }
}

/// Resolve every cushion and ball-ball interaction for one tick.
/// Ball-ball contacts are appended to `contacts` in resolution order.
///
/// Each overlapping pair exchanges velocity at most once per tick. Pushing one
/// pair apart can drive a ball into a third, so positional relaxation sweeps
/// follow until no pair overlaps.
pub fn resolve(
    balls: &mut [Ball],
    table: &Table,
    physics: &PhysicsConfig,
    contacts: &mut Vec<CollisionPair>,
) {
    let count = balls.len();
    for i in 0..count {
        collide(balls, i, Collidable::Cushion, table, physics, contacts);
    }
    // n <= 16, every unordered pair once
    for i in 0..count {
        for j in (i + 1)..count {
            collide(balls, i, Collidable::Ball(j), table, physics, contacts);
        }
    }
    relax(balls, physics.ball_diameter);
}

/// Push apart every pair still overlapping by more than the slop, sweeping
/// until a pass moves nothing or the pass budget runs out. Positions only.
/// Returns the number of sweeps that moved something.
pub fn relax(balls: &mut [Ball], diameter: f64) -> usize {
    let count = balls.len();
    for pass in 0..MAX_RELAXATION_PASSES {
        let mut moved = false;
        for i in 0..count {
            for j in (i + 1)..count {
                if let Some((a, b)) = pair_mut(balls, i, j) {
                    moved |= separate(a, b, diameter, OVERLAP_SLOP).is_some();
                }
            }
        }
        if !moved {
            return pass;
        }
    }
    log::debug!("overlap relaxation stopped after {MAX_RELAXATION_PASSES} passes");
    MAX_RELAXATION_PASSES
}

/// Single dispatch point between the two kinds of contact.
fn collide(
    balls: &mut [Ball],
    index: usize,
    other: Collidable,
    table: &Table,
    physics: &PhysicsConfig,
    contacts: &mut Vec<CollisionPair>,
) {
    match other {
        Collidable::Cushion => {
            if let Some(ball) = balls.get_mut(index) {
                if collide_with_cushion(ball, table, physics.friction) {
                    log::trace!("ball {:?} hit a cushion", ball.id);
                }
            }
        }
        Collidable::Ball(j) => {
            let Some((a, b)) = pair_mut(balls, index, j) else {
                return;
            };
            if collide_balls(a, b, physics.ball_diameter) {
                log::trace!("ball {:?} hit ball {:?}", a.id, b.id);
                contacts.push(CollisionPair {
                    ball_a: a.id,
                    ball_b: b.id,
                });
            }
        }
    }
}

/// Two distinct mutable balls, `i < j`.
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> Option<(&mut Ball, &mut Ball)> {
    if i >= j || j >= balls.len() {
        return None;
    }
    let (head, tail) = balls.split_at_mut(j);
    Some((head.get_mut(i)?, tail.first_mut()?))
}

/// Reflect a moving ball off any rail its centre has crossed.
/// Each crossed rail flips its own axis; a corner flips both. Only velocity
/// heading out of the table is flipped, so a ball already on its way back in
/// is left alone. Any reflection costs one extra friction multiply.
pub fn collide_with_cushion(ball: &mut Ball, table: &Table, friction: f64) -> bool {
    if !ball.moving {
        return false;
    }

    let mut hit = false;
    let p = ball.position;
    let v = &mut ball.velocity;

    if (p.y <= table.top && v.y < 0.0) || (p.y >= table.bottom && v.y > 0.0) {
        v.y = -v.y;
        hit = true;
    }
    if (p.x <= table.left && v.x < 0.0) || (p.x >= table.right && v.x > 0.0) {
        v.x = -v.x;
        hit = true;
    }

    if hit {
        *v *= friction;
    }
    hit
}

/// Elastic equal-mass collision between two balls.
///
/// Returns false when they are not touching, or when their centres coincide and
/// the contact normal is undefined (the pair is skipped for this tick).
pub fn collide_balls(a: &mut Ball, b: &mut Ball, diameter: f64) -> bool {
    let Some(un) = separate(a, b, diameter, 0.0) else {
        return false;
    };

    let ut = unit_tangent(un);
    let (a_n, a_t) = decompose(a.velocity, un, ut);
    let (b_n, b_t) = decompose(b.velocity, un, ut);

    a.velocity = compose(b_n, a_t, un, ut);
    b.velocity = compose(a_n, b_t, un, ut);

    a.moving = true;
    b.moving = true;
    true
}

/// Move two balls overlapping by more than `slop` apart along their centre
/// line until exactly touching, half each. Returns the unit normal from `b`
/// to `a`, or `None` if nothing moved (no overlap, or coincident centres).
fn separate(a: &mut Ball, b: &mut Ball, diameter: f64, slop: f64) -> Option<Vector2> {
    let n = a.position - b.position;
    let dist = n.length();
    if dist >= diameter - slop {
        return None;
    }
    let un = unit_normal(n)?;
    let mtd = un * (diameter - dist);
    a.position += mtd * 0.5;
    b.position -= mtd * 0.5;
    Some(un)
}
