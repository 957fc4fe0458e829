//! Standard triangle rack.

use crate::api::types::{BallCategory, BallId};
use crate::components::ball::Ball;
use crate::core::config::MatchConfig;
use crate::core::math::Vector2;

/// Id of the cue ball in a standard rack. Object balls are numbered 1-15.
pub const CUE_BALL_ID: BallId = BallId(0);

/// Space left between neighbouring balls in the triangle.
const RACK_GAP: f64 = 1.0;

/// Triangle layout: (category, row, vertical offset in ball spacings).
/// The apex points LEFT toward the cue ball; rows spread to the right.
///
/// ```text
///  A              <- apex, row 0
///  A  B
///  B  8  A
///  B  A  B  A
///  B  B  A  B  A
/// ```
const LAYOUT: [(BallCategory, usize, f64); 15] = [
    (BallCategory::GroupA, 0, 0.0),
    (BallCategory::GroupA, 1, -0.5),
    (BallCategory::GroupB, 1, 0.5),
    (BallCategory::GroupB, 2, -1.0),
    (BallCategory::Eight, 2, 0.0),
    (BallCategory::GroupA, 2, 1.0),
    (BallCategory::GroupB, 3, -1.5),
    (BallCategory::GroupA, 3, -0.5),
    (BallCategory::GroupB, 3, 0.5),
    (BallCategory::GroupA, 3, 1.5),
    (BallCategory::GroupB, 4, -2.0),
    (BallCategory::GroupB, 4, -1.0),
    (BallCategory::GroupA, 4, 0.0),
    (BallCategory::GroupB, 4, 1.0),
    (BallCategory::GroupA, 4, 2.0),
];

/// Positions of the 15 object balls, in `LAYOUT` order.
pub fn rack_positions(apex: Vector2, ball_diameter: f64) -> [Vector2; 15] {
    let spacing = ball_diameter + RACK_GAP;
    let row_offset = spacing * 0.866; // sqrt(3)/2 for an equilateral triangle

    LAYOUT.map(|(_, row, v_offset)| {
        Vector2::new(apex.x + row as f64 * row_offset, apex.y + v_offset * spacing)
    })
}

/// The 15 object balls (ids 1-15, apex first) followed by the cue ball on its break spot.
pub fn standard_rack(config: &MatchConfig) -> Vec<Ball> {
    let positions = rack_positions(config.rules.rack_apex, config.physics.ball_diameter);

    let mut balls: Vec<Ball> = LAYOUT
        .iter()
        .zip(positions)
        .zip(1u32..)
        .map(|(((category, _, _), pos), number)| Ball::new(BallId(number), *category, pos))
        .collect();
    balls.push(Ball::new(CUE_BALL_ID, BallCategory::Cue, config.rules.cue_start));
    balls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_per_group_and_one_eight() {
        let balls = standard_rack(&MatchConfig::default());
        let count = |c: BallCategory| balls.iter().filter(|b| b.category == c).count();
        assert_eq!(balls.len(), 16);
        assert_eq!(count(BallCategory::GroupA), 7);
        assert_eq!(count(BallCategory::GroupB), 7);
        assert_eq!(count(BallCategory::Eight), 1);
        assert_eq!(count(BallCategory::Cue), 1);
    }

    #[test]
    fn apex_and_cue_on_the_spots() {
        let config = MatchConfig::default();
        let balls = standard_rack(&config);
        assert_eq!(balls[0].id, BallId(1));
        assert_eq!(balls[0].position, Vector2::new(803.0, 348.0));
        let cue = balls.iter().find(|b| b.is_cue()).unwrap();
        assert_eq!(cue.id, CUE_BALL_ID);
        assert_eq!(cue.position, Vector2::new(300.0, 348.0));
    }

    #[test]
    fn eight_sits_in_the_middle_of_the_third_row() {
        let balls = standard_rack(&MatchConfig::default());
        let eight = balls.iter().find(|b| b.category == BallCategory::Eight).unwrap();
        assert_eq!(eight.position.y, 348.0);
        assert!(eight.position.x > 803.0);
    }

    #[test]
    fn no_two_racked_balls_touch() {
        let config = MatchConfig::default();
        let balls = standard_rack(&config);
        for (i, a) in balls.iter().enumerate() {
            for b in &balls[i + 1..] {
                let dist = a.position.distance(b.position);
                assert!(
                    dist > config.physics.ball_diameter,
                    "{:?} and {:?} overlap: {}",
                    a.id,
                    b.id,
                    dist
                );
            }
        }
    }
}
