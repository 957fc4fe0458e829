//! Flat f32 records handed to the JS side.
//! Must stay in sync with the TypeScript reader.
//!
//! ```text
//! ball:  [x, y, id, category]
//! event: [kind, a, b, c]
//! cue:   [x, y, rotation, power]
//! ```

use bytemuck::{Pod, Zeroable};

use crate::api::types::{BallCategory, FoulReason, Group, MatchEvent};
use crate::components::ball::Ball;
use crate::components::cue::Cue;

/// Ball category codes.
pub mod category {
    pub const CUE: f32 = 0.0;
    pub const GROUP_A: f32 = 1.0;
    pub const GROUP_B: f32 = 2.0;
    pub const EIGHT: f32 = 3.0;
}

/// Event kind codes. Payload per kind:
/// - `BALL_POTTED`: a = ball id, b = category code, c = 1 if legal
/// - `FOUL`: a = foul code
/// - `TURN_SWITCHED`: a = new player (1 or 2)
/// - `GAME_WON`: a = winning player
/// - `GROUP_ASSIGNED`: a = player, b = 1 for group A, 2 for group B
/// - `SCORE_CHANGED`: a = player one score, b = player two score
pub mod event {
    pub const BALL_POTTED: f32 = 1.0;
    pub const FOUL: f32 = 2.0;
    pub const TURN_SWITCHED: f32 = 3.0;
    pub const GAME_WON: f32 = 4.0;
    pub const GROUP_ASSIGNED: f32 = 5.0;
    pub const SCORE_CHANGED: f32 = 6.0;
}

/// Foul codes carried in a `FOUL` event.
pub mod foul {
    pub const CUE_POTTED: f32 = 1.0;
    pub const POTTED_OPPONENT_BALL: f32 = 2.0;
    pub const NO_BALL_HIT: f32 = 3.0;
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireBall {
    pub x: f32,
    pub y: f32,
    pub id: f32,
    pub category: f32,
}

impl WireBall {
    pub const FLOATS: usize = 4;
}

impl From<&Ball> for WireBall {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.position.x as f32,
            y: ball.position.y as f32,
            id: ball.id.0 as f32,
            category: category_code(ball.category),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;
}

impl From<&MatchEvent> for WireEvent {
    fn from(e: &MatchEvent) -> Self {
        let (kind, a, b, c) = match *e {
            MatchEvent::BallPotted { id, category, legal } => (
                event::BALL_POTTED,
                id.0 as f32,
                category_code(category),
                if legal { 1.0 } else { 0.0 },
            ),
            MatchEvent::Foul { reason } => (event::FOUL, foul_code(reason), 0.0, 0.0),
            MatchEvent::TurnSwitched { new_player } => {
                (event::TURN_SWITCHED, new_player.number() as f32, 0.0, 0.0)
            }
            MatchEvent::GameWon { player } => (event::GAME_WON, player.number() as f32, 0.0, 0.0),
            MatchEvent::GroupAssigned { player, group } => (
                event::GROUP_ASSIGNED,
                player.number() as f32,
                group_code(group),
                0.0,
            ),
            MatchEvent::ScoreChanged { player1, player2 } => {
                (event::SCORE_CHANGED, player1 as f32, player2 as f32, 0.0)
            }
        };
        Self { kind, a, b, c }
    }
}

/// Cue stick pose for drawing the stick and the power meter.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireCue {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub power: f32,
}

impl WireCue {
    pub const FLOATS: usize = 4;
}

impl From<&Cue> for WireCue {
    fn from(cue: &Cue) -> Self {
        Self {
            x: cue.position.x as f32,
            y: cue.position.y as f32,
            rotation: cue.rotation as f32,
            power: cue.power as f32,
        }
    }
}

pub fn category_code(category: BallCategory) -> f32 {
    match category {
        BallCategory::Cue => category::CUE,
        BallCategory::GroupA => category::GROUP_A,
        BallCategory::GroupB => category::GROUP_B,
        BallCategory::Eight => category::EIGHT,
    }
}

pub fn foul_code(reason: FoulReason) -> f32 {
    match reason {
        FoulReason::CuePotted => foul::CUE_POTTED,
        FoulReason::PottedOpponentBall => foul::POTTED_OPPONENT_BALL,
        FoulReason::NoBallHit => foul::NO_BALL_HIT,
    }
}

fn group_code(group: Group) -> f32 {
    match group {
        Group::A => category::GROUP_A,
        Group::B => category::GROUP_B,
    }
}

/// Re-encode `balls` into `out`, reusing its allocation.
pub fn encode_balls<'a>(balls: impl IntoIterator<Item = &'a Ball>, out: &mut Vec<WireBall>) {
    out.clear();
    out.extend(balls.into_iter().map(WireBall::from));
}

/// Re-encode `events` into `out`, reusing its allocation.
pub fn encode_events(events: &[MatchEvent], out: &mut Vec<WireEvent>) {
    out.clear();
    out.extend(events.iter().map(WireEvent::from));
}

/// View any slice of wire records as the raw floats JS reads.
pub fn as_floats<T: Pod>(records: &[T]) -> &[f32] {
    bytemuck::cast_slice(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BallId, Player};
    use crate::core::math::Vector2;

    #[test]
    fn ball_record_layout() {
        let balls = [
            Ball::new(BallId(0), BallCategory::Cue, Vector2::new(300.0, 348.0)),
            Ball::new(BallId(8), BallCategory::Eight, Vector2::new(880.5, 348.0)),
        ];
        let mut wire = Vec::new();
        encode_balls(&balls, &mut wire);
        assert_eq!(
            as_floats(&wire),
            &[300.0, 348.0, 0.0, 0.0, 880.5, 348.0, 8.0, 3.0]
        );
        assert_eq!(as_floats(&wire).len(), wire.len() * WireBall::FLOATS);
    }

    #[test]
    fn event_payloads() {
        let events = [
            MatchEvent::BallPotted {
                id: BallId(5),
                category: BallCategory::GroupB,
                legal: true,
            },
            MatchEvent::Foul {
                reason: FoulReason::NoBallHit,
            },
            MatchEvent::GroupAssigned {
                player: Player::Two,
                group: Group::A,
            },
            MatchEvent::ScoreChanged {
                player1: 3,
                player2: 4,
            },
        ];
        let mut wire = Vec::new();
        encode_events(&events, &mut wire);
        assert_eq!(
            wire,
            vec![
                WireEvent { kind: 1.0, a: 5.0, b: 2.0, c: 1.0 },
                WireEvent { kind: 2.0, a: 3.0, b: 0.0, c: 0.0 },
                WireEvent { kind: 5.0, a: 2.0, b: 1.0, c: 0.0 },
                WireEvent { kind: 6.0, a: 3.0, b: 4.0, c: 0.0 },
            ]
        );
    }

    #[test]
    fn encoding_reuses_the_buffer() {
        let mut wire = vec![WireEvent::default(); 3];
        encode_events(
            &[MatchEvent::GameWon {
                player: Player::One,
            }],
            &mut wire,
        );
        assert_eq!(wire.len(), 1);
        assert_eq!(wire[0].kind, event::GAME_WON);
        assert_eq!(wire[0].a, 1.0);
    }

    #[test]
    fn cue_pose() {
        let mut cue = Cue::new(Vector2::new(300.0, 348.0));
        cue.power = 150.0;
        let wire = WireCue::from(&cue);
        assert_eq!(as_floats(std::slice::from_ref(&wire)), &[300.0, 348.0, 0.0, 150.0]);
    }
}
