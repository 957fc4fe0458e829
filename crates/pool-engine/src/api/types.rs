use std::fmt;

/// Unique identifier for a ball on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(pub u32);

/// One of the two players. Player one breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown on the scoreboard.
    pub fn number(self) -> u32 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot in per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Object ball group a player can be assigned. A = yellow, B = red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    A,
    B,
}

impl Group {
    pub fn other(self) -> Self {
        match self {
            Group::A => Group::B,
            Group::B => Group::A,
        }
    }
}

/// What a ball is for the purposes of the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallCategory {
    Cue,
    GroupA,
    GroupB,
    Eight,
}

impl BallCategory {
    /// The group an object ball belongs to (`None` for the cue and eight balls).
    pub fn group(self) -> Option<Group> {
        match self {
            BallCategory::GroupA => Some(Group::A),
            BallCategory::GroupB => Some(Group::B),
            BallCategory::Cue | BallCategory::Eight => None,
        }
    }
}

/// Why a shot was ruled a foul.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoulReason {
    CuePotted,
    PottedOpponentBall,
    NoBallHit,
}

impl FoulReason {
    /// Whether settling this foul puts the cue ball back on its break spot.
    pub fn resets_cue_ball(self) -> bool {
        matches!(self, FoulReason::CuePotted)
    }
}

impl fmt::Display for FoulReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FoulReason::CuePotted => "Cue ball potted",
            FoulReason::PottedOpponentBall => "Potted opponent's ball",
            FoulReason::NoBallHit => "No ball hit",
        };
        f.write_str(text)
    }
}

/// A discrete outcome reported to the presentation layer.
/// The UI reacts to this stream instead of diffing engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// A ball dropped into a pocket. Exactly one per capture.
    BallPotted {
        id: BallId,
        category: BallCategory,
        legal: bool,
    },
    Foul { reason: FoulReason },
    TurnSwitched { new_player: Player },
    GameWon { player: Player },
    /// The open table was decided: `player` shoots `group`, the opponent the other one.
    GroupAssigned { player: Player, group: Group },
    ScoreChanged { player1: u32, player2: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other().number(), 1);
    }

    #[test]
    fn only_object_balls_have_groups() {
        assert_eq!(BallCategory::GroupA.group(), Some(Group::A));
        assert_eq!(BallCategory::GroupB.group(), Some(Group::B));
        assert_eq!(BallCategory::Cue.group(), None);
        assert_eq!(BallCategory::Eight.group(), None);
    }

    #[test]
    fn foul_text_matches_banner() {
        assert_eq!(FoulReason::CuePotted.to_string(), "Cue ball potted");
        assert_eq!(FoulReason::PottedOpponentBall.to_string(), "Potted opponent's ball");
        assert_eq!(FoulReason::NoBallHit.to_string(), "No ball hit");
        assert!(FoulReason::CuePotted.resets_cue_ball());
        assert!(!FoulReason::NoBallHit.resets_cue_ball());
    }
}
