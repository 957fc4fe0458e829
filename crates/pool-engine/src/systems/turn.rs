//! Turn and shot lifecycle: whose shot it is, the groups, the scores,
//! and the fouls and pots tracked while a shot is in flight.

use crate::api::types::{BallId, FoulReason, Group, MatchEvent, Player};
use crate::systems::collision::CollisionPair;

/// Group assignment state of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    /// Nobody owns a group yet.
    Open,
    Assigned,
    GameOver,
}

/// Where the current shot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotPhase {
    /// Waiting for the current player to shoot.
    Aiming,
    /// Balls are rolling.
    InFlight,
    /// Everything stopped; the turn rules are being applied.
    Settling,
    GameOver,
}

/// What settling a shot decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The foul the shot was charged with, if any.
    pub foul: Option<FoulReason>,
    /// Whether the turn passed to the other player.
    pub switched: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnState {
    pub current_player: Player,
    pub table: TablePhase,
    pub shot: ShotPhase,
    /// Indexed by `Player::index`.
    pub groups: [Option<Group>; 2],
    pub scores: [u32; 2],
    /// First ball the cue ball touched this shot.
    pub first_contact: Option<BallId>,
    pub potted_legal_this_turn: bool,
    /// First foul of the shot. Later fouls are reported but not stored.
    pub foul_pending: Option<FoulReason>,
    pub winner: Option<Player>,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            current_player: Player::One,
            table: TablePhase::Open,
            shot: ShotPhase::Aiming,
            groups: [None; 2],
            scores: [0; 2],
            first_contact: None,
            potted_legal_this_turn: false,
            foul_pending: None,
            winner: None,
        }
    }

    pub fn group_of(&self, player: Player) -> Option<Group> {
        self.groups[player.index()]
    }

    /// Who shoots `group`, once the table is decided.
    pub fn owner_of(&self, group: Group) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|p| self.group_of(*p) == Some(group))
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn is_over(&self) -> bool {
        self.shot == ShotPhase::GameOver
    }

    /// The cue ball has been struck.
    pub fn begin_shot(&mut self) {
        self.shot = ShotPhase::InFlight;
        self.first_contact = None;
    }

    /// Record the first ball the cue ball touched, from this tick's contacts.
    /// Only counts while the shot is in flight, and only the first time.
    pub fn record_contacts(&mut self, cue: BallId, contacts: &[CollisionPair]) {
        if self.shot != ShotPhase::InFlight || self.first_contact.is_some() {
            return;
        }
        self.first_contact = contacts.iter().find_map(|pair| pair.other(cue));
        if let Some(id) = self.first_contact {
            log::debug!("first contact: ball {}", id.0);
        }
    }

    /// Decide the open table: `player` takes `group`, the opponent the other one.
    pub fn assign_groups(&mut self, player: Player, group: Group, events: &mut Vec<MatchEvent>) {
        self.groups[player.index()] = Some(group);
        self.groups[player.other().index()] = Some(group.other());
        self.table = TablePhase::Assigned;
        log::info!("player {} takes group {:?}", player.number(), group);
        events.push(MatchEvent::GroupAssigned { player, group });
    }

    /// One point to `player`.
    pub fn credit(&mut self, player: Player, events: &mut Vec<MatchEvent>) {
        self.scores[player.index()] += 1;
        events.push(MatchEvent::ScoreChanged {
            player1: self.scores[0],
            player2: self.scores[1],
        });
    }

    pub fn flag_foul(&mut self, reason: FoulReason, events: &mut Vec<MatchEvent>) {
        log::info!("foul by player {}: {}", self.current_player.number(), reason);
        if self.foul_pending.is_none() {
            self.foul_pending = Some(reason);
        }
        events.push(MatchEvent::Foul { reason });
    }

    /// End the game. Terminal: nothing moves the state out of `GameOver`.
    pub fn declare_winner(&mut self, player: Player, events: &mut Vec<MatchEvent>) {
        log::info!("player {} wins", player.number());
        self.winner = Some(player);
        self.table = TablePhase::GameOver;
        self.shot = ShotPhase::GameOver;
        events.push(MatchEvent::GameWon { player });
    }

    pub fn switch_player(&mut self, events: &mut Vec<MatchEvent>) {
        self.current_player = self.current_player.other();
        log::info!("player {} to shoot", self.current_player.number());
        events.push(MatchEvent::TurnSwitched {
            new_player: self.current_player,
        });
    }

    /// Apply the end-of-shot rules once every ball has stopped and go back to aiming.
    ///
    /// A pending foul passes the turn. A shot that touched nothing is a
    /// `NoBallHit` foul. A legal pot keeps the turn; anything else passes it.
    pub fn settle(&mut self, events: &mut Vec<MatchEvent>) -> Settlement {
        if self.is_over() {
            return Settlement {
                foul: None,
                switched: false,
            };
        }
        self.shot = ShotPhase::Settling;

        let foul = match self.foul_pending {
            Some(reason) => Some(reason),
            None if self.first_contact.is_none() => {
                self.flag_foul(FoulReason::NoBallHit, events);
                Some(FoulReason::NoBallHit)
            }
            None => None,
        };

        let switched = foul.is_some() || !self.potted_legal_this_turn;
        if switched {
            self.switch_player(events);
        }

        self.clear_shot();
        self.shot = ShotPhase::Aiming;
        Settlement { foul, switched }
    }

    fn clear_shot(&mut self) {
        self.first_contact = None;
        self.potted_legal_this_turn = false;
        self.foul_pending = None;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u32, b: u32) -> CollisionPair {
        CollisionPair {
            ball_a: BallId(a),
            ball_b: BallId(b),
        }
    }

    fn in_flight() -> TurnState {
        let mut turn = TurnState::new();
        turn.begin_shot();
        turn
    }

    #[test]
    fn first_contact_sticks() {
        let mut turn = in_flight();
        turn.record_contacts(BallId(0), &[pair(3, 4)]);
        assert_eq!(turn.first_contact, None, "contact without the cue ball");
        turn.record_contacts(BallId(0), &[pair(7, 0), pair(0, 2)]);
        assert_eq!(turn.first_contact, Some(BallId(7)));
        turn.record_contacts(BallId(0), &[pair(0, 9)]);
        assert_eq!(turn.first_contact, Some(BallId(7)));
    }

    #[test]
    fn contacts_ignored_while_aiming() {
        let mut turn = TurnState::new();
        turn.record_contacts(BallId(0), &[pair(0, 1)]);
        assert_eq!(turn.first_contact, None);
    }

    #[test]
    fn shot_without_contact_is_a_foul() {
        let mut turn = in_flight();
        let mut events = Vec::new();
        let outcome = turn.settle(&mut events);
        assert_eq!(outcome.foul, Some(FoulReason::NoBallHit));
        assert!(outcome.switched);
        assert_eq!(turn.current_player, Player::Two);
        assert_eq!(turn.shot, ShotPhase::Aiming);
        assert_eq!(
            events,
            vec![
                MatchEvent::Foul {
                    reason: FoulReason::NoBallHit
                },
                MatchEvent::TurnSwitched {
                    new_player: Player::Two
                },
            ]
        );
    }

    #[test]
    fn legal_pot_keeps_the_turn() {
        let mut turn = in_flight();
        turn.record_contacts(BallId(0), &[pair(0, 1)]);
        turn.potted_legal_this_turn = true;
        let mut events = Vec::new();
        let outcome = turn.settle(&mut events);
        assert_eq!(
            outcome,
            Settlement {
                foul: None,
                switched: false
            }
        );
        assert_eq!(turn.current_player, Player::One);
        assert!(events.is_empty());
        assert!(!turn.potted_legal_this_turn);
    }

    #[test]
    fn contact_without_pot_passes_the_turn() {
        let mut turn = in_flight();
        turn.record_contacts(BallId(0), &[pair(0, 1)]);
        let mut events = Vec::new();
        let outcome = turn.settle(&mut events);
        assert_eq!(outcome.foul, None);
        assert!(outcome.switched);
        assert_eq!(turn.first_contact, None);
    }

    #[test]
    fn foul_beats_legal_pot_and_only_first_is_kept() {
        let mut turn = in_flight();
        let mut events = Vec::new();
        turn.record_contacts(BallId(0), &[pair(0, 1)]);
        turn.potted_legal_this_turn = true;
        turn.flag_foul(FoulReason::PottedOpponentBall, &mut events);
        turn.flag_foul(FoulReason::CuePotted, &mut events);
        assert_eq!(turn.foul_pending, Some(FoulReason::PottedOpponentBall));

        let outcome = turn.settle(&mut events);
        assert_eq!(outcome.foul, Some(FoulReason::PottedOpponentBall));
        assert!(outcome.switched);
        assert_eq!(turn.foul_pending, None);
    }

    #[test]
    fn assigning_groups_fills_both_players() {
        let mut turn = TurnState::new();
        turn.current_player = Player::Two;
        let mut events = Vec::new();
        turn.assign_groups(Player::Two, Group::A, &mut events);
        assert_eq!(turn.group_of(Player::Two), Some(Group::A));
        assert_eq!(turn.group_of(Player::One), Some(Group::B));
        assert_eq!(turn.owner_of(Group::B), Some(Player::One));
        assert_eq!(turn.table, TablePhase::Assigned);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut turn = in_flight();
        let mut events = Vec::new();
        turn.declare_winner(Player::Two, &mut events);
        assert!(turn.is_over());
        events.clear();
        let outcome = turn.settle(&mut events);
        assert!(!outcome.switched);
        assert!(events.is_empty());
        assert_eq!(turn.shot, ShotPhase::GameOver);
        assert_eq!(turn.winner, Some(Player::Two));
    }
}
