use std::collections::HashSet;

use crate::api::error::{RackError, ShotRejected};
use crate::api::types::{BallId, FoulReason, MatchEvent, Player};
use crate::components::ball::Ball;
use crate::components::cue::Cue;
use crate::components::rack::standard_rack;
use crate::components::table::{pockets, Pocket, Table};
use crate::core::config::MatchConfig;
use crate::core::math::{direction, Vector2};
use crate::core::scene::Scene;
use crate::input::queue::{custom, InputEvent, InputQueue};
use crate::systems::aim::trajectory_endpoint;
use crate::systems::collision::{self, CollisionPair};
use crate::systems::turn::{ShotPhase, TablePhase, TurnState};
use crate::systems::{integrator, pockets as pocket_rules};

/// A two-player 8-ball match.
///
/// Owns the balls, the turn state and the cue stick. The host calls
/// `handle_input` with the pending input, then `tick` once per logical step,
/// and drains the resulting events for the presentation layer.
pub struct PoolMatch {
    config: MatchConfig,
    table: Table,
    pockets: [Pocket; 6],
    scene: Scene,
    turn: TurnState,
    cue: Cue,
    events: Vec<MatchEvent>,
    contacts: Vec<CollisionPair>,
}

impl PoolMatch {
    /// Standard rack, player one to break.
    pub fn new(config: MatchConfig) -> Self {
        let balls = standard_rack(&config);
        Self::build(config, balls)
    }

    /// A match over a custom ball layout. The layout must have exactly one cue
    /// ball and unique ids.
    pub fn from_balls(config: MatchConfig, balls: Vec<Ball>) -> Result<Self, RackError> {
        let cue_balls = balls.iter().filter(|b| b.is_cue()).count();
        if cue_balls != 1 {
            return Err(RackError::CueBallCount(cue_balls));
        }
        let mut seen = HashSet::with_capacity(balls.len());
        if let Some(dup) = balls.iter().find(|b| !seen.insert(b.id)) {
            return Err(RackError::DuplicateId(dup.id));
        }
        Ok(Self::build(config, balls))
    }

    fn build(config: MatchConfig, balls: Vec<Ball>) -> Self {
        let table = Table::from_config(&config.table, config.physics.ball_radius());
        let pockets = pockets(&config.table);
        let scene = Scene::from_balls(balls);
        let cue_pos = scene.cue().map_or(config.rules.cue_start, |b| b.position);
        log::info!("new match: {} balls on the table", scene.len());
        Self {
            config,
            table,
            pockets,
            scene,
            turn: TurnState::new(),
            cue: Cue::new(cue_pos),
            events: Vec::with_capacity(16),
            contacts: Vec::with_capacity(16),
        }
    }

    /// Rerack and start over with the same config.
    pub fn reset(&mut self) {
        log::info!("match reset");
        let config = self.config.clone();
        *self = Self::new(config);
    }

    // -- Views --

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Balls still in play.
    pub fn balls(&self) -> &[Ball] {
        self.scene.as_slice()
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.scene.get(id)
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.scene.cue()
    }

    /// The cue stick pose.
    pub fn cue(&self) -> &Cue {
        &self.cue
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn current_player(&self) -> Player {
        self.turn.current_player
    }

    pub fn score(&self, player: Player) -> u32 {
        self.turn.score(player)
    }

    pub fn winner(&self) -> Option<Player> {
        self.turn.winner
    }

    pub fn shot_phase(&self) -> ShotPhase {
        self.turn.shot
    }

    pub fn table_phase(&self) -> TablePhase {
        self.turn.table
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Events emitted since the last drain.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Commands --

    /// Strike the cue ball with `power` along `angle` (radians).
    ///
    /// Power is clamped to `[0, max_power]`. Rejected shots leave the match untouched.
    pub fn apply_shot(&mut self, power: f64, angle: f64) -> Result<(), ShotRejected> {
        let power = self.check_shot(power, angle)?;

        let cue_ball = self.scene.cue_mut().ok_or(ShotRejected::NoCueBall)?;
        cue_ball.velocity = direction(angle) * power;
        cue_ball.moving = true;

        self.turn.begin_shot();
        self.cue.rotation = angle;
        self.cue.power = 0.0;
        self.cue.charging = false;
        log::debug!(
            "player {} shoots: power {:.0}, angle {:.3}",
            self.turn.current_player.number(),
            power,
            angle
        );
        Ok(())
    }

    fn check_shot(&self, power: f64, angle: f64) -> Result<f64, ShotRejected> {
        if self.turn.is_over() {
            return Err(ShotRejected::GameOver);
        }
        if self.turn.shot != ShotPhase::Aiming {
            return Err(ShotRejected::NotAiming);
        }
        if !power.is_finite() || !angle.is_finite() {
            return Err(ShotRejected::NonFinite);
        }
        let power = power.clamp(0.0, self.config.cue.max_power);
        if power == 0.0 {
            return Err(ShotRejected::NoPower);
        }
        if self.scene.cue().is_none() {
            return Err(ShotRejected::NoCueBall);
        }
        Ok(power)
    }

    /// Apply pending pointer and custom input to the cue stick.
    /// The queue is not drained; the host does that once the frame is done.
    pub fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    if self.turn.shot == ShotPhase::Aiming {
                        self.cue.aim_at(Vector2::new(x, y));
                    }
                }
                InputEvent::PointerDown { .. } => {
                    if self.turn.shot == ShotPhase::Aiming {
                        self.cue.begin_charge();
                    }
                }
                InputEvent::PointerUp { .. } => {
                    if let Some(power) = self.cue.release() {
                        if let Err(rejected) = self.apply_shot(power, self.cue.rotation) {
                            log::debug!("cue released without a shot: {rejected}");
                        }
                    }
                }
                InputEvent::Custom { kind: custom::RESET, .. } => self.reset(),
                InputEvent::Custom { kind, .. } => {
                    log::debug!("ignoring custom event {kind}");
                }
            }
        }
    }

    /// One logical step: integrate, resolve collisions, evaluate pockets, and
    /// settle the shot once nothing is moving. Does nothing once the game is over.
    pub fn tick(&mut self) {
        if self.turn.is_over() {
            return;
        }
        if self.turn.shot == ShotPhase::Aiming {
            self.cue.charge(&self.config.cue);
        }

        let physics = &self.config.physics;
        integrator::integrate(self.scene.as_mut_slice(), physics);

        self.contacts.clear();
        collision::resolve(self.scene.as_mut_slice(), &self.table, physics, &mut self.contacts);
        if let Some(cue_id) = self.scene.cue().map(|b| b.id) {
            self.turn.record_contacts(cue_id, &self.contacts);
        }

        pocket_rules::evaluate(
            &mut self.scene,
            &self.pockets,
            &mut self.turn,
            &self.config.rules,
            &mut self.events,
        );

        if self.turn.shot == ShotPhase::InFlight && !self.scene.any_moving() {
            self.settle();
        }
    }

    fn settle(&mut self) {
        let outcome = self.turn.settle(&mut self.events);
        if outcome.foul.is_some_and(FoulReason::resets_cue_ball) {
            self.scene.reset_cue(self.config.rules.cue_start);
        }
        if let Some(cue_ball) = self.scene.cue() {
            self.cue.reposition(cue_ball.position);
        }
    }

    /// Where the aim guide ends for the current cue rotation. Starts at the
    /// cue ball's surface and ignores the cue ball itself.
    pub fn aim_endpoint(&self) -> Vector2 {
        let Some(cue_ball) = self.scene.cue() else {
            return self.cue.position;
        };
        let radius = self.config.physics.ball_radius();
        let start = cue_ball.position + direction(self.cue.rotation) * radius;
        trajectory_endpoint(
            start,
            self.cue.rotation,
            self.scene.as_slice(),
            &self.table,
            &self.pockets,
            &self.config.aim,
            radius,
        )
    }
}

impl Default for PoolMatch {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
