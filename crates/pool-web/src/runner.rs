use pool_engine::bridge::protocol::{encode_balls, encode_events, WireBall, WireCue, WireEvent};
use pool_engine::{
    FixedTimestep, InputEvent, InputQueue, MatchConfig, Player, PoolMatch, ShotPhase, Vector2,
};

/// Wires a `PoolMatch` to a frame-driven host.
///
/// Lives in a `thread_local!` in `lib.rs`, because wasm-bindgen cannot export
/// a stateful struct as free functions directly. After every `tick` the
/// ball, event and cue buffers hold the frame's data for JS to read.
pub struct MatchRunner {
    pool: PoolMatch,
    input: InputQueue,
    timestep: FixedTimestep,
    balls: Vec<WireBall>,
    /// Events of the last frame only.
    events: Vec<WireEvent>,
    cue: WireCue,
    aim: Vector2,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        let timestep = FixedTimestep::from_config(&config.cadence);
        let mut runner = Self {
            pool: PoolMatch::new(config),
            input: InputQueue::new(),
            timestep,
            balls: Vec::with_capacity(16),
            events: Vec::with_capacity(16),
            cue: WireCue::default(),
            aim: Vector2::ZERO,
        };
        runner.refresh();
        runner
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, then as many fixed ticks as `dt` seconds buy.
    pub fn tick(&mut self, dt: f64) {
        if self.input.has_reset() {
            self.timestep.reset();
        }
        self.pool.handle_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.pool.tick();
        }

        let events = self.pool.drain_events();
        encode_events(&events, &mut self.events);
        self.refresh();
    }

    fn refresh(&mut self) {
        encode_balls(self.pool.balls(), &mut self.balls);
        self.cue = WireCue::from(self.pool.cue());
        self.aim = self.pool.aim_endpoint();
    }

    // ---- Pointer accessors for JS reads ----

    pub fn balls_ptr(&self) -> *const f32 {
        self.balls.as_ptr() as *const f32
    }

    pub fn ball_count(&self) -> u32 {
        self.balls.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn cue_ptr(&self) -> *const f32 {
        &self.cue as *const WireCue as *const f32
    }

    pub fn events(&self) -> &[WireEvent] {
        &self.events
    }

    pub fn balls(&self) -> &[WireBall] {
        &self.balls
    }

    pub fn aim(&self) -> Vector2 {
        self.aim
    }

    // ---- Scalar state ----

    pub fn current_player(&self) -> u32 {
        self.pool.current_player().number()
    }

    pub fn score(&self, player: u32) -> u32 {
        match player {
            1 => self.pool.score(Player::One),
            2 => self.pool.score(Player::Two),
            _ => 0,
        }
    }

    /// 0 aiming, 1 in flight, 2 settling, 3 game over.
    pub fn shot_phase(&self) -> u32 {
        match self.pool.shot_phase() {
            ShotPhase::Aiming => 0,
            ShotPhase::InFlight => 1,
            ShotPhase::Settling => 2,
            ShotPhase::GameOver => 3,
        }
    }

    /// Winning player, or 0 while the game is on.
    pub fn winner(&self) -> u32 {
        self.pool.winner().map_or(0, Player::number)
    }

    /// Power charged as a 0..=1 fraction, for the power meter.
    pub fn power_fraction(&self) -> f64 {
        self.pool.cue().power_fraction(&self.pool.config().cue)
    }

    pub fn world_width(&self) -> f64 {
        self.pool.config().table.width
    }

    pub fn world_height(&self) -> f64 {
        self.pool.config().table.height
    }
}
