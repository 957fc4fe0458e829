//! Physics and rules engine for two-player 8-ball pool.
//!
//! Headless: the match is a plain value the host ticks at a fixed cadence.
//! Rendering, audio and input capture live outside this crate.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::error::{ConfigError, RackError, ShotRejected};
pub use api::game::PoolMatch;
pub use api::types::{BallCategory, BallId, FoulReason, Group, MatchEvent, Player};
pub use components::ball::Ball;
pub use components::cue::Cue;
pub use components::rack::{standard_rack, CUE_BALL_ID};
pub use components::table::{Pocket, Table};
pub use core::config::{
    AimConfig, CadenceConfig, CueConfig, MatchConfig, PhysicsConfig, RulesConfig, TableConfig,
};
pub use core::math::Vector2;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{custom, InputEvent, InputQueue};
pub use bridge::protocol::{WireBall, WireCue, WireEvent};
pub use systems::aim::trajectory_endpoint;
pub use systems::collision::{Collidable, CollisionPair};
pub use systems::turn::{Settlement, ShotPhase, TablePhase, TurnState};
