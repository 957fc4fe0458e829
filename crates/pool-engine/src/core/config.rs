use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::core::math::Vector2;

/// Full match configuration. Every section falls back to its defaults,
/// so a JSON file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub physics: PhysicsConfig,
    pub table: TableConfig,
    pub rules: RulesConfig,
    pub cue: CueConfig,
    pub aim: AimConfig,
    pub cadence: CadenceConfig,
}

/// Motion and collision constants.
///
/// The integrator applies `step` and `friction` once per tick, not per second:
/// callers must tick at a stable cadence for the physics to feel the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Logical step Δ multiplied into velocity each tick.
    pub step: f64,
    /// Multiplicative velocity retention per tick (and per cushion hit).
    pub friction: f64,
    /// Speeds below this snap to zero and the ball stops.
    pub stop_threshold: f64,
    /// Ball diameter in table units.
    pub ball_diameter: f64,
}

impl PhysicsConfig {
    pub fn ball_radius(&self) -> f64 {
        self.ball_diameter / 2.0
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            step: 1.0 / 177.0,
            friction: 0.98,
            stop_threshold: 5.0,
            ball_diameter: 38.0,
        }
    }
}

/// Table geometry. The cushion line sits `cushion_inset` in from the world edge;
/// pockets are centred on the cushion lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub width: f64,
    pub height: f64,
    pub cushion_inset: f64,
    pub pocket_radius: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
            cushion_inset: 38.0,
            pocket_radius: 39.0,
        }
    }
}

/// Rack layout and scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Break spot; the cue ball returns here after being potted.
    pub cue_start: Vector2,
    /// Position of the front ball of the triangle.
    pub rack_apex: Vector2,
    /// Balls per group; a player needs this many points to pot the eight legally.
    pub group_size: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            cue_start: Vector2::new(300.0, 348.0),
            rack_apex: Vector2::new(803.0, 348.0),
            group_size: 7,
        }
    }
}

/// Cue stick charging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    pub max_power: f64,
    /// Power added per tick while the pointer is held.
    pub charge_step: f64,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            max_power: 8000.0,
            charge_step: 50.0,
        }
    }
}

/// Aim preview ray march.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    pub step: f64,
    pub max_distance: f64,
    /// Extra clearance added to a ball's radius when probing for it.
    pub ball_margin: f64,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            max_distance: 1800.0,
            ball_margin: 2.0,
        }
    }
}

/// How a frame-driven caller converts wall-clock time into ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub ticks_per_second: f64,
    /// Backlog cap so a stalled frame does not replay seconds of physics.
    pub max_ticks_per_frame: u32,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            max_ticks_per_frame: 10,
        }
    }
}

/// Most sample points one aim query may walk.
const MAX_AIM_STEPS: f64 = 100_000.0;

impl MatchConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        if !(p.step.is_finite() && p.step > 0.0) {
            return Err(ConfigError::Invalid("physics.step must be positive"));
        }
        if !(p.friction > 0.0 && p.friction <= 1.0) {
            return Err(ConfigError::Invalid("physics.friction must be in (0, 1]"));
        }
        if !(p.stop_threshold.is_finite() && p.stop_threshold >= 0.0) {
            return Err(ConfigError::Invalid("physics.stop_threshold must not be negative"));
        }
        if !(p.ball_diameter.is_finite() && p.ball_diameter > 0.0) {
            return Err(ConfigError::Invalid("physics.ball_diameter must be positive"));
        }

        let t = &self.table;
        if !(t.pocket_radius.is_finite() && t.pocket_radius > 0.0) {
            return Err(ConfigError::Invalid("table.pocket_radius must be positive"));
        }
        let margin = 2.0 * (t.cushion_inset + p.ball_radius());
        if !(t.width > margin && t.height > margin) {
            return Err(ConfigError::Invalid("table is too small for its cushions"));
        }

        if self.rules.group_size == 0 {
            return Err(ConfigError::Invalid("rules.group_size must be at least 1"));
        }
        if !(self.cue.max_power.is_finite() && self.cue.max_power > 0.0) {
            return Err(ConfigError::Invalid("cue.max_power must be positive"));
        }
        if !(self.cue.charge_step > 0.0) {
            return Err(ConfigError::Invalid("cue.charge_step must be positive"));
        }
        if !(self.aim.step > 0.0 && self.aim.max_distance >= self.aim.step) {
            return Err(ConfigError::Invalid("aim.step must be positive and below aim.max_distance"));
        }
        let aim_steps = self.aim.max_distance / self.aim.step;
        if !(aim_steps.is_finite() && aim_steps <= MAX_AIM_STEPS) {
            return Err(ConfigError::Invalid("aim.step is too small for aim.max_distance"));
        }
        if !(self.cadence.ticks_per_second > 0.0) || self.cadence.max_ticks_per_frame == 0 {
            return Err(ConfigError::Invalid("cadence must allow at least one tick"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{
            "physics": { "friction": 0.95 },
            "rules": { "cue_start": [250.0, 350.0] }
        }"#;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.physics.friction, 0.95);
        assert_eq!(config.physics.ball_diameter, 38.0);
        assert_eq!(config.rules.cue_start, Vector2::new(250.0, 350.0));
        assert_eq!(config.rules.group_size, 7);
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn rejects_bad_friction() {
        let err = MatchConfig::from_json(r#"{ "physics": { "friction": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MatchConfig::from_json("{ physics: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_tiny_aim_step() {
        let json = r#"{ "aim": { "step": 1e-9 } }"#;
        assert!(matches!(MatchConfig::from_json(json), Err(ConfigError::Invalid(_))));

        let mut config = MatchConfig::default();
        config.aim.step = 0.1;
        assert!(config.validate().is_ok());
    }
}
