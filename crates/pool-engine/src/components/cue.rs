use crate::core::config::CueConfig;
use crate::core::math::Vector2;

/// The cue stick: where it points and how much power is charged.
/// Purely presentation-facing state; the shot itself goes through
/// `PoolMatch::apply_shot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Pivot of the stick, the cue ball centre while aiming.
    pub position: Vector2,
    /// Aim angle in radians; the shot travels along it.
    pub rotation: f64,
    pub power: f64,
    /// Pointer is held and power grows every tick.
    pub charging: bool,
}

impl Cue {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
            power: 0.0,
            charging: false,
        }
    }

    /// Point the stick from its pivot toward `target`.
    pub fn aim_at(&mut self, target: Vector2) {
        let d = target - self.position;
        if d != Vector2::ZERO {
            self.rotation = d.y.atan2(d.x);
        }
    }

    pub fn begin_charge(&mut self) {
        self.charging = true;
    }

    /// One tick of charging. Holding past full power wraps back to zero.
    pub fn charge(&mut self, config: &CueConfig) {
        if !self.charging {
            return;
        }
        if self.power >= config.max_power {
            self.power = 0.0;
            return;
        }
        self.power = (self.power + config.charge_step).min(config.max_power);
    }

    /// Stop charging and hand back the charged power, if any.
    pub fn release(&mut self) -> Option<f64> {
        self.charging = false;
        let power = std::mem::take(&mut self.power);
        (power > 0.0).then_some(power)
    }

    /// Move the stick onto the cue ball after a shot, discarding any charge.
    pub fn reposition(&mut self, position: Vector2) {
        self.position = position;
        self.power = 0.0;
        self.charging = false;
    }

    /// Charge as a 0..=1 fraction of `max_power`, for the power meter.
    pub fn power_fraction(&self, config: &CueConfig) -> f64 {
        (self.power / config.max_power).clamp(0.0, 1.0)
    }
}
