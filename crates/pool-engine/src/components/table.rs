use crate::core::config::TableConfig;
use crate::core::math::Vector2;

/// Bounds for ball centres: the cushion lines already pulled in by one ball
/// radius, so collision tests compare centres directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Table {
    pub fn from_config(config: &TableConfig, ball_radius: f64) -> Self {
        let inset = config.cushion_inset + ball_radius;
        Self {
            top: inset,
            bottom: config.height - inset,
            left: inset,
            right: config.width - inset,
        }
    }

    /// Strictly inside the bounds (touching a bound counts as outside).
    pub fn contains(&self, point: Vector2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// A pocket; any ball centre closer than `capture_radius` drops in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub position: Vector2,
    pub capture_radius: f64,
}

impl Pocket {
    pub fn captures(&self, point: Vector2) -> bool {
        point.distance(self.position) < self.capture_radius
    }
}

/// The six pockets: four corners then the two mid-rail pockets,
/// all sitting on the cushion lines.
pub fn pockets(config: &TableConfig) -> [Pocket; 6] {
    let left = config.cushion_inset;
    let right = config.width - config.cushion_inset;
    let top = config.cushion_inset;
    let bottom = config.height - config.cushion_inset;
    let mid_x = (left + right) / 2.0;
    let r = config.pocket_radius;
    [
        Vector2::new(left, top),
        Vector2::new(right, top),
        Vector2::new(left, bottom),
        Vector2::new(right, bottom),
        Vector2::new(mid_x, top),
        Vector2::new(mid_x, bottom),
    ]
    .map(|position| Pocket {
        position,
        capture_radius: r,
    })
}
