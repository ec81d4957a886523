use serde::{Deserialize, Serialize};

/// Ball edge length in CSS pixels.
pub const BALL_SIZE: f64 = 120.0;
/// Slowest selectable speed level.
pub const MIN_SPEED_LEVEL: u8 = 1;
/// Fastest selectable speed level.
pub const MAX_SPEED_LEVEL: u8 = 30;
/// Speed level at page load.
pub const DEFAULT_SPEED_LEVEL: u8 = 4;
/// Velocity magnitude per axis contributed by one speed level (pixels/frame).
pub const PIXELS_PER_SPEED_LEVEL: f64 = 5.0;

/// Pixel size of the container the ball moves within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which wall pair a bounce hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Left or right wall; flips `dx`.
    Horizontal,
    /// Top or bottom wall; flips `dy`.
    Vertical,
}

/// Position and velocity of the bouncing element.
///
/// Coordinates are the element's top-left corner in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, size: f64) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            size,
        }
    }

    /// Move by one frame's worth of velocity.
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Center point, used to anchor trail marks.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Whether the ball touches or overshoots a wall on `axis`.
    pub fn touches_wall(&self, axis: Axis, bounds: Bounds) -> bool {
        let (pos, extent) = match axis {
            Axis::Horizontal => (self.x, bounds.width),
            Axis::Vertical => (self.y, bounds.height),
        };
        pos <= 0.0 || pos >= extent - self.size
    }

    /// Flip the velocity component for `axis` and pull the ball back in range.
    pub fn reflect(&mut self, axis: Axis, bounds: Bounds) {
        match axis {
            Axis::Horizontal => {
                self.dx = -self.dx;
                self.x = clamp_axis(self.x, bounds.width - self.size);
            },
            Axis::Vertical => {
                self.dy = -self.dy;
                self.y = clamp_axis(self.y, bounds.height - self.size);
            },
        }
    }

    /// Clamp both coordinates into `bounds` without touching velocity.
    pub fn clamp_into(&mut self, bounds: Bounds) {
        self.x = clamp_axis(self.x, bounds.width - self.size);
        self.y = clamp_axis(self.y, bounds.height - self.size);
    }

    /// Rescale velocity to `magnitude` per axis, keeping each direction.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.dx = if self.dx > 0.0 { magnitude } else { -magnitude };
        self.dy = if self.dy > 0.0 { magnitude } else { -magnitude };
    }
}

/// Clamp `value` into `[0, limit]`. A negative `limit` (surface smaller than
/// the ball) pins the coordinate at 0.
fn clamp_axis(value: f64, limit: f64) -> f64 {
    value.min(limit).max(0.0)
}
