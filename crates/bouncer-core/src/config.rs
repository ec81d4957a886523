use serde::{Deserialize, Serialize};

use crate::ball::{
    BALL_SIZE, DEFAULT_SPEED_LEVEL, MAX_SPEED_LEVEL, MIN_SPEED_LEVEL, PIXELS_PER_SPEED_LEVEL,
};
use crate::trail::{TRAIL_LIFETIME_MS, TRAIL_SIZE};

/// How long the `impact` class stays on the ball after a bounce.
pub const IMPACT_FLASH_MS: f64 = 100.0;

/// Tunables for one screensaver instance. Missing fields take defaults, so a
/// page can override only what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ball_size: f64,
    pub initial_speed: u8,
    pub pixels_per_level: f64,
    pub trail_enabled: bool,
    pub start_animating: bool,
    pub trail_size: f64,
    pub trail_lifetime_ms: f64,
    pub impact_flash_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_size: BALL_SIZE,
            initial_speed: DEFAULT_SPEED_LEVEL,
            pixels_per_level: PIXELS_PER_SPEED_LEVEL,
            trail_enabled: true,
            start_animating: true,
            trail_size: TRAIL_SIZE,
            trail_lifetime_ms: TRAIL_LIFETIME_MS,
            impact_flash_ms: IMPACT_FLASH_MS,
        }
    }
}

impl SimConfig {
    /// Parse a JSON override, e.g. from the page's `bouncer-config` script tag.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<SimConfig>(json).map(SimConfig::sanitized)
    }

    /// Clamp the speed into range and replace unusable sizes or durations
    /// with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            ball_size: positive_or(self.ball_size, defaults.ball_size),
            initial_speed: self.initial_speed.clamp(MIN_SPEED_LEVEL, MAX_SPEED_LEVEL),
            pixels_per_level: positive_or(self.pixels_per_level, defaults.pixels_per_level),
            trail_enabled: self.trail_enabled,
            start_animating: self.start_animating,
            trail_size: positive_or(self.trail_size, defaults.trail_size),
            trail_lifetime_ms: positive_or(self.trail_lifetime_ms, defaults.trail_lifetime_ms),
            impact_flash_ms: positive_or(self.impact_flash_ms, defaults.impact_flash_ms),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
