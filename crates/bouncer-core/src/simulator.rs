use serde::{Deserialize, Serialize};

use crate::ball::{Axis, Ball, Bounds, MAX_SPEED_LEVEL, MIN_SPEED_LEVEL};
use crate::command::Command;
use crate::config::SimConfig;
use crate::palette::{self, Gradient, PALETTE};
use crate::random::RandomSource;

/// A single wall contact raised during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounce {
    pub axis: Axis,
    /// Palette index the ball was recolored to.
    pub gradient: usize,
}

/// What one call to [`Simulator::tick`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved: bool,
    /// Zero, one, or (on a corner hit) two bounces.
    pub bounces: Vec<Bounce>,
}

/// Owns the ball and every piece of state the controls can change.
///
/// The simulator knows nothing about the display: callers pass the current
/// container bounds into each tick and render from the getters afterwards.
#[derive(Debug)]
pub struct Simulator<R> {
    ball: Ball,
    speed_level: u8,
    bounce_count: u64,
    animating: bool,
    trail_enabled: bool,
    gradient: usize,
    pixels_per_level: f64,
    rng: R,
}

impl<R: RandomSource> Simulator<R> {
    pub fn new(bounds: Bounds, rng: R) -> Self {
        Self::with_config(&SimConfig::default(), bounds, rng)
    }

    /// Place the ball at a random spot inside `bounds`, heading in a random
    /// diagonal direction, with a random starting gradient.
    pub fn with_config(config: &SimConfig, bounds: Bounds, mut rng: R) -> Self {
        let config = config.clone().sanitized();
        let size = config.ball_size;
        let x = (rng.next_unit() * (bounds.width - size)).max(0.0);
        let y = (rng.next_unit() * (bounds.height - size)).max(0.0);
        let magnitude = f64::from(config.initial_speed) * config.pixels_per_level;
        let dx = if rng.coin_flip() { magnitude } else { -magnitude };
        let dy = if rng.coin_flip() { magnitude } else { -magnitude };
        let gradient = rng.pick_index(PALETTE.len());

        Self {
            ball: Ball::new(x, y, dx, dy, size),
            speed_level: config.initial_speed,
            bounce_count: 0,
            animating: config.start_animating,
            trail_enabled: config.trail_enabled,
            gradient,
            pixels_per_level: config.pixels_per_level,
            rng,
        }
    }

    /// Start from an explicit ball. Its position and heading are kept; the
    /// velocity is rescaled to the configured speed level.
    pub fn from_ball(config: &SimConfig, mut ball: Ball, rng: R) -> Self {
        let config = config.clone().sanitized();
        ball.set_magnitude(f64::from(config.initial_speed) * config.pixels_per_level);
        Self {
            ball,
            speed_level: config.initial_speed,
            bounce_count: 0,
            animating: config.start_animating,
            trail_enabled: config.trail_enabled,
            gradient: 0,
            pixels_per_level: config.pixels_per_level,
            rng,
        }
    }

    /// Advance one frame: move, then reflect off any wall touched.
    ///
    /// A paused simulator does nothing; the caller keeps ticking anyway so
    /// that unpausing resumes on the next frame.
    pub fn tick(&mut self, bounds: Bounds) -> TickOutcome {
        if !self.advance() {
            return TickOutcome::default();
        }
        TickOutcome {
            moved: true,
            bounces: self.check_and_reflect(bounds),
        }
    }

    /// Apply velocity to position. Returns false (and leaves the ball alone)
    /// while paused.
    pub fn advance(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        self.ball.advance();
        true
    }

    /// Check both axes independently; each wall contact flips that axis's
    /// velocity, clamps the position, bumps the counter, and recolors.
    pub fn check_and_reflect(&mut self, bounds: Bounds) -> Vec<Bounce> {
        let mut bounces = Vec::new();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if self.ball.touches_wall(axis, bounds) {
                self.ball.reflect(axis, bounds);
                bounces.push(self.bounce(axis));
            }
        }
        bounces
    }

    fn bounce(&mut self, axis: Axis) -> Bounce {
        self.bounce_count = self.bounce_count.saturating_add(1);
        self.gradient = self.rng.pick_index(PALETTE.len());
        tracing::trace!(?axis, count = self.bounce_count, gradient = self.gradient, "bounce");
        Bounce {
            axis,
            gradient: self.gradient,
        }
    }

    /// Set the speed level, clamped to `[1, 30]`, and rescale velocity while
    /// keeping the current heading.
    pub fn set_speed(&mut self, level: i32) {
        let clamped = level.clamp(i32::from(MIN_SPEED_LEVEL), i32::from(MAX_SPEED_LEVEL));
        self.speed_level = clamped as u8;
        self.ball
            .set_magnitude(f64::from(self.speed_level) * self.pixels_per_level);
        tracing::debug!(level = self.speed_level, "speed changed");
    }

    pub fn increase_speed(&mut self) {
        self.set_speed(i32::from(self.speed_level) + 1);
    }

    pub fn decrease_speed(&mut self) {
        self.set_speed(i32::from(self.speed_level) - 1);
    }

    /// Returns the new state.
    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }

    /// Returns the new state.
    pub fn toggle_trail(&mut self) -> bool {
        self.trail_enabled = !self.trail_enabled;
        self.trail_enabled
    }

    pub fn reset_bounce_count(&mut self) {
        self.bounce_count = 0;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleAnimation => {
                self.toggle_animation();
            },
            Command::SpeedUp => self.increase_speed(),
            Command::SpeedDown => self.decrease_speed(),
            Command::ToggleTrail => {
                self.toggle_trail();
            },
            Command::ResetBounces => self.reset_bounce_count(),
        }
    }

    /// Run the command bound to `key`, if any. Unmapped keys change nothing.
    pub fn handle_key(&mut self, key: &str) -> Option<Command> {
        let command = Command::from_key(key)?;
        self.apply(command);
        Some(command)
    }

    /// Pull the ball back inside after the container shrinks. Velocity and
    /// the bounce counter are untouched.
    pub fn fit_to(&mut self, bounds: Bounds) {
        self.ball.clamp_into(bounds);
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            "fit ball to resized surface"
        );
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }

    pub fn bounce_count(&self) -> u64 {
        self.bounce_count
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn trail_enabled(&self) -> bool {
        self.trail_enabled
    }

    pub fn gradient_index(&self) -> usize {
        self.gradient
    }

    pub fn gradient(&self) -> &'static Gradient {
        palette::gradient(self.gradient)
    }
}
