use crate::command::Command;
use crate::config::SimConfig;
use crate::fps::FpsMeter;
use crate::palette;
use crate::random::RandomSource;
use crate::simulator::Simulator;
use crate::surface::{Readout, Surface};
use crate::trail::TrailLedger;

/// Drives a [`Simulator`] against a [`Surface`] once per display refresh and
/// routes input, resize, and the once-a-second fps sample to it.
///
/// Within [`frame`](Self::frame) the order is fixed: expire old trail marks
/// and the impact flash, move, reflect, repaint, write the position, then
/// leave a trail mark.
pub struct Screensaver<R> {
    sim: Simulator<R>,
    trails: TrailLedger,
    fps: FpsMeter,
    impact_until: Option<f64>,
    impact_flash_ms: f64,
}

impl<R: RandomSource> Screensaver<R> {
    pub fn new(sim: Simulator<R>, config: &SimConfig, now_ms: f64) -> Self {
        let config = config.clone().sanitized();
        Self {
            sim,
            trails: TrailLedger::new(config.trail_size, config.trail_lifetime_ms),
            fps: FpsMeter::new(now_ms),
            impact_until: None,
            impact_flash_ms: config.impact_flash_ms,
        }
    }

    /// Build a simulator sized to the surface and wrap it.
    pub fn start<S: Surface>(config: &SimConfig, surface: &S, rng: R, now_ms: f64) -> Self {
        let sim = Simulator::with_config(config, surface.bounds(), rng);
        Self::new(sim, config, now_ms)
    }

    /// Paint the initial gradient and position and publish the readout.
    pub fn mount<S: Surface>(&mut self, surface: &mut S) {
        surface.paint_ball(self.sim.gradient());
        let ball = self.sim.ball();
        surface.place_ball(ball.x, ball.y);
        self.publish(surface);
    }

    /// Remove trail marks past their lifetime and end an impact flash that
    /// has run its course. Runs at the start of every frame, and must also be
    /// driven from a timer so marks disappear while no frames are drawn.
    pub fn expire<S: Surface>(&mut self, surface: &mut S, now_ms: f64) {
        for id in self.trails.expire(now_ms) {
            surface.remove_trail(id);
        }
        if self.impact_until.is_some_and(|until| now_ms >= until) {
            self.impact_until = None;
            surface.set_impact(false);
        }
    }

    /// Handle one animation frame at `now_ms`.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now_ms: f64) {
        self.expire(surface, now_ms);

        let outcome = self.sim.tick(surface.bounds());
        if !outcome.moved {
            return;
        }

        if !outcome.bounces.is_empty() {
            for bounce in &outcome.bounces {
                surface.paint_ball(palette::gradient(bounce.gradient));
            }
            surface.set_impact(true);
            self.impact_until = Some(now_ms + self.impact_flash_ms);
            self.publish(surface);
        }

        let ball = *self.sim.ball();
        surface.place_ball(ball.x, ball.y);
        self.fps.record_frame();

        if self.sim.trail_enabled() {
            let gradient = self.sim.gradient_index();
            let mark = self.trails.spawn(&ball, gradient, now_ms);
            surface.add_trail(&mark, palette::gradient(gradient));
        }
    }

    pub fn command<S: Surface>(&mut self, surface: &mut S, command: Command) {
        self.sim.apply(command);
        self.publish(surface);
    }

    /// Route a key press. Returns whether the key was bound to a command.
    pub fn key<S: Surface>(&mut self, surface: &mut S, key: &str) -> bool {
        let handled = self.sim.handle_key(key).is_some();
        if handled {
            self.publish(surface);
        }
        handled
    }

    /// Re-fit the ball after the container changed size.
    pub fn resize<S: Surface>(&mut self, surface: &mut S) {
        self.sim.fit_to(surface.bounds());
        let ball = self.sim.ball();
        surface.place_ball(ball.x, ball.y);
    }

    /// Close the current fps window and publish the new rate.
    pub fn sample_fps<S: Surface>(&mut self, surface: &mut S, now_ms: f64) -> u32 {
        let fps = self.fps.sample(now_ms);
        self.publish(surface);
        fps
    }

    pub fn readout(&self) -> Readout {
        Readout {
            speed_level: self.sim.speed_level(),
            bounce_count: self.sim.bounce_count(),
            animating: self.sim.is_animating(),
            trail_enabled: self.sim.trail_enabled(),
            fps: self.fps.fps(),
        }
    }

    pub fn simulator(&self) -> &Simulator<R> {
        &self.sim
    }

    pub fn live_trails(&self) -> usize {
        self.trails.len()
    }

    fn publish<S: Surface>(&self, surface: &mut S) {
        surface.show_readout(&self.readout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{BALL_SIZE, Ball, Bounds};
    use crate::palette::PALETTE;
    use crate::test_helpers::{RecordingSurface, ScriptedRandom, SurfaceCall};

    fn saver_with(ball: Ball) -> Screensaver<ScriptedRandom> {
        let config = SimConfig::default();
        let sim = Simulator::from_ball(&config, ball, ScriptedRandom::new(vec![0.0]));
        Screensaver::new(sim, &config, 0.0)
    }

    #[test]
    fn mount_paints_places_and_publishes() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(10.0, 20.0, 20.0, 20.0, BALL_SIZE));
        saver.mount(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                SurfaceCall::Paint(PALETTE[0]),
                SurfaceCall::Place(10.0, 20.0),
                SurfaceCall::Readout(saver.readout()),
            ]
        );
    }

    #[test]
    fn frame_writes_position_then_trail() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 20.0, 20.0, BALL_SIZE));
        saver.frame(&mut surface, 16.0);

        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[0], SurfaceCall::Place(120.0, 120.0));
        match &surface.calls[1] {
            SurfaceCall::AddTrail(mark) => {
                assert_eq!((mark.x, mark.y), (160.0, 160.0));
                assert_eq!(mark.expires_at, 1016.0);
            },
            other => panic!("Expected AddTrail, got: {other:?}"),
        }
        assert_eq!(saver.live_trails(), 1);
    }

    #[test]
    fn bounce_repaints_flashes_and_clears_flash() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(750.0, 100.0, 20.0, 20.0, BALL_SIZE));
        saver.frame(&mut surface, 0.0);

        assert_eq!(surface.calls[0], SurfaceCall::Paint(PALETTE[0]));
        assert_eq!(surface.calls[1], SurfaceCall::Impact(true));
        assert!(matches!(surface.calls[2], SurfaceCall::Readout(r) if r.bounce_count == 1));
        assert_eq!(surface.calls[3], SurfaceCall::Place(680.0, 120.0));

        surface.calls.clear();
        saver.frame(&mut surface, 50.0);
        assert!(!surface.calls.contains(&SurfaceCall::Impact(false)));

        saver.frame(&mut surface, 100.0);
        assert!(surface.calls.contains(&SurfaceCall::Impact(false)));
    }

    #[test]
    fn corner_hit_paints_twice() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(670.0, 470.0, 20.0, 20.0, BALL_SIZE));
        saver.frame(&mut surface, 0.0);
        let paints = surface
            .calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Paint(_)))
            .count();
        assert_eq!(paints, 2);
        assert_eq!(saver.readout().bounce_count, 2);
    }

    #[test]
    fn paused_frame_only_expires_trails() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 20.0, 20.0, BALL_SIZE));
        saver.frame(&mut surface, 0.0);
        saver.command(&mut surface, Command::ToggleAnimation);
        surface.calls.clear();

        saver.frame(&mut surface, 500.0);
        assert!(surface.calls.is_empty());

        saver.frame(&mut surface, 1000.0);
        assert_eq!(surface.calls, vec![SurfaceCall::RemoveTrail(0)]);
        assert_eq!(saver.simulator().ball().x, 120.0);
    }

    #[test]
    fn expire_without_frames_clears_marks_and_flash() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(750.0, 100.0, 20.0, 20.0, BALL_SIZE));
        saver.frame(&mut surface, 0.0);
        saver.frame(&mut surface, 16.0);
        assert_eq!(saver.live_trails(), 2);
        surface.calls.clear();

        saver.expire(&mut surface, 500.0);
        assert_eq!(surface.calls, vec![SurfaceCall::Impact(false)]);
        assert_eq!(saver.live_trails(), 2);

        saver.expire(&mut surface, 1016.0);
        assert_eq!(
            surface.calls[1..],
            [SurfaceCall::RemoveTrail(0), SurfaceCall::RemoveTrail(1)]
        );
        assert_eq!(saver.live_trails(), 0);
        assert_eq!(saver.simulator().ball().x, 660.0);
    }

    #[test]
    fn out_of_range_config_is_sanitized() {
        let config = SimConfig {
            initial_speed: 0,
            trail_lifetime_ms: -5.0,
            ..SimConfig::default()
        };
        let surface = RecordingSurface::new(800.0, 600.0);
        let saver = Screensaver::start(&config, &surface, ScriptedRandom::new(vec![0.5]), 0.0);
        assert_eq!(saver.readout().speed_level, 1);
        assert_eq!(saver.simulator().ball().dx.abs(), 5.0);
    }

    #[test]
    fn trail_disabled_leaves_no_marks() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 20.0, 20.0, BALL_SIZE));
        assert!(saver.key(&mut surface, "t"));
        surface.calls.clear();
        saver.frame(&mut surface, 16.0);
        assert_eq!(surface.calls, vec![SurfaceCall::Place(120.0, 120.0)]);
        assert_eq!(saver.live_trails(), 0);
    }

    #[test]
    fn unmapped_key_publishes_nothing() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 20.0, 20.0, BALL_SIZE));
        assert!(!saver.key(&mut surface, "x"));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn speed_key_updates_readout() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 20.0, 20.0, BALL_SIZE));
        saver.key(&mut surface, "ArrowUp");
        assert!(matches!(
            surface.calls.last(),
            Some(SurfaceCall::Readout(r)) if r.speed_level == 5
        ));
    }

    #[test]
    fn resize_refits_ball() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(600.0, 400.0, 20.0, 20.0, BALL_SIZE));
        surface.bounds = Bounds::new(400.0, 300.0);
        saver.resize(&mut surface);
        assert_eq!(surface.calls, vec![SurfaceCall::Place(280.0, 180.0)]);
    }

    #[test]
    fn fps_counts_only_animated_frames() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut saver = saver_with(Ball::new(100.0, 100.0, 1.0, 1.0, BALL_SIZE));
        for i in 0..30 {
            saver.frame(&mut surface, f64::from(i) * 16.0);
        }
        saver.command(&mut surface, Command::ToggleAnimation);
        for i in 30..60 {
            saver.frame(&mut surface, f64::from(i) * 16.0);
        }
        assert_eq!(saver.sample_fps(&mut surface, 1000.0), 30);
        assert!(matches!(
            surface.calls.last(),
            Some(SurfaceCall::Readout(r)) if r.fps == 30 && !r.animating
        ));
    }

    #[test]
    fn start_sizes_ball_to_surface() {
        let surface = RecordingSurface::new(300.0, 200.0);
        let saver = Screensaver::start(
            &SimConfig::default(),
            &surface,
            ScriptedRandom::new(vec![0.999]),
            0.0,
        );
        let ball = saver.simulator().ball();
        assert!(ball.x <= 180.0 && ball.y <= 80.0);
    }
}
