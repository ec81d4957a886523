use crate::ball::Bounds;
use crate::palette::Gradient;
use crate::trail::{TrailId, TrailMark};

/// Status line values shown next to the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub speed_level: u8,
    pub bounce_count: u64,
    pub animating: bool,
    pub trail_enabled: bool,
    pub fps: u32,
}

/// The container the ball is drawn in.
///
/// Implemented over the DOM by the browser client and by a recording fake in
/// tests. Every write is fire-and-forget; a surface that cannot find an
/// element simply skips it.
pub trait Surface {
    /// Current container size, read fresh every frame.
    fn bounds(&self) -> Bounds;

    /// Move the ball's top-left corner.
    fn place_ball(&mut self, x: f64, y: f64);

    fn paint_ball(&mut self, gradient: &Gradient);

    /// Turn the short impact flash on or off.
    fn set_impact(&mut self, active: bool);

    fn add_trail(&mut self, mark: &TrailMark, gradient: &Gradient);

    fn remove_trail(&mut self, id: TrailId);

    fn show_readout(&mut self, readout: &Readout);
}
