use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsValue;
use web_sys::Document;

use bouncer_core::command::Command;
use bouncer_core::driver::Screensaver;

use crate::dom::{self, DomSurface};

/// The screensaver bound to this page's DOM. One instance per page, shared
/// with every listener through `Rc<RefCell<App>>`.
pub struct App {
    saver: Screensaver<StdRng>,
    surface: DomSurface,
}

impl App {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let config = dom::read_config(document);
        let mut surface = DomSurface::attach(document)?;
        let rng = StdRng::try_from_os_rng()
            .unwrap_or_else(|_| StdRng::seed_from_u64(js_sys::Date::now() as u64));
        let mut saver = Screensaver::start(&config, &surface, rng, now_ms());
        saver.mount(&mut surface);
        Ok(Self { saver, surface })
    }

    pub fn frame(&mut self, now: f64) {
        self.saver.frame(&mut self.surface, now);
    }

    pub fn command(&mut self, command: Command) {
        self.saver.command(&mut self.surface, command);
    }

    /// Returns whether the key was bound to a command.
    pub fn key(&mut self, key: &str) -> bool {
        self.saver.key(&mut self.surface, key)
    }

    pub fn resize(&mut self) {
        self.saver.resize(&mut self.surface);
    }

    /// Drop expired trail marks and impact flash at the current time.
    pub fn expire(&mut self) {
        self.saver.expire(&mut self.surface, now_ms());
    }

    pub fn sample_fps(&mut self) {
        self.saver.sample_fps(&mut self.surface, now_ms());
    }

    pub fn bounce_count(&self) -> u64 {
        self.saver.simulator().bounce_count()
    }
}

/// High-resolution page time, on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
