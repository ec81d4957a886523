#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod diag;
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod view;

#[cfg(target_family = "wasm")]
mod app;
#[cfg(target_family = "wasm")]
mod bridge;
#[cfg(target_family = "wasm")]
mod dom;
#[cfg(target_family = "wasm")]
mod frame_loop;

#[cfg(target_family = "wasm")]
pub use wasm_entry::{Bouncer, run};

#[cfg(target_family = "wasm")]
mod wasm_entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::bridge;
    use crate::diag::console_info;
    use crate::frame_loop::FrameLoop;

    /// Handle returned to the page. The frame loop is owned here, so the page
    /// decides when drawing starts and stops.
    #[wasm_bindgen]
    pub struct Bouncer {
        app: Rc<RefCell<App>>,
        frame_loop: Rc<FrameLoop>,
    }

    #[wasm_bindgen]
    impl Bouncer {
        pub fn start(&self) {
            self.frame_loop.start();
        }

        pub fn stop(&self) {
            self.frame_loop.stop();
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.frame_loop.is_running()
        }

        /// Feed a key as if typed. Returns whether it was bound to a command.
        #[wasm_bindgen(js_name = pressKey)]
        pub fn press_key(&self, key: &str) -> bool {
            self.app.borrow_mut().key(key)
        }

        #[wasm_bindgen(js_name = bounceCount)]
        pub fn bounce_count(&self) -> f64 {
            self.app.borrow().bounce_count() as f64
        }
    }

    /// WASM entry point: bind to the page, wire input, and start the loop.
    #[wasm_bindgen]
    pub fn run() -> Result<Bouncer, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let app = Rc::new(RefCell::new(App::new(&document)?));
        let frame_loop = {
            let app = Rc::clone(&app);
            Rc::new(FrameLoop::new(move |time| app.borrow_mut().frame(time)))
        };

        bridge::attach_listeners(&window, &document, &app, &frame_loop);
        frame_loop.start();

        console_info!("Housley Bouncer running");
        Ok(Bouncer { app, frame_loop })
    }
}
