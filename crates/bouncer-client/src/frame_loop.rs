use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::diag::console_warn;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
}

/// A `requestAnimationFrame` loop with explicit start/stop.
///
/// Each frame runs the callback to completion and then schedules the next one,
/// so no two frames ever overlap. `stop()` cancels the pending request; a
/// stop issued from inside the callback takes effect before rescheduling.
pub struct FrameLoop {
    state: Rc<LoopState>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(false),
            pending: Cell::new(None),
        });
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let loop_state = Rc::clone(&state);
        let next = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
            loop_state.pending.set(None);
            if !loop_state.running.get() {
                return;
            }
            on_frame(time);
            if loop_state.running.get() {
                loop_state.pending.set(request_frame(&next));
            }
        }));

        Self { state, callback }
    }

    /// Begin scheduling frames. Calling it while running does nothing.
    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        let pending = request_frame(&self.callback);
        if pending.is_none() {
            self.state.running.set(false);
        }
        self.state.pending.set(pending);
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending.take()
            && let Some(window) = web_sys::window()
            && let Err(e) = window.cancel_animation_frame(id)
        {
            console_warn!("cancelAnimationFrame failed: {e:?}");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    let slot = callback.borrow();
    let closure = slot.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            console_warn!("requestAnimationFrame failed: {e:?}");
            None
        },
    }
}
