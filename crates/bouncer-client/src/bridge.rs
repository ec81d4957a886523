use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use bouncer_core::command::{CONTROLS, Command};

use crate::app::App;
use crate::diag::console_warn;
use crate::frame_loop::FrameLoop;
use crate::view;

const FPS_SAMPLE_INTERVAL_MS: i32 = 1000;
/// Matches the impact flash so neither it nor a trail mark outlives its
/// lifetime by more than one tick while the frame loop is stopped.
const EXPIRY_INTERVAL_MS: i32 = 100;

/// Wire keyboard, resize, control buttons, timers and tab visibility to the
/// app. Listeners live for the lifetime of the page.
pub fn attach_listeners(
    window: &Window,
    document: &Document,
    app: &Rc<RefCell<App>>,
    frame_loop: &Rc<FrameLoop>,
) {
    // Keyboard shortcuts
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                let key = evt.key();
                if app.borrow_mut().key(&key) && view::prevents_scroll(&key) {
                    evt.prevent_default();
                }
            },
        );
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Window resize
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Control buttons
    for &(id, command) in CONTROLS {
        attach_control(document, app, id, command);
    }

    // Frame-rate sample once per second
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().sample_fps();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            FPS_SAMPLE_INTERVAL_MS,
        ) {
            console_warn!("setInterval for fps failed: {e:?}");
        }
        closure.forget();
    }

    // Trail and flash expiry, independent of the frame loop
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().expire();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            EXPIRY_INTERVAL_MS,
        ) {
            console_warn!("setInterval for trail expiry failed: {e:?}");
        }
        closure.forget();
    }

    // Stop drawing while the tab is hidden; resume only if we were the ones
    // who stopped it.
    {
        let frame_loop = Rc::clone(frame_loop);
        let doc = document.clone();
        let resume = Cell::new(false);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if doc.hidden() {
                if frame_loop.is_running() {
                    frame_loop.stop();
                    resume.set(true);
                }
            } else if resume.replace(false) {
                frame_loop.start();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn attach_control(document: &Document, app: &Rc<RefCell<App>>, id: &str, command: Command) {
    let Some(button) = document.get_element_by_id(id) else {
        console_warn!("Control #{id} not found; skipping");
        return;
    };
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut()>::new(move || {
        app.borrow_mut().command(command);
    });
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
