use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use bouncer_core::ball::Bounds;
use bouncer_core::config::SimConfig;
use bouncer_core::palette::Gradient;
use bouncer_core::surface::{Readout, Surface};
use bouncer_core::trail::{TrailId, TrailMark};

use crate::diag::console_warn;
use crate::view;

const CONTAINER_ID: &str = "screensaver-container";
const BALL_ID: &str = "bouncing-image";
const CONFIG_ID: &str = "bouncer-config";

/// [`Surface`] over the page's container and ball elements. Trail marks are
/// `div.color-trail` children of the container, tracked by id until expiry.
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    ball: HtmlElement,
    trails: HashMap<TrailId, HtmlElement>,
}

impl DomSurface {
    /// Look up the container and ball. Both are required.
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            container: html_element(document, CONTAINER_ID)?,
            ball: html_element(document, BALL_ID)?,
            trails: HashMap::new(),
        })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn create_trail(&self, mark: &TrailMark, gradient: &Gradient) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        el.set_class_name("color-trail");
        let style = el.style();
        style.set_property("left", &view::px(mark.x))?;
        style.set_property("top", &view::px(mark.y))?;
        style.set_property("width", &view::px(mark.size))?;
        style.set_property("height", &view::px(mark.size))?;
        style.set_property("background", &gradient.to_css())?;
        self.container.append_child(&el)?;
        Ok(el)
    }
}

impl Surface for DomSurface {
    fn bounds(&self) -> Bounds {
        let rect = self.container.get_bounding_client_rect();
        Bounds::new(rect.width(), rect.height())
    }

    fn place_ball(&mut self, x: f64, y: f64) {
        let style = self.ball.style();
        let _ = style.set_property("left", &view::px(x));
        let _ = style.set_property("top", &view::px(y));
    }

    fn paint_ball(&mut self, gradient: &Gradient) {
        let _ = self
            .ball
            .style()
            .set_property("background", &gradient.to_css());
    }

    fn set_impact(&mut self, active: bool) {
        let classes = self.ball.class_list();
        let _ = if active {
            classes.add_1("impact")
        } else {
            classes.remove_1("impact")
        };
    }

    fn add_trail(&mut self, mark: &TrailMark, gradient: &Gradient) {
        match self.create_trail(mark, gradient) {
            Ok(el) => {
                self.trails.insert(mark.id, el);
            },
            Err(e) => console_warn!("Failed to create trail mark: {e:?}"),
        }
    }

    fn remove_trail(&mut self, id: TrailId) {
        if let Some(el) = self.trails.remove(&id) {
            el.remove();
        }
    }

    fn show_readout(&mut self, readout: &Readout) {
        self.set_text("speedDisplay", &readout.speed_level.to_string());
        self.set_text("bounceDisplay", &readout.bounce_count.to_string());
        self.set_text("fpsDisplay", &readout.fps.to_string());

        let (icon, label) = view::play_pause_label(readout.animating);
        self.set_text("playPauseText", label);
        if let Ok(Some(el)) = self.document.query_selector("#playPauseBtn .material-icons") {
            el.set_text_content(Some(icon));
        }
        self.set_text("trailText", view::trail_label(readout.trail_enabled));
    }
}

/// Read the page's JSON config block, falling back to defaults when it is
/// missing or malformed.
pub fn read_config(document: &Document) -> SimConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return SimConfig::default();
    };
    if json.trim().is_empty() {
        return SimConfig::default();
    }
    match SimConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            console_warn!("Ignoring malformed #{CONFIG_ID}: {e}");
            SimConfig::default()
        },
    }
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}
