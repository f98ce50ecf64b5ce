//! Easing-function visualizer: a graph of the selected curve next to a
//! dot race comparing linear and eased motion.

use crate::animation::{Tick, Transport, cycle_fraction, now_ms, spawn_frame_loop};
use crate::curves::Easing;
use crate::demos::params::EasingParams;
use crate::grapher::{DEFAULT_CROSSING_COLOR, DEFAULT_CROSSING_SIZE, Grapher, resolve_canvas};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LINEAR_COLOR: &str = "rgb(255, 0, 127)";
const EASED_COLOR: &str = "rgb(0, 127, 255)";

struct EasingInner {
    grapher: Grapher,
    anim_canvas: HtmlCanvasElement,
    anim_ctx: CanvasRenderingContext2d,
    easing: Easing,
    transport: Transport,
    last_t: f64,
}

impl EasingInner {
    fn draw_graph(&self, t: f64) {
        self.grapher.clear();
        self.grapher.plot_function(|t| t, LINEAR_COLOR);
        let easing = self.easing;
        self.grapher.plot_function(|t| easing.apply(t), EASED_COLOR);
        self.grapher.plot_crossing(
            t,
            easing.apply(t),
            DEFAULT_CROSSING_COLOR,
            DEFAULT_CROSSING_SIZE,
        );
        self.grapher.draw_frame();
    }

    fn draw_animation(&mut self, t: f64) {
        self.last_t = t;
        let w = self.anim_canvas.width() as f64;
        let h = self.anim_canvas.height() as f64;
        let padding = w / 15.0;
        let radius = w / 23.0;
        let x1 = padding + (w - padding * 2.0) * t;
        let x2 = padding + (w - padding * 2.0) * self.easing.apply(t);

        self.anim_ctx.clear_rect(0.0, 0.0, w, h);

        self.anim_ctx.set_fill_style_str(LINEAR_COLOR);
        self.anim_ctx.begin_path();
        self.anim_ctx
            .arc(x1, h / 4.0, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.anim_ctx.fill();

        self.anim_ctx.set_fill_style_str(EASED_COLOR);
        self.anim_ctx.begin_path();
        self.anim_ctx
            .arc(x2, h / 4.0 * 3.0, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.anim_ctx.fill();

        self.draw_graph(t);
    }
}

impl Tick for EasingInner {
    fn tick(&mut self, timestamp: f64) -> bool {
        let t = cycle_fraction(self.transport.elapsed(timestamp));
        self.draw_animation(t);
        self.transport.is_playing()
    }
}

/// The easing visualizer handle. `graph_canvas_id` shows the curve and
/// current-position marker, `anim_canvas_id` the dot race.
#[wasm_bindgen]
pub struct EasingDemo {
    inner: Rc<RefCell<EasingInner>>,
}

#[wasm_bindgen]
impl EasingDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(graph_canvas_id: &str, anim_canvas_id: &str) -> Result<EasingDemo, JsValue> {
        let mut grapher = Grapher::new(graph_canvas_id)?;
        grapher.set_labels("input", "output");
        let (anim_canvas, anim_ctx) = resolve_canvas(anim_canvas_id)?;

        let inner = Rc::new(RefCell::new(EasingInner {
            grapher,
            anim_canvas,
            anim_ctx,
            easing: Easing::InQuad,
            transport: Transport::new(),
            last_t: 0.0,
        }));
        inner.borrow_mut().draw_animation(0.0);

        Ok(EasingDemo { inner })
    }

    /// Swap the easing from the form selection and redraw at the
    /// current sweep position. Unknown names keep the previous curve.
    pub fn update(&self, params: JsValue) -> Result<(), JsValue> {
        let params: EasingParams = serde_wasm_bindgen::from_value(params)?;
        let mut inner = self.inner.borrow_mut();
        if let Some(easing) = params.easing.as_deref().and_then(Easing::parse) {
            inner.easing = easing;
        }
        let t = inner.last_t;
        inner.draw_animation(t);
        Ok(())
    }

    /// Toggle playback; returns true when now playing so the page can
    /// relabel its button.
    pub fn toggle(&self) -> bool {
        let playing = self
            .inner
            .borrow_mut()
            .transport
            .toggle(now_ms())
            == crate::animation::PlayState::Playing;
        if playing {
            spawn_frame_loop(self.inner.clone());
        }
        playing
    }

    /// Stop when the figure scrolls out of view. Playback never resumes
    /// on its own; only `toggle` restarts it.
    pub fn suspend(&self) {
        self.inner.borrow_mut().transport.stop();
    }
}
