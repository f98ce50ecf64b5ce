//! Animated capacitor-charge figure: a rolling window that accumulates
//! a fixed charge per frame until reset.

use crate::animation::{PlayState, Tick, Transport, now_ms, spawn_frame_loop};
use crate::grapher::{DEFAULT_TRACE_COLOR, Grapher};
use crate::series::SampleSeries;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Charge added per animation frame.
const SPEED: f64 = 0.003;
/// Samples in the rolling time window.
const WINDOW: usize = 500;

struct DischargeInner {
    grapher: Grapher,
    transport: Transport,
    value: f64,
    data: SampleSeries,
}

impl DischargeInner {
    fn draw(&mut self) {
        self.value += SPEED;
        self.data.push(self.value);
        self.grapher.clear();
        let data = &self.data;
        self.grapher
            .plot_function(|t| data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.draw_frame();
    }
}

impl Tick for DischargeInner {
    fn tick(&mut self, _timestamp: f64) -> bool {
        self.draw();
        self.transport.is_playing()
    }
}

/// Handle for the charge accumulation figure.
#[wasm_bindgen]
pub struct DischargeDemo {
    inner: Rc<RefCell<DischargeInner>>,
}

#[wasm_bindgen]
impl DischargeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<DischargeDemo, JsValue> {
        let inner = Rc::new(RefCell::new(DischargeInner {
            grapher: Grapher::new(canvas_id)?,
            transport: Transport::new(),
            value: 0.0,
            data: SampleSeries::new(WINDOW),
        }));
        inner.borrow_mut().draw();
        Ok(DischargeDemo { inner })
    }

    /// Toggle playback; returns true when now playing so the page can
    /// relabel its start/stop button.
    pub fn toggle(&self) -> bool {
        let playing =
            self.inner.borrow_mut().transport.toggle(now_ms()) == PlayState::Playing;
        if playing {
            spawn_frame_loop(self.inner.clone());
        }
        playing
    }

    /// Zero the accumulated charge. The window itself keeps scrolling.
    pub fn reset(&self) {
        self.inner.borrow_mut().value = 0.0;
    }

    /// Stop when the figure scrolls out of view; only `toggle` restarts.
    pub fn suspend(&self) {
        self.inner.borrow_mut().transport.stop();
    }
}
