//! RC circuit figures: the op-amp integrator and the RC differentiator
//! that turns a clock into reset pulses.

use crate::curves::{clock_level, vout_at_time};
use crate::demos::params::{IntegratorParams, RcParams};
use crate::grapher::{DEFAULT_TRACE_COLOR, Grapher};
use crate::series::SampleSeries;
use crate::sim::{rc_differentiator, transistor_clamp};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

const CLOCK_COLOR: &str = "#C7B8ED";
const CLAMP_COLOR: &str = "#c35b7d";

/// Samples in the simulated time window.
const WINDOW: usize = 500;
/// Clock swing driving the transistor variant, in volts.
const CLOCK_VOLTAGE: f64 = 5.0;

/// Op-amp integrator response to a constant input voltage.
#[wasm_bindgen]
pub struct IntegratorDemo {
    grapher: Grapher,
}

#[wasm_bindgen]
impl IntegratorDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<IntegratorDemo, JsValue> {
        let mut grapher = Grapher::new(canvas_id)?;
        grapher.set_centered(true);
        Ok(IntegratorDemo { grapher })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: IntegratorParams = serde_wasm_bindgen::from_value(params)?;
        self.grapher.clear();
        self.grapher.plot_function(
            |t| vout_at_time(params.voltage, params.resistance, params.capacitance, t),
            DEFAULT_TRACE_COLOR,
        );
        self.grapher.draw_frame();
        self.grapher
            .draw_info(&format!("Input voltage: {}", params.voltage));
        Ok(())
    }
}

/// RC differentiator fed by a square clock: edge spikes decaying at the
/// RC rate, plotted over the clock itself.
#[wasm_bindgen]
pub struct RcDiffDemo {
    grapher: Grapher,
    data: SampleSeries,
}

#[wasm_bindgen]
impl RcDiffDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<RcDiffDemo, JsValue> {
        let mut grapher = Grapher::new(canvas_id)?;
        grapher.set_centered(true);
        Ok(RcDiffDemo {
            grapher,
            data: SampleSeries::new(WINDOW),
        })
    }

    pub fn draw(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: RcParams = serde_wasm_bindgen::from_value(params)?;
        let rc = params.capacitance * params.resistance;
        rc_differentiator(params.frequency, rc, self.data.as_mut_slice());

        self.grapher.clear();
        self.grapher
            .plot_function(|t| clock_level(params.frequency, t, 0.5), CLOCK_COLOR);
        let data = &self.data;
        self.grapher
            .plot_function(|t| data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.draw_frame();
        Ok(())
    }
}

/// The differentiator driving a transistor switch: the base-emitter
/// junction clamps the positive spikes to 0.7 V and discards the rest.
#[wasm_bindgen]
pub struct RcDiffTransistorDemo {
    grapher: Grapher,
    data: SampleSeries,
}

#[wasm_bindgen]
impl RcDiffTransistorDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<RcDiffTransistorDemo, JsValue> {
        let mut grapher = Grapher::new(canvas_id)?;
        grapher.set_centered(true);
        Ok(RcDiffTransistorDemo {
            grapher,
            data: SampleSeries::new(WINDOW),
        })
    }

    pub fn draw(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: RcParams = serde_wasm_bindgen::from_value(params)?;
        let rc = params.capacitance * params.resistance;
        rc_differentiator(params.frequency, rc, self.data.as_mut_slice());

        self.grapher.clear();
        let data = &self.data;
        self.grapher
            .plot_function(|t| data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.plot_function(
            |t| transistor_clamp(data.value_at(t) * CLOCK_VOLTAGE),
            CLAMP_COLOR,
        );
        self.grapher.draw_frame();
        Ok(())
    }
}
