//! Oscillator figures from the DCO article: the plain VCO, clock and
//! pulse-width waveforms, and the clocked-integrator DCO variants.

use crate::curves::{clock_level, saw};
use crate::demos::params::{FrequencyParams, PulseParams, VoltageParams};
use crate::grapher::{DEFAULT_TRACE_COLOR, Grapher};
use crate::series::SampleSeries;
use crate::sim::{charge_v_for_frequency, dco_ramp, vco_wave};
use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

const SAW_COLOR: &str = "#7D61BA";
const DUTY_LINE_COLOR: &str = "#c35b7d";

/// Samples in the simulated waveform windows.
const WINDOW: usize = 1000;

/// Voltage-controlled oscillator: the integrator ramp wrapped into a
/// sawtooth whose pitch follows the control voltage.
#[wasm_bindgen]
pub struct VcoDemo {
    grapher: Grapher,
}

#[wasm_bindgen]
impl VcoDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<VcoDemo, JsValue> {
        Ok(VcoDemo {
            grapher: Grapher::new(canvas_id)?,
        })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: VoltageParams = serde_wasm_bindgen::from_value(params)?;
        self.grapher.clear();
        self.grapher
            .plot_function(|t| vco_wave(params.voltage, t), DEFAULT_TRACE_COLOR);
        self.grapher
            .draw_info(&format!("Control voltage: {}", params.voltage));
        self.grapher.draw_frame();
        Ok(())
    }
}

/// A bare square clock at the selected frequency.
#[wasm_bindgen]
pub struct ClockDemo {
    grapher: Grapher,
}

#[wasm_bindgen]
impl ClockDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ClockDemo, JsValue> {
        Ok(ClockDemo {
            grapher: Grapher::new(canvas_id)?,
        })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: FrequencyParams = serde_wasm_bindgen::from_value(params)?;
        self.grapher.clear();
        self.grapher.plot_function(
            |t| clock_level(params.frequency, t, 0.5),
            DEFAULT_TRACE_COLOR,
        );
        self.grapher.draw_frame();
        Ok(())
    }
}

/// Pulse-width modulation: a sawtooth compared against a duty threshold
/// produces the pulse train. The threshold is drawn as a dashed line.
#[wasm_bindgen]
pub struct PulseDemo {
    grapher: Grapher,
}

#[wasm_bindgen]
impl PulseDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PulseDemo, JsValue> {
        Ok(PulseDemo {
            grapher: Grapher::new(canvas_id)?,
        })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: PulseParams = serde_wasm_bindgen::from_value(params)?;
        self.grapher.clear();
        self.grapher
            .plot_function(|t| saw(params.frequency, t), SAW_COLOR);
        self.grapher.plot_function(
            |t| clock_level(params.frequency, t, params.duty),
            DEFAULT_TRACE_COLOR,
        );

        // Duty threshold across the frame, in the saw's value space.
        let ctx = self.grapher.context();
        let frame = self.grapher.frame();
        let y = frame.top_left_y + frame.height * (1.0 - params.duty);
        ctx.set_stroke_style_str(DUTY_LINE_COLOR);
        ctx.set_line_dash(&Array::of2(&JsValue::from(15.0), &JsValue::from(20.0)))
            .ok();
        ctx.begin_path();
        ctx.move_to(frame.top_left_x, y);
        ctx.line_to(frame.top_right_x, y);
        ctx.stroke();
        ctx.close_path();
        ctx.set_line_dash(&Array::new()).ok();

        self.grapher.draw_frame();
        Ok(())
    }
}

/// The naive DCO core: an integrator ramp reset by the clock, with a
/// fixed charge voltage. Amplitude falls as the clock speeds up.
#[wasm_bindgen]
pub struct DcoDemo {
    grapher: Grapher,
    data: SampleSeries,
}

#[wasm_bindgen]
impl DcoDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<DcoDemo, JsValue> {
        Ok(DcoDemo {
            grapher: Grapher::new(canvas_id)?,
            data: SampleSeries::new(WINDOW),
        })
    }

    pub fn draw(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: FrequencyParams = serde_wasm_bindgen::from_value(params)?;
        dco_ramp(params.frequency / 10.0, 1.0, true, self.data.as_mut_slice());

        self.grapher.clear();
        let data = &self.data;
        self.grapher
            .plot_function(|t| data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.draw_frame();
        Ok(())
    }
}

/// The Juno 106 DCO: charge voltage scaled with frequency so the ramp
/// amplitude stays constant across pitch.
#[wasm_bindgen]
pub struct Juno106Demo {
    grapher: Grapher,
    data: SampleSeries,
}

#[wasm_bindgen]
impl Juno106Demo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Juno106Demo, JsValue> {
        Ok(Juno106Demo {
            grapher: Grapher::new(canvas_id)?,
            data: SampleSeries::new(WINDOW),
        })
    }

    pub fn draw(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: FrequencyParams = serde_wasm_bindgen::from_value(params)?;
        let charge = charge_v_for_frequency(params.frequency);
        dco_ramp(params.frequency, charge, true, self.data.as_mut_slice());

        self.grapher.clear();
        let data = &self.data;
        self.grapher
            .plot_function(|t| data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.draw_frame();
        Ok(())
    }
}

/// The Juno 6 DCO: the non-inverting charge configuration, plotted
/// offset by one so the falling ramp reads upward from the axis.
#[wasm_bindgen]
pub struct Juno6Demo {
    grapher: Grapher,
    data: SampleSeries,
}

#[wasm_bindgen]
impl Juno6Demo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Juno6Demo, JsValue> {
        Ok(Juno6Demo {
            grapher: Grapher::new(canvas_id)?,
            data: SampleSeries::new(WINDOW),
        })
    }

    pub fn draw(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: FrequencyParams = serde_wasm_bindgen::from_value(params)?;
        let charge = charge_v_for_frequency(params.frequency);
        dco_ramp(params.frequency, charge, false, self.data.as_mut_slice());

        self.grapher.clear();
        let data = &self.data;
        self.grapher
            .plot_function(|t| 1.0 + data.value_at(t), DEFAULT_TRACE_COLOR);
        self.grapher.draw_frame();
        Ok(())
    }
}
