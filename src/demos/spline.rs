//! Bezier-spline response figure: a reference cubic against a
//! five-segment spline with adjustable nonlinearity, plus "heatmap"
//! strips showing where a slider position lands before and after the
//! response curve.

use crate::curves::{bezier_1d, bezier_spline, make_segment};
use crate::demos::params::SplineParams;
use crate::grapher::{Grapher, resolve_canvas};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const REFERENCE_COLOR: &str = "rgb(255, 0, 127)";
const SPLINE_COLOR: &str = "rgb(0, 127, 255)";
const INPUT_RGB: &str = "255, 0, 127";
const OUTPUT_RGB: &str = "0, 127, 255";

/// Circles drawn per heatmap strip.
const HEATMAP_ITERATIONS: usize = 40;

/// Concentric response strip: one circle per input step, positioned by
/// the response function and faded with distance from the selected
/// slider value.
fn draw_response_heatmap(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    rgb: &str,
    func: impl Fn(f64) -> f64,
    selected: f64,
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let radius = h * 0.4;
    let padding = radius * 1.3;

    ctx.set_line_width(2.2);
    ctx.clear_rect(0.0, 0.0, w, h);

    for n in 0..=HEATMAP_ITERATIONS {
        let progress = n as f64 / HEATMAP_ITERATIONS as f64;
        let output = func(progress);
        let alpha = (1.0 - (progress - selected).abs() * 20.0).max(0.2);
        ctx.set_stroke_style_str(&format!("rgba({rgb}, {alpha})"));
        ctx.begin_path();
        ctx.arc(
            padding + output * (w - padding * 2.0),
            h / 2.0,
            radius,
            0.0,
            std::f64::consts::TAU,
        )
        .ok();
        ctx.stroke();
    }
}

/// The five-segment spline with control points pulled toward the
/// segment ends by the nonlinearity fraction.
fn spline_segments(nonlinearity: f64) -> [crate::curves::Segment; 5] {
    [
        make_segment(0.0, nonlinearity, 1.0 - nonlinearity, 0.2),
        make_segment(0.2, nonlinearity, 1.0 - nonlinearity, 0.2),
        make_segment(0.4, nonlinearity, 1.0 - nonlinearity, 0.2),
        make_segment(0.6, nonlinearity, 1.0 - nonlinearity, 0.2),
        make_segment(0.8, nonlinearity, 1.0 - nonlinearity, 0.2),
    ]
}

/// Handle for the spline response figure and its two heatmap strips.
#[wasm_bindgen]
pub struct SplineDemo {
    grapher: Grapher,
    input_canvas: HtmlCanvasElement,
    input_ctx: CanvasRenderingContext2d,
    output_canvas: HtmlCanvasElement,
    output_ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl SplineDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(
        graph_canvas_id: &str,
        input_canvas_id: &str,
        output_canvas_id: &str,
    ) -> Result<SplineDemo, JsValue> {
        let mut grapher = Grapher::new(graph_canvas_id)?;
        grapher.set_labels("input", "output");
        let (input_canvas, input_ctx) = resolve_canvas(input_canvas_id)?;
        let (output_canvas, output_ctx) = resolve_canvas(output_canvas_id)?;
        Ok(SplineDemo {
            grapher,
            input_canvas,
            input_ctx,
            output_canvas,
            output_ctx,
        })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: SplineParams = serde_wasm_bindgen::from_value(params)?;
        let segments = spline_segments(params.nonlinearity);

        self.grapher.clear();
        self.grapher
            .plot_function(|t| bezier_1d(0.0, 0.4, 0.6, 1.0, t), REFERENCE_COLOR);
        self.grapher
            .plot_function(|t| bezier_spline(&segments, t), SPLINE_COLOR);
        self.grapher.draw_frame();

        draw_response_heatmap(
            &self.input_canvas,
            &self.input_ctx,
            INPUT_RGB,
            |t| t,
            params.slider,
        );
        draw_response_heatmap(
            &self.output_canvas,
            &self.output_ctx,
            OUTPUT_RGB,
            |t| bezier_spline(&segments, t),
            params.slider,
        );
        Ok(())
    }
}
