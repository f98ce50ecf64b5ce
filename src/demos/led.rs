//! LED brightness figures: gamma correction and why LED dimming wants
//! an exponential response.

use crate::curves::gamma_encode;
use crate::demos::params::BrightnessParams;
use crate::grapher::{Grapher, resolve_canvas};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The LED's color at full brightness, as rgba components.
const LED_RGB: &str = "79, 146, 255";

fn fill_black(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("black");
    ctx.begin_path();
    ctx.rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.fill();
}

fn led_color(alpha: f64) -> String {
    format!("rgba({LED_RGB}, {alpha})")
}

fn draw_disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, alpha: f64) {
    ctx.set_fill_style_str(&led_color(alpha));
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
}

/// A single LED disc whose opacity is the gamma-decoded brightness.
/// Display systems store colors gamma-encoded, so showing a "linear"
/// brightness means undoing the monitor's 2.2 gamma first.
#[wasm_bindgen]
pub struct LedGammaDemo {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl LedGammaDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<LedGammaDemo, JsValue> {
        let (canvas, ctx) = resolve_canvas(canvas_id)?;
        Ok(LedGammaDemo { canvas, ctx })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: BrightnessParams = serde_wasm_bindgen::from_value(params)?;
        fill_black(&self.canvas, &self.ctx);

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let alpha = gamma_encode(params.brightness, 2.2);
        draw_disc(&self.ctx, w / 2.0, h / 2.0, w / 5.0, alpha);
        Ok(())
    }
}

/// Side-by-side pair: gamma-corrected brightness on the left, the same
/// value squared back down (the exponential dimming response) on the
/// right.
#[wasm_bindgen]
pub struct LedCompareDemo {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl LedCompareDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<LedCompareDemo, JsValue> {
        let (canvas, ctx) = resolve_canvas(canvas_id)?;
        Ok(LedCompareDemo { canvas, ctx })
    }

    pub fn draw(&self, params: JsValue) -> Result<(), JsValue> {
        let params: BrightnessParams = serde_wasm_bindgen::from_value(params)?;
        fill_black(&self.canvas, &self.ctx);

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let gamma_brightness = gamma_encode(params.brightness, 2.0);
        let expo_brightness = gamma_brightness.powi(2);

        draw_disc(&self.ctx, w / 4.0, h / 2.0, w / 5.0, gamma_brightness);
        draw_disc(&self.ctx, w / 4.0 * 3.0, h / 2.0, w / 5.0, expo_brightness);
        Ok(())
    }
}

/// Static strip of eleven brightness steps, gamma-corrected on the top
/// row and exponential on the bottom. Draws once at construction.
#[wasm_bindgen]
pub struct LedStripDemo {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl LedStripDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<LedStripDemo, JsValue> {
        let (canvas, ctx) = resolve_canvas(canvas_id)?;
        let demo = LedStripDemo { canvas, ctx };
        demo.draw();
        Ok(demo)
    }

    pub fn draw(&self) {
        fill_black(&self.canvas, &self.ctx);

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let padding = w / 15.0;
        let radius = w / 23.0;

        let mut i = 0.0;
        while i <= 1.0 {
            let gamma_brightness = gamma_encode(i, 2.0);
            let expo_brightness = gamma_brightness.powi(2);
            let x = padding + (w - padding * 2.0) * i;

            draw_disc(&self.ctx, x, h / 4.0, radius, gamma_brightness);
            draw_disc(&self.ctx, x, h / 4.0 * 3.0, radius, expo_brightness);
            i += 0.1;
        }
    }
}

/// Static grapher figure comparing the linear response to the squared
/// one. Draws once at construction.
#[wasm_bindgen]
pub struct LedCurvesDemo {
    grapher: Grapher,
}

#[wasm_bindgen]
impl LedCurvesDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<LedCurvesDemo, JsValue> {
        let mut grapher = Grapher::new(canvas_id)?;
        grapher.set_labels("input", "output");
        let demo = LedCurvesDemo { grapher };
        demo.draw();
        Ok(demo)
    }

    pub fn draw(&self) {
        self.grapher.clear();
        self.grapher.plot_function(|t| t, "rgb(255, 0, 127)");
        self.grapher.plot_function(|t| t.powi(2), "rgb(0, 127, 255)");
        self.grapher.draw_frame();
    }
}
