//! The coordinate-mapped function plotter.
//!
//! A `Grapher` owns one canvas and its 2D context, maps normalized
//! function output to frame pixels, and draws the axis decoration the
//! article figures share. Drawing failures inside a frame are discarded;
//! the surface is redrawn from scratch on the next input anyway.

use crate::error::GrapherError;
use crate::frame::{Frame, PADDING_X};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Default trace color.
pub const DEFAULT_TRACE_COLOR: &str = "#408C94";
/// Default marker color for `plot_crossing`.
pub const DEFAULT_CROSSING_COLOR: &str = "rgb(66, 155, 245)";
/// Default marker radius for `plot_crossing`.
pub const DEFAULT_CROSSING_SIZE: f64 = 15.0;

const AXIS_COLOR: &str = "#333333";
const ZERO_LINE_COLOR: &str = "#AAAAAA";
const TICK_COLOR: &str = "#888888";

const PRIMARY_FONT: &str = "italic 25px 'IBM Plex Mono'";
const ALT_FONT: &str = "25px 'IBM Plex Mono'";
const INFO_FONT: &str = "italic 30px 'IBM Plex Mono'";

/// Measured text bounding box, in the four directions from the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    pub left: f64,
    pub right: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// Parameters for the background-masking erasure drawn behind text.
///
/// The width/height multipliers are deliberately caller-configurable;
/// the figures use different values per label position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMask {
    pub line_width: f64,
    pub alpha: f64,
    pub blur: f64,
    pub x_mult: f64,
    pub y_mult: f64,
}

impl Default for TextMask {
    fn default() -> Self {
        TextMask {
            line_width: 20.0,
            alpha: 0.8,
            blur: 100.0,
            x_mult: 2.0,
            y_mult: 1.0,
        }
    }
}

/// Erasure rectangle for a text anchor and its measured extents:
/// (x, y, width, height). Scales with the measured bounding box, so
/// longer labels always get a larger erasure.
pub fn mask_rect(
    x: f64,
    y: f64,
    extents: TextExtents,
    x_mult: f64,
    y_mult: f64,
) -> (f64, f64, f64, f64) {
    (
        x - extents.left * x_mult,
        y - extents.ascent * y_mult,
        (extents.left.abs() + extents.right.abs()) * x_mult,
        (extents.ascent + extents.descent) * y_mult,
    )
}

/// Resolve a canvas element and its 2D context by element id, failing
/// fast when the surface cannot be obtained.
pub(crate) fn resolve_canvas(
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), GrapherError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(GrapherError::ContextUnavailable)?;
    let element = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GrapherError::ElementNotFound(canvas_id.to_string()))?;
    let canvas: HtmlCanvasElement = element
        .dyn_into()
        .map_err(|_| GrapherError::NotACanvas(canvas_id.to_string()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| GrapherError::ContextUnavailable)?
        .ok_or(GrapherError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GrapherError::ContextUnavailable)?;
    Ok((canvas, ctx))
}

/// Coordinate-mapped function plotter over one canvas.
pub struct Grapher {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frame: Frame,
    centered: bool,
    x_label: String,
    y_label: String,
}

impl Grapher {
    /// Build a grapher for the canvas with the given element id,
    /// deriving the frame from the canvas's current pixel dimensions.
    pub fn new(canvas_id: &str) -> Result<Grapher, GrapherError> {
        let (canvas, ctx) = resolve_canvas(canvas_id)?;
        let frame = Frame::new(canvas.width() as f64, canvas.height() as f64);

        ctx.set_stroke_style_str("teal");
        ctx.set_line_width(8.0);
        ctx.set_line_join("round");
        ctx.set_line_cap("round");

        Ok(Grapher {
            canvas,
            ctx,
            frame,
            centered: false,
            x_label: "time".to_string(),
            y_label: "output".to_string(),
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Raw context access for figures that add their own decoration,
    /// like the pulse demo's duty threshold line.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Toggle bipolar (centered) mapping. Affects future draws only.
    pub fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    /// Override the default axis labels used by `draw_frame`.
    pub fn set_labels(&mut self, x_label: &str, y_label: &str) {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
    }

    /// Erase the entire surface.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    /// Stroke `f` over the domain [0, 1] as one connected polyline,
    /// sampling once per horizontal frame pixel. Repeated calls overlay
    /// independent traces without clearing earlier ones.
    pub fn plot_function(&self, f: impl Fn(f64) -> f64, color: &str) {
        let mapping = self.frame.mapping(self.centered);
        let step = self.frame.step();

        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        let mut t = 0.0;
        let mut first = true;
        while t <= 1.0 {
            let (x, y) = mapping.map(t, f(t));
            if first {
                self.ctx.move_to(x, y);
                first = false;
            } else {
                self.ctx.line_to(x, y);
            }
            t += step;
        }
        self.ctx.stroke();
    }

    /// Filled circular marker at the mapped position of one (domain,
    /// value) pair; marks the current state in animated figures.
    pub fn plot_crossing(&self, x_in: f64, y_in: f64, color: &str, size: f64) {
        let mapping = self.frame.mapping(self.centered);
        let x = mapping.x(x_in);
        let y = mapping.y_raw(y_in);

        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.arc(x, y, size, 0.0, std::f64::consts::TAU).ok();
        self.ctx.fill();
    }

    /// Draw the L-shaped axis frame: bottom and left edges with filled
    /// arrowheads, background-masked labels, and in centered mode the
    /// dashed zero line with its +/0/- legend.
    pub fn draw_frame(&self) {
        let ctx = &self.ctx;
        let f = &self.frame;

        ctx.save();
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_line_width(2.0);
        ctx.set_font(PRIMARY_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        ctx.begin_path();
        ctx.move_to(f.bottom_left_x, f.bottom_left_y);
        ctx.line_to(f.bottom_right_x, f.bottom_right_y);
        ctx.close_path();
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(f.bottom_right_x - 20.0, f.bottom_right_y);
        ctx.line_to(f.bottom_right_x - 30.0, f.bottom_right_y - 10.0);
        ctx.line_to(f.bottom_right_x, f.bottom_right_y);
        ctx.line_to(f.bottom_right_x - 30.0, f.bottom_right_y + 10.0);
        ctx.line_to(f.bottom_right_x - 20.0, f.bottom_right_y);
        ctx.close_path();
        ctx.fill();

        let x_label_x = f.bottom_left_x + f.width / 2.0;
        self.clear_text_area(x_label_x, f.bottom_left_y, &self.x_label, TextMask::default());
        ctx.fill_text(&self.x_label, x_label_x, f.bottom_left_y).ok();

        ctx.begin_path();
        ctx.move_to(f.bottom_left_x, f.bottom_left_y);
        ctx.line_to(f.top_left_x, f.top_left_y);
        ctx.close_path();
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(f.top_left_x, f.top_left_y + 20.0);
        ctx.line_to(f.top_left_x - 10.0, f.top_left_y + 30.0);
        ctx.line_to(f.top_left_x, f.top_left_y);
        ctx.line_to(f.top_left_x + 10.0, f.top_left_y + 30.0);
        ctx.line_to(f.top_left_x, f.top_left_y + 20.0);
        ctx.close_path();
        ctx.fill();

        if self.centered {
            let mid = f.top_left_y + f.height / 2.0;
            ctx.set_stroke_style_str(ZERO_LINE_COLOR);
            ctx.begin_path();
            ctx.set_line_dash(&Array::of2(&JsValue::from(5.0), &JsValue::from(20.0)))
                .ok();
            ctx.move_to(f.top_left_x, mid);
            ctx.line_to(f.bottom_right_x, mid);
            ctx.close_path();
            ctx.stroke();
            ctx.set_line_dash(&Array::new()).ok();

            let tick_x = f.top_right_x - PADDING_X / 2.0;
            self.mask_out(tick_x, mid, 30.0, 80.0);
            ctx.set_fill_style_str(TICK_COLOR);
            ctx.set_font(ALT_FONT);
            ctx.fill_text("+", tick_x, mid - 60.0).ok();
            ctx.fill_text("0", tick_x, mid).ok();
            ctx.fill_text("-", tick_x, mid + 60.0).ok();
            ctx.set_font(PRIMARY_FONT);
        }

        // The y label is drawn rotated about a point just left of the
        // frame; the transform must be identity again on return.
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.translate(f.top_left_x - 2.0, f.top_left_y + f.height / 2.0 + 5.0)
            .ok();
        ctx.rotate(-std::f64::consts::FRAC_PI_2).ok();
        self.clear_text_area(
            0.0,
            0.0,
            &self.y_label,
            TextMask {
                x_mult: 1.5,
                ..TextMask::default()
            },
        );
        ctx.fill_text(&self.y_label, 0.0, 0.0).ok();
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();

        ctx.restore();
    }

    /// One italic line of informational text at the frame's top-left
    /// inset, background-masked so traces underneath stay legible.
    pub fn draw_info(&self, text: &str) {
        let ctx = &self.ctx;
        ctx.set_font(INFO_FONT);
        ctx.set_text_baseline("top");
        ctx.set_text_align("left");
        self.clear_text_area(
            self.frame.top_left_x + PADDING_X,
            self.frame.top_left_y,
            text,
            TextMask {
                x_mult: 1.0,
                y_mult: 1.0,
                ..TextMask::default()
            },
        );
        ctx.set_fill_style_str("black");
        ctx.fill_text(text, self.frame.top_left_x + PADDING_X, self.frame.top_left_y)
            .ok();
    }

    /// Soft radial erasure disc, used to open a window in existing
    /// traces before drawing the zero-line tick legend.
    pub fn mask_out(&self, x: f64, y: f64, size: f64, extent: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_composite_operation("destination-out").ok();
        if let Ok(gradient) = ctx.create_radial_gradient(x, y, size, x, y, extent) {
            gradient.add_color_stop(0.0, "rgba(0, 0, 0, 1)").ok();
            gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)").ok();
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        ctx.begin_path();
        ctx.arc(x, y, extent, 0.0, std::f64::consts::TAU).ok();
        ctx.close_path();
        ctx.fill();
        ctx.set_global_composite_operation("source-over").ok();
        ctx.restore();
    }

    /// Partially erase whatever sits behind a text run before drawing
    /// it: a destination-out fill and soft-edged stroke over a rectangle
    /// sized from the measured text bounding box.
    pub fn clear_text_area(&self, x: f64, y: f64, text: &str, mask: TextMask) {
        let Ok(metrics) = self.ctx.measure_text(text) else {
            return;
        };
        let extents = TextExtents {
            left: metrics.actual_bounding_box_left(),
            right: metrics.actual_bounding_box_right(),
            ascent: metrics.actual_bounding_box_ascent(),
            descent: metrics.actual_bounding_box_descent(),
        };
        let (rx, ry, rw, rh) = mask_rect(x, y, extents, mask.x_mult, mask.y_mult);

        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_composite_operation("destination-out").ok();
        ctx.set_line_width(mask.line_width);
        ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", mask.alpha));
        ctx.set_fill_style_str("black");
        ctx.set_shadow_color("black");
        ctx.set_shadow_blur(mask.blur);
        ctx.begin_path();
        ctx.rect(rx, ry, rw, rh);
        ctx.fill();
        ctx.stroke();
        ctx.close_path();
        ctx.set_global_composite_operation("source-over").ok();
        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_rect_tracks_text_extents() {
        let extents = TextExtents {
            left: 40.0,
            right: 40.0,
            ascent: 10.0,
            descent: 4.0,
        };
        let (x, y, w, h) = mask_rect(100.0, 50.0, extents, 2.0, 1.0);
        assert_eq!(x, 100.0 - 80.0);
        assert_eq!(y, 50.0 - 10.0);
        assert_eq!(w, 160.0);
        assert_eq!(h, 14.0);
    }

    #[test]
    fn longer_text_never_shrinks_the_mask() {
        let short = TextExtents {
            left: 20.0,
            right: 20.0,
            ascent: 10.0,
            descent: 4.0,
        };
        let long = TextExtents {
            left: 40.0,
            right: 40.0,
            ascent: 10.0,
            descent: 4.0,
        };
        let (_, _, w1, h1) = mask_rect(0.0, 0.0, short, 2.0, 1.0);
        let (_, _, w2, h2) = mask_rect(0.0, 0.0, long, 2.0, 1.0);
        assert!(w2 >= 2.0 * w1 - 1e-9, "doubled text must not shrink the mask");
        assert_eq!(h1, h2);
    }

    #[test]
    fn mask_multipliers_scale_the_rect() {
        let extents = TextExtents {
            left: 10.0,
            right: 30.0,
            ascent: 8.0,
            descent: 2.0,
        };
        let (_, _, w1, h1) = mask_rect(0.0, 0.0, extents, 1.0, 1.0);
        let (_, _, w2, h2) = mask_rect(0.0, 0.0, extents, 1.5, 2.0);
        assert!((w2 - w1 * 1.5).abs() < 1e-12);
        assert!((h2 - h1 * 2.0).abs() < 1e-12);
    }
}
