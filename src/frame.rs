//! Frame geometry and the normalized-to-pixel coordinate transform.
//!
//! All plotting math lives here so it can be tested off the wasm target;
//! the grapher itself only strokes the coordinates this module produces.

/// Horizontal padding between the canvas edge and the frame, in pixels.
pub const PADDING_X: f64 = 30.0;
/// Vertical padding between the canvas edge and the frame, in pixels.
pub const PADDING_Y: f64 = 30.0;
/// Inward offset that keeps traces clear of the axis lines.
pub const GRAPH_OFFSET: f64 = 10.0;

/// The padded rectangular plot region, derived once from the surface's
/// pixel dimensions at construction time. No live resize handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub bottom_left_x: f64,
    pub bottom_left_y: f64,
    pub bottom_right_x: f64,
    pub bottom_right_y: f64,
    pub top_left_x: f64,
    pub top_left_y: f64,
    pub top_right_x: f64,
    pub top_right_y: f64,
    pub width: f64,
    pub height: f64,
    pub graph_offset: f64,
}

impl Frame {
    pub fn new(surface_width: f64, surface_height: f64) -> Frame {
        let bottom_left_x = PADDING_X;
        let bottom_left_y = surface_height - PADDING_Y;
        let bottom_right_x = surface_width - PADDING_X;
        let top_left_y = PADDING_Y;
        Frame {
            bottom_left_x,
            bottom_left_y,
            bottom_right_x,
            bottom_right_y: bottom_left_y,
            top_left_x: bottom_left_x,
            top_left_y,
            top_right_x: bottom_right_x,
            top_right_y: top_left_y,
            width: bottom_right_x - bottom_left_x,
            height: bottom_left_y - top_left_y,
            graph_offset: GRAPH_OFFSET,
        }
    }

    /// Domain step that yields one sample per horizontal frame pixel.
    /// This sets the visual smoothness of every plotted trace.
    pub fn step(&self) -> f64 {
        1.0 / self.width
    }

    /// The frame's vertical midpoint, which is the origin in centered mode.
    pub fn mid_y(&self) -> f64 {
        self.top_left_y + self.height / 2.0
    }

    /// Build the active coordinate transform for the given plot mode.
    pub fn mapping(&self, centered: bool) -> Mapping {
        let (origin, scale, left) = if centered {
            (self.height / 2.0, 0.5, self.bottom_left_x + self.graph_offset)
        } else {
            (0.0, 1.0, self.bottom_left_x)
        };
        Mapping {
            left,
            top: self.top_left_y,
            bottom: self.bottom_left_y,
            max_w: self.width - self.graph_offset * 0.96,
            max_h: self.height - self.graph_offset * 0.96,
            origin,
            scale,
        }
    }
}

/// Normalized-to-pixel transform for one plot mode.
///
/// Unipolar mode maps values in [0, 1] upward from the frame's bottom
/// edge; centered (bipolar) mode maps [-1, 1] around the vertical
/// midpoint at half scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    left: f64,
    top: f64,
    bottom: f64,
    max_w: f64,
    max_h: f64,
    origin: f64,
    scale: f64,
}

impl Mapping {
    /// Pixel x for a domain value. The domain is [0, 1] by caller
    /// convention, so only the upper bound is enforced.
    pub fn x(&self, t: f64) -> f64 {
        self.left + (t * self.max_w).min(self.max_w)
    }

    /// Pixel y for a plotted value, unclamped.
    pub fn y_raw(&self, value: f64) -> f64 {
        self.bottom - self.origin - value * self.scale * self.max_h
    }

    /// Pixel y clamped to the frame's vertical bounds, so traces never
    /// escape the frame.
    pub fn y(&self, value: f64) -> f64 {
        let y = self.y_raw(value);
        if y > self.bottom {
            self.bottom
        } else if y < self.top {
            self.top
        } else {
            y
        }
    }

    /// Map a (domain, value) pair to pixels with vertical clamping.
    pub fn map(&self, t: f64, value: f64) -> (f64, f64) {
        (self.x(t), self.y(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(640.0, 400.0)
    }

    #[test]
    fn corners_from_surface_dimensions() {
        let f = frame();
        assert_eq!(f.bottom_left_x, 30.0);
        assert_eq!(f.bottom_left_y, 370.0);
        assert_eq!(f.bottom_right_x, 610.0);
        assert_eq!(f.top_left_y, 30.0);
        assert_eq!(f.width, 580.0);
        assert_eq!(f.height, 340.0);
    }

    #[test]
    fn step_is_one_sample_per_pixel() {
        let f = frame();
        assert!((f.step() - 1.0 / 580.0).abs() < 1e-12);
    }

    #[test]
    fn unipolar_y_non_increasing_in_value() {
        let f = frame();
        let m = f.mapping(false);
        let mut prev = f64::INFINITY;
        for i in 0..=100 {
            let value = i as f64 / 100.0;
            let y = m.y(value);
            assert!(y <= prev, "y must not increase with value, got {y} after {prev}");
            assert!(
                y >= f.top_left_y && y <= f.bottom_left_y,
                "y out of frame bounds: {y}"
            );
            prev = y;
        }
    }

    #[test]
    fn centered_zero_maps_to_midpoint() {
        let f = frame();
        let m = f.mapping(true);
        assert!((m.y(0.0) - f.mid_y()).abs() < 1e-9);
    }

    #[test]
    fn centered_extremes_reach_near_edges() {
        let f = frame();
        let m = f.mapping(true);
        // Full-scale values land within one graph offset of the edges.
        let top = m.y(1.0);
        assert!(top >= f.top_left_y && top <= f.top_left_y + GRAPH_OFFSET);
        let bottom = m.y(-1.0);
        assert!(bottom <= f.bottom_left_y && bottom >= f.bottom_left_y - GRAPH_OFFSET);
    }

    #[test]
    fn identity_function_spans_bottom_left_to_top_right() {
        let f = frame();
        let m = f.mapping(false);
        let (x0, y0) = m.map(0.0, 0.0);
        assert_eq!((x0, y0), (f.bottom_left_x, f.bottom_left_y));

        let mut prev_x = f64::NEG_INFINITY;
        let mut prev_y = f64::INFINITY;
        let mut t = 0.0;
        while t <= 1.0 {
            let (x, y) = m.map(t, t);
            assert!(x >= prev_x, "x must be monotonic");
            assert!(y <= prev_y, "y must be monotonic");
            assert!(y >= f.top_left_y && y <= f.bottom_left_y);
            prev_x = x;
            prev_y = y;
            t += f.step();
        }
        // The last sample sits one graph offset short of the corner.
        assert!(prev_x <= f.bottom_right_x);
        assert!(prev_x >= f.bottom_right_x - GRAPH_OFFSET);
        assert!(prev_y >= f.top_left_y && prev_y <= f.top_left_y + GRAPH_OFFSET);
    }

    #[test]
    fn centered_flat_zero_is_a_horizontal_midline() {
        let f = frame();
        let m = f.mapping(true);
        let mut t = 0.0;
        while t <= 1.0 {
            let (_, y) = m.map(t, 0.0);
            assert!((y - f.mid_y()).abs() < 1e-9, "flat zero strayed from midline");
            t += f.step();
        }
    }

    #[test]
    fn out_of_range_values_clamp_to_frame() {
        let f = frame();
        let m = f.mapping(false);
        assert_eq!(m.y(5.0), f.top_left_y);
        assert_eq!(m.y(-1.0), f.bottom_left_y);
    }

    #[test]
    fn x_is_capped_at_frame_right() {
        let f = frame();
        let m = f.mapping(false);
        assert_eq!(m.x(2.0), m.x(1.0));
    }

    #[test]
    fn in_quad_marker_position_at_half_sweep() {
        // An in_quad trace at elapsed fraction 0.5 marks (0.5, 0.25).
        let f = frame();
        let m = f.mapping(false);
        let (x, y) = m.map(0.5, 0.25);
        let max_w = f.width - f.graph_offset * 0.96;
        let max_h = f.height - f.graph_offset * 0.96;
        assert!((x - (f.bottom_left_x + 0.5 * max_w)).abs() < 1e-9);
        assert!((y - (f.bottom_left_y - 0.25 * max_h)).abs() < 1e-9);
    }
}
