//! Easing functions, 1-D bezier splines, and waveform primitives.
//!
//! Everything here is a pure mapping from a normalized domain value to a
//! normalized output, ready to hand to `Grapher::plot_function`.

/// The easing curves offered by the animation demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    InQuad,
    OutQuad,
    InCubic,
    OutCubic,
    InExpo,
    OutExpo,
}

impl Easing {
    /// Parse a form value. Unknown names return `None` so the caller
    /// keeps whatever easing was already selected.
    pub fn parse(name: &str) -> Option<Easing> {
        match name {
            "in_quad" => Some(Easing::InQuad),
            "out_quad" => Some(Easing::OutQuad),
            "in_cubic" => Some(Easing::InCubic),
            "out_cubic" => Some(Easing::OutCubic),
            "in_expo" => Some(Easing::InExpo),
            "out_expo" => Some(Easing::OutExpo),
            _ => None,
        }
    }

    /// Evaluate the easing at `t` in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t).powi(2),
            Easing::InCubic => t.powi(3),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InExpo => (2.0_f64).powf(t * 10.0 - 10.0),
            Easing::OutExpo => 1.0 - (2.0_f64).powf((1.0 - t) * 10.0 - 10.0),
        }
    }
}

/// Cubic 1-D bezier through `p0..p3`, evaluated at `t` in [0, 1].
pub fn bezier_1d(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    (1.0 - t).powi(3) * p0
        + (1.0 - t).powi(2) * t * 3.0 * p1
        + t.powi(2) * (1.0 - t) * 3.0 * p2
        + t.powi(3) * p3
}

/// One piece of a piecewise bezier spline over the domain [0, 1].
/// Control points are absolute domain values, not segment-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub c1: f64,
    pub c2: f64,
    pub end: f64,
}

/// Build a segment from an offset, a length, and control points given as
/// fractions of the segment length.
pub fn make_segment(offset: f64, c1: f64, c2: f64, length: f64) -> Segment {
    Segment {
        start: offset,
        c1: offset + c1 * length,
        c2: offset + c2 * length,
        end: offset + length,
    }
}

/// Evaluate a piecewise bezier spline. Domain values outside every
/// segment evaluate to 0.
pub fn bezier_spline(segments: &[Segment], t: f64) -> f64 {
    for segment in segments {
        if t >= segment.start && t <= segment.end {
            let segment_range = segment.end - segment.start;
            let interpolant = (t - segment.start) / segment_range;
            return bezier_1d(segment.start, segment.c1, segment.c2, segment.end, interpolant);
        }
    }
    0.0
}

/// Square-wave clock: high while the phase is below the duty fraction.
pub fn clock(frequency: f64, t: f64, duty: f64) -> bool {
    (frequency * t) % 1.0 < duty
}

/// `clock` as a plottable 0/1 level.
pub fn clock_level(frequency: f64, t: f64, duty: f64) -> f64 {
    if clock(frequency, t, duty) { 1.0 } else { 0.0 }
}

/// Rising sawtooth in [0, 1).
pub fn saw(frequency: f64, t: f64) -> f64 {
    (frequency * t) % 1.0
}

/// Ideal op-amp integrator output at time `t` for an input step `vin`
/// through resistance `r` into capacitance `c`.
pub fn vout_at_time(vin: f64, r: f64, c: f64, t: f64) -> f64 {
    -(vin / (r * c)) * t
}

/// Undo the display's gamma so an LED's perceived brightness tracks the
/// requested value linearly.
pub fn gamma_encode(brightness: f64, gamma: f64) -> f64 {
    brightness.powf(1.0 / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_quad_at_half() {
        assert_eq!(Easing::InQuad.apply(0.5), 0.25);
    }

    #[test]
    fn easing_endpoints() {
        for easing in [
            Easing::InQuad,
            Easing::OutQuad,
            Easing::InCubic,
            Easing::OutCubic,
            Easing::InExpo,
            Easing::OutExpo,
        ] {
            let start = easing.apply(0.0);
            let end = easing.apply(1.0);
            // The expo curves do not quite touch their idle endpoint.
            assert!(start.abs() < 0.002, "{easing:?} start should be ~0, got {start}");
            assert!((end - 1.0).abs() < 0.002, "{easing:?} end should be ~1, got {end}");
        }
    }

    #[test]
    fn easing_parse_round_trip() {
        assert_eq!(Easing::parse("in_quad"), Some(Easing::InQuad));
        assert_eq!(Easing::parse("out_expo"), Some(Easing::OutExpo));
        assert_eq!(Easing::parse("bounce"), None);
        assert_eq!(Easing::parse(""), None);
    }

    #[test]
    fn bezier_endpoints() {
        assert_eq!(bezier_1d(0.0, 0.4, 0.6, 1.0, 0.0), 0.0);
        assert!((bezier_1d(0.0, 0.4, 0.6, 1.0, 1.0) - 1.0).abs() < 1e-12);
        // Symmetric control points give a symmetric curve.
        let a = bezier_1d(0.0, 0.4, 0.6, 1.0, 0.25);
        let b = bezier_1d(0.0, 0.4, 0.6, 1.0, 0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn spline_covers_segments_and_zeroes_outside() {
        let segments = [
            make_segment(0.0, 0.3, 0.7, 0.5),
            make_segment(0.5, 0.3, 0.7, 0.5),
        ];
        // Segment boundaries evaluate to their endpoints.
        assert!((bezier_spline(&segments, 0.0) - 0.0).abs() < 1e-12);
        assert!((bezier_spline(&segments, 1.0) - 1.0).abs() < 1e-9);
        // Midpoint of the first segment stays inside its range.
        let v = bezier_spline(&segments, 0.25);
        assert!(v > 0.0 && v < 0.5, "spline value escaped its segment: {v}");
        // Outside all segments.
        assert_eq!(bezier_spline(&segments, 1.5), 0.0);
    }

    #[test]
    fn make_segment_places_controls_inside() {
        let s = make_segment(0.2, 0.25, 0.75, 0.2);
        assert!((s.start - 0.2).abs() < 1e-12);
        assert!((s.c1 - 0.25).abs() < 1e-12);
        assert!((s.c2 - 0.35).abs() < 1e-12);
        assert!((s.end - 0.4).abs() < 1e-12);
    }

    #[test]
    fn clock_truth_table() {
        // (2 * 0.24) % 1.0 = 0.48 < 0.5
        assert!(clock(2.0, 0.24, 0.5));
        // (2 * 0.3) % 1.0 = 0.6 >= 0.5
        assert!(!clock(2.0, 0.3, 0.5));
        assert_eq!(clock_level(2.0, 0.24, 0.5), 1.0);
        assert_eq!(clock_level(2.0, 0.3, 0.5), 0.0);
    }

    #[test]
    fn clock_negative_phase_counts_as_high() {
        // A slightly negative phase gives a negative remainder, which is
        // still below the duty threshold. Edge detectors rely on this.
        assert!(clock(2.0, -0.002, 0.5));
    }

    #[test]
    fn saw_wraps() {
        assert!((saw(2.0, 0.75) - 0.5).abs() < 1e-12);
        assert!(saw(4.0, 0.999) < 1.0);
    }

    #[test]
    fn integrator_is_linear_in_time() {
        let v1 = vout_at_time(5.0, 0.5, 0.5, 0.1);
        let v2 = vout_at_time(5.0, 0.5, 0.5, 0.2);
        assert!((v2 - 2.0 * v1).abs() < 1e-12);
        assert!(v1 < 0.0, "positive input must integrate downward");
    }

    #[test]
    fn gamma_encode_brightens_midtones() {
        let g = gamma_encode(0.5, 2.2);
        assert!(g > 0.5 && g < 1.0);
        assert_eq!(gamma_encode(0.0, 2.2), 0.0);
        assert_eq!(gamma_encode(1.0, 2.2), 1.0);
        // Gamma 2 followed by squaring recovers the input.
        let round = gamma_encode(0.3, 2.0).powi(2);
        assert!((round - 0.3).abs() < 1e-12);
    }
}
