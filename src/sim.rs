//! Circuit simulation kernels for the DCO article demos.
//!
//! These fill sample windows with idealized waveforms: RC differentiator
//! spikes, integrator ramps reset by clock edges, and the small helper
//! formulas the article's calculators use. All illustrative, none of it
//! pretends to SPICE-level accuracy.

use crate::curves::{clock, vout_at_time};

/// Forward voltage at which the base-emitter junction conducts.
const V_BE: f64 = 0.7;

/// RC constant of the article's reference integrator (200k * 1uF scaled
/// by the 12 V supply).
const INTEGRATOR_VS: f64 = 2.0e-4 * 12.0;

/// Simulate an RC differentiator driven by a square clock.
///
/// Clock edges write full-scale spikes (+1 on rising, -1 on falling);
/// between edges each sample decays by the `rc` factor.
pub fn rc_differentiator(frequency: f64, rc: f64, out: &mut [f64]) {
    let len = out.len();
    let slice = 1.0 / len as f64;
    for i in 0..len {
        let t = i as f64 / len as f64;
        let clock_a = clock(frequency, t - slice, 0.5);
        let clock_b = clock(frequency, t, 0.5);

        if !clock_a && clock_b {
            out[i] = 1.0;
        } else if clock_a && !clock_b {
            out[i] = -1.0;
        } else if i > 0 {
            out[i] = out[i - 1] * rc;
        } else {
            out[i] = 0.0;
        }
    }
}

/// Transistor switch fed from a differentiator spike: conducts (and
/// clamps to the base-emitter drop) only while the base is driven high.
pub fn transistor_clamp(v_b: f64) -> f64 {
    if v_b > V_BE { V_BE } else { 0.0 }
}

/// Simulate a DCO core: an integrator ramp that a rising clock edge
/// resets to zero. `invert` flips the ramp for the inverting charge
/// configuration.
pub fn dco_ramp(frequency: f64, charge_voltage: f64, invert: bool, out: &mut [f64]) {
    let len = out.len();
    let slice = 1.0 / len as f64;
    let mut t = 0.0;
    for i in 0..len {
        let clock_a = clock(frequency, (i as f64 - 1.0) * slice, 0.5);
        let clock_b = clock(frequency, i as f64 * slice, 0.5);
        t += slice;

        if !clock_a && clock_b {
            t = 0.0;
            out[i] = 0.0;
        } else {
            let v = vout_at_time(charge_voltage, 0.5, 0.5, t);
            out[i] = if invert { -v } else { v };
        }
    }
}

/// Charge voltage that keeps the ramp amplitude constant across pitch,
/// the trick that separates the Juno DCO from a bare clocked integrator.
pub fn charge_v_for_frequency(frequency: f64) -> f64 {
    10.0 * (frequency / 40.0)
}

/// VCO output: integrator ramp wrapped into a repeating sawtooth and
/// negated so it rises with time.
pub fn vco_wave(control_voltage: f64, t: f64) -> f64 {
    let mut out = vout_at_time(control_voltage, 0.5, 0.5, t);
    while out < -1.0 {
        out += 1.0;
    }
    -out
}

/// Comparator: true when the input exceeds the reference.
pub fn comparator(voltage: f64, reference: f64) -> bool {
    voltage > reference
}

/// Output frequency of the reference integrator for a control voltage.
pub fn frequency_for_cv(cv: f64) -> f64 {
    let time = -INTEGRATOR_VS / -cv;
    1.0 / time
}

/// Control voltage the reference integrator needs for a frequency.
pub fn cv_for_frequency(frequency: f64) -> f64 {
    let time = 1.0 / frequency;
    -INTEGRATOR_VS / -time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differentiator_spikes_on_edges() {
        let mut data = vec![0.0; 500];
        rc_differentiator(2.0, 0.9, &mut data);

        // frequency 2 over [0, 1): falling edge at t = 0.25, rising at t = 0.5.
        assert_eq!(data[125], -1.0, "falling edge should spike to -1");
        assert_eq!(data[250], 1.0, "rising edge should spike to +1");
        // Between edges the spike decays geometrically.
        assert!((data[126] - -0.9).abs() < 1e-12);
        assert!((data[260] - 0.9_f64.powi(10)).abs() < 1e-9);
    }

    #[test]
    fn differentiator_decays_toward_zero() {
        let mut data = vec![0.0; 500];
        rc_differentiator(2.0, 0.5, &mut data);
        // Mid-plateau, far from any edge, the spike has died out.
        assert!(data[200].abs() < 1e-9);
    }

    #[test]
    fn transistor_clamps_at_forward_drop() {
        assert_eq!(transistor_clamp(5.0), 0.7);
        assert_eq!(transistor_clamp(0.71), 0.7);
        assert_eq!(transistor_clamp(0.7), 0.0);
        assert_eq!(transistor_clamp(-3.0), 0.0);
    }

    #[test]
    fn dco_ramp_resets_on_rising_edges() {
        let mut data = vec![0.0; 1000];
        dco_ramp(2.0, 1.0, true, &mut data);

        // Rising edge at t = 0.5 resets the ramp.
        assert_eq!(data[500], 0.0);
        // After the reset the inverted ramp climbs again.
        assert!(data[501] > 0.0);
        assert!(data[600] > data[501]);
        // Before the edge the ramp had been charging the whole window.
        assert!(data[499] > data[100]);
    }

    #[test]
    fn dco_ramp_polarity() {
        let mut inverted = vec![0.0; 100];
        let mut direct = vec![0.0; 100];
        dco_ramp(1.5, 2.0, true, &mut inverted);
        dco_ramp(1.5, 2.0, false, &mut direct);
        for (a, b) in inverted.iter().zip(&direct) {
            assert!((a + b).abs() < 1e-12, "polarities should mirror");
        }
    }

    #[test]
    fn charge_voltage_tracks_frequency() {
        assert_eq!(charge_v_for_frequency(40.0), 10.0);
        assert_eq!(charge_v_for_frequency(20.0), 5.0);
        // Constant amplitude: ramp peak is frequency-independent.
        let mut slow = vec![0.0; 1000];
        let mut fast = vec![0.0; 1000];
        dco_ramp(2.0, charge_v_for_frequency(2.0), true, &mut slow);
        dco_ramp(4.0, charge_v_for_frequency(4.0), true, &mut fast);
        let peak = |d: &[f64]| d.iter().cloned().fold(0.0_f64, f64::max);
        assert!((peak(&slow) - peak(&fast)).abs() < 0.05);
    }

    #[test]
    fn vco_wave_wraps_into_unit_range() {
        // cv = 1 gives a -4t ramp; wrapping folds it into [0, 1).
        assert!((vco_wave(1.0, 0.1) - 0.4).abs() < 1e-12);
        assert!((vco_wave(1.0, 0.3) - 0.2).abs() < 1e-12);
        let mut t = 0.0;
        while t <= 1.0 {
            let v = vco_wave(1.0, t);
            assert!(v >= -1.0 && v <= 1.0, "vco out of range at {t}: {v}");
            t += 0.01;
        }
    }

    #[test]
    fn comparator_threshold() {
        assert!(comparator(3.0, 2.5));
        assert!(!comparator(2.5, 2.5));
        assert!(!comparator(1.0, 2.5));
    }

    #[test]
    fn cv_frequency_round_trip() {
        // 12 V drives the reference integrator at 5 kHz.
        assert!((frequency_for_cv(12.0) - 5000.0).abs() < 1e-6);
        assert!((cv_for_frequency(5000.0) - 12.0).abs() < 1e-9);
        let f = frequency_for_cv(cv_for_frequency(440.0));
        assert!((f - 440.0).abs() < 1e-6);
    }
}
