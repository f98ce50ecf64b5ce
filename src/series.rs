//! Fixed-length rolling sample buffer shared by the waveform demos.

/// A fixed-length ordered buffer of samples covering one time window.
///
/// Animated demos push one sample per frame, shifting the oldest out;
/// form-driven simulators rewrite the whole window each redraw through
/// `as_mut_slice`. Either way, `value_at` resamples it over [0, 1] for
/// plotting.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: Vec<f64>,
}

impl SampleSeries {
    /// A zero-filled series of the given length.
    pub fn new(len: usize) -> SampleSeries {
        SampleSeries {
            samples: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shift the oldest sample out and append `value` at the end.
    pub fn push(&mut self, value: f64) {
        self.samples.rotate_left(1);
        if let Some(last) = self.samples.last_mut() {
            *last = value;
        }
    }

    /// Resample at domain position `t` in [0, 1]. The rounded index is
    /// clamped to the final sample, so `t = 1.0` reads the newest value
    /// instead of running off the end of the buffer.
    pub fn value_at(&self, t: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let last = (self.samples.len() - 1) as f64;
        let index = (t * self.samples.len() as f64).round().clamp(0.0, last);
        self.samples[index as usize]
    }

    /// Zero the window without changing its length.
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let s = SampleSeries::new(4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.as_slice(), &[0.0; 4]);
    }

    #[test]
    fn push_shifts_window() {
        let mut s = SampleSeries::new(3);
        s.push(1.0);
        s.push(2.0);
        assert_eq!(s.as_slice(), &[0.0, 1.0, 2.0]);
        s.push(3.0);
        s.push(4.0);
        assert_eq!(s.as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(s.len(), 3, "length must stay fixed");
    }

    #[test]
    fn value_at_spans_the_window() {
        let mut s = SampleSeries::new(5);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            s.push(v);
        }
        assert_eq!(s.value_at(0.0), 1.0);
        assert_eq!(s.value_at(0.5), 3.0);
        // t = 1.0 rounds past the end; the index clamps to the newest sample.
        assert_eq!(s.value_at(1.0), 5.0);
        assert_eq!(s.value_at(-0.5), 1.0);
    }

    #[test]
    fn reset_zeroes_in_place() {
        let mut s = SampleSeries::new(3);
        s.push(7.0);
        s.reset();
        assert_eq!(s.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_series_reads_zero() {
        let s = SampleSeries::new(0);
        assert!(s.is_empty());
        assert_eq!(s.value_at(0.5), 0.0);
    }
}
