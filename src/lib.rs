pub mod animation;
pub mod curves;
pub mod demos;
pub mod error;
pub mod frame;
pub mod grapher;
pub mod series;
pub mod sim;

use crate::sim::{comparator, cv_for_frequency, frequency_for_cv};
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the grapher-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: comparator state label for the interactive calculator.
#[wasm_bindgen]
pub fn comparator_output(voltage: f64, reference: f64) -> String {
    if comparator(voltage, reference) {
        "High".to_string()
    } else {
        "Low".to_string()
    }
}

/// WASM-exposed: raw comparator state, for pages that style the result
/// themselves.
#[wasm_bindgen]
pub fn comparator_high(voltage: f64, reference: f64) -> bool {
    comparator(voltage, reference)
}

/// WASM-exposed: readout for the control-voltage-to-frequency calculator.
#[wasm_bindgen]
pub fn frequency_for_cv_label(cv: f64) -> String {
    format!("{} Volts produces {:.0} Hz", cv, frequency_for_cv(cv))
}

/// WASM-exposed: readout for the frequency-to-control-voltage calculator.
#[wasm_bindgen]
pub fn cv_for_frequency_label(frequency: f64) -> String {
    format!(
        "{:.2} Volts produces {} Hz",
        cv_for_frequency(frequency),
        frequency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparator_labels() {
        assert_eq!(comparator_output(3.0, 2.5), "High");
        assert_eq!(comparator_output(2.0, 2.5), "Low");
        assert!(comparator_high(3.0, 2.5));
    }

    #[test]
    fn calculator_readouts() {
        assert_eq!(frequency_for_cv_label(12.0), "12 Volts produces 5000 Hz");
        assert_eq!(cv_for_frequency_label(5000.0), "12.00 Volts produces 5000 Hz");
    }
}
