//! Form parameter structs and their deserialization rules.
//!
//! Parameters arrive from the page as a plain object built from
//! `FormData`, so every numeric value is a string. Missing or
//! unparseable numbers become NaN and propagate into the plots as
//! degenerate (but harmless) geometry; unrecognized keys are ignored.

use serde::{Deserialize, Deserializer};
use std::fmt;

pub(crate) fn nan() -> f64 {
    f64::NAN
}

/// Deserialize a form field as f64, accepting strings and numbers.
/// Anything unparseable becomes NaN.
pub(crate) fn form_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FormNumber;

    impl<'de> serde::de::Visitor<'de> for FormNumber {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<f64, E> {
            Ok(value.trim().parse().unwrap_or(f64::NAN))
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_unit<E>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_none<E>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }
    }

    deserializer.deserialize_any(FormNumber)
}

#[derive(Debug, Deserialize)]
pub struct BrightnessParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub brightness: f64,
}

#[derive(Debug, Deserialize)]
pub struct VoltageParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub voltage: f64,
}

#[derive(Debug, Deserialize)]
pub struct FrequencyParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub frequency: f64,
}

#[derive(Debug, Deserialize)]
pub struct PulseParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub frequency: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub duty: f64,
}

#[derive(Debug, Deserialize)]
pub struct IntegratorParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub voltage: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub resistance: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub capacitance: f64,
}

#[derive(Debug, Deserialize)]
pub struct RcParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub frequency: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub resistance: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub capacitance: f64,
}

#[derive(Debug, Deserialize)]
pub struct SplineParams {
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub nonlinearity: f64,
    #[serde(default = "nan", deserialize_with = "form_number")]
    pub slider: f64,
}

#[derive(Debug, Deserialize)]
pub struct EasingParams {
    #[serde(default)]
    pub easing: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_fields_parse_to_numbers() {
        let p: IntegratorParams =
            serde_json::from_str(r#"{"voltage": "5", "resistance": "0.5", "capacitance": "0.5"}"#)
                .unwrap();
        assert_eq!(p.voltage, 5.0);
        assert_eq!(p.resistance, 0.5);
        assert_eq!(p.capacitance, 0.5);
    }

    #[test]
    fn plain_numbers_also_accepted() {
        let p: FrequencyParams = serde_json::from_str(r#"{"frequency": 4}"#).unwrap();
        assert_eq!(p.frequency, 4.0);
    }

    #[test]
    fn missing_numbers_become_nan() {
        let p: PulseParams = serde_json::from_str(r#"{"frequency": "2"}"#).unwrap();
        assert_eq!(p.frequency, 2.0);
        assert!(p.duty.is_nan());
    }

    #[test]
    fn unparseable_numbers_become_nan() {
        let p: BrightnessParams = serde_json::from_str(r#"{"brightness": "bright"}"#).unwrap();
        assert!(p.brightness.is_nan());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p: VoltageParams =
            serde_json::from_str(r#"{"voltage": "3.3", "label": "vcc", "pin": "7"}"#).unwrap();
        assert_eq!(p.voltage, 3.3);
    }

    #[test]
    fn easing_field_is_optional() {
        let p: EasingParams = serde_json::from_str(r#"{"easing": "out_cubic"}"#).unwrap();
        assert_eq!(p.easing.as_deref(), Some("out_cubic"));
        let p: EasingParams = serde_json::from_str("{}").unwrap();
        assert!(p.easing.is_none());
    }
}
