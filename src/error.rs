use std::fmt;
use wasm_bindgen::JsValue;

/// Errors raised while resolving a drawing surface.
///
/// Construction is the only place a structured error can occur; once a
/// grapher holds a live context, drawing failures degrade to visual
/// artifacts rather than program errors.
#[derive(Debug)]
pub enum GrapherError {
    /// No element with the given id exists in the document.
    ElementNotFound(String),
    /// The element exists but is not a `<canvas>`.
    NotACanvas(String),
    /// The window, document, or 2D context could not be obtained.
    ContextUnavailable,
}

impl fmt::Display for GrapherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrapherError::ElementNotFound(id) => write!(f, "No element with id '{id}'"),
            GrapherError::NotACanvas(id) => write!(f, "Element '{id}' is not a canvas"),
            GrapherError::ContextUnavailable => write!(f, "2D canvas context unavailable"),
        }
    }
}

impl std::error::Error for GrapherError {}

impl From<GrapherError> for JsValue {
    fn from(e: GrapherError) -> Self {
        JsValue::from_str(&format!("{e}"))
    }
}
