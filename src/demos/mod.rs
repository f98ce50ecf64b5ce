//! Interactive figure handles, one per article illustration.
//!
//! Each handle is an independent instance owning its own canvas,
//! sample buffers, and play state. The page's JS glue constructs a
//! handle, forwards form input as a parameter object on every input
//! event, and wires buttons and visibility observers to the play
//! controls. DOM wiring itself stays on the page.

pub mod discharge;
pub mod easing;
pub mod led;
pub mod oscillator;
pub mod params;
pub mod rc;
pub mod spline;
