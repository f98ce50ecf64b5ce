//! Play/pause transport and the cooperative animation frame loop.
//!
//! Cancellation is self-terminating: the frame callback re-schedules
//! itself only while the demo still reports `Playing`, so flipping the
//! transport to `Stopped` simply lets the callback chain end. At most
//! one redraw is ever in flight, so no cancellation token is needed.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Playback state for an animated demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Playing,
}

/// Explicit play/pause state machine with an epoch for elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Transport {
    state: PlayState,
    start_time: f64,
}

impl Transport {
    pub fn new() -> Transport {
        Transport {
            state: PlayState::Stopped,
            start_time: 0.0,
        }
    }

    /// Flip between playing and stopped, restamping the epoch either
    /// way. Returns the new state so callers can relabel their button.
    pub fn toggle(&mut self, now: f64) -> PlayState {
        self.state = match self.state {
            PlayState::Stopped => PlayState::Playing,
            PlayState::Playing => PlayState::Stopped,
        };
        self.start_time = now;
        self.state
    }

    /// Stop without touching the epoch. The sole cancellation mechanism;
    /// the running frame chain notices on its next tick and ends.
    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Milliseconds since the last toggle.
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::new()
    }
}

/// Length of one easing sweep cycle in milliseconds.
pub const CYCLE_MS: f64 = 2500.0;
/// Portion of the cycle spent sweeping; the remainder holds at 1.
pub const SWEEP_MS: f64 = 2000.0;

/// Map elapsed animation time onto the sweep fraction in [0, 1].
pub fn cycle_fraction(elapsed_ms: f64) -> f64 {
    let s = elapsed_ms % CYCLE_MS;
    if s <= SWEEP_MS { s / SWEEP_MS } else { 1.0 }
}

/// One frame of an animated demo.
pub trait Tick {
    /// Redraw for the given `requestAnimationFrame` timestamp. Return
    /// true to stay in the callback chain, false to let it end.
    fn tick(&mut self, timestamp: f64) -> bool;
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Start a self-rescheduling `requestAnimationFrame` chain driving
/// `inner`. The closure drops itself once `tick` reports completion, so
/// a later toggle can spawn a fresh chain.
pub fn spawn_frame_loop<T: Tick + 'static>(inner: Rc<RefCell<T>>) {
    let slot: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let first = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let keep_going = inner.borrow_mut().tick(timestamp);
        if keep_going {
            request_frame(&first);
        } else {
            first.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&slot);
}

fn request_frame(slot: &Rc<RefCell<Option<FrameClosure>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = slot.borrow().as_ref() {
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok();
    }
}

/// Current `performance.now()` timestamp, or 0 outside a browser.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
