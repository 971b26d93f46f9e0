//! Key state and keystroke translation engine for macro keypads
//!
//! Models each physical button as a [`Key`] holding its colors, an
//! animation [`Effect`], a [`ButtonType`] and a command string. The
//! surrounding firmware owns the hardware: it polls the buttons, drives
//! the LEDs from the colors returned by [`Key::pulse_tick`] /
//! [`Key::flash_tick`] once per frame, and on keypress calls
//! [`Key::send`], which translates the command into press/release
//! events on any [`HidSink`].
//!
//! Everything is synchronous and per-instance; keys are independent
//! and can be processed in any order.

pub mod color;
pub mod error;
pub mod key;
pub mod keycode;
pub mod profile;

pub use error::KeypadError;
pub use key::{ButtonType, Effect, HidSink, Key, PULSE_STEPS};
pub use profile::{KeyDef, KeypadProfile, DEFAULT_PROFILE_TOML};
