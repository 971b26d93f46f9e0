//! Per-key state and behavior for a macro keypad.
//!
//! Each physical button is a [`Key`] carrying its idle/active colors,
//! an animation [`Effect`], a [`ButtonType`] and a command string. The
//! driver loop calls [`Key::pulse_tick`] or [`Key::flash_tick`] once
//! per frame depending on the configured effect, and [`Key::send`] on
//! keypress to translate the command into HID events.
//!
//! # Command syntax
//!
//! ```text
//! a              — tap the A key
//! ctrl+c         — chord: Control held, C tapped
//! cmd+shift+4    — multi-modifier chord
//! esc esc        — two discrete keystrokes
//! colon          — built-in Shift+Semicolon macro
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::color;
use crate::error::KeypadError;
use crate::keycode;

/// Number of steps in a half animation cycle (phase counter range 0-10).
pub const PULSE_STEPS: u8 = 10;

/// Sink for translated keystrokes, backed by a USB HID keyboard device.
///
/// Pressed keys accumulate in the sink until `release_all`; `Key`
/// itself holds no press state.
pub trait HidSink {
    /// Press a key by HID usage code, leaving it held.
    fn press(&mut self, keycode: u8);
    /// Release every currently held key.
    fn release_all(&mut self);
}

/// Color animation applied to a key, independent of its command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Static color, no animation
    None,
    /// Smooth triangle-wave blend between the off and on colors
    Pulse,
    /// Hard on/off blink
    Flash,
}

impl Default for Effect {
    fn default() -> Self {
        Effect::None
    }
}

impl FromStr for Effect {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Effect::None),
            "pulse" => Ok(Effect::Pulse),
            "flash" => Ok(Effect::Flash),
            _ => Err(KeypadError::UnknownEffect(s.to_string())),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "none"),
            Effect::Pulse => write!(f, "pulse"),
            Effect::Flash => write!(f, "flash"),
        }
    }
}

/// Activation semantics of a key: momentary or latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    /// Momentary: active only while held
    Press,
    /// Latched: each activation flips a persistent state
    Toggle,
}

impl Default for ButtonType {
    fn default() -> Self {
        ButtonType::Press
    }
}

impl FromStr for ButtonType {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "press" => Ok(ButtonType::Press),
            "toggle" => Ok(ButtonType::Toggle),
            _ => Err(KeypadError::UnknownButtonType(s.to_string())),
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonType::Press => write!(f, "press"),
            ButtonType::Toggle => write!(f, "toggle"),
        }
    }
}

/// Models a single key on the keypad.
///
/// Colors are six-digit hex strings (`"FF8800"`, leading `#`
/// accepted). Both must convert to RGB channels in 0-255; malformed
/// values surface as [`KeypadError::InvalidColor`] from the animation
/// ticks rather than at set time.
///
/// Animation and toggle state are per-instance; keys on the same grid
/// never share state and can be ticked in any order.
#[derive(Debug, Clone)]
pub struct Key {
    on: String,
    off: String,
    command: String,
    effect: Effect,
    button_type: ButtonType,
    toggle_state: bool,
    pulse_count: u8,
    pulse_rising: bool,
}

impl Default for Key {
    fn default() -> Self {
        Self {
            on: String::new(),
            off: String::new(),
            command: String::new(),
            effect: Effect::None,
            button_type: ButtonType::Press,
            toggle_state: false,
            pulse_count: 0,
            pulse_rising: true,
        }
    }
}

impl Key {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the keystrokes sent on keypress
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Set the keystrokes sent on keypress
    pub fn set_command(&mut self, value: &str) {
        self.command = value.to_string();
    }

    /// Get the color shown while the key is active
    pub fn on(&self) -> &str {
        &self.on
    }

    /// Set the color shown while the key is active
    pub fn set_on(&mut self, value: &str) {
        self.on = value.to_string();
    }

    /// Get the color shown while the key is idle
    pub fn off(&self) -> &str {
        &self.off
    }

    /// Set the color shown while the key is idle
    pub fn set_off(&mut self, value: &str) {
        self.off = value.to_string();
    }

    /// Get the animation effect
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Set the animation effect (`"pulse"`, `"flash"` or `"none"`).
    ///
    /// An unrecognised value logs a warning and leaves the effect
    /// unchanged.
    pub fn set_effect(&mut self, value: &str) {
        match value.parse() {
            Ok(effect) => self.effect = effect,
            Err(_) => warn!("{:?} is not a valid effect type", value),
        }
    }

    /// Get the button type
    pub fn button_type(&self) -> ButtonType {
        self.button_type
    }

    /// Set the button type (`"press"` or `"toggle"`).
    ///
    /// An unrecognised value logs a warning and leaves the type
    /// unchanged.
    pub fn set_button_type(&mut self, value: &str) {
        match value.parse() {
            Ok(button_type) => self.button_type = button_type,
            Err(_) => warn!("{:?} is not a valid button type", value),
        }
    }

    /// Get the current toggle state and flip it for the next read.
    ///
    /// Returns the pre-flip value: the first call on a fresh key is
    /// `false` and leaves the latch set.
    pub fn toggle(&mut self) -> bool {
        let current = self.toggle_state;
        self.toggle_state = !current;
        current
    }

    /// Blend the off and on colors at a point along their gradient.
    ///
    /// `percent = 0.0` is the off color, `percent = 1.0` the on color.
    /// Channels are truncated, not rounded.
    pub fn fade_color(&self, percent: f32) -> Result<String, KeypadError> {
        let off = color::hex_to_rgb(&self.off)?;
        let on = color::hex_to_rgb(&self.on)?;
        let (r, g, b) = color::blend(off, on, percent);
        Ok(color::rgb_to_hex(r, g, b))
    }

    /// Cycle the pulse animation through one step.
    ///
    /// The phase counter runs 0→10→0 as a triangle wave; at either end
    /// the direction flips without moving the counter, so the extremes
    /// hold for one extra tick. Returns the blended color for the new
    /// phase.
    pub fn pulse_tick(&mut self) -> Result<String, KeypadError> {
        if self.pulse_rising {
            if self.pulse_count < PULSE_STEPS {
                self.pulse_count += 1;
            } else {
                self.pulse_rising = false;
            }
        } else if self.pulse_count > 0 {
            self.pulse_count -= 1;
        } else {
            self.pulse_rising = true;
        }
        self.fade_color(f32::from(self.pulse_count) / f32::from(PULSE_STEPS))
    }

    /// Cycle the flash animation through one step.
    ///
    /// The counter is only a timer here: it climbs to 10, then resets
    /// and flips the direction flag, which selects the output. The
    /// result is a squarewave holding each color for 11 ticks.
    pub fn flash_tick(&mut self) -> String {
        if self.pulse_count < PULSE_STEPS {
            self.pulse_count += 1;
        } else {
            self.pulse_count = 0;
            self.pulse_rising = !self.pulse_rising;
        }

        if self.pulse_rising {
            self.on.clone()
        } else {
            self.off.clone()
        }
    }

    /// Send the current command to the attached computer.
    ///
    /// The command is uppercased, `+` separators become spaces, and
    /// each whitespace-delimited token is resolved to a keycode (alias
    /// table first, then direct name lookup). Modifier keys stay held
    /// so following tokens chord with them; any other key is released
    /// immediately as a discrete keystroke. Tokens that resolve to
    /// nothing are skipped. Always ends by releasing all keys.
    pub fn send(&self, keyb: &mut impl HidSink) {
        let command = self.command.to_uppercase().replace('+', " ");

        for token in command.split_whitespace() {
            if let Some(code) = keycode::resolve(token) {
                keyb.press(code);
                // Modifiers are held; everything else is a discrete tap
                if !keycode::is_modifier(code) {
                    keyb.release_all();
                }
            } else if token == "COLON" {
                keyb.press(keycode::SHIFT);
                keyb.press(keycode::SEMICOLON);
                keyb.release_all();
            } else if token == "THUMBS-UP" {
                keyb.press(keycode::SHIFT);
                keyb.press(keycode::SEMICOLON);
                keyb.release_all();
                keyb.press(keycode::KEYPAD_PLUS);
                keyb.release_all();
                keyb.press(keycode::ONE);
                keyb.release_all();
                keyb.press(keycode::SHIFT);
                keyb.press(keycode::SEMICOLON);
                keyb.release_all();
            } else {
                debug!("no keycode for token {:?}, skipping", token);
            }
        }
        keyb.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum HidEvent {
        Press(u8),
        ReleaseAll,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<HidEvent>,
    }

    impl HidSink for Recorder {
        fn press(&mut self, keycode: u8) {
            self.events.push(HidEvent::Press(keycode));
        }

        fn release_all(&mut self) {
            self.events.push(HidEvent::ReleaseAll);
        }
    }

    fn configured_key() -> Key {
        let mut key = Key::new();
        key.set_off("112233");
        key.set_on("FFEEDD");
        key
    }

    // --- Enum parsing ---

    #[test]
    fn parse_effect() {
        assert_eq!("pulse".parse::<Effect>().unwrap(), Effect::Pulse);
        assert_eq!("flash".parse::<Effect>().unwrap(), Effect::Flash);
        assert_eq!("none".parse::<Effect>().unwrap(), Effect::None);
        assert_eq!("Pulse".parse::<Effect>().unwrap(), Effect::Pulse);
        assert!("strobe".parse::<Effect>().is_err());
    }

    #[test]
    fn parse_button_type() {
        assert_eq!("press".parse::<ButtonType>().unwrap(), ButtonType::Press);
        assert_eq!("toggle".parse::<ButtonType>().unwrap(), ButtonType::Toggle);
        assert!("latch".parse::<ButtonType>().is_err());
    }

    #[test]
    fn display_enums() {
        assert_eq!(Effect::Pulse.to_string(), "pulse");
        assert_eq!(Effect::None.to_string(), "none");
        assert_eq!(ButtonType::Toggle.to_string(), "toggle");
    }

    // --- Setter validation ---

    #[test]
    fn invalid_effect_keeps_previous() {
        let mut key = Key::new();
        key.set_effect("pulse");
        key.set_effect("rainbow");
        assert_eq!(key.effect(), Effect::Pulse);
    }

    #[test]
    fn invalid_button_type_keeps_previous() {
        let mut key = Key::new();
        assert_eq!(key.button_type(), ButtonType::Press);
        key.set_button_type("sticky");
        assert_eq!(key.button_type(), ButtonType::Press);
        key.set_button_type("toggle");
        assert_eq!(key.button_type(), ButtonType::Toggle);
    }

    // --- Toggle ---

    #[test]
    fn toggle_returns_then_flips() {
        let mut key = Key::new();
        assert!(!key.toggle());
        assert!(key.toggle());
        assert!(!key.toggle());
        assert!(key.toggle());
    }

    // --- Fade ---

    #[test]
    fn fade_endpoints() {
        let key = configured_key();
        assert_eq!(key.fade_color(0.0).unwrap(), "112233");
        assert_eq!(key.fade_color(1.0).unwrap(), "FFEEDD");
    }

    #[test]
    fn fade_canonicalises_case() {
        let mut key = Key::new();
        key.set_off("#abcdef");
        key.set_on("abcdef");
        assert_eq!(key.fade_color(0.0).unwrap(), "ABCDEF");
    }

    #[test]
    fn fade_truncates_midpoint() {
        let mut key = Key::new();
        key.set_off("000000");
        key.set_on("0000FF");
        // 255 * 0.5 = 127.5 truncates to 0x7F
        assert_eq!(key.fade_color(0.5).unwrap(), "00007F");
    }

    #[test]
    fn fade_rejects_malformed_color() {
        let mut key = Key::new();
        key.set_off("not-a-color");
        key.set_on("FFFFFF");
        assert!(matches!(
            key.fade_color(0.5),
            Err(KeypadError::InvalidColor(_))
        ));
    }

    // --- Pulse ---

    #[test]
    fn pulse_reaches_both_endpoints() {
        let mut key = configured_key();
        let outputs: Vec<String> = (0..22).map(|_| key.pulse_tick().unwrap()).collect();
        // Tick 10 is the peak (on), tick 21 the trough (off)
        assert_eq!(outputs[9], "FFEEDD");
        assert_eq!(outputs[20], "112233");
        // The bounce tick holds the extreme for one extra frame
        assert_eq!(outputs[10], "FFEEDD");
        assert_eq!(outputs[21], "112233");
    }

    #[test]
    fn pulse_is_periodic() {
        let mut key = configured_key();
        let first: Vec<String> = (0..22).map(|_| key.pulse_tick().unwrap()).collect();
        let second: Vec<String> = (0..22).map(|_| key.pulse_tick().unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pulse_visits_every_step() {
        // With off=black and on=white every phase has a distinct color,
        // so the rising half must produce 10 distinct outputs.
        let mut key = Key::new();
        key.set_off("000000");
        key.set_on("FFFFFF");
        let mut rising: Vec<String> = (0..10).map(|_| key.pulse_tick().unwrap()).collect();
        rising.dedup();
        assert_eq!(rising.len(), 10);
    }

    #[test]
    fn pulse_propagates_color_errors() {
        let mut key = Key::new();
        key.set_off("12345");
        key.set_on("FFFFFF");
        assert!(key.pulse_tick().is_err());
    }

    // --- Flash ---

    #[test]
    fn flash_toggles_after_eleven_ticks() {
        let mut key = configured_key();
        let outputs: Vec<String> = (0..22).map(|_| key.flash_tick()).collect();
        // First half-period holds one color, second the other
        assert!(outputs[..10].iter().all(|c| c == "FFEEDD"));
        assert!(outputs[10..21].iter().all(|c| c == "112233"));
        // Tick 22 is back at the original output
        assert_eq!(outputs[21], "FFEEDD");
    }

    #[test]
    fn flash_is_periodic() {
        let mut key = configured_key();
        let first: Vec<String> = (0..22).map(|_| key.flash_tick()).collect();
        let second: Vec<String> = (0..22).map(|_| key.flash_tick()).collect();
        assert_eq!(first, second);
    }

    // --- Send ---

    #[test]
    fn send_chord_holds_modifiers() {
        let mut key = Key::new();
        key.set_command("ctrl+shift+a");
        let mut keyb = Recorder::default();
        key.send(&mut keyb);
        assert_eq!(
            keyb.events,
            vec![
                HidEvent::Press(0xE0),
                HidEvent::Press(0xE1),
                HidEvent::Press(0x04),
                HidEvent::ReleaseAll,
                HidEvent::ReleaseAll,
            ]
        );
    }

    #[test]
    fn send_unknown_token_only_releases() {
        let mut key = Key::new();
        key.set_command("foobar");
        let mut keyb = Recorder::default();
        key.send(&mut keyb);
        assert_eq!(keyb.events, vec![HidEvent::ReleaseAll]);
    }

    #[test]
    fn send_empty_command_only_releases() {
        let key = Key::new();
        let mut keyb = Recorder::default();
        key.send(&mut keyb);
        assert_eq!(keyb.events, vec![HidEvent::ReleaseAll]);
    }
}
