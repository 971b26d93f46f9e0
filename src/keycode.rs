//! HID keycode resolution for command tokens.
//!
//! Keycodes are USB HID keyboard usage IDs (USB HID Usage Tables,
//! Section 10), addressed by their canonical uppercase names
//! (`"A"`, `"ESCAPE"`, `"LEFT_ARROW"`, ...). Command tokens resolve
//! through a fixed alias table first (`"CTRL"` → `"CONTROL"`,
//! `"1"` → `"ONE"`, ...), then by direct name lookup. The mapping is a
//! closed enumeration; there is no runtime reflection.

/// Left Shift modifier
pub const SHIFT: u8 = 0xE1;
/// Semicolon key
pub const SEMICOLON: u8 = 0x33;
/// Keypad plus key
pub const KEYPAD_PLUS: u8 = 0x57;
/// Number row one
pub const ONE: u8 = 0x1E;

/// Check if a keycode is a modifier key (Ctrl/Shift/Alt/GUI, 0xE0-0xE7).
///
/// Modifiers are held rather than released so later tokens chord with
/// them.
pub fn is_modifier(code: u8) -> bool {
    (0xE0..=0xE7).contains(&code)
}

/// Resolve a canonical uppercase key name to its HID usage code.
pub fn code_from_name(name: &str) -> Option<u8> {
    let code = match name {
        "A" => 0x04, "B" => 0x05, "C" => 0x06, "D" => 0x07,
        "E" => 0x08, "F" => 0x09, "G" => 0x0A, "H" => 0x0B,
        "I" => 0x0C, "J" => 0x0D, "K" => 0x0E, "L" => 0x0F,
        "M" => 0x10, "N" => 0x11, "O" => 0x12, "P" => 0x13,
        "Q" => 0x14, "R" => 0x15, "S" => 0x16, "T" => 0x17,
        "U" => 0x18, "V" => 0x19, "W" => 0x1A, "X" => 0x1B,
        "Y" => 0x1C, "Z" => 0x1D,
        "ONE" => 0x1E, "TWO" => 0x1F, "THREE" => 0x20, "FOUR" => 0x21,
        "FIVE" => 0x22, "SIX" => 0x23, "SEVEN" => 0x24, "EIGHT" => 0x25,
        "NINE" => 0x26, "ZERO" => 0x27,
        "ENTER" | "RETURN" => 0x28,
        "ESCAPE" => 0x29,
        "BACKSPACE" => 0x2A,
        "TAB" => 0x2B,
        "SPACE" | "SPACEBAR" => 0x2C,
        "MINUS" => 0x2D,
        "EQUALS" => 0x2E,
        "LEFT_BRACKET" => 0x2F,
        "RIGHT_BRACKET" => 0x30,
        "BACKSLASH" => 0x31,
        "POUND" => 0x32,
        "SEMICOLON" => 0x33,
        "QUOTE" => 0x34,
        "GRAVE_ACCENT" => 0x35,
        "COMMA" => 0x36,
        "PERIOD" => 0x37,
        "FORWARD_SLASH" => 0x38,
        "CAPS_LOCK" => 0x39,
        "F1" => 0x3A, "F2" => 0x3B, "F3" => 0x3C, "F4" => 0x3D,
        "F5" => 0x3E, "F6" => 0x3F, "F7" => 0x40, "F8" => 0x41,
        "F9" => 0x42, "F10" => 0x43, "F11" => 0x44, "F12" => 0x45,
        "PRINT_SCREEN" => 0x46,
        "SCROLL_LOCK" => 0x47,
        "PAUSE" => 0x48,
        "INSERT" => 0x49,
        "HOME" => 0x4A,
        "PAGE_UP" => 0x4B,
        "DELETE" => 0x4C,
        "END" => 0x4D,
        "PAGE_DOWN" => 0x4E,
        "RIGHT_ARROW" => 0x4F,
        "LEFT_ARROW" => 0x50,
        "DOWN_ARROW" => 0x51,
        "UP_ARROW" => 0x52,
        "KEYPAD_NUMLOCK" => 0x53,
        "KEYPAD_FORWARD_SLASH" => 0x54,
        "KEYPAD_ASTERISK" => 0x55,
        "KEYPAD_MINUS" => 0x56,
        "KEYPAD_PLUS" => 0x57,
        "KEYPAD_ENTER" => 0x58,
        "KEYPAD_ONE" => 0x59, "KEYPAD_TWO" => 0x5A, "KEYPAD_THREE" => 0x5B,
        "KEYPAD_FOUR" => 0x5C, "KEYPAD_FIVE" => 0x5D, "KEYPAD_SIX" => 0x5E,
        "KEYPAD_SEVEN" => 0x5F, "KEYPAD_EIGHT" => 0x60, "KEYPAD_NINE" => 0x61,
        "KEYPAD_ZERO" => 0x62,
        "KEYPAD_PERIOD" => 0x63,
        "APPLICATION" => 0x65,
        "CONTROL" | "LEFT_CONTROL" => 0xE0,
        "SHIFT" | "LEFT_SHIFT" => 0xE1,
        "ALT" | "OPTION" | "LEFT_ALT" => 0xE2,
        "GUI" | "COMMAND" | "WINDOWS" | "LEFT_GUI" => 0xE3,
        "RIGHT_CONTROL" => 0xE4,
        "RIGHT_SHIFT" => 0xE5,
        "RIGHT_ALT" => 0xE6,
        "RIGHT_GUI" => 0xE7,
        _ => return None,
    };
    Some(code)
}

/// Get the canonical name of a HID usage code, for display and logs.
pub fn name(code: u8) -> &'static str {
    match code {
        0x04 => "A", 0x05 => "B", 0x06 => "C", 0x07 => "D",
        0x08 => "E", 0x09 => "F", 0x0A => "G", 0x0B => "H",
        0x0C => "I", 0x0D => "J", 0x0E => "K", 0x0F => "L",
        0x10 => "M", 0x11 => "N", 0x12 => "O", 0x13 => "P",
        0x14 => "Q", 0x15 => "R", 0x16 => "S", 0x17 => "T",
        0x18 => "U", 0x19 => "V", 0x1A => "W", 0x1B => "X",
        0x1C => "Y", 0x1D => "Z",
        0x1E => "ONE", 0x1F => "TWO", 0x20 => "THREE", 0x21 => "FOUR",
        0x22 => "FIVE", 0x23 => "SIX", 0x24 => "SEVEN", 0x25 => "EIGHT",
        0x26 => "NINE", 0x27 => "ZERO",
        0x28 => "ENTER", 0x29 => "ESCAPE", 0x2A => "BACKSPACE",
        0x2B => "TAB", 0x2C => "SPACE", 0x2D => "MINUS", 0x2E => "EQUALS",
        0x2F => "LEFT_BRACKET", 0x30 => "RIGHT_BRACKET", 0x31 => "BACKSLASH",
        0x32 => "POUND", 0x33 => "SEMICOLON", 0x34 => "QUOTE",
        0x35 => "GRAVE_ACCENT", 0x36 => "COMMA", 0x37 => "PERIOD",
        0x38 => "FORWARD_SLASH", 0x39 => "CAPS_LOCK",
        0x3A => "F1", 0x3B => "F2", 0x3C => "F3", 0x3D => "F4",
        0x3E => "F5", 0x3F => "F6", 0x40 => "F7", 0x41 => "F8",
        0x42 => "F9", 0x43 => "F10", 0x44 => "F11", 0x45 => "F12",
        0x46 => "PRINT_SCREEN", 0x47 => "SCROLL_LOCK", 0x48 => "PAUSE",
        0x49 => "INSERT", 0x4A => "HOME", 0x4B => "PAGE_UP",
        0x4C => "DELETE", 0x4D => "END", 0x4E => "PAGE_DOWN",
        0x4F => "RIGHT_ARROW", 0x50 => "LEFT_ARROW",
        0x51 => "DOWN_ARROW", 0x52 => "UP_ARROW",
        0x53 => "KEYPAD_NUMLOCK", 0x54 => "KEYPAD_FORWARD_SLASH",
        0x55 => "KEYPAD_ASTERISK", 0x56 => "KEYPAD_MINUS",
        0x57 => "KEYPAD_PLUS", 0x58 => "KEYPAD_ENTER",
        0x59 => "KEYPAD_ONE", 0x5A => "KEYPAD_TWO", 0x5B => "KEYPAD_THREE",
        0x5C => "KEYPAD_FOUR", 0x5D => "KEYPAD_FIVE", 0x5E => "KEYPAD_SIX",
        0x5F => "KEYPAD_SEVEN", 0x60 => "KEYPAD_EIGHT", 0x61 => "KEYPAD_NINE",
        0x62 => "KEYPAD_ZERO", 0x63 => "KEYPAD_PERIOD",
        0x65 => "APPLICATION",
        0xE0 => "CONTROL", 0xE1 => "SHIFT", 0xE2 => "ALT", 0xE3 => "GUI",
        0xE4 => "RIGHT_CONTROL", 0xE5 => "RIGHT_SHIFT",
        0xE6 => "RIGHT_ALT", 0xE7 => "RIGHT_GUI",
        _ => "?",
    }
}

/// Fixed alias table mapping command tokens to canonical key names.
pub fn alias(token: &str) -> Option<&'static str> {
    let name = match token {
        "CTRL" => "CONTROL",
        "OPT" => "OPTION",
        "CMD" => "COMMAND",
        "1" => "ONE",
        "2" => "TWO",
        "3" => "THREE",
        "4" => "FOUR",
        "5" => "FIVE",
        "6" => "SIX",
        "7" => "SEVEN",
        "8" => "EIGHT",
        "9" => "NINE",
        "0" => "ZERO",
        "ESC" => "ESCAPE",
        "." => "PERIOD",
        "," => "COMMA",
        ";" => "SEMICOLON",
        "\\" => "BACKSLASH",
        "/" => "FORWARD_SLASH",
        "LEFT" => "LEFT_ARROW",
        "RIGHT" => "RIGHT_ARROW",
        "UP" => "UP_ARROW",
        "DOWN" => "DOWN_ARROW",
        "[" => "LEFT_BRACKET",
        "{" => "LEFT_BRACKET",
        "]" => "RIGHT_BRACKET",
        "}" => "RIGHT_BRACKET",
        "MINUS" => "KEYPAD_MINUS",
        "PLUS" => "KEYPAD_PLUS",
        _ => return None,
    };
    Some(name)
}

/// Resolve an uppercase command token to a keycode.
///
/// The alias table is consulted before the direct name lookup, so
/// `"MINUS"` resolves to the keypad minus rather than the number-row
/// key.
pub fn resolve(token: &str) -> Option<u8> {
    code_from_name(alias(token).unwrap_or(token))
}
