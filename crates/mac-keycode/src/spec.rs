//! Text forms of keys as written in chord strings.

use crate::Key;

/// Keys written as their symbol. These are also the emitted form.
const SYMBOLS: &[(Key, &str)] = &[
    (Key::Digit0, "0"),
    (Key::Digit1, "1"),
    (Key::Digit2, "2"),
    (Key::Digit3, "3"),
    (Key::Digit4, "4"),
    (Key::Digit5, "5"),
    (Key::Digit6, "6"),
    (Key::Digit7, "7"),
    (Key::Digit8, "8"),
    (Key::Digit9, "9"),
    (Key::Minus, "-"),
    (Key::Equal, "="),
    (Key::LeftBracket, "["),
    (Key::RightBracket, "]"),
    (Key::Backslash, "\\"),
    (Key::Semicolon, ";"),
    (Key::Quote, "'"),
    (Key::Comma, ","),
    (Key::Period, "."),
    (Key::Slash, "/"),
    (Key::Grave, "`"),
];

/// Lowercase shorthand accepted when parsing, never emitted.
const ALIASES: &[(&str, Key)] = &[
    ("cmd", Key::Command),
    ("ctrl", Key::Control),
    ("opt", Key::Option),
    ("alt", Key::Option),
    ("caps", Key::CapsLock),
    ("fn", Key::Function),
    ("enter", Key::Return),
    ("ret", Key::Return),
    ("esc", Key::Escape),
    ("del", Key::ForwardDelete),
    ("backspace", Key::Delete),
    ("left", Key::LeftArrow),
    ("right", Key::RightArrow),
    ("up", Key::UpArrow),
    ("down", Key::DownArrow),
    ("pgup", Key::PageUp),
    ("pgdn", Key::PageDown),
];

impl Key {
    /// Parse one chord component: a case-insensitive key name, a symbol
    /// such as `1` or `,`, or an alias such as `left`, `ctrl`, or `enter`.
    pub fn from_spec(s: &str) -> Option<Self> {
        if let Some(k) = Self::from_name(s) {
            return Some(k);
        }
        if let Some((k, _)) = SYMBOLS.iter().find(|(_, sym)| *sym == s) {
            return Some(*k);
        }
        let lowered = s.to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, k)| *k)
    }

    /// The form used when rendering chords: the symbol for digits and
    /// punctuation, otherwise the lowercase key name.
    pub fn to_spec(self) -> String {
        SYMBOLS
            .iter()
            .find(|(k, _)| *k == self)
            .map_or_else(|| self.name().to_ascii_lowercase(), |(_, s)| (*s).to_string())
    }
}
