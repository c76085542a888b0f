//! Key press normalization into canonical key names

use super::key_press::KeyPress;

/// Modifier tokens a pattern may contain
pub const MODIFIER_KEYS: &[&str] = &["ctrl", "cmd", "option", "alt", "shift", "fn"];

/// Whether a token names a modifier rather than a main key
pub fn is_modifier(token: &str) -> bool {
    MODIFIER_KEYS
        .iter()
        .any(|m| m.eq_ignore_ascii_case(token))
}

/// Modifiers `key_names` can report for a platform, in the order it emits them
pub fn modifier_order(is_mac: bool) -> &'static [&'static str] {
    if is_mac {
        &["cmd", "ctrl", "option", "shift"]
    } else {
        &["ctrl", "alt", "shift"]
    }
}

/// Physical codes that are reported by symbol rather than by logical key,
/// so that punctuation is judged the same on every layout.
const CODE_TO_KEY: &[(&str, &str)] = &[
    ("Minus", "-"),
    ("Equal", "="),
    ("BracketLeft", "["),
    ("BracketRight", "]"),
    ("Backslash", "\\"),
    ("Semicolon", ";"),
    ("Quote", "'"),
    ("Comma", ","),
    ("Period", "."),
    ("Slash", "/"),
    ("Backquote", "`"),
    ("Space", "space"),
    ("NumpadSubtract", "-"),
    ("NumpadAdd", "+"),
    ("NumpadMultiply", "*"),
    ("NumpadDivide", "/"),
    ("NumpadDecimal", "."),
];

fn symbol_for_code(code: &str) -> Option<&'static str> {
    CODE_TO_KEY
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
}

/// Ordered set of canonical key names observed for one key press
///
/// Insertion order is kept and duplicates are dropped, so modifiers inserted
/// first always precede the main key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyNames(Vec<String>);

impl KeyNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token unless it is already present
    pub fn insert(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.0.contains(&token) {
            self.0.push(token);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The non-modifier token, if one was pressed
    pub fn main_key(&self) -> Option<&str> {
        self.iter().find(|token| !is_modifier(token))
    }
}

impl<S: Into<String>> FromIterator<S> for KeyNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for token in iter {
            names.insert(token);
        }
        names
    }
}

/// Normalize a key press into canonical key names for the given platform
///
/// On Mac, meta/ctrl/alt become `cmd`/`ctrl`/`option`; elsewhere ctrl/alt
/// become `ctrl`/`alt` and meta is ignored. `shift` follows on both. The main
/// key comes last.
pub fn key_names(event: &KeyPress, is_mac: bool) -> KeyNames {
    let mut keys = KeyNames::new();

    if is_mac {
        if event.meta_key {
            keys.insert("cmd");
        }
        if event.ctrl_key {
            keys.insert("ctrl");
        }
        if event.alt_key {
            keys.insert("option");
        }
    } else {
        if event.ctrl_key {
            keys.insert("ctrl");
        }
        if event.alt_key {
            keys.insert("alt");
        }
    }
    if event.shift_key {
        keys.insert("shift");
    }

    let pressed = event.key.to_lowercase();
    match pressed.as_str() {
        "" => {}
        "control" => keys.insert("ctrl"),
        "meta" => {
            if is_mac {
                keys.insert("cmd");
            }
        }
        "alt" => keys.insert(if is_mac { "option" } else { "alt" }),
        "shift" => keys.insert("shift"),
        " " | "spacebar" => keys.insert("space"),
        _ => match symbol_for_code(&event.code) {
            Some(symbol) => keys.insert(symbol.to_lowercase()),
            None => keys.insert(pressed.as_str()),
        },
    }

    keys
}
