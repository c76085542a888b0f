//! Raw key press observations
//!
//! `KeyPress` is the boundary contract between the terminal and the matching
//! core: four modifier flags, a logical key value and a physical code, named
//! the way browser keyboard events name them (`"b"`/`"KeyB"`,
//! `"-"`/`"Minus"`, `"Control"`/`"ControlLeft"`).

use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, ModifierKeyCode};

/// A single key press as seen by the quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
    /// Logical key value (layout dependent), e.g. "b", "B", "_", "Enter"
    pub key: String,
    /// Physical key code (layout independent), e.g. "KeyB", "Minus"
    pub code: String,
}

impl KeyPress {
    /// Create a key press without any modifier held
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        let (key, code) = key_and_code(event.code, event.state);
        Self {
            ctrl_key: event.modifiers.contains(KeyModifiers::CONTROL),
            alt_key: event.modifiers.contains(KeyModifiers::ALT),
            shift_key: event.modifiers.contains(KeyModifiers::SHIFT),
            meta_key: event
                .modifiers
                .intersects(KeyModifiers::SUPER | KeyModifiers::META),
            key,
            code,
        }
    }
}

/// Translate a crossterm key code into a (key, code) pair
fn key_and_code(key_code: KeyCode, state: KeyEventState) -> (String, String) {
    let named = |key: &str, code: &str| (key.to_string(), code.to_string());

    match key_code {
        KeyCode::Char(c) => {
            let code = if state.contains(KeyEventState::KEYPAD) {
                numpad_code(c)
            } else {
                physical_code(c)
            };
            (c.to_string(), code)
        }
        KeyCode::Enter => named("Enter", "Enter"),
        KeyCode::Tab | KeyCode::BackTab => named("Tab", "Tab"),
        KeyCode::Backspace => named("Backspace", "Backspace"),
        KeyCode::Esc => named("Escape", "Escape"),
        KeyCode::Left => named("ArrowLeft", "ArrowLeft"),
        KeyCode::Right => named("ArrowRight", "ArrowRight"),
        KeyCode::Up => named("ArrowUp", "ArrowUp"),
        KeyCode::Down => named("ArrowDown", "ArrowDown"),
        KeyCode::Home => named("Home", "Home"),
        KeyCode::End => named("End", "End"),
        KeyCode::PageUp => named("PageUp", "PageUp"),
        KeyCode::PageDown => named("PageDown", "PageDown"),
        KeyCode::Insert => named("Insert", "Insert"),
        KeyCode::Delete => named("Delete", "Delete"),
        KeyCode::F(n) => {
            let name = format!("F{n}");
            (name.clone(), name)
        }
        KeyCode::Modifier(modifier) => modifier_key_and_code(modifier),
        _ => (String::new(), String::new()),
    }
}

fn modifier_key_and_code(modifier: ModifierKeyCode) -> (String, String) {
    let (key, code) = match modifier {
        ModifierKeyCode::LeftControl => ("Control", "ControlLeft"),
        ModifierKeyCode::RightControl => ("Control", "ControlRight"),
        ModifierKeyCode::LeftAlt => ("Alt", "AltLeft"),
        ModifierKeyCode::RightAlt => ("Alt", "AltRight"),
        ModifierKeyCode::LeftShift => ("Shift", "ShiftLeft"),
        ModifierKeyCode::RightShift => ("Shift", "ShiftRight"),
        ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => ("Meta", "MetaLeft"),
        ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => ("Meta", "MetaRight"),
        _ => ("", ""),
    };
    (key.to_string(), code.to_string())
}

/// Physical code of the key producing `c` on a US layout, shifted or not
fn physical_code(c: char) -> String {
    if c.is_ascii_alphabetic() {
        return format!("Key{}", c.to_ascii_uppercase());
    }
    if c.is_ascii_digit() {
        return format!("Digit{c}");
    }

    let code = match c {
        '-' | '_' => "Minus",
        '=' | '+' => "Equal",
        '[' | '{' => "BracketLeft",
        ']' | '}' => "BracketRight",
        '\\' | '|' => "Backslash",
        ';' | ':' => "Semicolon",
        '\'' | '"' => "Quote",
        ',' | '<' => "Comma",
        '.' | '>' => "Period",
        '/' | '?' => "Slash",
        '`' | '~' => "Backquote",
        ' ' => "Space",
        '!' => "Digit1",
        '@' => "Digit2",
        '#' => "Digit3",
        '$' => "Digit4",
        '%' => "Digit5",
        '^' => "Digit6",
        '&' => "Digit7",
        '*' => "Digit8",
        '(' => "Digit9",
        ')' => "Digit0",
        _ => "",
    };
    code.to_string()
}

fn numpad_code(c: char) -> String {
    match c {
        '-' => "NumpadSubtract".to_string(),
        '+' => "NumpadAdd".to_string(),
        '*' => "NumpadMultiply".to_string(),
        '/' => "NumpadDivide".to_string(),
        '.' => "NumpadDecimal".to_string(),
        '0'..='9' => format!("Numpad{c}"),
        _ => physical_code(c),
    }
}
