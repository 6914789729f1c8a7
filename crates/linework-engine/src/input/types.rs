use crate::coords::Vec2;

/// Pointer transition in normalized device coordinates.
///
/// `Moved` is delivered whether or not a button is held; the editor state
/// machine decides what hovering means per tool (polygon preview tracks the
/// cursor between clicks).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Moved(Vec2),
    Up(Vec2),
}

/// Keyboard key identifier.
///
/// Intentionally trimmed to the keys the studio binds (tool selection,
/// polygon side count, clear/cancel). Unmapped platform keys arrive as
/// `Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    // Tool / command mnemonics.
    C, G, L, P, R, S,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Unknown(u32),
}

impl Key {
    /// Digit value for `Digit0`–`Digit9`, `None` otherwise.
    pub fn digit(self) -> Option<u32> {
        match self {
            Key::Digit0 => Some(0),
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            Key::Digit4 => Some(4),
            Key::Digit5 => Some(5),
            Key::Digit6 => Some(6),
            Key::Digit7 => Some(7),
            Key::Digit8 => Some(8),
            Key::Digit9 => Some(9),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),

    Key { key: Key, state: KeyState },

    /// Pointer left the window surface.
    PointerLeft,
}
