/// Keyboard key identifier.
///
/// Only keys the demo reacts to (plus modifiers) get named variants; everything
/// else maps to `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    Shift,
    Control,
    Alt,
    Meta,

    Q,
    F11,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// The key of a fresh (non-repeat) press, if this is one.
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => Some(*key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key: Key::F11,
            state,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    #[test]
    fn only_fresh_presses_report_a_key() {
        assert_eq!(key_event(KeyState::Pressed, false).pressed_key(), Some(Key::F11));
        assert_eq!(key_event(KeyState::Pressed, true).pressed_key(), None);
        assert_eq!(key_event(KeyState::Released, false).pressed_key(), None);
        assert_eq!(InputEvent::Focused(true).pressed_key(), None);
    }
}
