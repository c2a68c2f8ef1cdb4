use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_is_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &key(Key::Escape, KeyState::Pressed, false));
        assert!(frame.was_pressed(Key::Escape));
        assert!(state.key_down(Key::Escape));

        frame.clear();
        state.apply_event(&mut frame, &key(Key::Escape, KeyState::Pressed, true));
        assert!(!frame.was_pressed(Key::Escape), "repeat must not count as a new press");
    }

    #[test]
    fn release_clears_down_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &key(Key::Space, KeyState::Pressed, false));
        state.apply_event(&mut frame, &key(Key::Space, KeyState::Released, false));

        assert!(!state.key_down(Key::Space));
        assert!(frame.keys_released.contains(&Key::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, &key(Key::Q, KeyState::Released, false));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &InputEvent::Focused(true));
        state.apply_event(&mut frame, &key(Key::F11, KeyState::Pressed, false));
        state.apply_event(&mut frame, &InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn key_events_update_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };

        state.apply_event(
            &mut frame,
            &InputEvent::Key { key: Key::Q, state: KeyState::Pressed, modifiers: shift, repeat: false },
        );
        assert!(state.modifiers.any());
    }
}
