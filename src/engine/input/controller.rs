// Controller port and per-frame input snapshots

use std::sync::atomic::{AtomicU16, Ordering};

use super::button::Buttons;

/// Latest pad state, written by the event handler and read once per frame
#[derive(Debug, Default)]
pub struct ControllerPort {
    state: AtomicU16,
}

impl ControllerPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held button set
    pub fn store(&self, buttons: Buttons) {
        self.state.store(buttons.bits(), Ordering::Release);
    }

    pub fn load(&self) -> Buttons {
        Buttons::from_bits_retain(self.state.load(Ordering::Acquire))
    }
}

/// Pad state for one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Buttons held this frame
    pub held: Buttons,
    /// Buttons held this frame but not the previous one
    pub pressed: Buttons,
}

impl FrameInput {
    pub fn from_states(current: Buttons, previous: Buttons) -> Self {
        Self {
            held: current,
            pressed: current & !previous,
        }
    }

    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.pressed.contains(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_round_trip() {
        let port = ControllerPort::new();
        assert!(port.load().is_empty());

        port.store(Buttons::A | Buttons::RIGHT);
        assert_eq!(port.load(), Buttons::A | Buttons::RIGHT);

        port.store(Buttons::empty());
        assert!(port.load().is_empty());
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let first = FrameInput::from_states(Buttons::A, Buttons::empty());
        assert!(first.just_pressed(Buttons::A));
        assert!(first.held.contains(Buttons::A));

        let second = FrameInput::from_states(Buttons::A, Buttons::A);
        assert!(!second.just_pressed(Buttons::A));
        assert!(second.held.contains(Buttons::A));
    }

    #[test]
    fn test_release_is_not_a_press() {
        let input = FrameInput::from_states(Buttons::empty(), Buttons::B);
        assert!(!input.just_pressed(Buttons::B));
        assert!(!input.held.contains(Buttons::B));
    }

    #[test]
    fn test_new_button_while_others_held() {
        let input = FrameInput::from_states(Buttons::LEFT | Buttons::B, Buttons::LEFT);
        assert!(input.just_pressed(Buttons::B));
        assert!(!input.just_pressed(Buttons::LEFT));
    }
}
