// Input manager - turns keyboard events into controller snapshots

use std::collections::HashSet;

use log::trace;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::button::Buttons;
use super::config::InputConfig;
use super::controller::{ControllerPort, FrameInput};

/// Keeps the controller port in sync with the keyboard
///
/// Key events update the port as they arrive; [`InputManager::poll`] is then
/// called once per simulation step to read it and detect new presses.
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    port: ControllerPort,
    held_keys: HashSet<KeyCode>,
    previous: Buttons,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            port: ControllerPort::new(),
            held_keys: HashSet::new(),
            previous: Buttons::empty(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Key repeats carry no new state
        if event.repeat {
            return;
        }

        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state == ElementState::Pressed);
        }
    }

    /// Record a key transition and publish the resulting pad state
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.config.is_bound(key) {
            return;
        }

        let changed = if pressed {
            self.held_keys.insert(key)
        } else {
            self.held_keys.remove(&key)
        };

        if changed {
            let buttons = self.held_buttons();
            trace!("Pad state {:?}", buttons);
            self.port.store(buttons);
        }
    }

    /// Snapshot the port for one simulation step
    pub fn poll(&mut self) -> FrameInput {
        let current = self.port.load();
        let input = FrameInput::from_states(current, self.previous);
        self.previous = current;
        input
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.port.store(Buttons::empty());
    }

    fn held_buttons(&self) -> Buttons {
        self.held_keys
            .iter()
            .filter_map(|key| self.config.get(*key))
            .fold(Buttons::empty(), |held, buttons| held | buttons)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
