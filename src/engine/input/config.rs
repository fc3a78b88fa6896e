// Keyboard to controller bindings

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::button::Buttons;

/// Default keyboard layout for the pad
pub fn default_bindings() -> Vec<(KeyCode, Buttons)> {
    vec![
        (KeyCode::ArrowUp, Buttons::UP),
        (KeyCode::ArrowDown, Buttons::DOWN),
        (KeyCode::ArrowLeft, Buttons::LEFT),
        (KeyCode::ArrowRight, Buttons::RIGHT),
        (KeyCode::KeyZ, Buttons::A),
        (KeyCode::Space, Buttons::A),
        (KeyCode::KeyX, Buttons::B),
        (KeyCode::KeyC, Buttons::C),
        (KeyCode::Enter, Buttons::START),
    ]
}

/// Maps keys to the pad buttons they hold down
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Buttons>,
}

impl InputConfig {
    /// Create a configuration with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Buttons)>) -> Self {
        let mut config = Self::empty();
        for (key, buttons) in bindings {
            config.bind(key, buttons);
        }
        config
    }

    /// Bind a key, replacing whatever it was bound to
    pub fn bind(&mut self, key: KeyCode, buttons: Buttons) {
        self.bindings.insert(key, buttons);
    }

    pub fn get(&self, key: KeyCode) -> Option<Buttons> {
        self.bindings.get(&key).copied()
    }

    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = InputConfig::default();
        assert_eq!(config.get(KeyCode::ArrowLeft), Some(Buttons::LEFT));
        assert_eq!(config.get(KeyCode::ArrowRight), Some(Buttons::RIGHT));
        assert_eq!(config.get(KeyCode::KeyZ), Some(Buttons::A));
        assert_eq!(config.get(KeyCode::Space), Some(Buttons::A));
        assert_eq!(config.get(KeyCode::KeyX), Some(Buttons::B));
        assert_eq!(config.get(KeyCode::Enter), Some(Buttons::START));
        assert_eq!(config.get(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key in default bindings");
        }
    }

    #[test]
    fn test_rebind_key() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyZ, Buttons::B);

        assert_eq!(config.get(KeyCode::KeyZ), Some(Buttons::B));
        assert_eq!(config.get(KeyCode::Space), Some(Buttons::A));
    }

    #[test]
    fn test_from_bindings_replaces_defaults() {
        let config = InputConfig::from_bindings(vec![
            (KeyCode::KeyA, Buttons::LEFT),
            (KeyCode::KeyD, Buttons::RIGHT),
        ]);

        assert!(config.is_bound(KeyCode::KeyA));
        assert!(!config.is_bound(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_later_binding_wins() {
        let config = InputConfig::from_bindings(vec![
            (KeyCode::KeyQ, Buttons::A),
            (KeyCode::KeyQ, Buttons::START),
        ]);
        assert_eq!(config.get(KeyCode::KeyQ), Some(Buttons::START));
    }
}
