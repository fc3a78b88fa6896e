// Input handling system
//
// Keyboard events are mapped onto a three-button pad. The pad state lives in
// a controller port that the game reads once per simulation step.
//
// ## Architecture
//
// - `button`: Pad button flags
// - `controller`: Controller port and per-frame snapshots with edge detection
// - `config`: Keyboard to pad bindings
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::{Buttons, InputManager};
//
// let mut input_manager = InputManager::default();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per simulation step, read the pad
// let input = input_manager.poll();
// if input.just_pressed(Buttons::A) {
//     // A was pressed this step
// }
// ```

pub mod button;
pub mod config;
pub mod controller;
pub mod manager;

// Re-export commonly used types
pub use button::Buttons;
pub use controller::FrameInput;
pub use manager::InputManager;
