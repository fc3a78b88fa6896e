// Character system
//
// This module contains everything related to the playable character:
// - Character data structure, movement and collision response
// - Per-region tuning constants
// - Input direction lookup tables
// - Animation cycler for the sprite

pub mod animation;
pub mod character;
pub mod direction;
pub mod tuning;

// Re-export commonly used types
pub use animation::CharacterAnimation;
pub use character::Character;
pub use direction::Direction;
pub use tuning::TuningProfile;
