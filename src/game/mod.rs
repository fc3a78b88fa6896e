// Game state and per-frame orchestration

pub mod characters;
pub mod sprites;
pub mod stage;

use log::info;

use crate::engine::input::{Buttons, FrameInput};
use crate::engine::renderer::SpriteBackend;

use characters::{Character, Direction};
use stage::Stage;

/// Pad button that starts a jump
pub const JUMP_BUTTON: Buttons = Buttons::A;
/// Pad button that starts an attack
pub const ATTACK_BUTTON: Buttons = Buttons::B;
/// Pad button that toggles pause
pub const PAUSE_BUTTON: Buttons = Buttons::START;

/// Everything simulated each frame
#[derive(Debug)]
pub struct Game {
    character: Character,
    stage: Stage,
    paused: bool,
}

impl Game {
    pub fn new(character: Character, stage: Stage) -> Self {
        Self {
            character,
            stage,
            paused: false,
        }
    }

    /// Run one simulation step
    ///
    /// Returns `false` when the step was skipped because the game is paused.
    pub fn step(&mut self, input: &FrameInput, sprites: &mut dyn SpriteBackend) -> bool {
        if input.just_pressed(PAUSE_BUTTON) {
            self.toggle_pause();
        }
        if self.paused {
            return false;
        }

        if input.just_pressed(JUMP_BUTTON) {
            self.character.on_jump();
        }
        if input.just_pressed(ATTACK_BUTTON) {
            self.character.on_attack(sprites);
        }

        let direction = Direction::from_buttons(input.held);
        self.character.update(direction, &self.stage, sprites);
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            info!("Game paused");
        } else {
            info!("Game resumed");
        }
    }
}
