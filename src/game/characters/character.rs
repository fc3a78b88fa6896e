// Player character: movement, collision response and animation

use glam::IVec2;
use log::{debug, trace};

use crate::core::{Fix16, FixVec2};
use crate::engine::renderer::{PaletteSlot, SpriteBackend, SpriteDefinition, SpriteHandle};
use crate::game::stage::{Collision, Stage};

use super::animation::{AnimationCycler, CharacterAnimation};
use super::direction::Direction;
use super::tuning::TuningProfile;

/// Character bounding box in pixels
pub const CHARACTER_WIDTH: i16 = 16;
pub const CHARACTER_HEIGHT: i16 = 32;

/// Horizontal inset of the probes from the sprite's left edge
const PROBE_INSET: i16 = 8;

/// Spawn height above the floor
const SPAWN_HEIGHT: i16 = 10;

/// Probe offsets relative to the character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionProbes {
    pub top: FixVec2,
    pub bottom: FixVec2,
    pub left: FixVec2,
    pub right: FixVec2,
}

impl CollisionProbes {
    fn from_size(size: FixVec2) -> Self {
        let two = Fix16::from_num(2);
        let inset = Fix16::from_num(PROBE_INSET);
        let center_x = inset + size.x / two;
        let middle_y = size.y / two;

        Self {
            top: FixVec2::new(center_x, Fix16::from_num(4)),
            bottom: FixVec2::new(center_x, size.y),
            left: FixVec2::new(inset, middle_y),
            right: FixVec2::new(size.x - inset, middle_y),
        }
    }
}

/// The player-controlled character
///
/// Updated once per frame by [`Character::update`]. Airborne is not a flag of
/// its own: the character is airborne whenever its vertical velocity is
/// non-zero.
#[derive(Debug)]
pub struct Character {
    tuning: TuningProfile,

    // Rendering
    sprite: Option<SpriteHandle>,
    hflip: bool,
    animation: AnimationCycler,

    // Motion
    position: FixVec2,
    velocity: FixVec2,
    size: FixVec2,
    probes: CollisionProbes,

    is_jumping: bool,
    is_attacking: bool,
}

impl Character {
    /// Create a character standing just above the floor
    pub fn new(tuning: TuningProfile) -> Self {
        let size = FixVec2::from_pixels(CHARACTER_WIDTH, CHARACTER_HEIGHT);

        Self {
            position: FixVec2::new(
                Fix16::from_num(8),
                tuning.floor_limit - Fix16::from_num(SPAWN_HEIGHT),
            ),
            velocity: FixVec2::ZERO,
            size,
            probes: CollisionProbes::from_size(size),
            tuning,
            sprite: None,
            hflip: false,
            animation: AnimationCycler::new(),
            is_jumping: false,
            is_attacking: false,
        }
    }

    /// Give the character new graphics, releasing the previous sprite
    pub fn set_sprite(
        &mut self,
        definition: &SpriteDefinition,
        palette: PaletteSlot,
        sprites: &mut dyn SpriteBackend,
    ) {
        if let Some(old) = self.sprite.take() {
            sprites.release_sprite(old);
        }

        sprites.load_palette(palette, &definition.palette);
        let handle = sprites.add_sprite(definition, self.render_position(), palette);
        self.sprite = Some(handle);
        debug!("Character sprite set to '{}'", definition.name);

        // A fresh sprite starts on animation 0, unflipped
        if self.is_attacking {
            sprites.set_animation(handle, self.animation.current().index());
        } else {
            self.play_animation(CharacterAnimation::Idle, sprites);
        }
        if self.hflip {
            sprites.set_hflip(handle, true);
        }

        sprites.set_visibility(handle, true);
    }

    /// Advance the character by one frame
    pub fn update(&mut self, direction: Direction, stage: &Stage, sprites: &mut dyn SpriteBackend) {
        // Facing follows the input even when a wall stops the motion
        self.update_horizontal_flip(direction, sprites);
        self.update_horizontal_velocity(direction, stage, sprites);
        self.update_vertical_velocity(stage);
        self.cycle_animation(sprites);
        self.update_position(sprites);
    }

    /// Start a jump unless one is in progress
    pub fn on_jump(&mut self) {
        if self.is_jumping {
            return;
        }

        self.is_jumping = true;
        self.velocity.y = self.tuning.jump_velocity;
        debug!("Jump from y={}", self.position.y);
    }

    /// Start an attack unless one is in progress
    pub fn on_attack(&mut self, sprites: &mut dyn SpriteBackend) {
        if self.is_attacking {
            return;
        }

        self.play_animation(CharacterAnimation::AirSlash, sprites);
        self.is_attacking = true;
        debug!("Attack started");
    }

    fn play_animation(&mut self, animation: CharacterAnimation, sprites: &mut dyn SpriteBackend) {
        if self.animation.play(animation) {
            trace!("Animation -> {:?}", animation);
            if let Some(handle) = self.sprite {
                sprites.set_animation(handle, animation.index());
            }
        }
    }

    fn update_horizontal_flip(&mut self, direction: Direction, sprites: &mut dyn SpriteBackend) {
        if self.is_attacking {
            return;
        }
        let Some(hflip) = direction.hflip() else {
            return;
        };

        self.play_animation(CharacterAnimation::Walk, sprites);

        if self.hflip != hflip {
            self.hflip = hflip;
            if let Some(handle) = self.sprite {
                sprites.set_hflip(handle, hflip);
            }
        }
    }

    /// Test the probe on the side the character is moving towards
    fn detect_horizontal_collision(&self, stage: &Stage) -> Collision {
        let offset = if self.velocity.x < Fix16::ZERO {
            self.probes.left
        } else {
            self.probes.right
        };

        stage.check_collisions(self.position + offset, self.velocity.x, Fix16::ZERO)
    }

    fn update_horizontal_velocity(
        &mut self,
        direction: Direction,
        stage: &Stage,
        sprites: &mut dyn SpriteBackend,
    ) {
        if direction.is_none() {
            self.stop_horizontal(stage, sprites);
        } else {
            self.move_horizontal(direction, stage);
        }

        self.clamp_to_stage_edge();
    }

    fn stop_horizontal(&mut self, stage: &Stage, sprites: &mut dyn SpriteBackend) {
        // Being blocked overrides friction
        if self.detect_horizontal_collision(stage).is_collision() {
            self.velocity.x = Fix16::ZERO;
            return;
        }

        let speed = self.velocity.x.abs();
        if speed > self.tuning.min_velocity {
            let slowed = (speed - self.tuning.friction).max(Fix16::ZERO);
            self.velocity.x = if self.velocity.x > Fix16::ZERO {
                slowed
            } else {
                -slowed
            };
        } else {
            self.velocity.x = Fix16::ZERO;
            if !self.is_attacking {
                self.play_animation(CharacterAnimation::Idle, sprites);
            }
        }
    }

    fn move_horizontal(&mut self, direction: Direction, stage: &Stage) {
        let max_velocity = if self.is_airborne() {
            self.tuning.max_air_velocity
        } else {
            self.tuning.max_ground_velocity
        };

        let delta = direction.velocity_delta();
        if (self.velocity.x + delta).abs() < max_velocity {
            if self.detect_horizontal_collision(stage).is_collision() {
                self.velocity.x = Fix16::ZERO;
                return;
            }

            self.velocity.x += delta;
        }
    }

    fn clamp_to_stage_edge(&mut self) {
        self.position.x = self
            .position
            .x
            .clamp(self.tuning.left_limit, self.tuning.right_limit);
    }

    fn update_vertical_velocity(&mut self, stage: &Stage) {
        if self.position.y < self.tuning.floor_limit {
            self.update_falling_velocity(stage);
        } else {
            self.clamp_to_floor();
        }
    }

    fn update_falling_velocity(&mut self, stage: &Stage) {
        let offset = if self.velocity.y < Fix16::ZERO {
            self.probes.top
        } else {
            self.probes.bottom
        };

        let collision =
            stage.check_collisions(self.position + offset, Fix16::ZERO, self.velocity.y);

        match collision {
            Collision::NoCollision => self.velocity.y += self.tuning.gravity,
            Collision::Collision => self.land(),
        }
    }

    fn clamp_to_floor(&mut self) {
        if self.velocity.y > Fix16::ZERO {
            self.land();
            self.position.y = self.tuning.floor_limit;
        }
    }

    fn land(&mut self) {
        self.velocity.y = Fix16::ZERO;
        if self.is_jumping {
            trace!("Jump ended at y={}", self.position.y);
        }
        self.is_jumping = false;
    }

    fn cycle_animation(&mut self, sprites: &mut dyn SpriteBackend) {
        let tick = self.animation.tick();

        if let (Some(frame), Some(handle)) = (tick.display_frame, self.sprite) {
            sprites.set_frame(handle, frame);
        }

        if tick.wrapped && self.is_attacking && self.animation.current().is_attack() {
            self.is_attacking = false;
            debug!("Attack finished");
        }
    }

    fn update_position(&mut self, sprites: &mut dyn SpriteBackend) {
        self.position += self.velocity;

        if let Some(handle) = self.sprite {
            sprites.set_position(handle, self.render_position());
        }
    }

    /// Position in whole pixels, as sent to the sprite
    pub fn render_position(&self) -> IVec2 {
        self.position.to_pixels()
    }

    pub fn is_airborne(&self) -> bool {
        self.velocity.y != Fix16::ZERO
    }
}

#[cfg(test)]
impl Character {
    pub fn position(&self) -> FixVec2 {
        self.position
    }

    pub fn velocity(&self) -> FixVec2 {
        self.velocity
    }

    pub fn size(&self) -> FixVec2 {
        self.size
    }

    pub fn probes(&self) -> &CollisionProbes {
        &self.probes
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn hflip(&self) -> bool {
        self.hflip
    }

    pub fn animation(&self) -> &AnimationCycler {
        &self.animation
    }

    pub fn sprite(&self) -> Option<SpriteHandle> {
        self.sprite
    }

    pub fn tuning(&self) -> &TuningProfile {
        &self.tuning
    }
}
