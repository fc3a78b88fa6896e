// Built-in sprite and tile graphics

use glam::Vec4;

use crate::engine::renderer::{Palette, SpriteDefinition};

use super::characters::CharacterAnimation;

/// Frame counts per animation index, in sprite sheet order
static ADVENTURER_ANIMATIONS: [u8; 3] = [
    CharacterAnimation::Idle.length(),
    CharacterAnimation::Walk.length(),
    CharacterAnimation::AirSlash.length(),
];

const ADVENTURER_PALETTE: Palette = Palette::new([
    Vec4::new(0.10, 0.08, 0.12, 1.0),
    Vec4::new(0.80, 0.45, 0.25, 1.0),
    Vec4::new(0.95, 0.75, 0.55, 1.0),
    Vec4::new(0.20, 0.35, 0.75, 1.0),
]);

const BASIC_TILES_PALETTE: Palette = Palette::new([
    Vec4::new(0.05, 0.05, 0.08, 1.0),
    Vec4::new(0.35, 0.55, 0.30, 1.0),
    Vec4::new(0.50, 0.70, 0.40, 1.0),
    Vec4::new(0.20, 0.30, 0.15, 1.0),
]);

/// The player character graphics (32x32 frames)
pub fn adventurer() -> SpriteDefinition {
    SpriteDefinition {
        name: "adventurer",
        width: 32,
        height: 32,
        animations: &ADVENTURER_ANIMATIONS,
        palette: ADVENTURER_PALETTE,
    }
}

/// Palette for the collider debug tiles
pub fn basic_tiles_palette() -> Palette {
    BASIC_TILES_PALETTE
}
