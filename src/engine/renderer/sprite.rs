// Hardware-style sprite table
//
// Game code never draws directly. It allocates sprites and pushes attribute
// changes (animation, frame, flip, position, visibility) through the
// `SpriteBackend` trait; the renderer reads the resulting table each frame.

use glam::{IVec2, Vec4};
use log::{debug, warn};

/// Number of colours in a palette
pub const PALETTE_SIZE: usize = 4;

/// One of the four palette slots in colour RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSlot {
    Pal0 = 0,
    Pal1 = 1,
    Pal2 = 2,
    Pal3 = 3,
}

impl PaletteSlot {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Colours used by a sprite or tileset
///
/// Entry 0 is the shadow colour, 1 the base fill, 2 the highlight and 3 the
/// outline/detail colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub colors: [Vec4; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Vec4; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub fn base(&self) -> Vec4 {
        self.colors[1]
    }

    pub fn highlight(&self) -> Vec4 {
        self.colors[2]
    }

    pub fn detail(&self) -> Vec4 {
        self.colors[3]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([Vec4::new(0.0, 0.0, 0.0, 1.0); PALETTE_SIZE])
    }
}

/// Static description of a sprite's graphics
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDefinition {
    pub name: &'static str,
    /// Frame size in pixels
    pub width: u32,
    pub height: u32,
    /// Frame count of each animation, indexed by animation index
    pub animations: &'static [u8],
    pub palette: Palette,
}

/// Handle to an allocated sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub(crate) u32);

impl SpriteHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Sink for sprite and palette changes
///
/// All calls are one-way notifications; a handle that is no longer allocated
/// is ignored.
pub trait SpriteBackend {
    /// Load a palette into a colour RAM slot
    fn load_palette(&mut self, slot: PaletteSlot, palette: &Palette);

    /// Allocate a sprite at a screen position, drawn with `slot`
    fn add_sprite(
        &mut self,
        definition: &SpriteDefinition,
        position: IVec2,
        slot: PaletteSlot,
    ) -> SpriteHandle;

    /// Free a sprite
    fn release_sprite(&mut self, handle: SpriteHandle);

    fn set_animation(&mut self, handle: SpriteHandle, animation: u8);

    fn set_frame(&mut self, handle: SpriteHandle, frame: u8);

    fn set_hflip(&mut self, handle: SpriteHandle, hflip: bool);

    fn set_position(&mut self, handle: SpriteHandle, position: IVec2);

    fn set_visibility(&mut self, handle: SpriteHandle, visible: bool);
}

/// Render state of one allocated sprite
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    pub definition: SpriteDefinition,
    pub position: IVec2,
    pub palette: PaletteSlot,
    pub animation: u8,
    pub frame: u8,
    pub hflip: bool,
    pub visible: bool,
}

/// Sprite table and colour RAM
#[derive(Debug, Default)]
pub struct SpriteEngine {
    palettes: [Palette; 4],
    slots: Vec<Option<SpriteInstance>>,
}

impl SpriteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(&self, slot: PaletteSlot) -> &Palette {
        &self.palettes[slot.index()]
    }

    #[cfg(test)]
    pub fn get(&self, handle: SpriteHandle) -> Option<&SpriteInstance> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, handle: SpriteHandle) -> Option<&mut SpriteInstance> {
        let sprite = self.slots.get_mut(handle.index()).and_then(Option::as_mut);
        if sprite.is_none() {
            warn!("Ignoring update for released sprite {:?}", handle);
        }
        sprite
    }

    /// Allocated sprites in allocation-slot order
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteInstance> {
        self.slots.iter().flatten()
    }

    /// Number of allocated sprites
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.sprites().count()
    }
}

impl SpriteBackend for SpriteEngine {
    fn load_palette(&mut self, slot: PaletteSlot, palette: &Palette) {
        self.palettes[slot.index()] = *palette;
    }

    fn add_sprite(
        &mut self,
        definition: &SpriteDefinition,
        position: IVec2,
        slot: PaletteSlot,
    ) -> SpriteHandle {
        let instance = SpriteInstance {
            definition: definition.clone(),
            position,
            palette: slot,
            animation: 0,
            frame: 0,
            hflip: false,
            visible: false,
        };

        // Reuse the first free slot so handles stay small
        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(instance);
                index
            }
            None => {
                self.slots.push(Some(instance));
                self.slots.len() - 1
            }
        };

        debug!("Added sprite '{}' in slot {}", definition.name, index);
        SpriteHandle(index as u32)
    }

    fn release_sprite(&mut self, handle: SpriteHandle) {
        if let Some(slot) = self.slots.get_mut(handle.index()) {
            if let Some(sprite) = slot.take() {
                debug!("Released sprite '{}' from slot {}", sprite.definition.name, handle.0);
            }
        }
    }

    fn set_animation(&mut self, handle: SpriteHandle, animation: u8) {
        if let Some(sprite) = self.get_mut(handle) {
            sprite.animation = animation;
            sprite.frame = 0;
        }
    }

    fn set_frame(&mut self, handle: SpriteHandle, frame: u8) {
        if let Some(sprite) = self.get_mut(handle) {
            sprite.frame = frame;
        }
    }

    fn set_hflip(&mut self, handle: SpriteHandle, hflip: bool) {
        if let Some(sprite) = self.get_mut(handle) {
            sprite.hflip = hflip;
        }
    }

    fn set_position(&mut self, handle: SpriteHandle, position: IVec2) {
        if let Some(sprite) = self.get_mut(handle) {
            sprite.position = position;
        }
    }

    fn set_visibility(&mut self, handle: SpriteHandle, visible: bool) {
        if let Some(sprite) = self.get_mut(handle) {
            sprite.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_definition() -> SpriteDefinition {
        SpriteDefinition {
            name: "test",
            width: 16,
            height: 16,
            animations: &[2, 2],
            palette: Palette::new([Vec4::ONE; PALETTE_SIZE]),
        }
    }

    #[test]
    fn test_add_sprite_defaults() {
        let mut engine = SpriteEngine::new();
        let handle = engine.add_sprite(&test_definition(), IVec2::new(4, 8), PaletteSlot::Pal1);

        let sprite = engine.get(handle).unwrap();
        assert_eq!(sprite.position, IVec2::new(4, 8));
        assert_eq!(sprite.palette, PaletteSlot::Pal1);
        assert_eq!(sprite.animation, 0);
        assert!(!sprite.visible);
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_release_frees_slot() {
        let mut engine = SpriteEngine::new();
        let first = engine.add_sprite(&test_definition(), IVec2::ZERO, PaletteSlot::Pal0);
        let second = engine.add_sprite(&test_definition(), IVec2::ZERO, PaletteSlot::Pal0);
        assert_ne!(first, second);

        engine.release_sprite(first);
        assert!(engine.get(first).is_none());
        assert_eq!(engine.count(), 1);

        let reused = engine.add_sprite(&test_definition(), IVec2::ZERO, PaletteSlot::Pal0);
        assert_eq!(reused, first);
    }

    #[test]
    fn test_attribute_updates() {
        let mut engine = SpriteEngine::new();
        let handle = engine.add_sprite(&test_definition(), IVec2::ZERO, PaletteSlot::Pal0);

        engine.set_frame(handle, 1);
        engine.set_hflip(handle, true);
        engine.set_position(handle, IVec2::new(10, 20));
        engine.set_visibility(handle, true);

        let sprite = engine.get(handle).unwrap();
        assert_eq!(sprite.frame, 1);
        assert!(sprite.hflip);
        assert_eq!(sprite.position, IVec2::new(10, 20));
        assert!(sprite.visible);

        // Changing animation restarts it
        engine.set_animation(handle, 1);
        let sprite = engine.get(handle).unwrap();
        assert_eq!(sprite.animation, 1);
        assert_eq!(sprite.frame, 0);
    }

    #[test]
    fn test_updates_to_released_sprite_are_ignored() {
        let mut engine = SpriteEngine::new();
        let handle = engine.add_sprite(&test_definition(), IVec2::ZERO, PaletteSlot::Pal0);
        engine.release_sprite(handle);

        engine.set_visibility(handle, true);
        engine.release_sprite(handle);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_palette_slots() {
        let mut engine = SpriteEngine::new();
        let palette = Palette::new([Vec4::new(1.0, 0.0, 0.0, 1.0); PALETTE_SIZE]);
        engine.load_palette(PaletteSlot::Pal2, &palette);

        assert_eq!(engine.palette(PaletteSlot::Pal2), &palette);
        assert_eq!(engine.palette(PaletteSlot::Pal0), &Palette::default());
    }
}
