// CPU-side quad geometry for tiles and sprites

use glam::{Vec2, Vec4};

use super::sprite::{Palette, SpriteEngine, SpriteInstance};
use super::tiles::{TileMap, TILE_SIZE};
use super::vertex::Vertex;

/// Width of the strip marking the side a sprite faces
const FACING_MARKER_WIDTH: f32 = 4.0;

/// Indexed triangle list of axis-aligned rectangles
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Add a filled rectangle with its top-left corner at `min`
    pub fn push_rect(&mut self, min: Vec2, size: Vec2, color: Vec4) {
        let start_idx = self.vertices.len() as u16;
        let max = min + size;

        for corner in [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ] {
            self.vertices.push(Vertex::new(corner, color));
        }

        // Two triangles
        for offset in [0, 1, 2, 0, 2, 3] {
            self.indices.push(start_idx + offset);
        }
    }

    /// Add every filled tile in its palette's base colour
    pub fn push_tiles(&mut self, tiles: &TileMap, sprites: &SpriteEngine) {
        let tile = Vec2::splat(TILE_SIZE as f32);
        for (x, y, palette) in tiles.filled() {
            let min = Vec2::new(x as f32, y as f32) * tile;
            self.push_rect(min, tile, sprites.palette(palette).base());
        }
    }

    /// Add a sprite as a shaded body with a marker on the side it faces
    ///
    /// Hidden sprites add nothing.
    pub fn push_sprite(&mut self, sprite: &SpriteInstance, palette: &Palette) {
        if !sprite.visible {
            return;
        }

        let min = sprite.position.as_vec2();
        let size = Vec2::new(
            sprite.definition.width as f32,
            sprite.definition.height as f32,
        );
        self.push_rect(min, size, frame_shade(sprite, palette));

        // Unflipped sprites face right
        let marker_x = if sprite.hflip {
            min.x
        } else {
            min.x + size.x - FACING_MARKER_WIDTH
        };
        self.push_rect(
            Vec2::new(marker_x, min.y),
            Vec2::new(FACING_MARKER_WIDTH, size.y),
            palette.detail(),
        );
    }

    /// Rebuild the batch from the tile plane and sprite table
    pub fn build(&mut self, tiles: &TileMap, sprites: &SpriteEngine) {
        self.clear();
        self.push_tiles(tiles, sprites);
        for sprite in sprites.sprites() {
            self.push_sprite(sprite, sprites.palette(sprite.palette));
        }
    }
}

/// Blend from base towards highlight as the animation advances
fn frame_shade(sprite: &SpriteInstance, palette: &Palette) -> Vec4 {
    let frames = sprite
        .definition
        .animations
        .get(sprite.animation as usize)
        .copied()
        .unwrap_or(1)
        .max(1);
    let t = sprite.frame as f32 / frames as f32;
    palette.base().lerp(palette.highlight(), t)
}
