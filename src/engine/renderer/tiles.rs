// Background tile plane

use super::PaletteSlot;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Edge length of a background tile in pixels
pub const TILE_SIZE: i32 = 8;

/// Plane size in tiles
pub const PLANE_WIDTH: i32 = SCREEN_WIDTH as i32 / TILE_SIZE;
pub const PLANE_HEIGHT: i32 = SCREEN_HEIGHT as i32 / TILE_SIZE;

/// Screen-sized grid of solid tiles, each drawn in a palette's base colour
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Option<PaletteSlot>>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TileMap {
    pub fn new() -> Self {
        Self {
            tiles: vec![None; (PLANE_WIDTH * PLANE_HEIGHT) as usize],
        }
    }

    fn offset(x: i32, y: i32) -> Option<usize> {
        if (0..PLANE_WIDTH).contains(&x) && (0..PLANE_HEIGHT).contains(&y) {
            Some((y * PLANE_WIDTH + x) as usize)
        } else {
            None
        }
    }

    /// Fill a tile; coordinates outside the plane are ignored
    pub fn set_tile(&mut self, x: i32, y: i32, palette: PaletteSlot) {
        if let Some(offset) = Self::offset(x, y) {
            self.tiles[offset] = Some(palette);
        }
    }

    #[cfg(test)]
    pub fn tile(&self, x: i32, y: i32) -> Option<PaletteSlot> {
        Self::offset(x, y).and_then(|offset| self.tiles[offset])
    }

    /// Filled tiles as `(x, y, palette)` in tile coordinates
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, PaletteSlot)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(offset, tile)| {
            let offset = offset as i32;
            tile.map(|palette| (offset % PLANE_WIDTH, offset / PLANE_WIDTH, palette))
        })
    }

    #[cfg(test)]
    pub fn filled_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }
}
