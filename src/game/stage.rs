// Stage geometry and point collision
//
// A stage is a fixed list of axis-aligned rectangles in whole pixels. The
// character never resolves against rectangles directly: it projects one of its
// probe points and asks whether that point would land inside a collider.

use arrayvec::ArrayVec;
use glam::IVec2;
use log::{debug, info};
use thiserror::Error;

use crate::core::{to_pixels, Fix16, FixVec2};
use crate::engine::renderer::{PaletteSlot, TileMap, TILE_SIZE};

/// Maximum number of colliders a stage can hold
pub const MAX_COLLIDERS: usize = 64;

/// Result of a probe test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    NoCollision,
    Collision,
}

impl Collision {
    pub fn is_collision(self) -> bool {
        self == Self::Collision
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("stage has {requested} colliders, capacity is {capacity}")]
    TooManyColliders { requested: usize, capacity: usize },

    #[error("collider {index} has a non-positive size or extends past i32 range")]
    InvalidCollider { index: usize },
}

/// Solid rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    /// Top-left corner
    pub position: IVec2,
    pub size: IVec2,
}

impl Collider {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Whether a point lies strictly inside the rectangle
    ///
    /// Points on an edge are outside, so a probe resting exactly on a
    /// platform's top edge does not collide.
    pub fn contains(&self, point: IVec2) -> bool {
        let max = self.position + self.size;
        (point.y > self.position.y && point.y < max.y)
            && (point.x > self.position.x && point.x < max.x)
    }
}

/// Immutable collision geometry for one level
#[derive(Debug, Clone)]
pub struct Stage {
    colliders: ArrayVec<Collider, MAX_COLLIDERS>,
    /// Exit point, reserved for level transitions
    door: IVec2,
}

impl Stage {
    /// Build a stage, rejecting more than `MAX_COLLIDERS` colliders
    pub fn new(colliders: &[Collider], door: IVec2) -> Result<Self, StageError> {
        if colliders.len() > MAX_COLLIDERS {
            return Err(StageError::TooManyColliders {
                requested: colliders.len(),
                capacity: MAX_COLLIDERS,
            });
        }

        let mut list = ArrayVec::new();
        for (index, collider) in colliders.iter().enumerate() {
            let far_corner = collider
                .position
                .x
                .checked_add(collider.size.x)
                .zip(collider.position.y.checked_add(collider.size.y));
            if collider.size.x <= 0 || collider.size.y <= 0 || far_corner.is_none() {
                return Err(StageError::InvalidCollider { index });
            }
            list.push(*collider);
        }

        debug!("Stage built with {} colliders", list.len());

        Ok(Self {
            colliders: list,
            door,
        })
    }

    /// The three-platform test stage
    pub fn test_stage() -> Result<Self, StageError> {
        let stage = Self::new(
            &[
                Collider::new(48, 200, 64, 24),
                Collider::new(144, 160, 64, 16),
                Collider::new(216, 120, 32, 16),
            ],
            IVec2::ZERO,
        )?;
        info!(
            "Loaded test stage ({} colliders, door at {})",
            stage.colliders.len(),
            stage.door
        );
        Ok(stage)
    }

    /// Test whether `probe` moved by `(dx, dy)` lands inside any collider
    ///
    /// The probe and each displacement are converted to whole pixels
    /// separately before being summed, so displacements smaller than one
    /// pixel only register when negative.
    pub fn check_collisions(&self, probe: FixVec2, dx: Fix16, dy: Fix16) -> Collision {
        let point = probe.to_pixels() + IVec2::new(to_pixels(dx), to_pixels(dy));

        if self.colliders.iter().any(|collider| collider.contains(point)) {
            Collision::Collision
        } else {
            Collision::NoCollision
        }
    }

    #[cfg(test)]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    #[cfg(test)]
    pub fn door(&self) -> IVec2 {
        self.door
    }

    /// Fill the tiles covered by each collider, for debugging
    pub fn debug_draw(&self, tiles: &mut TileMap, palette: PaletteSlot) {
        for collider in &self.colliders {
            let max = collider.position + collider.size;
            for x in (collider.position.x..max.x).step_by(TILE_SIZE as usize) {
                for y in (collider.position.y..max.y).step_by(TILE_SIZE as usize) {
                    tiles.set_tile(x.div_euclid(TILE_SIZE), y.div_euclid(TILE_SIZE), palette);
                }
            }
        }
    }
}
