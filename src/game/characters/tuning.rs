// Character tuning - one profile per video region
// PAL runs at 50 Hz, so its per-frame constants are larger to keep the feel

use crate::config::VideoRegion;
use crate::core::{fix16, Fix16};

/// Physics constants for the character, chosen once at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningProfile {
    // Vertical
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: Fix16,
    /// Added to vertical velocity each airborne frame
    pub gravity: Fix16,
    /// Y coordinate of the ground
    pub floor_limit: Fix16,

    // Horizontal
    /// Removed from horizontal speed each frame without input
    pub friction: Fix16,
    /// Speeds at or below this snap to zero
    pub min_velocity: Fix16,
    /// Speed cap while grounded
    pub max_ground_velocity: Fix16,
    /// Speed cap while airborne
    pub max_air_velocity: Fix16,

    // World bounds
    pub left_limit: Fix16,
    pub right_limit: Fix16,
}

impl TuningProfile {
    /// Tuning for 60 Hz systems
    pub fn ntsc() -> Self {
        Self {
            jump_velocity: fix16(-4.0),
            gravity: fix16(0.2),
            floor_limit: fix16(190.0),
            friction: fix16(0.8),
            min_velocity: fix16(0.3),
            max_ground_velocity: fix16(2.0),
            max_air_velocity: fix16(2.0),
            left_limit: fix16(10.0),
            right_limit: fix16(290.0),
        }
    }

    /// Tuning for 50 Hz systems
    pub fn pal() -> Self {
        Self {
            jump_velocity: fix16(-5.8),
            gravity: fix16(0.44),
            friction: fix16(0.82),
            min_velocity: fix16(0.36),
            max_ground_velocity: fix16(2.4),
            max_air_velocity: fix16(2.4),
            ..Self::ntsc()
        }
    }

    pub fn for_region(region: VideoRegion) -> Self {
        match region {
            VideoRegion::Ntsc => Self::ntsc(),
            VideoRegion::Pal => Self::pal(),
        }
    }
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self::ntsc()
    }
}
