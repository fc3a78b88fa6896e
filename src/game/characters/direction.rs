// Horizontal input direction and its lookup tables

use crate::core::{fix16, Fix16};
use crate::engine::input::Buttons;

/// D-pad low nibble (Up, Down, Left, Right bits) to direction
///
/// Vertical bits are ignored; holding both Left and Right cancels out.
const DPAD_DIRECTIONS: [Direction; 16] = {
    use Direction::{Left as L, None as N, Right as R};
    [N, N, N, N, L, L, L, N, R, R, R, N, N, N, N, N]
};

/// Horizontal direction requested by the player this frame
///
/// Discriminants match the indices the controller lookup produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None = 0,
    Left = 1,
    Right = 2,
}

impl Direction {
    /// Look up the direction held on the d-pad
    pub fn from_buttons(buttons: Buttons) -> Self {
        DPAD_DIRECTIONS[buttons.dpad_index()]
    }

    /// Velocity added per frame while the direction is held
    pub fn velocity_delta(self) -> Fix16 {
        match self {
            Self::None => Fix16::ZERO,
            Self::Left => fix16(-0.8),
            Self::Right => fix16(0.8),
        }
    }

    /// Sprite flip for facing this direction, `None` has no facing
    pub fn hflip(self) -> Option<bool> {
        match self {
            Self::None => None,
            Self::Left => Some(true),
            Self::Right => Some(false),
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}
