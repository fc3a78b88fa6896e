// Command line configuration and video region selection

use clap::{Parser, ValueEnum};
use std::time::Duration;

/// Logical screen size in pixels (the console's 40x28 tile display)
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 224;

/// Television standard the game runs under
///
/// The region fixes the refresh rate, and with it the tuning profile the
/// character physics uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VideoRegion {
    /// 60 Hz
    #[default]
    Ntsc,
    /// 50 Hz
    Pal,
}

impl VideoRegion {
    /// Refresh rate in frames per second
    pub fn refresh_rate(self) -> u32 {
        match self {
            Self::Ntsc => 60,
            Self::Pal => 50,
        }
    }

    /// Length of one frame (the interval between two vertical syncs)
    pub fn frame_duration(self) -> Duration {
        Duration::from_micros(1_000_000 / self.refresh_rate() as u64)
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Fixed-point platformer character controller demo")]
pub struct Cli {
    /// Video region (selects refresh rate and physics tuning)
    #[arg(long, value_enum, default_value_t = VideoRegion::Ntsc)]
    pub region: VideoRegion,

    /// Integer window scale applied to the 320x224 screen
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Hide the stage collider overlay
    #[arg(long)]
    pub no_show_colliders: bool,
}

impl Cli {
    pub fn show_colliders(&self) -> bool {
        !self.no_show_colliders
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (SCREEN_WIDTH * self.scale, SCREEN_HEIGHT * self.scale)
    }
}
