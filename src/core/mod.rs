// Core utilities shared by engine and game code

pub mod math;

pub use math::{fix16, to_pixels, Fix16, FixVec2};
