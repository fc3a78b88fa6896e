// Engine modules: frame pacing, input, renderer

pub mod game_loop;
pub mod input;
pub mod renderer;
