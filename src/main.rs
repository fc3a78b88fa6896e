use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::Cli;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::{PaletteSlot, Renderer, SpriteBackend, SpriteEngine, TileMap};
use game::characters::{Character, TuningProfile};
use game::stage::Stage;
use game::{sprites, Game};

/// Palette slot of the character sprite
const CHARACTER_PALETTE: PaletteSlot = PaletteSlot::Pal1;
/// Palette slot of the collider debug tiles
const TILES_PALETTE: PaletteSlot = PaletteSlot::Pal2;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    info!(
        "Starting platformer ({:?}, {} Hz)",
        cli.region,
        cli.region.refresh_rate()
    );

    // Stage and debug overlay
    let stage = Stage::test_stage()?;
    let mut sprite_engine = SpriteEngine::new();
    let mut tiles = TileMap::new();
    if cli.show_colliders() {
        sprite_engine.load_palette(TILES_PALETTE, &sprites::basic_tiles_palette());
        stage.debug_draw(&mut tiles, TILES_PALETTE);
    }

    // Player character
    let mut character = Character::new(TuningProfile::for_region(cli.region));
    character.set_sprite(&sprites::adventurer(), CHARACTER_PALETTE, &mut sprite_engine);
    let mut game = Game::new(character, stage);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let (width, height) = cli.window_size();
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Platformer")
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new(cli.region.frame_duration());

    event_loop.set_control_flow(ControlFlow::Poll);

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    // Time spent unfocused is not replayed
                    game_loop.reset();
                } else {
                    input.reset();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for _ in 0..game_loop.begin_frame() {
                    let frame_input = input.poll();
                    game.step(&frame_input, &mut sprite_engine);
                }

                if let Err(err) = renderer.render(&tiles, &sprite_engine) {
                    match err.downcast_ref::<wgpu::SurfaceError>() {
                        Some(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            warn!("Surface lost, reconfiguring");
                            renderer.reconfigure();
                        }
                        Some(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, shutting down");
                            elwt.exit();
                        }
                        _ => warn!("Render failed: {}", err),
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
