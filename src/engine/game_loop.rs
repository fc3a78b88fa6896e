/// Frame pacing for the simulation
///
/// The simulation advances in whole frames of the selected video region
/// (one step per vertical sync). Rendering runs whenever the window asks for
/// it; `begin_frame` reports how many steps are due since the last call.
use std::time::{Duration, Instant};

use log::debug;

/// Maximum number of steps per rendered frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one simulation step
    step_duration: Duration,

    /// Accumulated time not yet consumed by steps
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total steps executed
    step_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a loop stepping once per `step_duration`
    pub fn new(step_duration: Duration) -> Self {
        Self {
            step_duration,
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            step_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of simulation steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` having passed since the previous frame
    fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % FPS_WINDOW_SIZE as u64 == 0 {
            self.update_fps();
            debug!(
                "frame {} steps {} fps {:.1}",
                self.frame_count, self.step_count, self.current_fps
            );
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.step_duration && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step_duration;
            steps += 1;
        }

        // Drop whatever could not be caught up
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= self.step_duration {
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Forget accumulated time, e.g. after the window was hidden
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
        self.last_frame_time = Instant::now();
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NTSC_FRAME: Duration = Duration::from_micros(16_666);

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new(NTSC_FRAME);
        assert_eq!(game_loop.frame_count, 0);
        assert_eq!(game_loop.step_count, 0);
        assert_eq!(game_loop.step_duration, NTSC_FRAME);
    }

    #[test]
    fn test_one_step_per_frame_period() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);
        for _ in 0..10 {
            assert_eq!(game_loop.advance(NTSC_FRAME), 1);
        }
        assert_eq!(game_loop.step_count, 10);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);
        let half = NTSC_FRAME / 2;

        assert_eq!(game_loop.advance(half), 0);
        assert_eq!(game_loop.advance(half), 1);
    }

    #[test]
    fn test_pal_runs_fewer_steps() {
        let pal_frame = Duration::from_micros(20_000);
        let mut game_loop = GameLoop::new(pal_frame);

        let mut steps = 0;
        for _ in 0..60 {
            steps += game_loop.advance(NTSC_FRAME);
        }
        assert_eq!(steps, 49);
    }

    #[test]
    fn test_max_steps_limit() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);

        // A 300ms hitch would allow 18 steps
        let steps = game_loop.advance(Duration::from_millis(300));
        assert_eq!(steps, MAX_STEPS_PER_FRAME);

        // The backlog is dropped rather than replayed
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_fps_average() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);
        for _ in 0..FPS_WINDOW_SIZE {
            game_loop.advance(Duration::from_millis(20));
        }
        assert_relative_eq!(game_loop.current_fps, 50.0, epsilon = 0.01);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count, 2);
    }

    #[test]
    fn test_reset_drops_backlog() {
        let mut game_loop = GameLoop::new(NTSC_FRAME);
        assert_eq!(game_loop.advance(NTSC_FRAME * 3 / 2), 1);

        game_loop.reset();
        assert_eq!(game_loop.accumulator, Duration::ZERO);
        assert_eq!(game_loop.advance(NTSC_FRAME / 2), 0);
    }
}
