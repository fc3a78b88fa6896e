// Character animation cycler
//
// Animations advance in whole frames: every `speed` ticks the next frame of
// the current animation is displayed, wrapping after `length` frames.

/// Animations in the character sprite sheet
///
/// Discriminants are the animation indices inside the sprite definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterAnimation {
    #[default]
    Idle = 0,
    Walk = 1,
    AirSlash = 2,
}

impl CharacterAnimation {
    /// Index of the animation in the sprite definition
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Number of frames in one cycle
    pub const fn length(self) -> u8 {
        match self {
            Self::Idle => 3,
            Self::Walk => 6,
            Self::AirSlash => 4,
        }
    }

    /// Ticks each frame stays on screen
    pub const fn speed(self) -> u8 {
        match self {
            Self::Idle => 10,
            Self::Walk => 6,
            Self::AirSlash => 4,
        }
    }

    /// Attack animations hold the attack lock until they complete a cycle
    pub fn is_attack(self) -> bool {
        matches!(self, Self::AirSlash)
    }
}

/// What happened during one cycler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationTick {
    /// Frame index to display, if a step was taken
    pub display_frame: Option<u8>,
    /// The animation completed a cycle and wrapped to frame 0
    pub wrapped: bool,
}

/// Per-character animation state
#[derive(Debug, Clone, Default)]
pub struct AnimationCycler {
    current: CharacterAnimation,
    frame: u8,
    wait: u8,
}

impl AnimationCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to an animation, restarting it
    ///
    /// Returns `false` without touching any state when the animation is
    /// already playing.
    pub fn play(&mut self, animation: CharacterAnimation) -> bool {
        if self.current == animation {
            return false;
        }

        self.current = animation;
        self.frame = 0;
        self.wait = 0;
        true
    }

    /// Advance one tick
    pub fn tick(&mut self) -> AnimationTick {
        let mut tick = AnimationTick::default();

        self.wait += 1;
        if self.wait == self.current.speed() {
            self.wait = 0;
            tick.display_frame = Some(self.frame);
            self.frame += 1;

            if self.frame == self.current.length() {
                self.frame = 0;
                tick.wrapped = true;
            }
        }

        tick
    }

    pub fn current(&self) -> CharacterAnimation {
        self.current
    }

    /// Frame that will be displayed on the next step
    #[cfg(test)]
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Ticks elapsed since the last step
    #[cfg(test)]
    pub fn wait(&self) -> u8 {
        self.wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_tables() {
        assert_eq!(CharacterAnimation::Idle.index(), 0);
        assert_eq!(CharacterAnimation::Walk.index(), 1);
        assert_eq!(CharacterAnimation::AirSlash.index(), 2);

        assert_eq!(CharacterAnimation::Idle.length(), 3);
        assert_eq!(CharacterAnimation::Walk.length(), 6);
        assert_eq!(CharacterAnimation::AirSlash.length(), 4);

        assert_eq!(CharacterAnimation::Idle.speed(), 10);
        assert_eq!(CharacterAnimation::Walk.speed(), 6);
        assert_eq!(CharacterAnimation::AirSlash.speed(), 4);

        assert!(CharacterAnimation::AirSlash.is_attack());
        assert!(!CharacterAnimation::Walk.is_attack());
    }

    #[test]
    fn test_starts_idle() {
        let cycler = AnimationCycler::new();
        assert_eq!(cycler.current(), CharacterAnimation::Idle);
        assert_eq!(cycler.frame(), 0);
        assert_eq!(cycler.wait(), 0);
    }

    #[test]
    fn test_play_same_animation_is_noop() {
        let mut cycler = AnimationCycler::new();
        for _ in 0..13 {
            cycler.tick();
        }
        assert_eq!(cycler.frame(), 1);
        assert_eq!(cycler.wait(), 3);

        assert!(!cycler.play(CharacterAnimation::Idle));
        assert_eq!(cycler.frame(), 1);
        assert_eq!(cycler.wait(), 3);
    }

    #[test]
    fn test_play_new_animation_resets() {
        let mut cycler = AnimationCycler::new();
        for _ in 0..13 {
            cycler.tick();
        }

        assert!(cycler.play(CharacterAnimation::Walk));
        assert_eq!(cycler.current(), CharacterAnimation::Walk);
        assert_eq!(cycler.frame(), 0);
        assert_eq!(cycler.wait(), 0);
    }

    #[test]
    fn test_steps_every_speed_ticks() {
        let mut cycler = AnimationCycler::new();
        cycler.play(CharacterAnimation::Walk);

        for _ in 0..5 {
            assert_eq!(cycler.tick().display_frame, None);
        }
        let tick = cycler.tick();
        assert_eq!(tick.display_frame, Some(0));
        assert!(!tick.wrapped);
        assert_eq!(cycler.frame(), 1);
    }

    #[test]
    fn test_wraps_after_length_frames() {
        let mut cycler = AnimationCycler::new();
        cycler.play(CharacterAnimation::AirSlash);

        let mut displayed = Vec::new();
        let mut wrapped_at = None;
        for tick_index in 1..=16 {
            let tick = cycler.tick();
            if let Some(frame) = tick.display_frame {
                displayed.push(frame);
            }
            if tick.wrapped {
                wrapped_at = Some(tick_index);
            }
        }

        assert_eq!(displayed, vec![0, 1, 2, 3]);
        assert_eq!(wrapped_at, Some(16));
        assert_eq!(cycler.frame(), 0);
    }
}
