//! Cursor over a finished history.
//!
//! The "current step" is only an index into the run's history; it never
//! feeds back into the simulation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    current_step: usize,
    max_step: usize,
    playing: bool,
}

impl Playback {
    /// Paused at tick 0.
    pub fn new(max_step: usize) -> Self {
        Self {
            current_step: 0,
            max_step,
            playing: false,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn max_step(&self) -> usize {
        self.max_step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Play if paused, pause if playing.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// One tick later, stopping at `max_step`.
    pub fn step_forward(&mut self) {
        self.current_step = (self.current_step + 1).min(self.max_step);
    }

    pub fn step_backward(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Back to tick 0, paused.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.playing = false;
    }

    /// Jumps to `step`, clamped to `max_step`.
    pub fn set_step(&mut self, step: usize) {
        self.current_step = step.min(self.max_step);
    }

    /// One timer callback: moves forward while playing and stops at the end.
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }
        if self.current_step >= self.max_step {
            self.playing = false;
        } else {
            self.current_step += 1;
        }
    }
}
