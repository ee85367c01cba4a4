//! Bounded step counter that simulates boosting iterations.
//!
//! The animator is a plain state machine. It owns no timer; every transition
//! returns a [`TimerEffect`] telling whoever drives it what to do with the one
//! timer it is allowed to have. All transitions are total: requests past a
//! boundary clamp or do nothing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_STEPS: u32 = 10;
pub const DEFAULT_SPEED_MS: u32 = 1000;
pub const MIN_SPEED_MS: u32 = 100;
pub const MAX_SPEED_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

/// What the timer owner must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    None,
    /// Start a periodic timer with this period. Only emitted when no timer runs.
    Start { period_ms: u32 },
    /// Cancel the running timer and start a fresh one with the new period.
    Restart { period_ms: u32 },
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationState {
    pub current_step: u32,
    pub max_steps: u32,
    pub speed_ms: u32,
    pub play_state: PlayState,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            current_step: 0,
            max_steps: DEFAULT_MAX_STEPS,
            speed_ms: DEFAULT_SPEED_MS,
            play_state: PlayState::Stopped,
        }
    }
}

impl AnimationState {
    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    pub fn last_step(&self) -> u32 {
        self.max_steps.saturating_sub(1)
    }

    pub fn at_end(&self) -> bool {
        self.current_step >= self.last_step()
    }

    /// Fraction of the ensemble built so far, saturating at 1.
    pub fn progress(&self) -> f64 {
        crate::synthetic::step_progress(self.current_step)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StepAnimator {
    state: AnimationState,
}

impl StepAnimator {
    pub fn new(max_steps: u32, speed_ms: u32) -> Self {
        Self {
            state: AnimationState {
                current_step: 0,
                max_steps: max_steps.max(1),
                speed_ms: clamp_speed(speed_ms),
                play_state: PlayState::Stopped,
            },
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn current_step(&self) -> u32 {
        self.state.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn play(&mut self) -> TimerEffect {
        if self.state.is_playing() || self.state.at_end() {
            return TimerEffect::None;
        }
        self.state.play_state = PlayState::Playing;
        TimerEffect::Start {
            period_ms: self.state.speed_ms,
        }
    }

    pub fn pause(&mut self) -> TimerEffect {
        self.stop()
    }

    pub fn toggle(&mut self) -> TimerEffect {
        if self.state.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// One timer period elapsed.
    pub fn tick(&mut self) -> TimerEffect {
        if !self.state.is_playing() {
            return TimerEffect::None;
        }
        if self.state.at_end() {
            return self.stop();
        }
        self.state.current_step += 1;
        TimerEffect::None
    }

    pub fn reset(&mut self) -> TimerEffect {
        self.state.current_step = 0;
        self.stop()
    }

    pub fn step_forward(&mut self) -> TimerEffect {
        let effect = self.stop();
        if !self.state.at_end() {
            self.state.current_step += 1;
        }
        effect
    }

    pub fn step_back(&mut self) -> TimerEffect {
        let effect = self.stop();
        self.state.current_step = self.state.current_step.saturating_sub(1);
        effect
    }

    /// Slider jump. Does not change play state.
    pub fn seek(&mut self, step: u32) -> TimerEffect {
        self.state.current_step = step.min(self.state.last_step());
        TimerEffect::None
    }

    pub fn set_speed(&mut self, speed_ms: u32) -> TimerEffect {
        let speed_ms = clamp_speed(speed_ms);
        if speed_ms == self.state.speed_ms {
            return TimerEffect::None;
        }
        self.state.speed_ms = speed_ms;
        if self.state.is_playing() {
            TimerEffect::Restart {
                period_ms: speed_ms,
            }
        } else {
            TimerEffect::None
        }
    }

    pub fn set_max_steps(&mut self, max_steps: u32) -> TimerEffect {
        self.state.max_steps = max_steps.max(1);
        self.state.current_step = self.state.current_step.min(self.state.last_step());
        TimerEffect::None
    }

    fn stop(&mut self) -> TimerEffect {
        if self.state.is_playing() {
            self.state.play_state = PlayState::Stopped;
            TimerEffect::Cancel
        } else {
            TimerEffect::None
        }
    }
}

pub fn clamp_speed(speed_ms: u32) -> u32 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ticks_walk_to_the_end_then_stop() {
        let mut a = StepAnimator::new(10, 1000);
        assert_eq!(a.play(), TimerEffect::Start { period_ms: 1000 });

        for expected in 1..=9 {
            assert_eq!(a.tick(), TimerEffect::None);
            assert_eq!(a.current_step(), expected);
            assert!(a.is_playing());
        }

        assert_eq!(a.tick(), TimerEffect::Cancel);
        assert_eq!(a.current_step(), 9);
        assert_eq!(a.state().play_state, PlayState::Stopped);

        assert_eq!(a.tick(), TimerEffect::None);
        assert_eq!(a.current_step(), 9);
    }

    #[test]
    fn play_at_last_step_is_refused() {
        let mut a = StepAnimator::new(3, 500);
        a.seek(2);
        assert_eq!(a.play(), TimerEffect::None);
        assert!(!a.is_playing());
    }

    #[test]
    fn play_while_playing_never_starts_a_second_timer() {
        let mut a = StepAnimator::default();
        assert!(matches!(a.play(), TimerEffect::Start { .. }));
        assert_eq!(a.play(), TimerEffect::None);
    }

    #[test]
    fn step_edges_are_no_ops() {
        let mut a = StepAnimator::new(10, 1000);
        a.step_back();
        assert_eq!(a.current_step(), 0);

        a.seek(9);
        a.step_forward();
        assert_eq!(a.current_step(), 9);
    }

    #[test]
    fn single_steps_pause_playback() {
        let mut a = StepAnimator::new(10, 1000);
        a.play();
        a.tick();
        assert_eq!(a.step_forward(), TimerEffect::Cancel);
        assert_eq!(a.current_step(), 2);
        assert!(!a.is_playing());

        a.play();
        assert_eq!(a.step_back(), TimerEffect::Cancel);
        assert_eq!(a.current_step(), 1);
        assert!(!a.is_playing());

        assert_eq!(a.step_back(), TimerEffect::None);
        assert_eq!(a.current_step(), 0);
    }

    #[test]
    fn pause_keeps_step_and_reset_rewinds() {
        let mut a = StepAnimator::new(10, 1000);
        a.play();
        a.tick();
        a.tick();
        assert_eq!(a.pause(), TimerEffect::Cancel);
        assert_eq!(a.current_step(), 2);
        assert_eq!(a.pause(), TimerEffect::None);

        a.play();
        assert_eq!(a.reset(), TimerEffect::Cancel);
        assert_eq!(a.current_step(), 0);
        assert!(!a.is_playing());

        assert_eq!(a.reset(), TimerEffect::None);
    }

    #[test]
    fn speed_change_restarts_only_while_playing() {
        let mut a = StepAnimator::new(10, 1000);
        assert_eq!(a.set_speed(300), TimerEffect::None);
        assert_eq!(a.state().speed_ms, 300);

        a.play();
        assert_eq!(a.set_speed(800), TimerEffect::Restart { period_ms: 800 });
        assert_eq!(a.set_speed(800), TimerEffect::None);
    }

    #[test]
    fn speed_is_clamped_to_slider_range() {
        let mut a = StepAnimator::new(10, 5);
        assert_eq!(a.state().speed_ms, MIN_SPEED_MS);
        a.set_speed(60_000);
        assert_eq!(a.state().speed_ms, MAX_SPEED_MS);
    }

    #[test]
    fn seek_and_max_steps_clamp_into_bounds() {
        let mut a = StepAnimator::new(10, 1000);
        a.seek(42);
        assert_eq!(a.current_step(), 9);

        a.set_max_steps(4);
        assert_eq!(a.current_step(), 3);

        a.set_max_steps(0);
        assert_eq!(a.state().max_steps, 1);
        assert_eq!(a.current_step(), 0);
        assert_eq!(a.play(), TimerEffect::None);
    }

    #[test]
    fn zero_step_state_does_not_underflow() {
        let state = AnimationState {
            max_steps: 0,
            ..AnimationState::default()
        };
        assert_eq!(state.last_step(), 0);
        assert!(state.at_end());
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut a = StepAnimator::default();
        assert!(matches!(a.toggle(), TimerEffect::Start { .. }));
        assert_eq!(a.toggle(), TimerEffect::Cancel);
        assert!(!a.is_playing());
    }
}
