//! Async driver for [`StepAnimator`].
//!
//! The animator decides *what* happens; this module owns the single periodic
//! timer and applies the [`TimerEffect`] each transition returns. State is
//! published through a `watch` channel so any number of views can follow it.

use std::sync::Arc;
use std::time::Duration;

use boostlab::animation::{AnimationState, StepAnimator, TimerEffect};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

type Shared = Arc<watch::Sender<StepAnimator>>;

/// A running periodic timer. Dropping it stops the task.
struct TimerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle {
    fn spawn(state: Shared, period_ms: u32) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = Duration::from_millis(u64::from(period_ms));
        // First tick is one period after the request, not after the task first runs.
        let first = Instant::now() + period;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if token.is_cancelled() {
                            break;
                        }
                        let effect = modify(&state, StepAnimator::tick);
                        if effect == TimerEffect::Cancel {
                            debug!("Animation reached its last step");
                            break;
                        }
                    }
                }
            }
        });

        Self { cancel, task }
    }

    fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

/// Run `f` on the shared animator and notify watchers only if the state changed.
fn modify(state: &Shared, f: impl FnOnce(&mut StepAnimator) -> TimerEffect) -> TimerEffect {
    let mut effect = TimerEffect::None;
    state.send_if_modified(|animator| {
        let before = animator.state();
        effect = f(animator);
        animator.state() != before
    });
    effect
}

/// Owns the animator and at most one timer.
///
/// Every method must be called from inside a tokio runtime.
pub struct AnimationDriver {
    state: Shared,
    timer: Option<TimerHandle>,
}

impl AnimationDriver {
    pub fn new(animator: StepAnimator) -> Self {
        let (tx, _rx) = watch::channel(animator);
        Self {
            state: Arc::new(tx),
            timer: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<StepAnimator> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AnimationState {
        self.state.borrow().state()
    }

    pub fn current_step(&self) -> u32 {
        self.state().current_step
    }

    pub fn is_playing(&self) -> bool {
        self.state().is_playing()
    }

    /// True while a timer task is alive.
    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerHandle::is_running)
    }

    pub fn play(&mut self) {
        self.dispatch(StepAnimator::play);
    }

    pub fn pause(&mut self) {
        self.dispatch(StepAnimator::pause);
    }

    pub fn toggle(&mut self) {
        self.dispatch(StepAnimator::toggle);
    }

    pub fn reset(&mut self) {
        self.dispatch(StepAnimator::reset);
    }

    pub fn step_forward(&mut self) {
        self.dispatch(StepAnimator::step_forward);
    }

    pub fn step_back(&mut self) {
        self.dispatch(StepAnimator::step_back);
    }

    pub fn seek(&mut self, step: u32) {
        self.dispatch(|a| a.seek(step));
    }

    pub fn set_speed(&mut self, speed_ms: u32) {
        self.dispatch(|a| a.set_speed(speed_ms));
    }

    pub fn set_max_steps(&mut self, max_steps: u32) {
        self.dispatch(|a| a.set_max_steps(max_steps));
    }

    fn dispatch(&mut self, f: impl FnOnce(&mut StepAnimator) -> TimerEffect) {
        let effect = modify(&self.state, f);
        self.apply(effect);
    }

    fn apply(&mut self, effect: TimerEffect) {
        match effect {
            TimerEffect::None => {}
            TimerEffect::Start { period_ms } | TimerEffect::Restart { period_ms } => {
                // Old timer goes first so two never overlap.
                self.timer = None;
                debug!("Animation timer every {} ms", period_ms);
                self.timer = Some(TimerHandle::spawn(Arc::clone(&self.state), period_ms));
            }
            TimerEffect::Cancel => {
                self.timer = None;
            }
        }
    }
}
