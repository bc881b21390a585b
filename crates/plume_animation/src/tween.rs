//! Timed tweens
//!
//! A [`Tween`] is a single `f32` that moves toward a target over a fixed
//! duration. It is advanced explicitly with [`Tween::tick`] by whatever frame
//! clock owns it (a component, or an [`AnimationScheduler`]).
//!
//! Retargeting while in flight restarts the timing from the current value,
//! so interrupted transitions never jump.
//!
//! [`AnimationScheduler`]: crate::AnimationScheduler

use std::sync::{Arc, Mutex};

use crate::easing::Easing;

/// Timing parameters of one transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f32,
    /// Time the value holds still before moving
    pub delay_ms: f32,
    pub easing: Easing,
    /// Whether the host may run this on a compositor thread. False for values
    /// that feed layout-dependent properties.
    pub composited: bool,
}

impl Timing {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn composited(mut self, composited: bool) -> Self {
        self.composited = composited;
        self
    }

    /// Total time from start to settle
    pub fn total_ms(&self) -> f32 {
        self.delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: 500.0,
            delay_ms: 0.0,
            easing: Easing::Standard,
            composited: false,
        }
    }
}

/// A value animated toward a target over time
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    value: f32,
    from: f32,
    target: f32,
    timing: Timing,
    elapsed_ms: f32,
    animating: bool,
}

/// Tween shared between a component and a scheduler
pub type SharedTween = Arc<Mutex<Tween>>;

impl Tween {
    /// A settled tween resting at `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            from: initial,
            target: initial,
            timing: Timing::default(),
            elapsed_ms: 0.0,
            animating: false,
        }
    }

    /// Wrap a new tween for sharing
    pub fn shared(initial: f32) -> SharedTween {
        Arc::new(Mutex::new(Self::new(initial)))
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the tween is heading to (or resting at)
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Start moving toward `target`
    ///
    /// Already heading to (or resting at) `target` is a no-op so repeated
    /// syncs leave an in-flight transition alone.
    pub fn animate_to(&mut self, target: f32, timing: Timing) {
        if target == self.target && (self.animating || self.value == target) {
            return;
        }

        tracing::trace!(
            from = self.value,
            to = target,
            duration_ms = timing.duration_ms,
            delay_ms = timing.delay_ms,
            "tween retarget"
        );

        self.from = self.value;
        self.target = target;
        self.timing = timing;
        self.elapsed_ms = 0.0;

        if timing.total_ms() <= 0.0 {
            self.value = target;
            self.animating = false;
        } else {
            self.animating = true;
        }
    }

    /// Jump to `value` and stop
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.from = value;
        self.target = value;
        self.elapsed_ms = 0.0;
        self.animating = false;
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        self.target = self.value;
        self.animating = false;
    }

    /// Advance by `dt_ms`. Returns true while still animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.animating {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let moving_ms = self.elapsed_ms - self.timing.delay_ms.max(0.0);
        if moving_ms < 0.0 {
            return true;
        }

        let duration = self.timing.duration_ms.max(0.0);
        let progress = if duration > 0.0 {
            (moving_ms / duration).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.value = self.target;
            self.animating = false;
            return false;
        }

        let eased = self.timing.easing.apply(progress);
        self.value = self.from * (1.0 - eased) + self.target * eased;
        true
    }

    /// Linear progress through the current transition, delay excluded
    pub fn progress(&self) -> f32 {
        if !self.animating {
            return 1.0;
        }
        let duration = self.timing.duration_ms.max(0.0);
        if duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed_ms - self.timing.delay_ms.max(0.0)) / duration).clamp(0.0, 1.0)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}
