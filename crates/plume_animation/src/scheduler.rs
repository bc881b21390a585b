//! Animation scheduler
//!
//! Optional frame clock for hosts that prefer one tick per frame over ticking
//! each component. The scheduler only holds weak handles: components keep
//! ownership of their tweens and dropped tweens are pruned on the next tick.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

use crate::tween::{SharedTween, Tween};

new_key_type! {
    pub struct TweenId;
}

/// Ticks every registered tween each frame
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Weak<Mutex<Tween>>>,
    last_frame: Option<Instant>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            last_frame: None,
        }
    }

    /// Start ticking `tween`
    pub fn add(&mut self, tween: &SharedTween) -> TweenId {
        self.tweens.insert(Arc::downgrade(tween))
    }

    /// Stop ticking a tween. Returns false if it was not registered.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(id).is_some()
    }

    /// Advance all live tweens by `dt_ms`, pruning dropped ones
    ///
    /// Returns true if any tween is still animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let mut active = false;
        self.tweens.retain(|_, weak| match weak.upgrade() {
            Some(tween) => {
                let mut tween = tween.lock().unwrap_or_else(PoisonError::into_inner);
                active |= tween.tick(dt_ms);
                true
            }
            None => false,
        });
        active
    }

    /// Advance by the wall-clock time since the previous call
    pub fn tick_now(&mut self) -> bool {
        let now = Instant::now();
        let dt_ms = self
            .last_frame
            .map(|last| (now - last).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        self.tick(dt_ms)
    }

    /// Check if any live tween is still animating
    pub fn has_active_animations(&self) -> bool {
        self.tweens.values().any(|weak| match weak.upgrade() {
            Some(tween) => {
                let animating = tween
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_animating();
                animating
            }
            None => false,
        })
    }

    /// Number of registered handles, including not-yet-pruned dead ones
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::Timing;

    #[test]
    fn test_ticks_registered_tweens() {
        let mut scheduler = AnimationScheduler::new();
        let tween = Tween::shared(0.0);
        scheduler.add(&tween);

        tween.lock().unwrap().animate_to(1.0, Timing::new(100.0));
        assert!(scheduler.has_active_animations());

        while scheduler.tick(16.0) {}
        assert_eq!(tween.lock().unwrap().value(), 1.0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_prunes_dropped_tweens() {
        let mut scheduler = AnimationScheduler::new();
        let kept = Tween::shared(0.0);
        scheduler.add(&kept);
        {
            let dropped = Tween::shared(0.0);
            scheduler.add(&dropped);
        }
        assert_eq!(scheduler.len(), 2);

        scheduler.tick(16.0);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut scheduler = AnimationScheduler::new();
        let tween = Tween::shared(0.0);
        let id = scheduler.add(&tween);

        assert!(scheduler.remove(id));
        assert!(!scheduler.remove(id));
        assert!(scheduler.is_empty());

        tween.lock().unwrap().animate_to(1.0, Timing::new(100.0));
        scheduler.tick(200.0);
        assert_eq!(tween.lock().unwrap().value(), 0.0);
    }
}
