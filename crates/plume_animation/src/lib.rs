//! Plume Animation System
//!
//! Timed transitions for component state.
//!
//! # Features
//!
//! - **Easing**: quad/cubic families and CSS cubic-bezier curves
//! - **Tweens**: a value moving to a target over a duration, with delay
//! - **Interpolation**: map a tween value onto numeric or color ranges
//! - **Scheduler**: optional shared frame clock over weak tween handles

pub mod easing;
pub mod interpolate;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use interpolate::{Extrapolate, Interpolation, Lerp};
pub use scheduler::{AnimationScheduler, TweenId};
pub use tween::{SharedTween, Timing, Tween};
