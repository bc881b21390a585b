//! Range interpolation
//!
//! Maps an animation value onto an output range, piecewise-linearly between
//! matching input/output stops:
//!
//! ```rust
//! use plume_animation::{Extrapolate, Interpolation};
//!
//! let scale = Interpolation::linear(1.0_f32, 0.65);
//! assert_eq!(scale.at(0.0), 1.0);
//! assert_eq!(scale.at(1.0), 0.65);
//!
//! let clamped = Interpolation::linear(0.0_f32, 10.0).extrapolate(Extrapolate::Clamp);
//! assert_eq!(clamped.at(2.0), 10.0);
//! ```

use plume_core::Color;

/// Values that can be blended between two stops
pub trait Lerp: Copy + Default {
    /// Blend `from` toward `to`. Must return exactly `from` at 0 and `to` at 1.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: &f32, to: &f32, t: f32) -> f32 {
        from * (1.0 - t) + to * t
    }
}

impl Lerp for Color {
    fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        Color::lerp(from, to, t)
    }
}

/// Behaviour for inputs outside the first/last stop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Keep following the slope of the outermost segment
    #[default]
    Extend,
    /// Pin to the outermost output
    Clamp,
}

/// Piecewise-linear mapping from input stops to output stops
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation<T: Lerp> {
    input: Vec<f32>,
    output: Vec<T>,
    extrapolate: Extrapolate,
}

impl<T: Lerp> Interpolation<T> {
    /// Build from matching stop lists.
    ///
    /// Input stops must be non-decreasing. Extra stops on the longer list are
    /// ignored.
    pub fn new(input_range: impl Into<Vec<f32>>, output_range: impl Into<Vec<T>>) -> Self {
        let mut input = input_range.into();
        let mut output = output_range.into();
        debug_assert!(
            input.windows(2).all(|pair| pair[0] <= pair[1]),
            "interpolation input range must be non-decreasing"
        );
        if input.len() != output.len() {
            tracing::warn!(
                inputs = input.len(),
                outputs = output.len(),
                "interpolation stop count mismatch, truncating"
            );
            let len = input.len().min(output.len());
            input.truncate(len);
            output.truncate(len);
        }
        if input.is_empty() {
            tracing::warn!("interpolation without stops, mapping to the default value");
            input.push(0.0);
            output.push(T::default());
        }
        Self {
            input,
            output,
            extrapolate: Extrapolate::default(),
        }
    }

    /// Two-stop mapping over the input range `[0, 1]`
    pub fn linear(from: T, to: T) -> Self {
        Self::new(vec![0.0, 1.0], vec![from, to])
    }

    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate = mode;
        self
    }

    /// Evaluate the mapping at `input`
    pub fn at(&self, input: f32) -> T {
        let stops = self.input.len();
        if stops <= 1 {
            return self.output[0];
        }

        let last = stops - 1;
        if self.extrapolate == Extrapolate::Clamp {
            if input <= self.input[0] {
                return self.output[0];
            }
            if input >= self.input[last] {
                return self.output[last];
            }
        }

        // Segment whose upper stop is the first one at or past `input`,
        // falling back to the outer segments when extrapolating.
        let upper = self.input[1..]
            .iter()
            .position(|&stop| input <= stop)
            .map(|index| index + 1)
            .unwrap_or(last);
        let lower = upper - 1;

        let span = self.input[upper] - self.input[lower];
        if span.abs() < f32::EPSILON {
            return if input < self.input[upper] {
                self.output[lower]
            } else {
                self.output[upper]
            };
        }

        let t = (input - self.input[lower]) / span;
        T::lerp(&self.output[lower], &self.output[upper], t)
    }

    pub fn input_range(&self) -> &[f32] {
        &self.input
    }

    pub fn output_range(&self) -> &[T] {
        &self.output
    }
}
