//! Easing functions for animations

/// Easing curve applied to tween progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Symmetric in/out of the `ease` curve `cubic-bezier(0.42, 0, 1, 1)`.
    ///
    /// Default for field transitions.
    #[default]
    Standard,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map linear progress `t` in 0.0..=1.0 to eased progress.
    ///
    /// Endpoints are exact for every curve: `apply(0.0) == 0.0` and
    /// `apply(1.0) == 1.0`.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Standard => {
                let ease = |p: f32| bezier_ease(p, 0.42, 0.0, 1.0, 1.0);
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Solve a CSS cubic-bezier timing curve for progress `t`.
///
/// Newton-Raphson on the x polynomial, bisection when the slope flattens.
/// Works in f64 to keep consecutive frames monotonic.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = target;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - target;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let dx = slope(p, x1, x2);
        if dx.abs() < 1e-7 {
            break;
        }
        p -= err / dx;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = target;
    for _ in 0..24 {
        let x = sample(p, x1, x2);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2) as f32
}

/// B(t) for a curve anchored at 0 and 1 with control points p1, p2
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// B'(t)
#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::Standard,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_out_of_range_progress_is_pinned() {
        assert_eq!(Easing::EaseOutCubic.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(1.5), 1.0);
    }

    #[test]
    fn test_standard_is_symmetric() {
        let easing = Easing::Standard;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-4);
        let early = easing.apply(0.25);
        let late = easing.apply(0.75);
        assert!((early + late - 1.0).abs() < 1e-4);
        assert!(early < 0.25);
    }

    #[test]
    fn test_monotonic_bezier() {
        let easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = easing.apply(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
