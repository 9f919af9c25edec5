//! Interpolation primitives for gradient noise and brightness mapping

use num_traits::Float;

use crate::io::configuration::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`, which hides
/// the lattice structure of the noise.
pub fn fade<T: Float>(t: T) -> T {
    let six = T::from(6.0).unwrap_or_else(T::one);
    let fifteen = T::from(15.0).unwrap_or_else(T::one);
    let ten = T::from(10.0).unwrap_or_else(T::one);
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`)
pub fn lerp<T: Float>(t: T, a: T, b: T) -> T {
    a + t * (b - a)
}

/// Map a raw noise sample in roughly `[-1, 1]` to a clamped brightness
pub fn brightness_from_noise(noise: f64) -> f64 {
    ((noise + 1.0) * 0.5).clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints_and_midpoint() {
        assert!(fade(0.0_f64).abs() < f64::EPSILON);
        assert!((fade(1.0_f64) - 1.0).abs() < f64::EPSILON);
        assert!((fade(0.5_f64) - 0.5).abs() < f64::EPSILON);
        assert!((fade(0.25_f32) - 0.103_515_625).abs() < 1e-6);
    }

    #[test]
    fn test_fade_is_monotonic_on_unit_interval() {
        let mut previous = fade(0.0_f64);
        for step in 1..=100 {
            let current = fade(f64::from(step) / 100.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 2.0, 6.0) - 2.0_f64).abs() < f64::EPSILON);
        assert!((lerp(1.0, 2.0, 6.0) - 6.0_f64).abs() < f64::EPSILON);
        assert!((lerp(0.25, 2.0, 6.0) - 3.0_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brightness_is_clamped() {
        assert!((brightness_from_noise(-1.0) - MIN_BRIGHTNESS).abs() < f64::EPSILON);
        assert!((brightness_from_noise(1.0) - MAX_BRIGHTNESS).abs() < f64::EPSILON);
        assert!((brightness_from_noise(0.0) - 0.5).abs() < f64::EPSILON);
        assert!((brightness_from_noise(-7.5) - MIN_BRIGHTNESS).abs() < f64::EPSILON);
        assert!((brightness_from_noise(3.0) - MAX_BRIGHTNESS).abs() < f64::EPSILON);
    }
}
