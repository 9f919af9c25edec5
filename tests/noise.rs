//! Validates range, lattice behaviour and continuity of the Perlin sampler

use glyphfield::math::interpolation::brightness_from_noise;
use glyphfield::math::noise::PerlinNoise;

#[test]
fn test_dense_sample_stays_in_range() {
    let noise = PerlinNoise::new();
    for i in 0..40 {
        for j in 0..40 {
            for k in 0..10 {
                let value = noise.noise3(
                    f64::from(i) * 0.37 - 7.0,
                    f64::from(j) * 0.29 + 3.5,
                    f64::from(k) * 0.53,
                );
                assert!(value.abs() <= 1.05, "noise {value} out of range");
                let brightness = brightness_from_noise(value);
                assert!((0.2..=0.9).contains(&brightness));
            }
        }
    }
}

#[test]
fn test_integer_lattice_is_zero() {
    let noise = PerlinNoise::new();
    for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, 7.0, 1.0), (-2.0, 5.0, 9.0), (255.0, 256.0, 300.0)] {
        assert!(noise.noise3(x, y, z).abs() < 1e-12);
    }
}

#[test]
fn test_samples_are_deterministic() {
    let first = PerlinNoise::new();
    let second = PerlinNoise::new();
    for step in 0..100 {
        let t = f64::from(step) * 0.173;
        let a = first.noise3(t, t * 0.5, t * 0.25);
        let b = second.noise3(t, t * 0.5, t * 0.25);
        assert!((a - b).abs() < f64::EPSILON);
    }
}

#[test]
fn test_field_is_continuous() {
    let noise = PerlinNoise::new();
    let (x, y, z) = (4.3, 2.7, 0.9);
    let base = noise.noise3(x, y, z);
    let nearby = noise.noise3(x + 1e-6, y, z);
    assert!((base - nearby).abs() < 1e-4);
}
