//! Mathematical utilities for the noise field

/// Fade and linear interpolation curves plus brightness mapping
pub mod interpolation;
/// Reference-permutation Perlin noise
pub mod noise;
/// Seeded random draws used by glyph and glitch updates
pub mod probability;
