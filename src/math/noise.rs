//! Classic three-dimensional Perlin noise over the reference permutation
//!
//! The permutation is fixed, so the noise field is a pure function of its
//! coordinates: two samplers always agree, and the same sample taken twice
//! returns the same value.

use crate::math::interpolation::{fade, lerp};

/// Ken Perlin's reference permutation of `0..256`
const REFERENCE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation table duplicated to 512 entries so corner lookups never wrap
#[derive(Debug, Clone)]
pub struct PermutationTable {
    entries: [usize; 512],
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PermutationTable {
    /// Build the doubled table from the reference permutation
    pub fn new() -> Self {
        let mut entries = [0; 512];
        for (slot, &value) in entries.iter_mut().zip(REFERENCE_PERMUTATION.iter().cycle()) {
            *slot = usize::from(value);
        }
        Self { entries }
    }

    /// Table entry at `index`, reduced modulo 512
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.entries.get(index & 511).copied().unwrap_or_default()
    }
}

/// Gradient contribution of a lattice corner
///
/// The low four bits of `hash` pick one of the twelve cube-edge directions
/// (four of them repeated to fill sixteen slots).
#[inline]
pub const fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Three-dimensional gradient noise sampler
#[derive(Debug, Clone, Default)]
pub struct PerlinNoise {
    permutation: PermutationTable,
}

impl PerlinNoise {
    /// Create a sampler over the reference permutation
    pub fn new() -> Self {
        Self {
            permutation: PermutationTable::new(),
        }
    }

    /// Sample the noise field; output lies in roughly `[-1, 1]`
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, xf) = lattice(x);
        let (yi, yf) = lattice(y);
        let (zi, zf) = lattice(z);

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let p = &self.permutation;
        let a = p.get(xi) + yi;
        let aa = p.get(a) + zi;
        let ab = p.get(a + 1) + zi;
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b) + zi;
        let bb = p.get(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad(p.get(aa), xf, yf, zf),
                    grad(p.get(ba), xf - 1.0, yf, zf),
                ),
                lerp(
                    u,
                    grad(p.get(ab), xf, yf - 1.0, zf),
                    grad(p.get(bb), xf - 1.0, yf - 1.0, zf),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p.get(aa + 1), xf, yf, zf - 1.0),
                    grad(p.get(ba + 1), xf - 1.0, yf, zf - 1.0),
                ),
                lerp(
                    u,
                    grad(p.get(ab + 1), xf, yf - 1.0, zf - 1.0),
                    grad(p.get(bb + 1), xf - 1.0, yf - 1.0, zf - 1.0),
                ),
            ),
        )
    }
}

// Splits a coordinate into its wrapped lattice index and fractional offset
#[inline]
fn lattice(coord: f64) -> (usize, f64) {
    let floor = coord.floor();
    ((floor as i64 & 255) as usize, coord - floor)
}
