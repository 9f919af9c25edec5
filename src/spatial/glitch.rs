//! Glitch zones: circular regions of transient visual perturbation
//!
//! Zones age one step per frame and respawn elsewhere when their lifetime
//! runs out. The field draws from its own random stream, so maintaining it
//! (or dropping it entirely) never changes which glyphs the main stream
//! produces.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    GLITCH_INTENSITY_MAX, GLITCH_INTENSITY_MIN, GLITCH_LIFETIME_MAX, GLITCH_LIFETIME_MIN,
    GLITCH_PHASE_STEPS, GLITCH_RADIUS_MAX, GLITCH_RADIUS_MIN, GLITCH_SCRAMBLE_RATE,
    GLITCH_SEED_SALT, GLITCH_SHIFT_AMPLITUDE, GLITCH_ZONES_MAX, GLITCH_ZONES_MIN,
};
use crate::math::probability::{chance, uniform};

/// Kind of perturbation a zone applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchKind {
    /// Horizontal glyph displacement
    SymbolShift,
    /// Alpha flicker
    Flicker,
    /// Raised glyph change rate
    Corruption,
    /// Forced glyph reassignment
    Scramble,
}

impl GlitchKind {
    /// Map a type code in `0..4` to a kind; larger codes wrap
    pub const fn from_code(code: u32) -> Self {
        match code % 4 {
            0 => Self::SymbolShift,
            1 => Self::Flicker,
            2 => Self::Corruption,
            _ => Self::Scramble,
        }
    }
}

/// One circular glitch region in cell coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchZone {
    /// Centre column
    pub x: usize,
    /// Centre row
    pub y: usize,
    /// Radius in cells
    pub radius: u32,
    /// Peak influence at the centre
    pub intensity: f64,
    /// Perturbation kind
    pub kind: GlitchKind,
    /// Frames remaining before respawn
    pub life: f64,
}

impl GlitchZone {
    /// A zone with random parameters somewhere inside a `cols × rows` grid
    pub fn spawn<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0..cols.max(1)),
            y: rng.random_range(0..rows.max(1)),
            radius: rng.random_range(GLITCH_RADIUS_MIN..=GLITCH_RADIUS_MAX),
            intensity: uniform(rng, GLITCH_INTENSITY_MIN, GLITCH_INTENSITY_MAX),
            kind: GlitchKind::from_code(rng.random_range(0..4)),
            life: uniform(rng, GLITCH_LIFETIME_MIN, GLITCH_LIFETIME_MAX),
        }
    }

    /// Euclidean distance from the zone centre to cell `(x, y)`
    pub fn distance_to(&self, x: usize, y: usize) -> f64 {
        let dx = x as f64 - self.x as f64;
        let dy = y as f64 - self.y as f64;
        dx.hypot(dy)
    }
}

/// Combined glitch effect on a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlitchInfluence {
    /// Horizontal displacement in pixels
    pub offset: f64,
    /// Alpha perturbation
    pub flicker: f64,
    /// Change-rate multiplier term
    pub corruption: f64,
    /// Force a glyph change this frame
    pub scramble: bool,
}

/// Phase accumulators driving the sinusoidal glitch terms
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlitchPhases {
    /// Symbol shift phase
    pub symbol_shift: f64,
    /// Flicker phase
    pub random_flicker: f64,
    /// Chaos burst phase (advanced but not sampled by any zone kind)
    pub chaos_burst: f64,
    /// Corruption phase
    pub matrix_corruption: f64,
    /// Scramble phase (advanced but not sampled by any zone kind)
    pub symbol_scramble: f64,
}

impl GlitchPhases {
    fn advance(&mut self) {
        let [shift, flicker, chaos, corruption, scramble] = GLITCH_PHASE_STEPS;
        self.symbol_shift += shift;
        self.random_flicker += flicker;
        self.chaos_burst += chaos;
        self.matrix_corruption += corruption;
        self.symbol_scramble += scramble;
    }
}

/// Glitch zones of one grid plus their private random stream
#[derive(Debug, Clone)]
pub struct GlitchField {
    zones: Vec<GlitchZone>,
    phases: GlitchPhases,
    cols: usize,
    rows: usize,
    rng: StdRng,
}

impl GlitchField {
    /// Create an empty field whose random stream derives from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            zones: Vec::new(),
            phases: GlitchPhases::default(),
            cols: 0,
            rows: 0,
            rng: StdRng::seed_from_u64(seed ^ GLITCH_SEED_SALT),
        }
    }

    /// Replace all zones with 2 to 4 fresh ones inside a `cols × rows` grid
    pub fn reseed(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        let count = self.rng.random_range(GLITCH_ZONES_MIN..=GLITCH_ZONES_MAX);
        self.zones = (0..count)
            .map(|_| GlitchZone::spawn(cols, rows, &mut self.rng))
            .collect();
    }

    /// Advance phases and age every zone, respawning expired ones
    pub fn step(&mut self) {
        self.phases.advance();
        for zone in &mut self.zones {
            zone.life -= 1.0;
            if zone.life <= 0.0 {
                *zone = GlitchZone::spawn(self.cols, self.rows, &mut self.rng);
            }
        }
    }

    /// Summed influence of every zone covering cell `(x, y)`
    pub fn influence_at(&mut self, x: usize, y: usize) -> GlitchInfluence {
        let mut influence = GlitchInfluence::default();
        for zone in &self.zones {
            let distance = zone.distance_to(x, y);
            let radius = f64::from(zone.radius);
            if distance >= radius {
                continue;
            }
            let strength = (radius - distance) / radius * zone.intensity;
            match zone.kind {
                GlitchKind::SymbolShift => {
                    influence.offset +=
                        (self.phases.symbol_shift + distance).sin() * strength * GLITCH_SHIFT_AMPLITUDE;
                }
                GlitchKind::Flicker => {
                    influence.flicker += (self.phases.random_flicker + distance).sin() * strength;
                }
                GlitchKind::Corruption => {
                    influence.corruption +=
                        (self.phases.matrix_corruption + distance).sin() * strength;
                }
                GlitchKind::Scramble => {
                    influence.scramble = chance(&mut self.rng, strength * GLITCH_SCRAMBLE_RATE);
                }
            }
        }
        influence
    }

    /// Current zones
    pub fn zones(&self) -> &[GlitchZone] {
        &self.zones
    }

    /// Mutable access to the zones
    pub fn zones_mut(&mut self) -> &mut [GlitchZone] {
        &mut self.zones
    }

    /// Current phase accumulators
    pub const fn phases(&self) -> &GlitchPhases {
        &self.phases
    }
}
