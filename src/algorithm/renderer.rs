//! Noise-driven glyph grid renderer
//!
//! Each frame advances a time accumulator, samples a three-dimensional Perlin
//! field at `(x * 0.05, y * 0.05, time * 0.1)` for every cell, and derives the
//! cell's brightness from it. Brightness picks the alpha the glyph is drawn
//! with, how likely the glyph is to change this frame, and which category a
//! replacement glyph comes from.
//!
//! Glitch zones are maintained every frame, but their influence is zeroed
//! unless [`RendererConfig::glitch_enabled`] is set.

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::algorithm::device::{DeviceClass, SpeedProfile};
use crate::io::configuration::{
    ALPHA_SCALE, BRIGHT_CHANGE_THRESHOLD, DEFAULT_SEED, GLYPH_PIXEL_SIZE, GLYPH_TINT,
    NOISE_SPATIAL_SCALE, NOISE_TIME_SCALE,
};
use crate::io::surface::{GlyphColor, Surface};
use crate::math::interpolation::brightness_from_noise;
use crate::math::noise::PerlinNoise;
use crate::math::probability::chance;
use crate::spatial::glitch::{GlitchField, GlitchInfluence};
use crate::spatial::glyphs::GlyphCategory;
use crate::spatial::{GlyphGrid, Viewport};

/// Renderer parameters fixed for the renderer's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Pixel size of one glyph cell
    pub glyph_pixel_size: u32,
    /// Seed of the glyph and glitch random streams
    pub seed: u64,
    /// Host user agent used for device classification
    pub user_agent: Option<String>,
    /// Let glitch zones affect rendering
    pub glitch_enabled: bool,
    /// Maintain glitch zones at all
    pub glitch_zones: bool,
    /// Glyph tint
    pub tint: [u8; 3],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            glyph_pixel_size: GLYPH_PIXEL_SIZE,
            seed: DEFAULT_SEED,
            user_agent: None,
            glitch_enabled: false,
            glitch_zones: true,
            tint: GLYPH_TINT,
        }
    }
}

/// Animated glyph grid over a Perlin noise field
#[derive(Debug, Clone)]
pub struct NoiseGridRenderer {
    config: RendererConfig,
    noise: PerlinNoise,
    grid: GlyphGrid,
    glitch: Option<GlitchField>,
    viewport: Viewport,
    device: DeviceClass,
    speed: SpeedProfile,
    time: f64,
    frames: u64,
    rng: StdRng,
}

impl NoiseGridRenderer {
    /// Create a renderer for `viewport` and build its first grid
    pub fn new(viewport: Viewport, config: RendererConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let device = DeviceClass::detect(config.user_agent.as_deref(), viewport.width);
        let grid = GlyphGrid::build(viewport, config.glyph_pixel_size, &mut rng);
        let glitch = config.glitch_zones.then(|| {
            let mut field = GlitchField::new(config.seed);
            field.reseed(grid.cols(), grid.rows());
            field
        });

        debug!(
            cols = grid.cols(),
            rows = grid.rows(),
            ?device,
            "built glyph grid"
        );

        Self {
            noise: PerlinNoise::new(),
            grid,
            glitch,
            viewport,
            device,
            speed: SpeedProfile::for_class(device),
            time: 0.0,
            frames: 0,
            rng,
            config,
        }
    }

    /// Rebuild the grid for a new viewport
    ///
    /// No cell state survives. The speed profile is swapped only when the
    /// device class actually changed.
    pub fn resize(&mut self, viewport: Viewport) {
        let device = DeviceClass::detect(self.config.user_agent.as_deref(), viewport.width);
        if device != self.device {
            debug!(from = ?self.device, to = ?device, "device class changed");
            self.device = device;
            self.speed = SpeedProfile::for_class(device);
        }

        self.viewport = viewport;
        self.grid = GlyphGrid::build(viewport, self.config.glyph_pixel_size, &mut self.rng);
        if let Some(field) = &mut self.glitch {
            field.reseed(self.grid.cols(), self.grid.rows());
        }

        debug!(
            width = viewport.width,
            height = viewport.height,
            cols = self.grid.cols(),
            rows = self.grid.rows(),
            "rebuilt glyph grid"
        );
    }

    /// Advance one frame and paint every cell onto `surface`
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        self.time += self.speed.time_increment;
        self.frames += 1;

        if let Some(field) = &mut self.glitch {
            field.step();
        }

        let size = f64::from(self.grid.glyph_pixel_size());
        let z = self.time * NOISE_TIME_SCALE;

        for x in 0..self.grid.cols() {
            for y in 0..self.grid.rows() {
                let noise = self.noise.noise3(
                    x as f64 * NOISE_SPATIAL_SCALE,
                    y as f64 * NOISE_SPATIAL_SCALE,
                    z,
                );
                let brightness = brightness_from_noise(noise);

                let raw = self
                    .glitch
                    .as_mut()
                    .map_or_else(GlitchInfluence::default, |field| field.influence_at(x, y));
                let influence = if self.config.glitch_enabled {
                    raw
                } else {
                    GlitchInfluence::default()
                };

                let Some(cell) = self.grid.get_mut(x, y) else {
                    continue;
                };
                cell.glitch_offset = influence.offset;
                cell.flicker_intensity = influence.flicker;
                cell.corruption_level = influence.corruption;

                let change_rate = if brightness > BRIGHT_CHANGE_THRESHOLD {
                    self.speed.bright_change_rate
                } else {
                    self.speed.base_change_rate
                };
                let change_probability = change_rate * (1.0 + influence.corruption);

                if chance(&mut self.rng, change_probability) || influence.scramble {
                    let category = GlyphCategory::for_brightness(brightness, &mut self.rng);
                    cell.glyph = category.pick(&mut self.rng);
                    cell.change_time = self.time;
                }

                let alpha = brightness.mul_add(ALPHA_SCALE, influence.flicker);
                surface.draw_glyph(
                    cell.glyph,
                    (x as f64).mul_add(size, influence.offset),
                    y as f64 * size,
                    GlyphColor::new(self.config.tint, alpha),
                );
            }
        }
    }

    /// Current grid
    pub const fn grid(&self) -> &GlyphGrid {
        &self.grid
    }

    /// Glitch zones, unless the subsystem is switched off
    pub const fn glitch_field(&self) -> Option<&GlitchField> {
        self.glitch.as_ref()
    }

    /// Mutable glitch zones, unless the subsystem is switched off
    pub const fn glitch_field_mut(&mut self) -> Option<&mut GlitchField> {
        self.glitch.as_mut()
    }

    /// Viewport the grid was last built for
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current device class
    pub const fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Active speed constants
    pub const fn speed(&self) -> SpeedProfile {
        self.speed
    }

    /// Accumulated animation time
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Frames drawn so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Renderer configuration
    pub const fn config(&self) -> &RendererConfig {
        &self.config
    }
}
