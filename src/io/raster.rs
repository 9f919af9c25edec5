//! Raster surface painting glyphs into an RGBA image with a TrueType font

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use tracing::warn;

use crate::io::error::{RenderError, Result};
use crate::io::surface::{GlyphColor, Surface};
use crate::spatial::Viewport;

#[derive(Debug, Clone)]
struct GlyphBitmap {
    width: usize,
    height: usize,
    // Offset from the cell's top edge to the bitmap's top row
    top: i64,
    left: i64,
    coverage: Vec<u8>,
}

/// Surface that rasterizes glyphs onto an in-memory image
///
/// Glyphs are drawn top-aligned: the font's ascent is placed at the cell's
/// top edge. Bitmaps are cached per character; characters the font cannot
/// draw are logged once and skipped.
pub struct RasterSurface {
    font: Font,
    font_size: f32,
    ascent: f32,
    background: [u8; 4],
    image: RgbaImage,
    cache: HashMap<char, Option<GlyphBitmap>>,
}

impl RasterSurface {
    /// Create a surface from font bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a parseable font
    pub fn from_font_bytes(bytes: &[u8], font_size: f32, background: [u8; 4]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            RenderError::FontLoad {
                path: "<memory>".into(),
                reason: reason.to_string(),
            }
        })?;
        let ascent = font
            .horizontal_line_metrics(font_size)
            .map_or(font_size, |metrics| metrics.ascent);

        Ok(Self {
            font,
            font_size,
            ascent,
            background,
            image: RgbaImage::new(0, 0),
            cache: HashMap::new(),
        })
    }

    /// Create a surface from a font file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_font_file(path: &Path, font_size: f32, background: [u8; 4]) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| RenderError::FileSystem {
            path: path.to_path_buf(),
            operation: "read font",
            source: e,
        })?;
        Self::from_font_bytes(&bytes, font_size, background).map_err(|err| match err {
            RenderError::FontLoad { reason, .. } => RenderError::FontLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// The current frame
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Background colour painted by `clear`
    pub const fn background(&self) -> [u8; 4] {
        self.background
    }

    fn ensure_cached(&mut self, glyph: char) {
        let font = &self.font;
        let font_size = self.font_size;
        let ascent = self.ascent;
        self.cache.entry(glyph).or_insert_with(|| {
            if font.lookup_glyph_index(glyph) == 0 {
                warn!(%glyph, "font has no glyph for character, skipping");
                return None;
            }
            let (metrics, coverage) = font.rasterize(glyph, font_size);
            let top = (ascent - metrics.height as f32 - metrics.ymin as f32).round() as i64;
            Some(GlyphBitmap {
                width: metrics.width,
                height: metrics.height,
                top,
                left: i64::from(metrics.xmin),
                coverage,
            })
        });
    }
}

// Source-over blend of `color` at `opacity` onto `dst`
fn blend(dst: &mut Rgba<u8>, color: [u8; 3], opacity: f64) {
    let src_a = opacity.clamp(0.0, 1.0);
    let dst_a = f64::from(dst.0[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for (channel, &src) in dst.0.iter_mut().zip(color.iter()) {
        let below = f64::from(*channel);
        let mixed = f64::from(src).mul_add(src_a, below * dst_a * (1.0 - src_a)) / out_a;
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}

impl Surface for RasterSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.image = RgbaImage::from_pixel(viewport.width, viewport.height, Rgba(self.background));
    }

    fn clear(&mut self) {
        let background = Rgba(self.background);
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: GlyphColor) {
        self.ensure_cached(glyph);
        let Some(Some(bitmap)) = self.cache.get(&glyph) else {
            return;
        };
        let origin_x = x.round() as i64 + bitmap.left;
        let origin_y = y.round() as i64 + bitmap.top;
        let (width, height) = (i64::from(self.image.width()), i64::from(self.image.height()));

        for row in 0..bitmap.height {
            let py = origin_y + row as i64;
            if py < 0 || py >= height {
                continue;
            }
            for col in 0..bitmap.width {
                let px = origin_x + col as i64;
                if px < 0 || px >= width {
                    continue;
                }
                let coverage = bitmap
                    .coverage
                    .get(row * bitmap.width + col)
                    .copied()
                    .unwrap_or(0);
                if coverage == 0 {
                    continue;
                }
                let opacity = color.alpha * f64::from(coverage) / 255.0;
                if let Some(pixel) = self.image.get_pixel_mut_checked(px as u32, py as u32) {
                    blend(pixel, color.rgb, opacity);
                }
            }
        }
    }
}
