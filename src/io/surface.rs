//! Drawing surface abstraction the renderer paints into

use crate::spatial::Viewport;

/// Tint and opacity of a drawn glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphColor {
    /// Red, green, blue
    pub rgb: [u8; 3],
    /// Opacity in `[0, 1]`
    pub alpha: f64,
}

impl GlyphColor {
    /// Tint with the given opacity, clamped into `[0, 1]`
    pub const fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Colour as 8-bit RGBA
    pub fn to_rgba(self) -> [u8; 4] {
        let [r, g, b] = self.rgb;
        [r, g, b, (self.alpha * 255.0).round() as u8]
    }
}

/// A target capable of clearing itself and drawing single glyphs
///
/// Drawing never fails; a surface that cannot render a glyph skips it.
pub trait Surface {
    /// Match the surface to a new viewport size
    fn resize(&mut self, viewport: Viewport);

    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Draw `glyph` with its top-left corner at pixel `(x, y)`
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: GlyphColor);
}

/// A single recorded glyph draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Character drawn
    pub glyph: char,
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Tint and opacity
    pub color: GlyphColor,
}

/// Surface that records the draws of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears so far (one per frame)
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Viewport of the last resize
    pub const fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: GlyphColor) {
        self.commands.push(DrawCommand { glyph, x, y, color });
    }
}
