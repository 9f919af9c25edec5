//! Spatial data structures of the glyph field
//!
//! This module contains:
//! - The glyph grid and viewport geometry
//! - Glyph category alphabets
//! - Glitch zones and their per-cell influence

/// Glitch zone bookkeeping
pub mod glitch;
/// Glyph category alphabets and selection
pub mod glyphs;
/// Grid of glyph cells sized from the viewport
pub mod grid;

pub use grid::{Cell, GlyphGrid, Viewport};
