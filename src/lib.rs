//! Animated glyph field driven by three-dimensional Perlin noise
//!
//! A grid of glyph cells covers the viewport. Every frame the renderer samples
//! a slowly drifting noise field per cell, turns the sample into a brightness,
//! and uses it to pick the cell's opacity, how likely its glyph is to change,
//! and which glyph category a replacement comes from.

#![forbid(unsafe_code)]

/// Renderer, device classification and frame loop
pub mod algorithm;
/// Surfaces, exports, error handling and the CLI
pub mod io;
/// Noise, interpolation and probability utilities
pub mod math;
/// Grid, glyph categories and glitch zones
pub mod spatial;

pub use algorithm::frame_loop::{Animator, FrameEvent, FrameScheduler, ScriptedScheduler};
pub use algorithm::renderer::{NoiseGridRenderer, RendererConfig};
pub use io::error::{RenderError, Result};
pub use io::surface::{RecordingSurface, Surface};
pub use spatial::Viewport;
