//! Glyph field animation: device classification, the renderer and its frame loop

/// Device classification and speed constants
pub mod device;
/// Host-driven frame loop
pub mod frame_loop;
/// Noise grid renderer
pub mod renderer;
