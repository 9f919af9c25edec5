//! Input/output: surfaces, exports, progress, configuration and the CLI

/// Command-line interface and render orchestration
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG frame and text transcript export
pub mod image;
/// Frame progress display
pub mod progress;
/// Font-backed raster surface
pub mod raster;
/// Drawing surface trait and the recording surface
pub mod surface;
/// Frame capture and GIF export
pub mod visualization;
