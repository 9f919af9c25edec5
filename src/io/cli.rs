//! Command-line interface rendering the glyph field to GIF, PNG or text

use crate::algorithm::frame_loop::{Animator, ResizeStep, ScriptedScheduler};
use crate::algorithm::renderer::{NoiseGridRenderer, RendererConfig};
use crate::io::configuration::{
    DEFAULT_FRAMES, DEFAULT_SEED, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    GIF_FRAME_DELAY_MS, GLYPH_PIXEL_SIZE, GLYPH_TINT,
};
use crate::io::error::{RenderError, Result, invalid_parameter};
use crate::io::image::{export_frame_as_png, export_transcript};
use crate::io::progress::ProgressManager;
use crate::io::raster::RasterSurface;
use crate::io::surface::RecordingSurface;
use crate::io::visualization::GifRecorder;
use crate::spatial::Viewport;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "glyphfield")]
#[command(
    author,
    version,
    about = "Render an animated Perlin-noise glyph field"
)]
/// Command-line arguments for the glyph field renderer
pub struct Cli {
    /// Output file: .gif (animation), .png (final frame) or .txt (glyph transcript)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Viewport width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: u32,

    /// Number of frames to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Random seed for reproducible rendering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// TrueType/OpenType font used to draw glyphs (required for .gif and .png)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// User agent string used for device classification
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Resize the viewport before a frame, e.g. `60:800x600` (repeatable)
    #[arg(long = "resize", value_name = "FRAME:WxH", value_parser = parse_resize_step)]
    pub resizes: Vec<ResizeStep>,

    /// Let glitch zones perturb the rendering
    #[arg(long)]
    pub glitch: bool,

    /// Delay between GIF frames in milliseconds
    #[arg(short, long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub delay: u32,

    /// Background colour as RRGGBB or RRGGBBAA hex
    #[arg(short, long, value_parser = parse_color, default_value = "0c0a08ff")]
    pub background: [u8; 4],

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Initial viewport
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Smallest viewport containing every viewport the render passes through
    ///
    /// Resizes scheduled at or after the last frame never happen and are ignored.
    pub fn canvas(&self) -> Viewport {
        self.resizes
            .iter()
            .filter(|step| step.frame < self.frames)
            .fold(self.viewport(), |canvas, step| {
                Viewport::new(
                    canvas.width.max(step.viewport.width),
                    canvas.height.max(step.viewport.height),
                )
            })
    }

    /// Renderer configuration derived from the arguments
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            glyph_pixel_size: GLYPH_PIXEL_SIZE,
            seed: self.seed,
            user_agent: self.user_agent.clone(),
            glitch_enabled: self.glitch,
            glitch_zones: true,
            tint: GLYPH_TINT,
        }
    }
}

/// Parse a resize step of the form `FRAME:WIDTHxHEIGHT`
///
/// # Errors
///
/// Returns a description of the problem if the step is malformed
pub fn parse_resize_step(value: &str) -> std::result::Result<ResizeStep, String> {
    let (frame, size) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:WxH, got '{value}'"))?;
    let (width, height) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH after ':', got '{size}'"))?;

    let frame = frame
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid frame '{frame}': {e}"))?;
    let width = width
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid width '{width}': {e}"))?;
    let height = height
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid height '{height}': {e}"))?;

    Ok(ResizeStep {
        frame,
        viewport: Viewport::new(width, height),
    })
}

/// Parse an `RRGGBB` or `RRGGBBAA` hex colour, with optional leading `#`
///
/// # Errors
///
/// Returns a description of the problem if the colour is malformed
pub fn parse_color(value: &str) -> std::result::Result<[u8; 4], String> {
    let hex = value.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(format!("expected RRGGBB or RRGGBBAA, got '{value}'"));
    }

    let mut color = [0, 0, 0, 255];
    for (slot, index) in color.iter_mut().zip((0..hex.len()).step_by(2)) {
        let pair = hex.get(index..index + 2).unwrap_or_default();
        *slot = u8::from_str_radix(pair, 16)
            .map_err(|e| format!("invalid hex '{pair}' in '{value}': {e}"))?;
    }
    Ok(color)
}

/// What the output path asks to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Animated GIF of every frame
    Gif,
    /// PNG of the final frame
    Png,
    /// Glyph transcript of the final grid
    Transcript,
}

impl OutputKind {
    /// Infer the output kind from the file extension
    ///
    /// # Errors
    ///
    /// Returns an error for any extension other than gif, png or txt
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("gif") => Ok(Self::Gif),
            Some("png") => Ok(Self::Png),
            Some("txt") => Ok(Self::Transcript),
            _ => Err(RenderError::UnsupportedOutput {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Whether glyphs must be rasterized with a font
    pub const fn needs_font(self) -> bool {
        matches!(self, Self::Gif | Self::Png)
    }
}

/// Renders the glyph field according to the CLI arguments
pub struct FrameProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl FrameProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Validate the arguments, render every frame and write the output
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid, the font cannot be loaded,
    /// or the output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let kind = OutputKind::from_path(&self.cli.output)?;
        self.validate(kind)?;

        let start_time = Instant::now();
        let name = self
            .cli
            .output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.progress.start(&name, self.cli.frames);
        self.progress.set_stage("rendering");

        let mut renderer = NoiseGridRenderer::new(self.cli.viewport(), self.cli.renderer_config());
        let mut scheduler = ScriptedScheduler::new(self.cli.frames, self.cli.resizes.clone());

        match kind {
            OutputKind::Transcript => {
                let mut surface = RecordingSurface::new();
                let progress = &self.progress;
                Animator::new(&mut renderer, &mut surface).run(
                    &mut scheduler,
                    |index, _, _| {
                        progress.frame_done(index);
                        Ok(())
                    },
                )?;
                self.progress.set_stage("writing");
                export_transcript(renderer.grid(), &self.cli.output)?;
            }
            OutputKind::Gif | OutputKind::Png => {
                let font = self
                    .cli
                    .font
                    .as_deref()
                    .ok_or_else(|| RenderError::MissingFont {
                        output: self.cli.output.clone(),
                    })?;
                let mut surface = RasterSurface::from_font_file(
                    font,
                    GLYPH_PIXEL_SIZE as f32,
                    self.cli.background,
                )?;

                let mut recorder = match kind {
                    OutputKind::Gif => Some(GifRecorder::create(
                        &self.cli.output,
                        self.cli.canvas(),
                        self.cli.background,
                        self.cli.delay,
                    )?),
                    OutputKind::Png | OutputKind::Transcript => None,
                };
                let progress = &self.progress;
                Animator::new(&mut renderer, &mut surface).run(
                    &mut scheduler,
                    |index, _, surface| {
                        if let Some(recorder) = recorder.as_mut() {
                            recorder.push(surface.image())?;
                        }
                        progress.frame_done(index);
                        Ok(())
                    },
                )?;

                self.progress.set_stage("encoding");
                match recorder {
                    Some(recorder) => {
                        recorder.finish()?;
                    }
                    None => export_frame_as_png(surface.image(), &self.cli.output)?,
                }
            }
        }

        self.progress.finish();
        info!(
            frames = renderer.frames(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "render complete"
        );
        Ok(())
    }

    fn validate(&self, kind: OutputKind) -> Result<()> {
        if self.cli.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.cli.frames,
                &"at least one frame must be rendered",
            ));
        }
        if kind.needs_font() {
            let viewports =
                std::iter::once(self.cli.viewport()).chain(self.cli.resizes.iter().map(|s| s.viewport));
            for viewport in viewports {
                if viewport.width == 0 || viewport.height == 0 {
                    return Err(invalid_parameter(
                        "viewport",
                        &format!("{}x{}", viewport.width, viewport.height),
                        &"raster output needs a non-empty viewport",
                    ));
                }
            }
        }
        Ok(())
    }
}
