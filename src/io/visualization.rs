//! Streaming animated GIF export

use std::fs::File;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage, imageops};
use tracing::info;

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{RenderError, Result, ensure_parent_dir, invalid_parameter};
use crate::spatial::Viewport;

/// Looping GIF written frame by frame as the animation renders
///
/// Every frame is placed at the top-left of a fixed canvas filled with the
/// background colour, so frames rendered before or after a resize keep their
/// full size. Only every n-th offered frame is encoded when the requested
/// delay is shorter than viewers honour (see [`GifRecorder::frame_schedule`]).
pub struct GifRecorder {
    encoder: GifEncoder<File>,
    path: PathBuf,
    canvas: Viewport,
    background: Rgba<u8>,
    skip_factor: usize,
    delay_ms: u32,
    offered: usize,
    written: usize,
}

impl GifRecorder {
    /// Create the output file and prepare an encoder for a `canvas` sized animation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas has no pixels
    /// - The parent directory or the file cannot be created
    /// - The encoder rejects the loop setting
    pub fn create(
        output_path: &Path,
        canvas: Viewport,
        background: [u8; 4],
        frame_delay_ms: u32,
    ) -> Result<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", canvas.width, canvas.height),
                &"an animation needs a non-empty canvas",
            ));
        }

        ensure_parent_dir(output_path)?;
        let file = File::create(output_path).map_err(|e| RenderError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| RenderError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        let (skip_factor, delay_ms) = Self::frame_schedule(frame_delay_ms);
        Ok(Self {
            encoder,
            path: output_path.to_path_buf(),
            canvas,
            background: Rgba(background),
            skip_factor,
            delay_ms,
            offered: 0,
            written: 0,
        })
    }

    /// Skip factor and effective delay for a requested frame delay
    ///
    /// Viewers clamp very short delays, which would slow the animation down.
    /// Instead every n-th frame is kept and the delay stretched to match, so
    /// the apparent speed is preserved.
    pub const fn frame_schedule(frame_delay_ms: u32) -> (usize, u32) {
        if frame_delay_ms == 0 {
            return (1, VIEWER_MIN_FRAME_DELAY_MS);
        }
        if frame_delay_ms >= VIEWER_MIN_FRAME_DELAY_MS {
            return (1, frame_delay_ms);
        }
        let skip = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms);
        (skip as usize, frame_delay_ms * skip)
    }

    /// Offer the next rendered frame; it is encoded unless the schedule skips it
    ///
    /// Parts of the frame outside the canvas are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if GIF encoding fails
    pub fn push(&mut self, frame: &RgbaImage) -> Result<()> {
        let index = self.offered;
        self.offered += 1;
        if !index.is_multiple_of(self.skip_factor) {
            return Ok(());
        }

        let image = if frame.dimensions() == (self.canvas.width, self.canvas.height) {
            frame.clone()
        } else {
            let mut canvas =
                RgbaImage::from_pixel(self.canvas.width, self.canvas.height, self.background);
            imageops::replace(&mut canvas, frame, 0, 0);
            canvas
        };

        self.encoder
            .encode_frame(Frame::from_parts(
                image,
                0,
                0,
                Delay::from_numer_denom_ms(self.delay_ms, 1),
            ))
            .map_err(|e| RenderError::ImageExport {
                path: self.path.clone(),
                source: e,
            })?;
        self.written += 1;
        Ok(())
    }

    /// Frames offered so far
    pub const fn offered(&self) -> usize {
        self.offered
    }

    /// Frames encoded so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Close the animation and return the number of encoded frames
    ///
    /// # Errors
    ///
    /// Returns an error if no frame was ever encoded
    pub fn finish(self) -> Result<usize> {
        if self.written == 0 {
            return Err(RenderError::EmptyCapture);
        }
        info!(
            path = %self.path.display(),
            frames = self.written,
            delay_ms = self.delay_ms,
            "wrote animation"
        );
        Ok(self.written)
    }
}
