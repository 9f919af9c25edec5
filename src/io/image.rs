//! Single-frame PNG export and plain-text glyph transcripts

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::io::error::{RenderError, Result, ensure_parent_dir};
use crate::spatial::GlyphGrid;

/// Save one rendered frame as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The frame has no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_frame_as_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(RenderError::EmptyCapture);
    }

    ensure_parent_dir(output_path)?;
    frame
        .save(output_path)
        .map_err(|e| RenderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(path = %output_path.display(), "wrote frame");
    Ok(())
}

/// Write the grid's glyphs as text, one line per row
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written
pub fn export_transcript(grid: &GlyphGrid, output_path: &Path) -> Result<()> {
    let mut text = grid.text_rows().join("\n");
    text.push('\n');

    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, text).map_err(|e| RenderError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write transcript",
        source: e,
    })?;

    info!(
        path = %output_path.display(),
        cols = grid.cols(),
        rows = grid.rows(),
        "wrote transcript"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Viewport;
    use image::Rgba;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_png_roundtrip_dimensions() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
        let path = dir.path().join("frame.png");
        let frame = RgbaImage::from_pixel(24, 12, Rgba([12, 10, 8, 255]));
        assert!(export_frame_as_png(&frame, &path).is_ok());

        let reloaded = image::open(&path).map(|img| img.to_rgba8());
        assert!(reloaded.is_ok_and(|img| img.dimensions() == (24, 12)));
    }

    #[test]
    fn test_empty_frame_rejected() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
        let result = export_frame_as_png(&RgbaImage::new(0, 0), &dir.path().join("x.png"));
        assert!(matches!(result, Err(RenderError::EmptyCapture)));
    }

    #[test]
    fn test_transcript_lines() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
        let path = dir.path().join("grid.txt");
        let mut rng = StdRng::seed_from_u64(4);
        let grid = GlyphGrid::build(Viewport::new(60, 36), 12, &mut rng);
        assert!(export_transcript(&grid, &path).is_ok());

        let text = std::fs::read_to_string(&path).unwrap_or_default();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 5));
    }
}
