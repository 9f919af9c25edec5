//! Exercises the command-line pipeline end to end for transcript and raster outputs

use clap::Parser;
use glyphfield::RenderError;
use glyphfield::io::cli::{Cli, FrameProcessor};
use glyphfield::spatial::glyphs::{GlyphCategory, is_known_glyph};
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const BACKGROUND: [u8; 4] = [12, 10, 8, 255];

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
];

fn system_font() -> Option<PathBuf> {
    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

fn font_covers_known_glyphs(path: &Path) -> bool {
    let bytes = std::fs::read(path).unwrap_or_default();
    let Ok(font) = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) else {
        return false;
    };
    GlyphCategory::ALL
        .iter()
        .flat_map(|category| category.chars())
        .any(|&glyph| font.lookup_glyph_index(glyph) != 0)
}

fn process(args: &[&str]) -> glyphfield::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("glyphfield").chain(args.iter().copied()))
        .unwrap_or_else(|e| unreachable!("arguments should parse: {e}"));
    FrameProcessor::new(cli).process()
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_transcript_output() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output = dir.path().join("field.txt");
    let output_arg = path_arg(&output);

    let result = process(&[output_arg.as_str(), "-W", "240", "-H", "120", "-f", "30", "-q"]);
    assert!(result.is_ok(), "{result:?}");

    let text = std::fs::read_to_string(&output).unwrap_or_default();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in &lines {
        assert_eq!(line.chars().count(), 20);
        assert!(line.chars().all(is_known_glyph));
    }
}

#[test]
fn test_transcript_follows_resize() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output = dir.path().join("resized.txt");
    let output_arg = path_arg(&output);

    let result = process(&[
        output_arg.as_str(),
        "-W",
        "240",
        "-H",
        "120",
        "-f",
        "10",
        "--resize",
        "5:120x60",
        "-q",
    ]);
    assert!(result.is_ok(), "{result:?}");

    let text = std::fs::read_to_string(&output).unwrap_or_default();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.chars().count() == 10));
}

#[test]
fn test_same_seed_same_transcript() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    let (first_arg, second_arg) = (path_arg(&first), path_arg(&second));

    for output in [first_arg.as_str(), second_arg.as_str()] {
        let result = process(&[output, "-W", "360", "-H", "240", "-f", "40", "-s", "7", "-q"]);
        assert!(result.is_ok(), "{result:?}");
    }

    let a = std::fs::read_to_string(&first).unwrap_or_default();
    let b = std::fs::read_to_string(&second).unwrap_or_default();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_gif_without_font_fails() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output_arg = path_arg(&dir.path().join("out.gif"));
    let result = process(&[output_arg.as_str(), "-f", "2", "-q"]);
    assert!(matches!(result, Err(RenderError::MissingFont { .. })));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output_arg = path_arg(&dir.path().join("out.bmp"));
    let result = process(&[output_arg.as_str(), "-f", "2", "-q"]);
    assert!(matches!(result, Err(RenderError::UnsupportedOutput { .. })));
}

#[test]
fn test_zero_frames_rejected() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output_arg = path_arg(&dir.path().join("out.txt"));
    let result = process(&[output_arg.as_str(), "-f", "0", "-q"]);
    assert!(matches!(
        result,
        Err(RenderError::InvalidParameter { parameter: "frames", .. })
    ));
}

#[test]
fn test_png_with_system_font() {
    let Some(font) = system_font() else {
        return;
    };
    let draws_any_glyph = font_covers_known_glyphs(&font);
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output = dir.path().join("frame.png");
    let (output_arg, font_arg) = (path_arg(&output), path_arg(&font));

    let result = process(&[
        output_arg.as_str(),
        "--font",
        font_arg.as_str(),
        "-W",
        "120",
        "-H",
        "96",
        "-f",
        "3",
        "-q",
    ]);
    assert!(result.is_ok(), "{result:?}");

    let image = image::open(&output)
        .map(|img| img.to_rgba8())
        .unwrap_or_else(|e| unreachable!("reload png: {e}"));
    assert_eq!(image.dimensions(), (120, 96));
    let painted = image.pixels().any(|pixel| pixel.0 != BACKGROUND);
    assert_eq!(painted, draws_any_glyph);
}

#[test]
fn test_gif_with_resize_keeps_every_frame_full_size() {
    let Some(font) = system_font() else {
        return;
    };
    let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
    let output = dir.path().join("field.gif");
    let (output_arg, font_arg) = (path_arg(&output), path_arg(&font));

    let result = process(&[
        output_arg.as_str(),
        "--font",
        font_arg.as_str(),
        "-W",
        "96",
        "-H",
        "48",
        "-f",
        "6",
        "--resize",
        "3:120x72",
        "--glitch",
        "-q",
    ]);
    assert!(result.is_ok(), "{result:?}");

    let file = File::open(&output).unwrap_or_else(|e| unreachable!("open gif: {e}"));
    let frames = GifDecoder::new(BufReader::new(file))
        .and_then(|decoder| decoder.into_frames().collect_frames())
        .unwrap_or_else(|e| unreachable!("decode gif: {e}"));
    assert_eq!(frames.len(), 6);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (120, 72));
    }

    // Early frames only cover 96x48; the rest of the canvas is background
    let first = frames
        .first()
        .map(image::Frame::buffer)
        .unwrap_or_else(|| unreachable!("at least one frame"));
    let corner = first.get_pixel(110, 65).0;
    assert!(
        corner
            .iter()
            .zip(BACKGROUND)
            .all(|(&got, want)| got.abs_diff(want) <= 2),
        "{corner:?}"
    );
}
