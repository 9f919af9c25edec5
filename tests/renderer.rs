//! Validates grid construction, glyph membership, glitch isolation and resize behaviour of the renderer

use glyphfield::algorithm::device::{DeviceClass, SpeedProfile};
use glyphfield::algorithm::frame_loop::ResizeStep;
use glyphfield::io::surface::DrawCommand;
use glyphfield::spatial::glyphs::is_known_glyph;
use glyphfield::{
    Animator, NoiseGridRenderer, RecordingSurface, RendererConfig, ScriptedScheduler, Surface,
    Viewport,
};

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

fn run_frames(renderer: &mut NoiseGridRenderer, frames: usize) -> Vec<Vec<DrawCommand>> {
    let mut surface = RecordingSurface::new();
    let mut recorded = Vec::with_capacity(frames);
    let mut scheduler = ScriptedScheduler::new(frames, Vec::new());
    let drawn = Animator::new(renderer, &mut surface).run(&mut scheduler, |_, _, surface| {
        recorded.push(surface.commands().to_vec());
        Ok(())
    });
    assert_eq!(drawn.ok(), Some(frames));
    recorded
}

#[test]
fn test_desktop_grid_dimensions() {
    let renderer = NoiseGridRenderer::new(Viewport::new(1280, 720), RendererConfig::default());
    let grid = renderer.grid();
    assert_eq!(grid.cols(), 106);
    assert_eq!(grid.rows(), 60);
    assert_eq!(grid.len(), 6360);
    assert_eq!(renderer.device_class(), DeviceClass::Desktop);
}

#[test]
fn test_first_frame_draws_every_cell() {
    let mut renderer = NoiseGridRenderer::new(Viewport::new(1280, 720), RendererConfig::default());
    let frames = run_frames(&mut renderer, 1);
    let first = frames.first().map_or(0, Vec::len);
    assert_eq!(first, 6360);
}

#[test]
fn test_glyphs_stay_in_alphabets() {
    let mut renderer = NoiseGridRenderer::new(Viewport::new(480, 240), RendererConfig::default());
    let frames = run_frames(&mut renderer, 200);
    for commands in &frames {
        assert!(commands.iter().all(|command| is_known_glyph(command.glyph)));
    }
    assert!(
        renderer
            .grid()
            .indexed_cells()
            .all(|(_, cell)| is_known_glyph(cell.glyph))
    );
}

#[test]
fn test_same_seed_renders_identically() {
    let mut first = NoiseGridRenderer::new(Viewport::new(360, 240), RendererConfig::default());
    let mut second = NoiseGridRenderer::new(Viewport::new(360, 240), RendererConfig::default());
    assert_eq!(run_frames(&mut first, 25), run_frames(&mut second, 25));
}

#[test]
fn test_disabled_glitches_do_not_change_output() {
    let viewport = Viewport::new(360, 240);
    let mut with_zones = NoiseGridRenderer::new(viewport, RendererConfig::default());
    let mut without_zones = NoiseGridRenderer::new(
        viewport,
        RendererConfig {
            glitch_zones: false,
            ..RendererConfig::default()
        },
    );
    assert!(with_zones.glitch_field().is_some());
    assert!(without_zones.glitch_field().is_none());

    assert_eq!(
        run_frames(&mut with_zones, 60),
        run_frames(&mut without_zones, 60)
    );
}

#[test]
fn test_enabled_glitches_shift_glyphs() {
    let viewport = Viewport::new(360, 240);
    let mut renderer = NoiseGridRenderer::new(
        viewport,
        RendererConfig {
            glitch_enabled: true,
            ..RendererConfig::default()
        },
    );
    if let Some(field) = renderer.glitch_field_mut() {
        for zone in field.zones_mut() {
            zone.x = 10;
            zone.y = 10;
            zone.radius = 8;
            zone.intensity = 1.0;
            zone.life = 1000.0;
            zone.kind = glyphfield::spatial::glitch::GlitchKind::SymbolShift;
        }
    }

    let frames = run_frames(&mut renderer, 5);
    let shifted = frames
        .iter()
        .flatten()
        .filter(|command| (command.x / 12.0).fract().abs() > 1e-9)
        .count();
    assert!(shifted > 0);
}

#[test]
fn test_resize_rebuilds_grid() {
    let mut renderer = NoiseGridRenderer::new(Viewport::new(1280, 720), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    let mut scheduler = ScriptedScheduler::new(
        4,
        vec![ResizeStep {
            frame: 2,
            viewport: Viewport::new(800, 600),
        }],
    );
    let mut counts = Vec::new();
    let drawn = Animator::new(&mut renderer, &mut surface).run(&mut scheduler, |_, _, surface| {
        counts.push(surface.commands().len());
        Ok(())
    });

    assert_eq!(drawn.ok(), Some(4));
    assert_eq!(counts, vec![6360, 6360, 66 * 50, 66 * 50]);
    assert_eq!(renderer.grid().cols(), 66);
    assert_eq!(renderer.grid().rows(), 50);
    assert_eq!(surface.viewport(), Some(Viewport::new(800, 600)));
}

#[test]
fn test_tiny_viewport_draws_nothing() {
    let mut renderer = NoiseGridRenderer::new(Viewport::new(11, 720), RendererConfig::default());
    assert!(renderer.grid().is_empty());
    let frames = run_frames(&mut renderer, 3);
    assert!(frames.iter().all(Vec::is_empty));
    assert_eq!(renderer.frames(), 3);
}

#[test]
fn test_mobile_user_agent_uses_mobile_speed() {
    let renderer = NoiseGridRenderer::new(
        Viewport::new(1280, 720),
        RendererConfig {
            user_agent: Some(IPHONE_UA.to_string()),
            ..RendererConfig::default()
        },
    );
    assert_eq!(renderer.device_class(), DeviceClass::Mobile);
    assert_eq!(renderer.speed(), SpeedProfile::for_class(DeviceClass::Mobile));
}

#[test]
fn test_surface_cleared_each_frame() {
    let mut renderer = NoiseGridRenderer::new(Viewport::new(120, 120), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    for _ in 0..7 {
        renderer.draw(&mut surface);
        assert_eq!(surface.commands().len(), 100);
    }
    assert_eq!(surface.clears(), 7);
    surface.resize(Viewport::new(24, 24));
    assert!(surface.commands().is_empty());
}
