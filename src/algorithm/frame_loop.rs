//! Host-driven frame loop
//!
//! The renderer never keeps time itself. A [`FrameScheduler`] stands in for
//! the host's display-refresh scheduler and resize notifications; the
//! [`Animator`] pulls events from it and drives the renderer until the
//! scheduler stops producing them.

use tracing::debug;

use crate::algorithm::renderer::NoiseGridRenderer;
use crate::io::error::Result;
use crate::io::surface::Surface;
use crate::spatial::Viewport;

/// Event delivered by the host between or as frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Time to draw frame `index`
    Frame {
        /// Zero-based frame index
        index: usize,
    },
    /// The viewport changed size
    Resize(Viewport),
}

/// Source of frame and resize events
pub trait FrameScheduler {
    /// Next event, or `None` once the host stops the loop
    fn next_event(&mut self) -> Option<FrameEvent>;
}

/// Viewport change applied right before a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeStep {
    /// Frame index the resize precedes
    pub frame: usize,
    /// New viewport
    pub viewport: Viewport,
}

/// Scheduler emitting a fixed number of frames with scripted resizes
#[derive(Debug, Clone)]
pub struct ScriptedScheduler {
    frames: usize,
    resizes: Vec<ResizeStep>,
    next_frame: usize,
    next_resize: usize,
}

impl ScriptedScheduler {
    /// Emit `frames` frames, inserting each resize before its frame index
    ///
    /// Resizes scheduled at or after `frames` are never delivered.
    pub fn new(frames: usize, mut resizes: Vec<ResizeStep>) -> Self {
        resizes.sort_by_key(|step| step.frame);
        Self {
            frames,
            resizes,
            next_frame: 0,
            next_resize: 0,
        }
    }
}

impl FrameScheduler for ScriptedScheduler {
    fn next_event(&mut self) -> Option<FrameEvent> {
        if self.next_frame >= self.frames {
            return None;
        }

        if let Some(step) = self
            .resizes
            .get(self.next_resize)
            .filter(|step| step.frame <= self.next_frame)
        {
            self.next_resize += 1;
            return Some(FrameEvent::Resize(step.viewport));
        }

        let index = self.next_frame;
        self.next_frame += 1;
        Some(FrameEvent::Frame { index })
    }
}

/// Drives a renderer from a scheduler onto a surface
pub struct Animator<'a, S: Surface + ?Sized> {
    renderer: &'a mut NoiseGridRenderer,
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Animator<'a, S> {
    /// Pair a renderer with the surface it paints
    ///
    /// The surface is sized to the renderer's current viewport.
    pub fn new(renderer: &'a mut NoiseGridRenderer, surface: &'a mut S) -> Self {
        surface.resize(renderer.viewport());
        Self { renderer, surface }
    }

    /// Run until the scheduler stops, calling `on_frame` after each draw
    ///
    /// Returns the number of frames drawn.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `on_frame`
    pub fn run<F>(&mut self, scheduler: &mut dyn FrameScheduler, mut on_frame: F) -> Result<usize>
    where
        F: FnMut(usize, &NoiseGridRenderer, &S) -> Result<()>,
    {
        let mut drawn = 0;
        while let Some(event) = scheduler.next_event() {
            match event {
                FrameEvent::Resize(viewport) => {
                    debug!(width = viewport.width, height = viewport.height, "resize");
                    self.renderer.resize(viewport);
                    self.surface.resize(viewport);
                }
                FrameEvent::Frame { index } => {
                    self.renderer.draw(self.surface);
                    on_frame(index, self.renderer, self.surface)?;
                    drawn += 1;
                }
            }
        }
        Ok(drawn)
    }
}
