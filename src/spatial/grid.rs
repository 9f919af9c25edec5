//! Glyph grid sized from the viewport
//!
//! The grid is a dense `cols × rows` array of cells indexed `[x, y]`. It is
//! never resized in place: a viewport change builds a fresh grid and the old
//! cell state is dropped.

use ndarray::Array2;
use rand::Rng;

use crate::io::configuration::INITIAL_CHANGE_TIME_RANGE;
use crate::math::probability::uniform;
use crate::spatial::glyphs::GlyphCategory;

/// Pixel dimensions of the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given pixel size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of whole glyph cells that fit in each direction (cols, rows)
    pub const fn cell_dimensions(self, glyph_pixel_size: u32) -> (usize, usize) {
        if glyph_pixel_size == 0 {
            return (0, 0);
        }
        (
            (self.width / glyph_pixel_size) as usize,
            (self.height / glyph_pixel_size) as usize,
        )
    }
}

/// State of one grid position
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Character currently displayed
    pub glyph: char,
    /// Time of the last glyph change (informational)
    pub change_time: f64,
    /// Horizontal glitch displacement in pixels
    pub glitch_offset: f64,
    /// Glitch alpha perturbation
    pub flicker_intensity: f64,
    /// Glitch change-rate multiplier term
    pub corruption_level: f64,
}

impl Cell {
    /// A fresh cell showing `glyph`, with no glitch state
    pub const fn new(glyph: char, change_time: f64) -> Self {
        Self {
            glyph,
            change_time,
            glitch_offset: 0.0,
            flicker_intensity: 0.0,
            corruption_level: 0.0,
        }
    }
}

/// Dense grid of glyph cells
#[derive(Debug, Clone)]
pub struct GlyphGrid {
    cells: Array2<Cell>,
    glyph_pixel_size: u32,
}

impl GlyphGrid {
    /// Build a grid covering `viewport` with freshly seeded cells
    ///
    /// Each cell starts with a random glyph from the category its diagonal
    /// stripe selects, and a random informational change time.
    pub fn build<R: Rng + ?Sized>(viewport: Viewport, glyph_pixel_size: u32, rng: &mut R) -> Self {
        let (cols, rows) = viewport.cell_dimensions(glyph_pixel_size);
        let cells = Array2::from_shape_fn((cols, rows), |(x, y)| {
            let glyph = GlyphCategory::initial_for_position(x, y).pick(rng);
            Cell::new(glyph, uniform(rng, 0.0, INITIAL_CHANGE_TIME_RANGE))
        });

        Self {
            cells,
            glyph_pixel_size,
        }
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.dim().1
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pixel size of one cell
    pub const fn glyph_pixel_size(&self) -> u32 {
        self.glyph_pixel_size
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get([x, y])
    }

    /// Mutable cell at column `x`, row `y`
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut([x, y])
    }

    /// Iterate over `((x, y), cell)` in column-major order
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells.indexed_iter()
    }

    /// Glyphs laid out row by row, one string per row
    pub fn text_rows(&self) -> Vec<String> {
        (0..self.rows())
            .map(|y| {
                (0..self.cols())
                    .filter_map(|x| self.get(x, y).map(|cell| cell.glyph))
                    .collect()
            })
            .collect()
    }
}
