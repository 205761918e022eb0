use crate::{Color, MstError};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// A read only, row major view over an image's pixels.
#[derive(Debug, Clone)]
pub struct PixelGrid<'a> {
    pixels: Cow<'a, [Color]>,
    height: usize,
    width: usize,
}

impl<'a> PixelGrid<'a> {
    /// Wraps a flat, row major pixel buffer.
    ///
    /// # Parameters
    /// * `pixels` - the pixel buffer, `height * width` long.
    /// * `height` - number of rows.
    /// * `width` - number of pixels per row.
    ///
    /// # Returns
    /// * The grid, or `MstError::GridSizeMismatch` if the buffer length does not match the
    ///   dimensions. Zero height or width is allowed and describes an empty image.
    pub fn new(pixels: &'a [Color], height: usize, width: usize) -> Result<Self, MstError> {
        let expected = height.checked_mul(width).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(MstError::GridSizeMismatch {
                height,
                width,
                expected,
                found: pixels.len(),
            });
        }
        Ok(PixelGrid { pixels: Cow::Borrowed(pixels), height, width })
    }

    /// Builds a grid from a collection of rows, which must all have the same width.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<PixelGrid<'static>, MstError> {
        let width = rows.first().map_or(0, Vec::len);
        for (row, pixels) in rows.iter().enumerate() {
            if pixels.len() != width {
                return Err(MstError::RaggedGrid { row, expected: width, found: pixels.len() });
            }
        }
        let pixels: Vec<Color> = rows.iter().flatten().copied().collect();
        Ok(PixelGrid { pixels: Cow::Owned(pixels), height: rows.len(), width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at (`row`, `col`), if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }

    /// Iterates over every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }
}

/// The deduplicated colors of an image. Each color is given a stable vertex id, equal to its
/// position in `colors()`, in the order it is first met while scanning the grid row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistinctColors {
    colors: Vec<Color>,
    occurrences: Vec<usize>,
    ids: HashMap<Color, usize>,
}

impl DistinctColors {
    /// Number of distinct colors, i.e. the number of vertices in the color graph.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The vertex set, indexed by vertex id.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The color with this vertex id, if there is one.
    pub fn color(&self, id: usize) -> Option<Color> {
        self.colors.get(id).copied()
    }

    pub fn id_of(&self, color: &Color) -> Option<usize> {
        self.ids.get(color).copied()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.ids.contains_key(color)
    }

    /// How many pixels of the source grid carry the color with this vertex id.
    pub fn occurrences(&self, id: usize) -> Option<usize> {
        self.occurrences.get(id).copied()
    }

    fn insert(&mut self, color: Color) {
        match self.ids.get(&color) {
            Some(&id) => self.occurrences[id] += 1,
            None => {
                self.ids.insert(color, self.colors.len());
                self.colors.push(color);
                self.occurrences.push(1);
            }
        }
    }
}

impl FromIterator<Color> for DistinctColors {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut distinct = DistinctColors::default();
        iter.into_iter().for_each(|color| distinct.insert(color));
        distinct
    }
}

/// Scans a pixel grid and collects its distinct colors. Membership is checked with a hash
/// lookup, so the scan is linear in the number of pixels.
///
/// # Parameters
/// * `grid` - the image to scan. It is not modified.
///
/// # Returns
/// * The distinct colors. `len()` gives the vertex count. An empty grid gives an empty set.
///
/// # Examples
/// ```
///use color_mst::{extract_distinct_colors, Color, PixelGrid};
///
///let pixels = [Color::new(1, 2, 3), Color::new(1, 2, 3), Color::new(4, 5, 6)];
///let grid = PixelGrid::new(&pixels, 1, 3).unwrap();
///let distinct = extract_distinct_colors(&grid);
///assert_eq!(2, distinct.len());
/// ```
pub fn extract_distinct_colors(grid: &PixelGrid) -> DistinctColors {
    // Worst case every pixel is distinct, but cap the upfront allocation for large images
    let capacity = grid.pixels.len().min(1 << 16);
    let mut distinct = DistinctColors {
        colors: Vec::with_capacity(capacity),
        occurrences: Vec::with_capacity(capacity),
        ids: HashMap::with_capacity(capacity),
    };
    grid.pixels().for_each(|color| distinct.insert(*color));
    debug!(
        height = grid.height,
        width = grid.width,
        n_distinct = distinct.len(),
        "extracted distinct colors"
    );
    distinct
}
