use std::num::NonZeroUsize;

use tracing::debug;

use crate::{Bucketer, GeoExtent, Point};

pub const DEFAULT_MAP_WIDTH: NonZeroUsize = NonZeroUsize::new(60).unwrap();
pub const DEFAULT_MAP_HEIGHT: NonZeroUsize = NonZeroUsize::new(20).unwrap();

// Just below 10 so that the densest cell renders as `9`.
const INTENSITY_SCALE: f64 = 9.99999;

/// Accumulates positions and renders them as a text heat map.
///
/// The grid is derived from the full set of points on every render since the bucket ranges
/// depend on the final extent of the stream.
#[derive(Debug, Clone)]
pub struct DensityMap {
    width: NonZeroUsize,
    height: NonZeroUsize,
    indent: String,
    extent: GeoExtent,
    points: Vec<Point>,
}

/// Number of points per cell, row 0 is the northernmost row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Default for DensityMap {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT)
    }
}

impl DensityMap {
    pub fn new(width: NonZeroUsize, height: NonZeroUsize) -> Self {
        Self {
            width,
            height,
            indent: String::new(),
            extent: GeoExtent::new(),
            points: Vec::new(),
        }
    }

    /// Prefix every rendered line with `indent`.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn add(&mut self, point: Point) {
        self.points.push(point);
        self.extent.add(point);
    }

    pub fn counts(&self) -> DensityGrid {
        let width = self.width.get();
        let height = self.height.get();
        let mut grid = DensityGrid::empty(width, height);

        let (Some(lon), Some(lat)) = (self.extent.lon.bounds(), self.extent.lat.bounds()) else {
            return grid;
        };

        let x_bucketer = Bucketer::new(lon.min, lon.max, self.width);
        let y_bucketer = Bucketer::new(lat.min, lat.max, self.height);
        debug!(%x_bucketer, %y_bucketer, "binning {} points", self.points.len());

        for point in &self.points {
            let column = x_bucketer.bucket(point.x());
            // Latitude grows upwards while rows are printed top to bottom.
            let row = height - 1 - y_bucketer.bucket(point.y());
            grid.increment(row, column);
        }

        grid
    }

    pub fn to_text(&self) -> Vec<String> {
        let grid = self.counts();
        let max_count = grid.max_count();
        let border = format!("{}+{}+", self.indent, "-".repeat(grid.width));

        let mut output = Vec::with_capacity(grid.height + 2);
        output.push(border.clone());
        for row in grid.rows() {
            let line: String = row.iter().map(|c| intensity(*c, max_count)).collect();
            output.push(format!("{}|{line}|", self.indent));
        }
        output.push(border);
        output
    }

    pub fn render(&self) -> String {
        self.to_text().join("\n")
    }
}

impl DensityGrid {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    fn increment(&mut self, row: usize, column: usize) {
        self.cells[row * self.width + column] += 1;
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.cells.get(row * self.width + column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width)
    }

    pub fn max_count(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().map(|c| *c as u64).sum()
    }
}

fn intensity(count: u32, max_count: u32) -> char {
    if count == 0 || max_count == 0 {
        return ' ';
    }
    let level = (INTENSITY_SCALE * count as f64 / max_count as f64) as u32;
    char::from_digit(level.min(9), 10).unwrap_or('9')
}
