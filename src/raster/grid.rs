use std::ops::{Index, IndexMut};

use geo::Coord;

use crate::error::{Error, Result};

/// GDAL-style georeferencing of an output grid: left edge, upper edge and
/// positive cell sizes. Every cell is sampled at its center.
#[derive(Clone, Copy, Debug)]
pub struct GridSpec {
    pub ncols: usize,
    pub nrows: usize,
    /// x of the left edge of the leftmost column.
    pub xl: f64,
    /// horizontal cell size.
    pub cx: f64,
    /// y of the upper edge of the topmost row.
    pub yu: f64,
    /// vertical cell size, positive.
    pub cy: f64,
}

impl GridSpec {
    /// The sampling point of a cell, its center.
    pub fn cell_center(&self, row: usize, col: usize) -> Coord {
        Coord {
            x: self.xl + (col as f64 + 0.5) * self.cx,
            y: self.yu - (row as f64 + 0.5) * self.cy,
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.ncols == 0 || self.nrows == 0 {
            return Err(Error::EmptyGrid);
        }
        if !(self.cx > 0. && self.cx.is_finite() && self.cy > 0. && self.cy.is_finite()) {
            return Err(Error::BadGridCell);
        }
        Ok(())
    }
}

/// A row-major raster with the georeferencing it was sampled with.
#[derive(Clone, Debug)]
pub struct Raster {
    pub field: Vec<f64>,
    pub ncols: usize,
    pub nrows: usize,
    pub tl_coord: Coord,
    pub cell_x: f64,
    pub cell_y: f64,
}

impl Raster {
    /// A raster matching `spec`, every cell set to `value`.
    pub fn filled(spec: &GridSpec, value: f64) -> Raster {
        Raster {
            field: vec![value; spec.ncols * spec.nrows],
            ncols: spec.ncols,
            nrows: spec.nrows,
            tl_coord: Coord {
                x: spec.xl,
                y: spec.yu,
            },
            cell_x: spec.cx,
            cell_y: spec.cy,
        }
    }

    /// Center coordinate of a cell.
    #[inline]
    pub fn index2coord(&self, row: usize, col: usize) -> Coord {
        Coord {
            x: self.tl_coord.x + (col as f64 + 0.5) * self.cell_x,
            y: self.tl_coord.y - (row as f64 + 0.5) * self.cell_y,
        }
    }
}

impl Index<(usize, usize)> for Raster {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.field[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Raster {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.field[row * self.ncols + col]
    }
}
