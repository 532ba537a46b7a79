//! Full-grid interpolation over a TIN.
//!
//! Every output cell is sampled independently at its center, so the work
//! is fanned out across rows with rayon. Cells without a containing
//! triangle keep the nodata value, they never fail the batch.

use rayon::prelude::*;

use crate::error::Result;
use crate::geometry::{diagonal, triangle_bbox};
use crate::raster::{GridSpec, Raster};
use crate::tin::Triangulation;
use crate::validate;

impl Triangulation {
    /// Interpolates the vertex field `z` over a full grid.
    pub fn make_grid(&self, z: &[f64], spec: &GridSpec, nodata: f64) -> Result<Raster> {
        spec.check()?;
        validate::vertex_field(z, self.points().len())?;

        let mut grid = Raster::filled(spec, nodata);
        grid.field
            .par_chunks_mut(spec.ncols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    if let Some((_, value)) = self.sample(z, spec.cell_center(row, col), None) {
                        *cell = value;
                    }
                }
            });
        Ok(grid)
    }

    /// As [`Triangulation::make_grid`], additionally returning a companion
    /// grid with the bounding-box diagonal of the triangle each cell was
    /// interpolated from (0 where nodata). Large diagonals flag cells far
    /// from any supporting survey point.
    pub fn make_grid_with_sizes(
        &self,
        z: &[f64],
        spec: &GridSpec,
        nodata: f64,
    ) -> Result<(Raster, Raster)> {
        spec.check()?;
        validate::vertex_field(z, self.points().len())?;

        let mut grid = Raster::filled(spec, nodata);
        let mut sizes = Raster::filled(spec, 0.);
        grid.field
            .par_chunks_mut(spec.ncols)
            .zip(sizes.field.par_chunks_mut(spec.ncols))
            .enumerate()
            .for_each(|(row, (out, diag))| {
                for col in 0..spec.ncols {
                    if let Some((id, value)) = self.sample(z, spec.cell_center(row, col), None) {
                        let [a, b, c] = self.triangle_coords(&self.triangles()[id]);
                        out[col] = value;
                        diag[col] = diagonal(&triangle_bbox(a, b, c));
                    }
                }
            });
        Ok((grid, sizes))
    }

    /// Gridding that refuses to smooth across steep triangles: a cell
    /// whose triangle spans more than `cutoff` vertically stays nodata.
    /// Keeps real surface discontinuities (building walls, dike edges) out
    /// of the interpolated grid.
    pub fn make_grid_low(
        &self,
        z: &[f64],
        spec: &GridSpec,
        nodata: f64,
        cutoff: f64,
    ) -> Result<Raster> {
        spec.check()?;
        validate::vertex_field(z, self.points().len())?;

        let mut grid = Raster::filled(spec, nodata);
        grid.field
            .par_chunks_mut(spec.ncols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    if let Some((id, value)) = self.sample(z, spec.cell_center(row, col), None) {
                        if self.vertical_span(z, id) <= cutoff {
                            *cell = value;
                        }
                    }
                }
            });
        Ok(grid)
    }
}
