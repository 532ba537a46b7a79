use geo::Coord;

use crate::error::Result;
use crate::geometry::{barycentric, point_in_triangle};
use crate::tin::{delaunay, TriangleIndex};
use crate::{validate, NO_TRIANGLE};

/// A Delaunay TIN over 2D survey points with a grid index for location
/// queries.
///
/// Owns its point set, triangle list and exactly one [`TriangleIndex`].
/// Vertices and triangles are fixed after construction, only the index can
/// be rebuilt. Vertex ids are positions in the input point vector.
pub struct Triangulation {
    points: Vec<Coord>,
    triangles: Vec<[usize; 3]>,
    index: TriangleIndex,
}

impl Triangulation {
    /// Triangulates `points` and builds an automatically sized index.
    pub fn new(points: Vec<Coord>) -> Result<Triangulation> {
        Triangulation::with_cell_size(points, -1.)
    }

    /// As [`Triangulation::new`] with an explicit index cell size.
    pub fn with_cell_size(points: Vec<Coord>, cell_size: f64) -> Result<Triangulation> {
        validate::points(&points)?;
        let triangles = delaunay::triangulate(&points)?;
        let index = TriangleIndex::build(&points, &triangles, cell_size);
        Ok(Triangulation {
            points,
            triangles,
            index,
        })
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Number of triangles, fixed at construction.
    pub fn ntrig(&self) -> usize {
        self.triangles.len()
    }

    /// Center of mass of every triangle.
    pub fn triangle_centers(&self) -> Vec<Coord> {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = self.triangle_coords(tri);
                Coord {
                    x: (a.x + b.x + c.x) / 3.,
                    y: (a.y + b.y + c.y) / 3.,
                }
            })
            .collect()
    }

    /// Discards the current index and rebuilds it over the same geometry.
    /// The old index is released before the replacement is allocated.
    pub fn rebuild_index(&mut self, cell_size: f64) {
        self.index = TriangleIndex::default();
        self.index = TriangleIndex::build(&self.points, &self.triangles, cell_size);
    }

    /// Compacts index storage without changing query results.
    pub fn optimize_index(&mut self) {
        self.index.optimize(&self.points, &self.triangles);
    }

    /// Diagnostic summary of the index, for inspection only.
    pub fn inspect_index(&self) -> String {
        self.index.describe()
    }

    /// Containing triangle ids for each query point, [`NO_TRIANGLE`] (-1)
    /// where no valid triangle contains the point. The sentinel is a
    /// regular answer, an outside point never aborts the batch.
    ///
    /// `mask` excludes triangles flagged `false`. A point on the shared
    /// edge of several valid triangles resolves to the lowest id.
    pub fn find_triangles(&self, queries: &[Coord], mask: Option<&[bool]>) -> Result<Vec<i32>> {
        validate::points(queries)?;
        if let Some(m) = mask {
            validate::mask(m, self.ntrig())?;
        }
        Ok(queries
            .iter()
            .map(|&p| match self.locate_one(p, mask) {
                Some(id) => id as i32,
                None => NO_TRIANGLE,
            })
            .collect())
    }

    /// Barycentric interpolation of the vertex field `z` at each query
    /// point. Points without a containing valid triangle get `nodata`.
    pub fn interpolate(
        &self,
        z: &[f64],
        queries: &[Coord],
        nodata: f64,
        mask: Option<&[bool]>,
    ) -> Result<Vec<f64>> {
        validate::vertex_field(z, self.points.len())?;
        validate::points(queries)?;
        if let Some(m) = mask {
            validate::mask(m, self.ntrig())?;
        }
        Ok(queries
            .iter()
            .map(|&p| match self.sample(z, p, mask) {
                Some((_, value)) => value,
                None => nodata,
            })
            .collect())
    }

    /// Resolves `p` to the lowest-id valid triangle containing it.
    pub(crate) fn locate_one(&self, p: Coord, mask: Option<&[bool]>) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &candidate in self.index.candidates(p) {
            let id = candidate as usize;
            debug_assert!(
                id < self.triangles.len(),
                "index references out-of-range triangle {id}"
            );
            if best.is_some_and(|b| b <= id) {
                continue;
            }
            if mask.is_some_and(|m| !m[id]) {
                continue;
            }
            let [a, b, c] = self.triangle_coords(&self.triangles[id]);
            if point_in_triangle(p, a, b, c) {
                best = Some(id);
            }
        }
        best
    }

    /// Mask-aware locate plus plane interpolation, the shared kernel of
    /// [`Triangulation::interpolate`] and the gridding methods.
    pub(crate) fn sample(
        &self,
        z: &[f64],
        p: Coord,
        mask: Option<&[bool]>,
    ) -> Option<(usize, f64)> {
        let id = self.locate_one(p, mask)?;
        let tri = self.triangles[id];
        let [a, b, c] = self.triangle_coords(&tri);
        // containment passed, so the triangle cannot be degenerate
        let (u, v, w) = barycentric(p, a, b, c)?;
        Some((id, u * z[tri[0]] + v * z[tri[1]] + w * z[tri[2]]))
    }

    pub(crate) fn triangle_coords(&self, tri: &[usize; 3]) -> [Coord; 3] {
        [
            self.points[tri[0]],
            self.points[tri[1]],
            self.points[tri[2]],
        ]
    }

    /// Largest elevation difference between the vertices of triangle `id`,
    /// the steepness measure used by the low-pass gridding.
    pub(crate) fn vertical_span(&self, z: &[f64], id: usize) -> f64 {
        let tri = self.triangles[id];
        let (za, zb, zc) = (z[tri[0]], z[tri[1]], z[tri[2]]);
        za.max(zb).max(zc) - za.min(zb).min(zc)
    }
}
