use std::fmt::Write as _;

use geo::{Coord, Rect};
use log::debug;

use crate::geometry::{bounding_box, triangle_bbox};

/// Average number of triangles per cell targeted by automatic sizing.
const TARGET_TRIANGLES_PER_CELL: f64 = 2.0;

/// Uniform grid over the point bounding box, each cell listing the ids of
/// every triangle whose bounding box overlaps it. Built once per
/// triangulation, queried read-only.
#[derive(Clone, Debug)]
pub struct TriangleIndex {
    cell_size: f64,
    origin: Coord,
    ncols: usize,
    nrows: usize,
    cells: Vec<Vec<u32>>,
}

impl Default for TriangleIndex {
    /// An empty index answering no candidates, the placeholder installed
    /// while an index is being rebuilt.
    fn default() -> TriangleIndex {
        TriangleIndex {
            cell_size: 0.,
            origin: Coord { x: 0., y: 0. },
            ncols: 0,
            nrows: 0,
            cells: Vec::new(),
        }
    }
}

impl TriangleIndex {
    /// Builds the index. A non-positive `cell_size` selects the size
    /// automatically from the bounding-box area and the triangle count.
    pub fn build(points: &[Coord], triangles: &[[usize; 3]], cell_size: f64) -> TriangleIndex {
        let bounds = bounding_box(points);
        let cs = if cell_size > 0. && cell_size.is_finite() {
            cell_size
        } else {
            auto_cell_size(&bounds, triangles.len())
        };

        let ncols = ((bounds.width() / cs).ceil() as usize).max(1);
        let nrows = ((bounds.height() / cs).ceil() as usize).max(1);
        let origin = bounds.min();

        let mut index = TriangleIndex {
            cell_size: cs,
            origin,
            ncols,
            nrows,
            cells: vec![Vec::new(); ncols * nrows],
        };
        for (id, tri) in triangles.iter().enumerate() {
            let bb = triangle_bbox(points[tri[0]], points[tri[1]], points[tri[2]]);
            let (c0, r0) = index.clamped_cell(bb.min());
            let (c1, r1) = index.clamped_cell(bb.max());
            for row in r0..=r1 {
                for col in c0..=c1 {
                    index.cells[row * ncols + col].push(id as u32);
                }
            }
        }
        debug!(
            "built triangle index: cell size {:.3}, {} x {} cells, {} references",
            cs,
            ncols,
            nrows,
            index.cells.iter().map(Vec::len).sum::<usize>()
        );
        index
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Triangle ids whose bounding boxes overlap the cell containing `p`.
    /// Empty when `p` falls outside the indexed extent.
    pub fn candidates(&self, p: Coord) -> &[u32] {
        match self.cell_of(p) {
            Some(cell) => &self.cells[cell],
            None => &[],
        }
    }

    /// Compacts per-cell storage and orders candidates by descending
    /// overlap between triangle bounding box and cell. Query results are
    /// unaffected: location always picks the lowest containing id, not the
    /// first listed one.
    pub fn optimize(&mut self, points: &[Coord], triangles: &[[usize; 3]]) {
        for (cell, ids) in self.cells.iter_mut().enumerate() {
            let rect = cell_rect(self.origin, self.cell_size, self.ncols, cell);
            ids.sort_by(|&a, &b| {
                let tri_a = triangles[a as usize];
                let tri_b = triangles[b as usize];
                let ov_a = overlap_area(
                    &rect,
                    &triangle_bbox(points[tri_a[0]], points[tri_a[1]], points[tri_a[2]]),
                );
                let ov_b = overlap_area(
                    &rect,
                    &triangle_bbox(points[tri_b[0]], points[tri_b[1]], points[tri_b[2]]),
                );
                ov_b.total_cmp(&ov_a).then(a.cmp(&b))
            });
            ids.shrink_to_fit();
        }
        self.cells.shrink_to_fit();
    }

    /// Human-readable summary for inspection, not meant to be parsed.
    pub fn describe(&self) -> String {
        let occupied = self.cells.iter().filter(|c| !c.is_empty()).count();
        let total: usize = self.cells.iter().map(Vec::len).sum();
        let max = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        let bytes = self.cells.capacity() * std::mem::size_of::<Vec<u32>>()
            + self
                .cells
                .iter()
                .map(|c| c.capacity() * std::mem::size_of::<u32>())
                .sum::<usize>();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "triangle index: {} x {} cells of size {:.3}",
            self.ncols, self.nrows, self.cell_size
        );
        let _ = writeln!(
            out,
            "occupied cells: {} / {}",
            occupied,
            self.ncols * self.nrows
        );
        let _ = writeln!(
            out,
            "triangle references: {} (avg {:.2} per cell, max {})",
            total,
            total as f64 / (self.ncols * self.nrows) as f64,
            max
        );
        let _ = write!(out, "approx footprint: {} KiB", bytes / 1024);
        out
    }

    /// Cell of `p`, `None` outside the indexed extent. Points exactly on
    /// the upper/right boundary map to the last row/column.
    fn cell_of(&self, p: Coord) -> Option<usize> {
        let fx = (p.x - self.origin.x) / self.cell_size;
        let fy = (p.y - self.origin.y) / self.cell_size;
        if !(0. ..=self.ncols as f64).contains(&fx) || !(0. ..=self.nrows as f64).contains(&fy) {
            return None;
        }
        let col = (fx as usize).min(self.ncols - 1);
        let row = (fy as usize).min(self.nrows - 1);
        Some(row * self.ncols + col)
    }

    /// As `cell_of` but clamped into the grid, used when inserting bboxes.
    fn clamped_cell(&self, p: Coord) -> (usize, usize) {
        let col = ((p.x - self.origin.x) / self.cell_size).max(0.) as usize;
        let row = ((p.y - self.origin.y) / self.cell_size).max(0.) as usize;
        (col.min(self.ncols - 1), row.min(self.nrows - 1))
    }
}

fn auto_cell_size(bounds: &Rect, ntrig: usize) -> f64 {
    let area = bounds.width() * bounds.height();
    let cs = (area * TARGET_TRIANGLES_PER_CELL / ntrig.max(1) as f64).sqrt();
    if cs > 0. && cs.is_finite() {
        cs
    } else {
        1.0
    }
}

fn cell_rect(origin: Coord, cell_size: f64, ncols: usize, cell: usize) -> Rect {
    let col = cell % ncols;
    let row = cell / ncols;
    let min = Coord {
        x: origin.x + col as f64 * cell_size,
        y: origin.y + row as f64 * cell_size,
    };
    Rect::new(
        min,
        Coord {
            x: min.x + cell_size,
            y: min.y + cell_size,
        },
    )
}

fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    let dx = (a.max().x.min(b.max().x) - a.min().x.max(b.min().x)).max(0.);
    let dy = (a.max().y.min(b.max().y) - a.min().y.max(b.min().y)).max(0.);
    dx * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tin::delaunay;

    fn square() -> (Vec<Coord>, Vec<[usize; 3]>) {
        let pts = vec![
            Coord { x: 0., y: 0. },
            Coord { x: 10., y: 0. },
            Coord { x: 10., y: 10. },
            Coord { x: 0., y: 10. },
        ];
        let tris = delaunay::triangulate(&pts).unwrap();
        (pts, tris)
    }

    #[test]
    fn auto_sizing_is_positive() {
        let (pts, tris) = square();
        let index = TriangleIndex::build(&pts, &tris, -1.);
        assert!(index.cell_size() > 0.);
    }

    #[test]
    fn every_triangle_discoverable_from_its_cells() {
        let (pts, tris) = square();
        let index = TriangleIndex::build(&pts, &tris, 2.5);
        // centroids must see their own triangle among the candidates
        for (id, tri) in tris.iter().enumerate() {
            let centroid = Coord {
                x: (pts[tri[0]].x + pts[tri[1]].x + pts[tri[2]].x) / 3.,
                y: (pts[tri[0]].y + pts[tri[1]].y + pts[tri[2]].y) / 3.,
            };
            assert!(index.candidates(centroid).contains(&(id as u32)));
        }
    }

    #[test]
    fn boundary_points_are_indexed() {
        let (pts, tris) = square();
        let index = TriangleIndex::build(&pts, &tris, 2.5);
        // corners of the extent, including the upper right one
        for p in &pts {
            assert!(!index.candidates(*p).is_empty());
        }
        assert!(index.candidates(Coord { x: 10.1, y: 5. }).is_empty());
    }

    #[test]
    fn optimize_preserves_candidate_sets() {
        let (pts, tris) = square();
        let mut index = TriangleIndex::build(&pts, &tris, 2.5);
        let probe = Coord { x: 5., y: 5. };
        let mut before: Vec<u32> = index.candidates(probe).to_vec();
        index.optimize(&pts, &tris);
        let mut after: Vec<u32> = index.candidates(probe).to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn describe_mentions_cells() {
        let (pts, tris) = square();
        let index = TriangleIndex::build(&pts, &tris, -1.);
        let info = index.describe();
        assert!(info.contains("cells"));
        assert!(info.contains("footprint"));
    }
}
