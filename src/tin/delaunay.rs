use geo::Coord;
use log::debug;

use crate::error::{Error, Result};

/// Delaunay triangulation of `points` in the projected plane.
///
/// Vertex ids in the returned triples are positions in `points`, the
/// triangulator never reorders or merges input vertices. Fails when no
/// triangle can be produced, i.e. fewer than 3 points or all points
/// collinear.
pub fn triangulate(points: &[Coord]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(Error::DegenerateInput(points.len()));
    }

    let sites: Vec<delaunator::Point> = points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();
    let triangulation = delaunator::triangulate(&sites);

    let triangles: Vec<[usize; 3]> = triangulation
        .triangles
        .chunks(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();
    if triangles.is_empty() {
        return Err(Error::DegenerateInput(points.len()));
    }
    debug!(
        "triangulated {} points into {} triangles",
        points.len(),
        triangles.len()
    );
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_points() {
        let pts = vec![Coord { x: 0., y: 0. }, Coord { x: 1., y: 0. }];
        assert!(matches!(triangulate(&pts), Err(Error::DegenerateInput(2))));
    }

    #[test]
    fn collinear_points() {
        let pts: Vec<Coord> = (0..5)
            .map(|i| Coord {
                x: i as f64,
                y: 2. * i as f64,
            })
            .collect();
        assert!(matches!(triangulate(&pts), Err(Error::DegenerateInput(5))));
    }

    #[test]
    fn unit_square_gives_two_triangles() {
        let pts = vec![
            Coord { x: 0., y: 0. },
            Coord { x: 1., y: 0. },
            Coord { x: 1., y: 1. },
            Coord { x: 0., y: 1. },
        ];
        let tris = triangulate(&pts).unwrap();
        assert_eq!(tris.len(), 2);
        for tri in &tris {
            for &v in tri {
                assert!(v < pts.len());
            }
        }
    }
}
