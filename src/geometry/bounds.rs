use geo::{Coord, Rect};

/// Axis-aligned bounding box of a non-empty point slice.
pub fn bounding_box(points: &[Coord]) -> Rect {
    debug_assert!(!points.is_empty());
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::new(min, max)
}

/// Bounding box of a single triangle.
pub fn triangle_bbox(a: Coord, b: Coord, c: Coord) -> Rect {
    Rect::new(
        Coord {
            x: a.x.min(b.x).min(c.x),
            y: a.y.min(b.y).min(c.y),
        },
        Coord {
            x: a.x.max(b.x).max(c.x),
            y: a.y.max(b.y).max(c.y),
        },
    )
}

/// Diagonal length of a bounding box, the triangle-size measure reported
/// in the companion grids.
pub fn diagonal(rect: &Rect) -> f64 {
    rect.width().hypot(rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_of_scattered_points() {
        let pts = vec![
            Coord { x: 2., y: -1. },
            Coord { x: -3., y: 4. },
            Coord { x: 0., y: 0. },
        ];
        let bb = bounding_box(&pts);
        assert_eq!(bb.min(), Coord { x: -3., y: -1. });
        assert_eq!(bb.max(), Coord { x: 2., y: 4. });
    }

    #[test]
    fn diagonal_is_hypotenuse() {
        let bb = triangle_bbox(
            Coord { x: 0., y: 0. },
            Coord { x: 3., y: 0. },
            Coord { x: 3., y: 4. },
        );
        assert!((diagonal(&bb) - 5.).abs() < 1e-12);
    }
}
