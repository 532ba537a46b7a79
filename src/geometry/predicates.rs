use geo::Coord;

/// Tolerance on barycentric coordinates for the containment test.
/// Points on an edge or vertex of a triangle count as inside.
pub const BARY_EPS: f64 = 1e-9;

/// Barycentric coordinates of `p` with respect to triangle `(a, b, c)`.
/// Returns `None` for degenerate (zero-area) triangles.
pub fn barycentric(p: Coord, a: Coord, b: Coord, c: Coord) -> Option<(f64, f64, f64)> {
    let det = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if det.abs() < f64::EPSILON {
        return None;
    }
    let u = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / det;
    let v = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / det;
    let w = 1.0 - u - v;
    Some((u, v, w))
}

/// Containment test via barycentric signs, independent of triangle winding.
pub fn point_in_triangle(p: Coord, a: Coord, b: Coord, c: Coord) -> bool {
    matches!(
        barycentric(p, a, b, c),
        Some((u, v, w)) if u >= -BARY_EPS && v >= -BARY_EPS && w >= -BARY_EPS
    )
}
