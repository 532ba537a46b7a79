//! Input contracts checked before any geometry runs.
//!
//! Rust's type system already guarantees what the original dtype, layout
//! and ownership flags guarded; what remains are finiteness and the
//! length agreements between caller-supplied arrays and the triangulation.

use geo::Coord;

use crate::error::{Error, Result};

/// Rejects non-finite coordinates, reporting the offending point index.
pub fn points(points: &[Coord]) -> Result<()> {
    for (i, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(Error::NonFiniteCoordinate(i));
        }
    }
    Ok(())
}

/// A vertex-attached field must carry exactly one value per vertex.
pub fn vertex_field(field: &[f64], nverts: usize) -> Result<()> {
    if field.len() != nverts {
        return Err(Error::VertexFieldLength {
            expected: nverts,
            got: field.len(),
        });
    }
    Ok(())
}

/// A validity mask must carry exactly one flag per triangle.
pub fn mask(mask: &[bool], ntrig: usize) -> Result<()> {
    if mask.len() != ntrig {
        return Err(Error::MaskLength {
            expected: ntrig,
            got: mask.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_coordinate() {
        let pts = vec![
            Coord { x: 0., y: 0. },
            Coord { x: 1., y: f64::NAN },
            Coord { x: 2., y: 0. },
        ];
        assert!(matches!(points(&pts), Err(Error::NonFiniteCoordinate(1))));
    }

    #[test]
    fn rejects_infinite_coordinate() {
        let pts = vec![Coord {
            x: f64::INFINITY,
            y: 0.,
        }];
        assert!(matches!(points(&pts), Err(Error::NonFiniteCoordinate(0))));
    }

    #[test]
    fn length_checks() {
        assert!(vertex_field(&[0.; 4], 4).is_ok());
        assert!(matches!(
            vertex_field(&[0.; 3], 4),
            Err(Error::VertexFieldLength {
                expected: 4,
                got: 3
            })
        ));
        assert!(mask(&[true; 2], 2).is_ok());
        assert!(matches!(
            mask(&[true; 5], 2),
            Err(Error::MaskLength {
                expected: 2,
                got: 5
            })
        ));
    }
}
