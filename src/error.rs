use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error("non-finite coordinate in point {0}")]
    NonFiniteCoordinate(usize),
    #[error("cannot triangulate {0} point(s): need at least 3 non-collinear points")]
    DegenerateInput(usize),
    #[error("vertex field has {got} values but the triangulation has {expected} vertices")]
    VertexFieldLength { expected: usize, got: usize },
    #[error("validity mask has {got} entries but the triangulation has {expected} triangles")]
    MaskLength { expected: usize, got: usize },
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("grid cell sizes must be positive and finite")]
    BadGridCell,
}
