pub mod delaunay;
pub mod index;
pub mod triangulation;

pub use self::index::TriangleIndex;
pub use self::triangulation::Triangulation;
