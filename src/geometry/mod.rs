pub mod bounds;
pub mod predicates;

pub use self::bounds::{bounding_box, diagonal, triangle_bbox};
pub use self::predicates::{barycentric, point_in_triangle, BARY_EPS};
