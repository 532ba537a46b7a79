//! Computational-geometry engine for terrain-model quality control.
//!
//! Builds a Delaunay TIN over 2D survey points, indexes it with a uniform
//! grid and answers point-location, barycentric-interpolation and gridding
//! queries against it. Elevation is an attached vertex attribute, the
//! triangulation itself is always planar.
//!
//! A [`Triangulation`] is immutable after construction except for its
//! spatial index, which can be rebuilt with another cell size. Queries take
//! `&self` and index maintenance takes `&mut self`, so the
//! single-writer/multiple-reader discipline is enforced by the borrow
//! checker. Gridding fans out across rows with rayon.

pub mod error;
pub mod geometry;
pub mod raster;
pub mod tin;
pub mod validate;

/// Sentinel triangle id for query points without a containing valid triangle.
pub const NO_TRIANGLE: i32 = -1;

pub use error::{Error, Result};
pub use raster::{GridSpec, Raster};
pub use tin::Triangulation;
