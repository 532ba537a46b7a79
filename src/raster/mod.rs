pub mod grid;
pub mod rasterize;

pub use self::grid::{GridSpec, Raster};
