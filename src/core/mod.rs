//! Core processing building blocks: the `PixelGrid` raster, compositing
//! parameters, and the resize / composite stages. These are internal
//! primitives consumed by the high-level `api` module.
pub mod grid;
pub mod params;
pub mod processing;
