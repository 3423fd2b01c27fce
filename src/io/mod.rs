//! I/O layer: the PNG loader and the `writers` that encode a finished canvas.
pub mod png;
pub use png::{decode_png, load_png};

pub mod writers;
