#![doc = r#"
alphamerge — merge the color of one PNG with the alpha of another.

Both inputs are decoded to 16-bit RGBA, resampled to a common canvas
(2048x2048 by default) with 4x4 cubic convolution, and merged cell by cell:
red, green and blue come from the foreground, alpha from the background.
The result is written as an RGBA PNG at maximum compression.

Quick start: composite two files
--------------------------------
```rust,no_run
use std::path::Path;
use alphamerge::{composite_files, CompositeParams};

fn main() -> alphamerge::Result<()> {
    composite_files(
        Path::new("painting_Alpha.png"),
        Path::new("painting.png"),
        Path::new("out/painting.png"),
        &CompositeParams::default(),
    )
}
```

Working with grids directly
---------------------------
```rust
use alphamerge::{composite, resize_bicubic, AlphaSource, PixelGrid};

fn main() -> alphamerge::Result<()> {
    let fg = PixelGrid::from_pixel(1, 1, [65535, 0, 0, 65535])?;
    let bg = PixelGrid::from_pixel(4, 4, [65535, 65535, 65535, 32896])?;

    let fg = resize_bicubic(&fg, 8, 8)?;
    let bg = resize_bicubic(&bg, 8, 8)?;
    let canvas = composite(&fg, &bg, AlphaSource::Alpha)?;

    assert!(canvas.pixels().all(|p| p == [65535, 0, 0, 32896]));
    Ok(())
}
```

Error handling
--------------
All public functions return `alphamerge::Result<T>`; match on `alphamerge::Error`
to tell decode, I/O and dimension failures apart.

Useful modules
--------------
- [`api`] — file and buffer entry points.
- [`core`] — `PixelGrid`, `CompositeParams`, resize and composite stages.
- [`io`] — PNG loader and writer.
- [`types`] — option enums (`ResampleFilter`, `AlphaSource`, `BitDepth`, `PngCompression`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::grid::{CanvasSize, ChannelSample, PixelGrid};
pub use crate::core::params::CompositeParams;
pub use error::{Error, Result};
pub use types::{AlphaSource, BitDepth, PngCompression, ResampleFilter};

pub use crate::core::processing::composite::{composite, composite_par};
pub use crate::core::processing::pipeline::run_pipeline;
pub use crate::core::processing::resize::{resize_bicubic, resize_grid};
pub use io::png::{decode_png, load_png};
pub use io::writers::png::{encode_png, write_png};

pub use api::{composite_files, composite_to_buffer, composite_to_png_bytes, load_params};
