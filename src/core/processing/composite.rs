use ndarray::{Array3, ArrayView1, ArrayViewMut1, Axis, Zip};
use tracing::debug;

use crate::core::grid::{CHANNELS, PixelGrid};
use crate::error::{Error, Result};
use crate::types::AlphaSource;

/// Rec.601 luma of a 16-bit RGB triple, rounded.
pub fn luma(r: u16, g: u16, b: u16) -> u16 {
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15)) >> 16) as u16
}

/// Alpha contributed by one background pixel.
pub fn alpha_of(bg: ArrayView1<'_, u16>, source: AlphaSource) -> u16 {
    match source {
        AlphaSource::Alpha => bg[3],
        AlphaSource::Luma => luma(bg[0], bg[1], bg[2]),
    }
}

fn check_dimensions(fg: &PixelGrid, bg: &PixelGrid) -> Result<()> {
    if fg.dimensions() != bg.dimensions() {
        return Err(Error::DimensionMismatch {
            foreground: fg.dimensions(),
            background: bg.dimensions(),
        });
    }
    Ok(())
}

fn merge_pixel(
    mut out: ArrayViewMut1<'_, u16>,
    fg: ArrayView1<'_, u16>,
    bg: ArrayView1<'_, u16>,
    source: AlphaSource,
) {
    out[0] = fg[0];
    out[1] = fg[1];
    out[2] = fg[2];
    out[3] = alpha_of(bg, source);
}

/// Build a new canvas with `fg`'s color channels and `bg`'s alpha.
///
/// Both grids must have identical dimensions. Cells are visited in row-major
/// order on the calling thread.
pub fn composite(fg: &PixelGrid, bg: &PixelGrid, source: AlphaSource) -> Result<PixelGrid> {
    check_dimensions(fg, bg)?;
    let (width, height) = fg.dimensions();
    debug!("Compositing {}x{} canvas, alpha from {}", width, height, source);

    let mut canvas = Array3::<u16>::zeros((height as usize, width as usize, CHANNELS));
    Zip::from(canvas.lanes_mut(Axis(2)))
        .and(fg.view().lanes(Axis(2)))
        .and(bg.view().lanes(Axis(2)))
        .for_each(|out, f, b| merge_pixel(out, f, b, source));

    Ok(PixelGrid::from_array(canvas))
}

/// Same result as [`composite`], with cells split across the rayon pool.
/// Every output cell has exactly one writer and only the inputs are read.
pub fn composite_par(fg: &PixelGrid, bg: &PixelGrid, source: AlphaSource) -> Result<PixelGrid> {
    check_dimensions(fg, bg)?;
    let (width, height) = fg.dimensions();
    debug!(
        "Compositing {}x{} canvas in parallel, alpha from {}",
        width, height, source
    );

    let mut canvas = Array3::<u16>::zeros((height as usize, width as usize, CHANNELS));
    Zip::from(canvas.lanes_mut(Axis(2)))
        .and(fg.view().lanes(Axis(2)))
        .and(bg.view().lanes(Axis(2)))
        .par_for_each(|out, f, b| merge_pixel(out, f, b, source));

    Ok(PixelGrid::from_array(canvas))
}
