use tracing::info;

use crate::core::grid::PixelGrid;
use crate::core::params::CompositeParams;
use crate::core::processing::composite::{composite, composite_par};
use crate::core::processing::resize::resize_grid;
use crate::error::Result;

/// Resize both inputs to the configured canvas, then merge foreground color
/// with background alpha.
pub fn run_pipeline(
    foreground: &PixelGrid,
    background: &PixelGrid,
    params: &CompositeParams,
) -> Result<PixelGrid> {
    params.canvas.validate()?;

    let bg = resize_grid(background, params.canvas, params.filter)?;
    let fg = resize_grid(foreground, params.canvas, params.filter)?;

    let canvas = if params.parallel {
        composite_par(&fg, &bg, params.alpha_source)?
    } else {
        composite(&fg, &bg, params.alpha_source)?
    };

    info!(
        "Composited canvas {} (filter={}, alpha={})",
        params.canvas, params.filter, params.alpha_source
    );
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::CanvasSize;
    use crate::error::Error;
    use crate::types::{AlphaSource, ResampleFilter};

    fn small(canvas: CanvasSize) -> CompositeParams {
        CompositeParams {
            canvas,
            ..CompositeParams::default()
        }
    }

    #[test]
    fn red_over_half_transparent_white() {
        let fg = PixelGrid::from_pixel(1, 1, [65535, 0, 0, 65535]).unwrap();
        let bg = PixelGrid::from_pixel(3, 5, [65535, 65535, 65535, 32896]).unwrap();
        let out = run_pipeline(&fg, &bg, &small(CanvasSize::new(16, 16))).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        assert!(out.pixels().all(|p| p == [65535, 0, 0, 32896]));
    }

    #[test]
    fn inputs_of_any_size_meet_on_the_canvas() {
        let fg = PixelGrid::from_pixel(7, 3, [100, 200, 300, 400]).unwrap();
        let bg = PixelGrid::from_pixel(2, 9, [9, 9, 9, 1234]).unwrap();
        for filter in [ResampleFilter::Bicubic, ResampleFilter::Lanczos3] {
            let params = CompositeParams {
                canvas: CanvasSize::new(5, 4),
                filter,
                ..CompositeParams::default()
            };
            let out = run_pipeline(&fg, &bg, &params).unwrap();
            assert_eq!(out.dimensions(), (5, 4));
        }
    }

    #[test]
    fn parallel_pipeline_matches_sequential() {
        let fg = PixelGrid::from_raw(2, 2, (0..16).map(|v| v * 4000).collect()).unwrap();
        let bg = PixelGrid::from_raw(2, 2, (0..16).rev().map(|v| v * 4000).collect()).unwrap();
        let mut params = small(CanvasSize::new(9, 9));
        params.alpha_source = AlphaSource::Luma;
        let seq = run_pipeline(&fg, &bg, &params).unwrap();
        params.parallel = true;
        let par = run_pipeline(&fg, &bg, &params).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let grid = PixelGrid::from_pixel(1, 1, [0, 0, 0, 0]).unwrap();
        assert!(matches!(
            run_pipeline(&grid, &grid, &small(CanvasSize::new(0, 16))),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
