use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::Array3;
use tracing::{debug, info};

use crate::core::grid::{CHANNELS, CanvasSize, MAX_CHANNEL, PixelGrid};
use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Keys' cubic convolution parameter.
const CUBIC_A: f64 = -0.5;

/// Cubic convolution kernel with `a = -0.5`. Support is `(-2, 2)`.
pub fn cubic_weight(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        ((CUBIC_A * x - 5.0 * CUBIC_A) * x + 8.0 * CUBIC_A) * x - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Four source taps and their weights for one destination coordinate on one axis.
#[derive(Debug, Clone, Copy)]
struct Taps {
    index: [usize; 4],
    weight: [f64; 4],
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Taps> {
    let scale = src_len as f64 / dst_len as f64;
    let last = src_len as isize - 1;
    (0..dst_len)
        .map(|d| {
            let center = (d as f64 + 0.5) * scale - 0.5;
            let base = center.floor();
            let frac = center - base;
            let base = base as isize;
            let mut index = [0usize; 4];
            let mut weight = [0f64; 4];
            for k in 0..4 {
                let offset = k as isize - 1;
                // Replicate the border pixel for taps that fall outside the source.
                index[k] = (base + offset).clamp(0, last) as usize;
                weight[k] = cubic_weight(frac - offset as f64);
            }
            Taps { index, weight }
        })
        .collect()
}

/// Resize a grid with 4x4 cubic convolution.
///
/// Each destination pixel center is mapped back to the source through the
/// per-axis ratio `src / dst`, and the 16 surrounding source pixels are
/// weighted per channel. Results are rounded and clamped to `0..=65535`.
pub fn resize_bicubic(src: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid> {
    CanvasSize::new(width, height).validate()?;

    let (src_w, src_h) = (src.width() as usize, src.height() as usize);
    let (dst_w, dst_h) = (width as usize, height as usize);
    let x_taps = axis_taps(src_w, dst_w);
    let y_taps = axis_taps(src_h, dst_h);
    let view = src.view();

    let mut out = Array3::<u16>::zeros((dst_h, dst_w, CHANNELS));
    for (dy, ty) in y_taps.iter().enumerate() {
        for (dx, tx) in x_taps.iter().enumerate() {
            let mut acc = [0f64; CHANNELS];
            for (&sy, &wy) in ty.index.iter().zip(&ty.weight) {
                for (&sx, &wx) in tx.index.iter().zip(&tx.weight) {
                    let w = wx * wy;
                    for (c, slot) in acc.iter_mut().enumerate() {
                        *slot += w * view[[sy, sx, c]] as f64;
                    }
                }
            }
            for (c, value) in acc.into_iter().enumerate() {
                out[[dy, dx, c]] = value.round().clamp(0.0, MAX_CHANNEL as f64) as u16;
            }
        }
    }

    Ok(PixelGrid::from_array(out))
}

/// Resize through `fast_image_resize` with a Lanczos3 convolution. Channels are
/// treated independently (no alpha premultiplication).
pub fn resize_lanczos3(src: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid> {
    CanvasSize::new(width, height).validate()?;

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    // fast_image_resize wants native-endian u16 bytes
    let mut src_bytes = Vec::with_capacity(src.width() as usize * src.height() as usize * CHANNELS * 2);
    for v in src.samples() {
        src_bytes.extend_from_slice(&v.to_ne_bytes());
    }

    let src_image = Image::from_vec_u8(src.width(), src.height(), src_bytes, PixelType::U16x4)
        .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(width, height, PixelType::U16x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    let dst_bytes = dst_image.into_vec();
    let mut out = Vec::with_capacity(dst_bytes.len() / 2);
    for chunk in dst_bytes.chunks_exact(2) {
        out.push(u16::from_ne_bytes([chunk[0], chunk[1]]));
    }
    PixelGrid::from_raw(width, height, out)
}

/// Bring `src` to exactly `target` with the chosen filter.
pub fn resize_grid(src: &PixelGrid, target: CanvasSize, filter: ResampleFilter) -> Result<PixelGrid> {
    target.validate()?;

    info!(
        "Resizing {}x{} -> {} ({})",
        src.width(),
        src.height(),
        target,
        filter
    );

    match filter {
        ResampleFilter::Bicubic => resize_bicubic(src, target.width, target.height),
        ResampleFilter::Lanczos3 => {
            if src.size() == target {
                debug!("Source already at {}, skipping Lanczos3 pass", target);
                return Ok(src.clone());
            }
            resize_lanczos3(src, target.width, target.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut raw = Vec::with_capacity((width * height) as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                raw.push((x * 65535 / width.max(2).saturating_sub(1).max(1)).min(65535) as u16);
                raw.push((y * 4099) as u16);
                raw.push(((x * 31 + y * 17) * 257 % 65536) as u16);
                raw.push(if (x + y) % 2 == 0 { 65535 } else { 0 });
            }
        }
        PixelGrid::from_raw(width, height, raw).unwrap()
    }

    #[test_case(0.0, 1.0)]
    #[test_case(1.0, 0.0)]
    #[test_case(-1.0, 0.0)]
    #[test_case(2.0, 0.0)]
    #[test_case(0.5, 0.5625)]
    #[test_case(1.5, -0.0625)]
    #[test_case(-1.5, -0.0625)]
    fn kernel_values(x: f64, expected: f64) {
        assert!((cubic_weight(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn kernel_weights_sum_to_one() {
        for i in 0..=20 {
            let frac = i as f64 / 20.0;
            let sum: f64 = (-1..=2).map(|k| cubic_weight(frac - k as f64)).sum();
            assert!((sum - 1.0).abs() < 1e-12, "frac={frac} sum={sum}");
        }
    }

    #[test]
    fn output_has_exact_target_size() {
        let src = gradient(7, 5);
        let up = resize_bicubic(&src, 16, 9).unwrap();
        assert_eq!(up.dimensions(), (16, 9));
        let down = resize_bicubic(&src, 3, 2).unwrap();
        assert_eq!(down.dimensions(), (3, 2));
    }

    #[test_case(0, 8)]
    #[test_case(8, 0)]
    #[test_case(0, 0)]
    fn zero_target_is_rejected(width: u32, height: u32) {
        let src = gradient(4, 4);
        assert!(matches!(
            resize_bicubic(&src, width, height),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            resize_grid(&src, CanvasSize::new(width, height), ResampleFilter::Lanczos3),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn resize_is_deterministic() {
        let src = gradient(13, 11);
        let a = resize_bicubic(&src, 32, 20).unwrap();
        let b = resize_bicubic(&src, 32, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_size_is_near_identity() {
        let src = gradient(9, 6);
        let out = resize_bicubic(&src, 9, 6).unwrap();
        for (a, b) in src.pixels().zip(out.pixels()) {
            for c in 0..CHANNELS {
                assert!(a[c].abs_diff(b[c]) <= 1, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn solid_color_stays_solid() {
        let src = PixelGrid::from_pixel(1, 1, [65535, 0, 0, 65535]).unwrap();
        let out = resize_bicubic(&src, 12, 7).unwrap();
        assert!(out.pixels().all(|p| p == [65535, 0, 0, 65535]));
    }

    #[test]
    fn ringing_is_clamped_into_range() {
        // Hard 0 / max edges overshoot with a negative-lobe kernel.
        let mut raw = Vec::new();
        for _y in 0..4 {
            for x in 0..8u32 {
                let v = if x < 4 { 0 } else { 65535 };
                raw.extend_from_slice(&[v, v, v, v]);
            }
        }
        let src = PixelGrid::from_raw(8, 4, raw).unwrap();
        let out = resize_bicubic(&src, 29, 5).unwrap();
        // Interpolated row has both extremes present after clamping.
        let row: Vec<u16> = (0..29).map(|x| out.pixel(x, 2)[0]).collect();
        assert_eq!(row[0], 0);
        assert_eq!(row[28], 65535);
        assert!(row.windows(2).any(|w| w[0] < w[1]));
    }

    #[test]
    fn channels_are_interpolated_independently() {
        let src = gradient(6, 6);
        let mut alpha_only = src.clone().into_raw();
        for px in alpha_only.chunks_exact_mut(CHANNELS) {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
        }
        let alpha_only = PixelGrid::from_raw(6, 6, alpha_only).unwrap();
        let a = resize_bicubic(&src, 10, 10).unwrap();
        let b = resize_bicubic(&alpha_only, 10, 10).unwrap();
        for (pa, pb) in a.pixels().zip(b.pixels()) {
            assert_eq!(pa[3], pb[3]);
        }
    }

    #[test]
    fn lanczos_short_circuits_same_size() {
        let src = gradient(5, 5);
        let out = resize_grid(&src, CanvasSize::new(5, 5), ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn lanczos_keeps_solid_color() {
        let src = PixelGrid::from_pixel(4, 4, [65535, 0, 0, 32896]).unwrap();
        let out = resize_grid(&src, CanvasSize::new(9, 3), ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (9, 3));
        for p in out.pixels() {
            assert!(p[0] >= 65534 && p[1] <= 1 && p[2] <= 1, "{p:?}");
            assert!(p[3].abs_diff(32896) <= 1, "{p:?}");
        }
    }
}
