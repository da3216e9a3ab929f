use image::RgbImage;
use rayon::prelude::*;

use crate::config::model::GradientSpec;
use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::{ShotError, ShotResult};
use crate::foundation::math::lerp_channel_floor;

/// How the gradient canvas is filled.
///
/// Both strategies produce byte-identical images; they differ only in speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientStrategy {
    /// Row-by-row loop writing every pixel.
    Scalar,
    /// Row color table computed once, rows filled in parallel chunks.
    Batch,
}

impl GradientStrategy {
    /// Pick the fastest strategy available in this process.
    ///
    /// Meant to be called once at startup and passed down.
    pub fn detect() -> Self {
        if rayon::current_num_threads() > 1 {
            Self::Batch
        } else {
            Self::Scalar
        }
    }
}

/// Color of row `y` in a gradient of `height` rows: `top + floor((bottom - top) * y / height)`.
pub fn row_color(spec: &GradientSpec, y: u32, height: u32) -> Rgb8 {
    let (t, b) = (spec.top, spec.bottom);
    Rgb8::new(
        lerp_channel_floor(t.r, b.r, y, height),
        lerp_channel_floor(t.g, b.g, y, height),
        lerp_channel_floor(t.b, b.b, y, height),
    )
}

/// Render an opaque vertical gradient of `size`.
#[tracing::instrument(level = "debug", skip(spec))]
pub fn render_gradient(
    spec: &GradientSpec,
    size: CanvasSize,
    strategy: GradientStrategy,
) -> ShotResult<RgbImage> {
    if size.width == 0 || size.height == 0 {
        return Err(ShotError::validation("gradient size must be > 0"));
    }
    match strategy {
        GradientStrategy::Scalar => Ok(render_scalar(spec, size)),
        GradientStrategy::Batch => render_batch(spec, size),
    }
}

fn render_scalar(spec: &GradientSpec, size: CanvasSize) -> RgbImage {
    let mut img = RgbImage::new(size.width, size.height);
    for y in 0..size.height {
        let c = row_color(spec, y, size.height);
        for x in 0..size.width {
            img.put_pixel(x, y, image::Rgb(c.channels()));
        }
    }
    img
}

fn render_batch(spec: &GradientSpec, size: CanvasSize) -> ShotResult<RgbImage> {
    let stride = size.width as usize * 3;
    let rows: Vec<[u8; 3]> = (0..size.height)
        .map(|y| row_color(spec, y, size.height).channels())
        .collect();

    let mut buf = vec![0u8; stride * size.height as usize];
    buf.par_chunks_mut(stride)
        .zip(rows.par_iter())
        .for_each(|(row, c)| {
            for px in row.chunks_exact_mut(3) {
                px.copy_from_slice(c);
            }
        });

    RgbImage::from_raw(size.width, size.height, buf)
        .ok_or_else(|| ShotError::validation("gradient buffer does not match canvas size"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
