use image::{GrayImage, Luma, RgbaImage};
use kurbo::{Point, RoundedRect, Shape};

use crate::effects::blur::blur_alpha8;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{ShotError, ShotResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::surface::Surface;

/// Single-channel mask of a `width`x`height` rounded rectangle.
///
/// A pixel is opaque (255) when its center lies inside the shape and transparent (0) otherwise.
/// The radius is clamped to half the shorter side.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([255]));
    let r = radius.min(width / 2).min(height / 2);
    if r == 0 {
        return mask;
    }

    let shape = RoundedRect::new(0.0, 0.0, f64::from(width), f64::from(height), f64::from(r));
    // Only the four r x r corner squares can fall outside the shape.
    let xs = (0..r).chain(width - r..width);
    for x in xs {
        for y in (0..r).chain(height - r..height) {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if !shape.contains(center) {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
    }
    mask
}

/// Replace the alpha channel of `image` with a rounded-rectangle mask.
pub fn round_corners(image: &RgbaImage, radius: u32) -> RgbaImage {
    let mask = rounded_mask(image.width(), image.height(), radius);
    let mut out = image.clone();
    for (px, m) in out.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
    out
}

/// Blurred drop shadow for a `width`x`height` rounded rectangle.
///
/// The silhouette is black at `alpha`, placed `blur` pixels in from every edge of a transparent
/// layer of `(width + 2*blur) x (height + 2*blur)`, then blurred with sigma `blur / 2`. The caller
/// positions the returned layer.
pub fn make_shadow(
    width: u32,
    height: u32,
    radius: u32,
    blur: u32,
    alpha: u8,
) -> ShotResult<Surface> {
    let padded = |side: u32| {
        blur.checked_mul(2)
            .and_then(|p| side.checked_add(p))
            .ok_or_else(|| ShotError::validation("shadow layer size overflows u32"))
    };
    let (lw, lh) = (padded(width)?, padded(height)?);
    let pad = blur as usize;

    let silhouette = rounded_mask(width, height, radius);
    let mut layer = vec![0u8; lw as usize * lh as usize];
    for (y, row) in silhouette.as_raw().chunks_exact(width.max(1) as usize).enumerate() {
        let start = (y + pad) * lw as usize + pad;
        for (dst, &m) in layer[start..start + row.len()].iter_mut().zip(row) {
            *dst = mul_div255_u8(u16::from(m), u16::from(alpha));
        }
    }

    let sigma = (blur / 2) as f32;
    let blurred = blur_alpha8(&layer, lw, lh, sigma)?;
    let mask = GrayImage::from_raw(lw, lh, blurred)
        .ok_or_else(|| ShotError::validation("shadow buffer does not match layer size"))?;
    Ok(Surface::from_coverage(&mask, Rgb8::new(0, 0, 0)))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/decorate.rs"]
mod tests;
