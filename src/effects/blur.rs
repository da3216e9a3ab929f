use rayon::prelude::*;

use crate::foundation::error::{ShotError, ShotResult};
use crate::foundation::math::gaussian_kernel_radius;

/// Separable Gaussian blur over a single 8-bit channel (an alpha mask).
///
/// Edges are clamped. `sigma` is the standard deviation; the kernel spans `ceil(3 * sigma)`
/// pixels on each side.
pub fn blur_alpha8(src: &[u8], width: u32, height: u32, sigma: f32) -> ShotResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ShotError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ShotError::validation(
            "blur expects a buffer of width*height bytes",
        ));
    }

    let radius = gaussian_kernel_radius(sigma);
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ShotResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ShotError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(ShotError::validation("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Put the rounding residue on the center tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let stride = width as usize;

    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(dst_row, src_row)| {
            for (x, d) in dst_row.iter_mut().enumerate() {
                let mut acc = 0u64;
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x as i64 + ki as i64 - radius).clamp(0, w - 1) as usize;
                    acc += u64::from(kw) * u64::from(src_row[sx]);
                }
                *d = q16_to_u8(acc);
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let h = i64::from(height);
    let stride = width as usize;

    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let mut acc = vec![0u64; stride];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, h - 1) as usize;
                let src_row = &src[sy * stride..(sy + 1) * stride];
                for (a, &s) in acc.iter_mut().zip(src_row) {
                    *a += u64::from(kw) * u64::from(s);
                }
            }
            for (d, &a) in dst_row.iter_mut().zip(&acc) {
                *d = q16_to_u8(a);
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
