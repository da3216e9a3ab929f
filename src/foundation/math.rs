pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Interpolate one channel at `num / den` of the way from `from` to `to`.
///
/// The result is floored, which matches truncating the non-negative float
/// `from + (to - from) * num / den` without its rounding error. `den` must be non-zero.
pub(crate) fn lerp_channel_floor(from: u8, to: u8, num: u32, den: u32) -> u8 {
    let delta = i64::from(to) - i64::from(from);
    let step = (delta * i64::from(num)).div_euclid(i64::from(den));
    (i64::from(from) + step).clamp(0, 255) as u8
}

/// Ceil of `3 * sigma`, the usual cut-off for a discrete Gaussian kernel.
pub(crate) fn gaussian_kernel_radius(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
