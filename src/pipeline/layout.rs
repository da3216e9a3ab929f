use crate::config::model::ShotConfig;
use crate::foundation::error::{ShotError, ShotResult};

/// Resolved placement of every layer on the canvas for one source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotLayout {
    /// Width the screenshot is scaled to.
    pub scaled_width: u32,
    /// Height after aspect-preserving scaling.
    pub scaled_height: u32,
    /// Screenshot top-left x.
    pub screenshot_x: i64,
    /// Screenshot top-left y.
    pub screenshot_y: i64,
    /// Shadow layer top-left x (the layer includes its blur padding).
    pub shadow_x: i64,
    /// Shadow layer top-left y.
    pub shadow_y: i64,
    /// Caption em-box top.
    pub caption_top: i64,
}

/// Scale `src_w`x`src_h` to `target_width` wide, preserving aspect ratio (height floored, >= 1).
pub fn scaled_size(target_width: u32, src_w: u32, src_h: u32) -> ShotResult<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(ShotError::validation(format!(
            "source image has empty dimensions {src_w}x{src_h}"
        )));
    }
    let h = u64::from(target_width) * u64::from(src_h) / u64::from(src_w);
    let h = u32::try_from(h.max(1))
        .map_err(|_| ShotError::validation("scaled screenshot height overflows u32"))?;
    Ok((target_width, h))
}

/// Compute the layout for a source of `src_w`x`src_h` under `cfg`.
pub fn compute_layout(cfg: &ShotConfig, src_w: u32, src_h: u32) -> ShotResult<ShotLayout> {
    let l = &cfg.layout;
    let (scaled_width, scaled_height) = scaled_size(l.screenshot_width, src_w, src_h)?;

    let caption_top = i64::from(l.top_padding);
    let screenshot_x = centered(cfg.canvas.width, scaled_width);
    let screenshot_y = caption_top + i64::from(l.caption_font_size) + i64::from(l.caption_gap);

    // The shadow layer carries `shadow_blur` of padding on each side; pulling it back by the
    // blur and pushing it by the offset biases the shadow down and to the right.
    let shift = i64::from(l.shadow_offset) - i64::from(l.shadow_blur);

    Ok(ShotLayout {
        scaled_width,
        scaled_height,
        screenshot_x,
        screenshot_y,
        shadow_x: screenshot_x + shift,
        shadow_y: screenshot_y + shift,
        caption_top,
    })
}

/// Left edge that centers `inner` pixels inside `outer`, floored.
pub fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/layout.rs"]
mod tests;
