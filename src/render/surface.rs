use image::{GrayImage, RgbImage, RgbaImage};

use crate::effects::composite::{PremulRgba8, over, over_row, premultiply, unpremultiply};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{ShotError, ShotResult};
use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel buffer used while compositing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Opaque surface from an RGB image.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let data = img
            .as_raw()
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Premultiply a straight-alpha RGBA image.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let data = img
            .as_raw()
            .chunks_exact(4)
            .flat_map(|px| premultiply([px[0], px[1], px[2], px[3]]))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Solid `color` modulated by a coverage mask.
    pub fn from_coverage(mask: &GrayImage, color: Rgb8) -> Self {
        let (width, height) = mask.dimensions();
        let data = mask
            .as_raw()
            .iter()
            .flat_map(|&a| tint(color, a))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Read one pixel. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Composite `src` over `self` with its top-left corner at `(x, y)`, clipped to bounds.
    pub fn draw_over(&mut self, src: &Surface, x: i64, y: i64) {
        let Some(clip) = Clip::new(self.width, self.height, src.width, src.height, x, y) else {
            return;
        };
        let dst_stride = self.width as usize * 4;
        let src_stride = src.width as usize * 4;
        for row in 0..clip.rows {
            let d0 = (clip.dst_y + row) * dst_stride + clip.dst_x * 4;
            let s0 = (clip.src_y + row) * src_stride + clip.src_x * 4;
            let n = clip.cols * 4;
            over_row(&mut self.data[d0..d0 + n], &src.data[s0..s0 + n]);
        }
    }

    /// Paint `color` through an 8-bit coverage buffer placed at `(x, y)`, clipped to bounds.
    pub fn fill_coverage(
        &mut self,
        coverage: &[u8],
        cov_width: u32,
        cov_height: u32,
        x: i64,
        y: i64,
        color: Rgb8,
    ) {
        debug_assert_eq!(coverage.len(), cov_width as usize * cov_height as usize);
        let Some(clip) = Clip::new(self.width, self.height, cov_width, cov_height, x, y) else {
            return;
        };
        let dst_stride = self.width as usize * 4;
        for row in 0..clip.rows {
            for col in 0..clip.cols {
                let a = coverage[(clip.src_y + row) * cov_width as usize + clip.src_x + col];
                if a == 0 {
                    continue;
                }
                let d = (clip.dst_y + row) * dst_stride + (clip.dst_x + col) * 4;
                let dst = [
                    self.data[d],
                    self.data[d + 1],
                    self.data[d + 2],
                    self.data[d + 3],
                ];
                self.data[d..d + 4].copy_from_slice(&over(dst, tint(color, a)));
            }
        }
    }

    /// Flatten to opaque RGB by un-premultiplying and dropping alpha.
    pub fn to_rgb(&self) -> ShotResult<RgbImage> {
        let raw = self
            .data
            .chunks_exact(4)
            .flat_map(|px| {
                let [r, g, b, _] = unpremultiply([px[0], px[1], px[2], px[3]]);
                [r, g, b]
            })
            .collect();
        RgbImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| ShotError::validation("surface buffer does not match its size"))
    }
}

fn tint(color: Rgb8, a: u8) -> PremulRgba8 {
    let a16 = u16::from(a);
    [
        mul_div255_u8(u16::from(color.r), a16),
        mul_div255_u8(u16::from(color.g), a16),
        mul_div255_u8(u16::from(color.b), a16),
        a,
    ]
}

/// Intersection of a placed source rectangle with the destination bounds.
struct Clip {
    dst_x: usize,
    dst_y: usize,
    src_x: usize,
    src_y: usize,
    cols: usize,
    rows: usize,
}

impl Clip {
    fn new(dst_w: u32, dst_h: u32, src_w: u32, src_h: u32, x: i64, y: i64) -> Option<Self> {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(src_w)).min(i64::from(dst_w));
        let y1 = (y + i64::from(src_h)).min(i64::from(dst_h));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self {
            dst_x: x0 as usize,
            dst_y: y0 as usize,
            src_x: (x0 - x) as usize,
            src_y: (y0 - y) as usize,
            cols: (x1 - x0) as usize,
            rows: (y1 - y0) as usize,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
