/// Horizontal ink extent of a rasterized line, in mask columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkExtent {
    /// First column with any coverage.
    pub left: u32,
    /// One past the last column with any coverage.
    pub right: u32,
}

impl InkExtent {
    /// Width of the inked region.
    pub fn width(self) -> u32 {
        self.right - self.left
    }
}

/// Single line of text rasterized to 8-bit coverage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Coverage, row-major, one byte per pixel.
    pub coverage: Vec<u8>,
    /// Row of the em-box top inside the mask.
    pub top: u32,
    /// Inked columns, `None` when nothing was drawn.
    pub ink: Option<InkExtent>,
}

impl TextMask {
    /// Mask with no coverage at all.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            coverage: Vec::new(),
            top: 0,
            ink: None,
        }
    }

    /// Wrap a coverage buffer and measure its ink extent.
    pub fn from_coverage(width: u32, height: u32, coverage: Vec<u8>, top: u32) -> Self {
        debug_assert_eq!(coverage.len(), width as usize * height as usize);
        let ink = ink_extent(&coverage, width);
        Self {
            width,
            height,
            coverage,
            top,
            ink,
        }
    }

    /// Width of the inked region (0 for blank text).
    pub fn ink_width(&self) -> u32 {
        self.ink.map_or(0, InkExtent::width)
    }
}

fn ink_extent(coverage: &[u8], width: u32) -> Option<InkExtent> {
    if width == 0 {
        return None;
    }
    let mut left = u32::MAX;
    let mut right = 0u32;
    for row in coverage.chunks_exact(width as usize) {
        if let Some(first) = row.iter().position(|&a| a != 0) {
            left = left.min(first as u32);
        }
        if let Some(last) = row.iter().rposition(|&a| a != 0) {
            right = right.max(last as u32 + 1);
        }
    }
    (left < right).then_some(InkExtent { left, right })
}

#[cfg(test)]
#[path = "../../tests/unit/text/mask.rs"]
mod tests;
