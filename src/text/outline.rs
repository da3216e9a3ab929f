use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{ShotError, ShotResult};
use crate::text::mask::TextMask;

/// An installed outline font (TTF/OTF/TTC) rendered through `usvg`/`resvg`.
#[derive(Clone, Debug)]
pub struct OutlineFont {
    db: Arc<usvg::fontdb::Database>,
    family: String,
    weight: u16,
    size: f32,
    origin: String,
}

impl OutlineFont {
    /// Wrap a font database that can resolve `family`.
    pub fn new(
        db: Arc<usvg::fontdb::Database>,
        family: impl Into<String>,
        weight: u16,
        size: f32,
        origin: impl Into<String>,
    ) -> ShotResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ShotError::validation("font size must be finite and > 0"));
        }
        Ok(Self {
            db,
            family: family.into(),
            weight,
            size,
            origin: origin.into(),
        })
    }

    /// Family name used in the text markup.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Requested size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Where the face came from (file path or system query).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Rasterize one line of white text.
    ///
    /// The text is laid out with its em-box top at `pad` rows from the top of the mask, so
    /// `mask.top == pad`.
    pub fn rasterize(&self, text: &str) -> ShotResult<TextMask> {
        if text.trim().is_empty() {
            return Ok(TextMask::empty());
        }

        let pad = (self.size / 2.0).ceil() as u32;
        let chars = text.chars().count() as f32;
        let width = (chars * self.size).ceil() as u32 + 2 * pad;
        let height = (self.size * 1.5).ceil() as u32 + 2 * pad;

        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                r#"<text x="{pad}" y="{pad}" font-family="&quot;{family}&quot;" font-weight="{weight}" "#,
                r##"font-size="{size}" dominant-baseline="text-before-edge" fill="#FFFFFF" xml:space="preserve">"##,
                "{text}</text></svg>"
            ),
            w = width,
            h = height,
            pad = pad,
            family = xml_escape(&self.family),
            weight = self.weight,
            size = self.size,
            text = xml_escape(text),
        );

        let opts = usvg::Options {
            fontdb: self.db.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse caption svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ShotError::validation("failed to allocate caption pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        // White fill: premultiplied coverage is the alpha channel.
        let coverage = pixmap.data().chunks_exact(4).map(|px| px[3]).collect();
        Ok(TextMask::from_coverage(width, height, coverage, pad))
    }
}

pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/outline.rs"]
mod tests;
