use std::path::PathBuf;
use std::sync::Arc;

use crate::config::model::{FontConfig, FontStyle};
use crate::foundation::error::{ShotError, ShotResult};
use crate::text::builtin::BuiltinFont;
use crate::text::mask::TextMask;
use crate::text::outline::OutlineFont;

/// A font that can rasterize captions.
#[derive(Clone, Debug)]
pub enum CaptionFont {
    /// Installed TTF/OTF/TTC face.
    Outline(OutlineFont),
    /// Embedded bitmap fallback.
    Builtin(BuiltinFont),
}

impl CaptionFont {
    /// Rasterize one line of text to coverage.
    pub fn rasterize(&self, text: &str) -> ShotResult<TextMask> {
        match self {
            Self::Outline(f) => f.rasterize(text),
            Self::Builtin(f) => Ok(f.rasterize(text)),
        }
    }

    /// Human-readable origin for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Outline(f) => format!("{} ({})", f.family(), f.origin()),
            Self::Builtin(f) => format!("builtin bitmap x{}", f.scale()),
        }
    }

    /// Whether this is the embedded fallback.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

/// One strategy for producing a caption font.
pub trait FontProvider {
    /// Short label for logs.
    fn describe(&self) -> String;

    /// Try to load a font at `size` pixels.
    fn load(&self, size: f32) -> ShotResult<CaptionFont>;
}

/// Loads a single font file.
#[derive(Clone, Debug)]
pub struct FontFileProvider {
    path: PathBuf,
}

impl FontFileProvider {
    /// Provider for the font at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FontProvider for FontFileProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self, size: f32) -> ShotResult<CaptionFont> {
        let mut db = usvg::fontdb::Database::new();
        db.load_font_file(&self.path)
            .map_err(|e| ShotError::font(format!("read '{}': {e}", self.path.display())))?;
        let (family, weight) = first_face(&db)
            .ok_or_else(|| ShotError::font(format!("no usable face in '{}'", self.path.display())))?;
        let font = OutlineFont::new(
            Arc::new(db),
            family,
            weight,
            size,
            self.path.display().to_string(),
        )?;
        probe(font)
    }
}

/// Queries the fonts installed on this machine for a generic family.
#[derive(Clone, Debug)]
pub struct SystemFontProvider {
    style: FontStyle,
}

impl SystemFontProvider {
    /// Provider for the system's default face of `style`.
    pub fn new(style: FontStyle) -> Self {
        Self { style }
    }
}

impl FontProvider for SystemFontProvider {
    fn describe(&self) -> String {
        format!("system {:?}", self.style)
    }

    fn load(&self, size: f32) -> ShotResult<CaptionFont> {
        use usvg::fontdb::{Family, Query, Weight};

        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let family = match self.style {
            FontStyle::Monospace => Family::Monospace,
            FontStyle::SansSerif => Family::SansSerif,
        };
        let query = Query {
            families: &[family],
            weight: Weight::BOLD,
            ..Default::default()
        };
        let id = db
            .query(&query)
            .ok_or_else(|| ShotError::font(format!("no system {:?} face", self.style)))?;
        let name = db
            .face(id)
            .and_then(|f| f.families.first().map(|(n, _)| n.clone()))
            .ok_or_else(|| ShotError::font("system face has no family name"))?;

        let font = OutlineFont::new(Arc::new(db), name, Weight::BOLD.0, size, "system")?;
        probe(font)
    }
}

/// Family name and weight of the first named face in `db`.
fn first_face(db: &usvg::fontdb::Database) -> Option<(String, u16)> {
    db.faces().find_map(|face| {
        face.families
            .first()
            .map(|(name, _)| (name.clone(), face.weight.0))
    })
}

/// Reject faces that parse but draw nothing (missing glyphs, broken tables).
fn probe(font: OutlineFont) -> ShotResult<CaptionFont> {
    if font.rasterize("Ag")?.ink.is_none() {
        return Err(ShotError::font(format!(
            "face '{}' from {} renders no glyphs",
            font.family(),
            font.origin()
        )));
    }
    Ok(CaptionFont::Outline(font))
}

/// Ordered font providers with a guaranteed builtin fallback.
pub struct FontResolver {
    providers: Vec<Box<dyn FontProvider>>,
}

impl FontResolver {
    /// Resolver trying `providers` in order.
    pub fn new(providers: Vec<Box<dyn FontProvider>>) -> Self {
        Self { providers }
    }

    /// Resolver for `style`: each configured file in order, then optionally the system fonts.
    pub fn from_config(cfg: &FontConfig, style: FontStyle) -> Self {
        let mut providers: Vec<Box<dyn FontProvider>> = cfg
            .candidates(style)
            .iter()
            .map(|p| Box::new(FontFileProvider::new(p.as_path())) as Box<dyn FontProvider>)
            .collect();
        if cfg.system_fallback {
            providers.push(Box::new(SystemFontProvider::new(style)));
        }
        Self::new(providers)
    }

    /// Labels of the providers, in the order they are tried (builtin excluded).
    pub fn describe(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.describe()).collect()
    }

    /// First font any provider can load, else the builtin bitmap font. Never fails.
    pub fn resolve(&self, size: f32) -> CaptionFont {
        for provider in &self.providers {
            match provider.load(size) {
                Ok(font) => {
                    tracing::debug!(provider = %provider.describe(), font = %font.describe(), "font resolved");
                    return font;
                }
                Err(err) => {
                    tracing::debug!(provider = %provider.describe(), %err, "font provider failed");
                }
            }
        }
        let font = CaptionFont::Builtin(BuiltinFont::new(size));
        tracing::debug!(font = %font.describe(), "falling back to builtin font");
        font
    }
}

impl std::fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResolver")
            .field("providers", &self.describe())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/resolver.rs"]
mod tests;
