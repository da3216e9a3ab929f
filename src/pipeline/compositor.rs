use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat, RgbImage, imageops::FilterType};

use crate::config::model::ShotConfig;
use crate::effects::decorate::{make_shadow, round_corners};
use crate::foundation::error::{ShotError, ShotResult};
use crate::pipeline::layout::{centered, compute_layout};
use crate::render::gradient::{GradientStrategy, render_gradient};
use crate::render::surface::Surface;
use crate::text::resolver::{CaptionFont, FontResolver};

/// A composited screenshot written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedAsset {
    /// Output file path.
    pub path: PathBuf,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Turns one source screenshot and caption into a finished store asset.
///
/// Stacking order, bottom to top: gradient, shadow, rounded screenshot, caption.
#[derive(Clone, Debug)]
pub struct Compositor {
    config: ShotConfig,
    strategy: GradientStrategy,
    font: CaptionFont,
}

impl Compositor {
    /// Validate `config` and resolve the caption font once.
    pub fn new(config: &ShotConfig, strategy: GradientStrategy) -> ShotResult<Self> {
        config.validate()?;
        let resolver = FontResolver::from_config(&config.font, config.font.style);
        let font = resolver.resolve(config.layout.caption_font_size as f32);
        tracing::debug!(font = %font.describe(), "caption font");
        Self::with_font(config, strategy, font)
    }

    /// Like [`Compositor::new`] but with an already resolved font.
    pub fn with_font(
        config: &ShotConfig,
        strategy: GradientStrategy,
        font: CaptionFont,
    ) -> ShotResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            strategy,
            font,
        })
    }

    /// The caption font in use.
    pub fn font(&self) -> &CaptionFont {
        &self.font
    }

    /// Composite `source` and `caption` into an opaque canvas.
    pub fn compose(&self, source: &DynamicImage, caption: &str) -> ShotResult<RgbImage> {
        let cfg = &self.config;
        let l = &cfg.layout;

        let gradient = render_gradient(&cfg.gradient, cfg.canvas, self.strategy)?;
        let mut canvas = Surface::from_rgb(&gradient);

        let layout = compute_layout(cfg, source.width(), source.height())?;
        let scaled = image::imageops::resize(
            &source.to_rgba8(),
            layout.scaled_width,
            layout.scaled_height,
            FilterType::Lanczos3,
        );
        let rounded = round_corners(&scaled, l.corner_radius);
        let shadow = make_shadow(
            layout.scaled_width,
            layout.scaled_height,
            l.corner_radius,
            l.shadow_blur,
            l.shadow_alpha,
        )?;

        canvas.draw_over(&shadow, layout.shadow_x, layout.shadow_y);
        canvas.draw_over(
            &Surface::from_rgba(&rounded),
            layout.screenshot_x,
            layout.screenshot_y,
        );

        let mask = self.font.rasterize(caption)?;
        if let Some(ink) = mask.ink {
            let text_x = centered(cfg.canvas.width, ink.width());
            canvas.fill_coverage(
                &mask.coverage,
                mask.width,
                mask.height,
                text_x - i64::from(ink.left),
                layout.caption_top - i64::from(mask.top),
                l.caption_color,
            );
        }

        canvas.to_rgb()
    }

    /// Read `source_path`, composite it with `caption`, and write a PNG to `output_path`.
    ///
    /// The output is PNG-encoded whatever its extension.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %source_path.display()))]
    pub fn render(
        &self,
        source_path: &Path,
        caption: &str,
        output_path: &Path,
    ) -> ShotResult<RenderedAsset> {
        tracing::info!(
            "Processing: {} -> {}",
            file_label(source_path),
            file_label(output_path)
        );

        let source = load_source(source_path)?;
        let out = self.compose(&source, caption)?;

        out.save_with_format(output_path, ImageFormat::Png)
            .map_err(|source| ShotError::Encode {
                path: output_path.to_path_buf(),
                source,
            })?;

        let (width, height) = out.dimensions();
        tracing::info!("  Saved: {} ({width}x{height})", output_path.display());
        Ok(RenderedAsset {
            path: output_path.to_path_buf(),
            width,
            height,
        })
    }
}

fn load_source(path: &Path) -> ShotResult<DynamicImage> {
    let reader = match image::ImageReader::open(path) {
        Ok(r) => r,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ShotError::missing_source(path));
        }
        Err(e) => {
            return Err(ShotError::Other(
                anyhow::Error::new(e).context(format!("open source '{}'", path.display())),
            ));
        }
    };
    let reader = reader
        .with_guessed_format()
        .with_context(|| format!("sniff image format of '{}'", path.display()))?;
    reader.decode().map_err(|source| ShotError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/compositor.rs"]
mod tests;
