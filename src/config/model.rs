use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::{ShotError, ShotResult};

/// Upper bound for every pixel dimension in a configuration.
pub const MAX_SIDE: u32 = 16_384;

/// Complete, immutable description of a screenshot batch.
///
/// [`ShotConfig::default`] is the reference App Store instance: a 1320x2868 canvas (6.9" display)
/// with the Coolify purple gradient and four captioned screenshots. Every field may be overridden
/// from JSON; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShotConfig {
    /// Output canvas size.
    pub canvas: CanvasSize,
    /// Background gradient colors.
    pub gradient: GradientSpec,
    /// Layout constants.
    pub layout: LayoutSpec,
    /// Caption font selection.
    pub font: FontConfig,
    /// Input/output directory layout.
    pub paths: PathsConfig,
    /// Ordered job list.
    pub jobs: Vec<ScreenshotJob>,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::new(1320, 2868),
            gradient: GradientSpec::default(),
            layout: LayoutSpec::default(),
            font: FontConfig::default(),
            paths: PathsConfig::default(),
            jobs: vec![
                ScreenshotJob::new("dashboard.png", "Your Cloud at a Glance"),
                ScreenshotJob::new("deployments.png", "Track Every Deployment"),
                ScreenshotJob::new("deployment-detail.png", "Full Deployment Details"),
                ScreenshotJob::new("settings.png", "Multiple Instances"),
            ],
        }
    }
}

impl ShotConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShotResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShotError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShotError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> ShotResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ShotError::validation("canvas width and height must be > 0"));
        }
        if self.layout.screenshot_width == 0 {
            return Err(ShotError::validation("layout.screenshot_width must be > 0"));
        }
        if self.layout.caption_font_size == 0 {
            return Err(ShotError::validation("layout.caption_font_size must be > 0"));
        }
        let bounded = [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("layout.screenshot_width", self.layout.screenshot_width),
            ("layout.caption_font_size", self.layout.caption_font_size),
            ("layout.corner_radius", self.layout.corner_radius),
            ("layout.shadow_blur", self.layout.shadow_blur),
        ];
        for (name, value) in bounded {
            if value > MAX_SIDE {
                return Err(ShotError::validation(format!(
                    "{name} must be <= {MAX_SIDE}, got {value}"
                )));
            }
        }
        if self.paths.output_prefix.contains(['/', '\\']) {
            return Err(ShotError::validation(
                "paths.output_prefix must not contain path separators",
            ));
        }
        for job in &self.jobs {
            if !is_plain_file_name(&job.source) {
                return Err(ShotError::validation(format!(
                    "job source '{}' must be a plain file name",
                    job.source
                )));
            }
        }
        Ok(())
    }

    /// Output file name for a job: the configured prefix followed by the source name.
    pub fn output_name(&self, job: &ScreenshotJob) -> String {
        format!("{}{}", self.paths.output_prefix, job.source)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// Vertical two-stop gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientSpec {
    /// Color of row 0.
    pub top: Rgb8,
    /// Color approached by the last row.
    pub bottom: Rgb8,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            top: Rgb8::new(0x6B, 0x16, 0xED),
            bottom: Rgb8::new(0x5A, 0x12, 0xC7),
        }
    }
}

/// Layout constants in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSpec {
    /// Distance from the canvas top to the caption's em-box top.
    pub top_padding: u32,
    /// Caption font size in pixels.
    pub caption_font_size: u32,
    /// Space between the caption line and the screenshot.
    pub caption_gap: u32,
    /// Width the screenshot is scaled to.
    pub screenshot_width: u32,
    /// Corner radius applied to the screenshot and its shadow.
    pub corner_radius: u32,
    /// Down-right shift of the shadow relative to the screenshot.
    pub shadow_offset: i32,
    /// Shadow padding; the Gaussian sigma is half of this.
    pub shadow_blur: u32,
    /// Shadow silhouette opacity.
    pub shadow_alpha: u8,
    /// Caption fill color.
    pub caption_color: Rgb8,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            top_padding: 180,
            caption_font_size: 72,
            caption_gap: 60,
            screenshot_width: 1100,
            corner_radius: 44,
            shadow_offset: 15,
            shadow_blur: 30,
            shadow_alpha: 80,
            caption_color: Rgb8::WHITE,
        }
    }
}

/// Font family style requested for the caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Fixed-pitch faces (SF Mono, Menlo, Monaco).
    Monospace,
    /// Proportional sans-serif faces (SF Pro, Arial, Helvetica).
    SansSerif,
}

/// Ordered font candidates per style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Style used for captions.
    pub style: FontStyle,
    /// Candidate files tried in order for [`FontStyle::Monospace`].
    pub monospace: Vec<PathBuf>,
    /// Candidate files tried in order for [`FontStyle::SansSerif`].
    pub sans_serif: Vec<PathBuf>,
    /// Query installed system fonts before falling back to the builtin bitmap font.
    pub system_fallback: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            style: FontStyle::Monospace,
            monospace: [
                "/System/Library/Fonts/SFMono-Bold.otf",
                "/System/Library/Fonts/SFMono.ttf",
                "/Library/Fonts/SF-Mono-Bold.otf",
                "/System/Library/Fonts/Menlo.ttc",
                "/System/Library/Fonts/Monaco.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            sans_serif: [
                "/System/Library/Fonts/SFNSDisplay.ttf",
                "/System/Library/Fonts/SFNS.ttf",
                "/Library/Fonts/SF-Pro-Display-Bold.otf",
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "/System/Library/Fonts/Helvetica.ttc",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            system_fallback: false,
        }
    }
}

impl FontConfig {
    /// Candidate files for `style`, in the order they are tried.
    pub fn candidates(&self, style: FontStyle) -> &[PathBuf] {
        match style {
            FontStyle::Monospace => &self.monospace,
            FontStyle::SansSerif => &self.sans_serif,
        }
    }

    /// Config that skips every file and system lookup, so the builtin font is always used.
    pub fn builtin_only() -> Self {
        Self {
            style: FontStyle::Monospace,
            monospace: Vec::new(),
            sans_serif: Vec::new(),
            system_fallback: false,
        }
    }
}

/// Directory layout relative to the project root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the raw device screenshots.
    pub source_dir: PathBuf,
    /// Directory the composited assets are written to (created if missing).
    pub output_dir: PathBuf,
    /// Prefix prepended to each source file name.
    pub output_prefix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs").join("screenshots"),
            output_dir: PathBuf::from("docs").join("appstore-screenshots"),
            output_prefix: "appstore_".to_string(),
        }
    }
}

/// One (source file, caption) unit of work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenshotJob {
    /// Source file name inside [`PathsConfig::source_dir`].
    pub source: String,
    /// Caption drawn above the screenshot.
    pub caption: String,
}

impl ScreenshotJob {
    /// Construct a job.
    pub fn new(source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
