//! Storeshot composites app-store marketing screenshots.
//!
//! Each job takes a raw device screenshot and produces a fixed-size canvas with a vertical
//! gradient, a centered caption, and the screenshot scaled down with rounded corners over a soft
//! drop shadow.
//!
//! - Build or load a [`ShotConfig`]
//! - Composite single images with a [`Compositor`]
//! - Process every configured job under a project root with a [`BatchDriver`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;

pub(crate) mod effects;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod text;

pub use crate::config::model::{
    FontConfig, FontStyle, GradientSpec, LayoutSpec, MAX_SIDE, PathsConfig, ScreenshotJob,
    ShotConfig,
};
pub use crate::foundation::core::{CanvasSize, Rgb8};
pub use crate::foundation::error::{ShotError, ShotResult};

pub use crate::effects::blur::blur_alpha8;
pub use crate::effects::composite::{PremulRgba8, over};
pub use crate::effects::decorate::{make_shadow, round_corners, rounded_mask};
pub use crate::pipeline::batch::{BatchDriver, BatchReport, project_root};
pub use crate::pipeline::compositor::{Compositor, RenderedAsset};
pub use crate::pipeline::layout::{ShotLayout, centered, compute_layout, scaled_size};
pub use crate::render::gradient::{GradientStrategy, render_gradient, row_color};
pub use crate::render::surface::Surface;
pub use crate::text::builtin::BuiltinFont;
pub use crate::text::mask::{InkExtent, TextMask};
pub use crate::text::outline::OutlineFont;
pub use crate::text::resolver::{
    CaptionFont, FontFileProvider, FontProvider, FontResolver, SystemFontProvider,
};
