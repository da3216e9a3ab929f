use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::config::model::ShotConfig;
use crate::foundation::error::{ShotError, ShotResult};
use crate::pipeline::compositor::{Compositor, RenderedAsset};
use crate::render::gradient::GradientStrategy;

/// Outcome of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Assets written, in job order.
    pub rendered: Vec<RenderedAsset>,
    /// Source files that did not exist and were skipped.
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    /// Number of assets written.
    pub fn generated(&self) -> usize {
        self.rendered.len()
    }
}

/// Project root the tool belongs to: the directory holding its `Cargo.toml`.
///
/// Resolved at build time, so the default directories do not depend on where the tool is run
/// from.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Runs every configured job against a project root.
///
/// A missing source is a warning and the job is skipped. Any other failure aborts the run.
#[derive(Clone, Debug)]
pub struct BatchDriver {
    config: ShotConfig,
    root: PathBuf,
    strategy: GradientStrategy,
}

impl BatchDriver {
    /// Driver for `config` with directories resolved under `root`.
    pub fn new(config: ShotConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            strategy: GradientStrategy::detect(),
        }
    }

    /// Driver for `config` with directories resolved under [`project_root`].
    pub fn for_project(config: ShotConfig) -> Self {
        Self::new(config, project_root())
    }

    /// Override the gradient strategy picked by [`GradientStrategy::detect`].
    pub fn with_strategy(mut self, strategy: GradientStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ShotConfig {
        &self.config
    }

    /// Directory source screenshots are read from.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.source_dir)
    }

    /// Directory assets are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.output_dir)
    }

    /// Render every job whose source exists.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn run(&self) -> ShotResult<BatchReport> {
        self.config.validate()?;
        let compositor = Compositor::new(&self.config, self.strategy)?;

        let source_dir = self.source_dir();
        let output_dir = self.output_dir();
        create_output_dir(&output_dir)?;

        let canvas = self.config.canvas;
        tracing::info!("Source: {}", source_dir.display());
        tracing::info!("Output: {}", output_dir.display());
        tracing::info!("Target size: {}x{}", canvas.width, canvas.height);
        tracing::debug!(font = %compositor.font().describe(), strategy = ?self.strategy);

        let mut report = BatchReport::default();
        for job in &self.config.jobs {
            let source = source_dir.join(&job.source);
            if !source.exists() {
                tracing::warn!("Warning: Source file not found: {}", source.display());
                report.skipped.push(source);
                continue;
            }
            let output = output_dir.join(self.config.output_name(job));
            let asset = compositor.render(&source, &job.caption, &output)?;
            report.rendered.push(asset);
        }

        tracing::info!(
            "Done! Generated {} App Store screenshots.",
            report.generated()
        );
        Ok(report)
    }
}

fn create_output_dir(dir: &Path) -> ShotResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))
        .map_err(ShotError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
