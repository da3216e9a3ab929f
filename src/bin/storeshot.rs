use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::Level;

use storeshot::{BatchDriver, GradientStrategy, ShotConfig, project_root};

#[derive(Parser, Debug)]
#[command(name = "storeshot", version, about = "Generate App Store screenshots")]
struct Cli {
    /// Project root; source and output directories are resolved under it.
    /// Defaults to the directory this tool was built from.
    #[arg(long)]
    root: Option<PathBuf>,

    /// JSON configuration overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gradient fill strategy.
    #[arg(long, value_enum, default_value_t = GradientArg::Auto)]
    gradient: GradientArg,

    /// Print the effective configuration as JSON and exit.
    #[arg(long, default_value_t = false)]
    print_config: bool,

    /// Debug-level logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GradientArg {
    Auto,
    Scalar,
    Batch,
}

impl GradientArg {
    fn strategy(self) -> GradientStrategy {
        match self {
            Self::Auto => GradientStrategy::detect(),
            Self::Scalar => GradientStrategy::Scalar,
            Self::Batch => GradientStrategy::Batch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ShotConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ShotConfig::default(),
    };

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config).context("serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let root = cli.root.unwrap_or_else(project_root);
    BatchDriver::new(config, root)
        .with_strategy(cli.gradient.strategy())
        .run()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_level(false)
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .init();
}
