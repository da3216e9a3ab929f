use image::{Rgba, RgbaImage};

use super::*;
use crate::config::model::{FontConfig, ScreenshotJob};
use crate::foundation::core::CanvasSize;

fn small_config() -> ShotConfig {
    let mut cfg = ShotConfig::default();
    cfg.canvas = CanvasSize::new(160, 240);
    cfg.layout.top_padding = 12;
    cfg.layout.caption_font_size = 16;
    cfg.layout.caption_gap = 8;
    cfg.layout.screenshot_width = 100;
    cfg.layout.corner_radius = 6;
    cfg.layout.shadow_offset = 3;
    cfg.layout.shadow_blur = 4;
    cfg.font = FontConfig::builtin_only();
    cfg
}

fn scratch_root(name: &str) -> PathBuf {
    let root = PathBuf::from("target").join("unit_batch").join(name);
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn write_source(dir: &Path, name: &str) {
    std::fs::create_dir_all(dir).unwrap();
    RgbaImage::from_pixel(30, 60, Rgba([10, 200, 30, 255]))
        .save(dir.join(name))
        .unwrap();
}

#[test]
fn directories_resolve_under_root() {
    let d = BatchDriver::new(ShotConfig::default(), "/proj");
    assert_eq!(d.source_dir(), Path::new("/proj/docs/screenshots"));
    assert_eq!(d.output_dir(), Path::new("/proj/docs/appstore-screenshots"));
}

#[test]
fn default_root_is_the_crate_directory_not_the_cwd() {
    let root = project_root();
    assert!(root.is_absolute());
    assert!(root.join("Cargo.toml").is_file());

    let d = BatchDriver::for_project(ShotConfig::default());
    assert_eq!(d.source_dir(), root.join("docs").join("screenshots"));
    assert_eq!(d.output_dir(), root.join("docs").join("appstore-screenshots"));
}

#[test]
fn missing_sources_are_skipped_and_the_rest_rendered() {
    let root = scratch_root("skip");
    let cfg = small_config();
    let driver = BatchDriver::new(cfg.clone(), &root).with_strategy(GradientStrategy::Scalar);

    for job in cfg.jobs.iter().filter(|j| j.source != "deployments.png") {
        write_source(&driver.source_dir(), &job.source);
    }

    let report = driver.run().unwrap();
    assert_eq!(report.generated(), 3);
    assert_eq!(report.skipped, vec![driver.source_dir().join("deployments.png")]);

    let names: Vec<_> = report
        .rendered
        .iter()
        .map(|a| a.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "appstore_dashboard.png",
            "appstore_deployment-detail.png",
            "appstore_settings.png"
        ]
    );
    for asset in &report.rendered {
        assert!(asset.path.is_file());
        assert_eq!((asset.width, asset.height), (160, 240));
    }
    assert!(!driver.output_dir().join("appstore_deployments.png").exists());
}

#[test]
fn empty_source_dir_generates_nothing_but_creates_output_dir() {
    let root = scratch_root("empty");
    let driver = BatchDriver::new(small_config(), &root);
    let report = driver.run().unwrap();
    assert_eq!(report.generated(), 0);
    assert_eq!(report.skipped.len(), 4);
    assert!(driver.output_dir().is_dir());
}

#[test]
fn corrupt_source_aborts_the_run() {
    let root = scratch_root("corrupt");
    let mut cfg = small_config();
    cfg.jobs = vec![
        ScreenshotJob::new("bad.png", "Bad"),
        ScreenshotJob::new("good.png", "Good"),
    ];
    let driver = BatchDriver::new(cfg, &root);
    std::fs::create_dir_all(driver.source_dir()).unwrap();
    std::fs::write(driver.source_dir().join("bad.png"), b"nope").unwrap();
    write_source(&driver.source_dir(), "good.png");

    let err = driver.run().unwrap_err();
    assert!(matches!(err, ShotError::Decode { .. }), "{err}");
    assert!(!driver.output_dir().join("appstore_good.png").exists());
}

#[test]
fn invalid_config_fails_before_touching_disk() {
    let root = scratch_root("invalid");
    let mut cfg = small_config();
    cfg.canvas = CanvasSize::new(0, 10);
    let driver = BatchDriver::new(cfg, &root);
    assert!(matches!(driver.run(), Err(ShotError::Validation(_))));
    assert!(!driver.output_dir().exists());
}

#[test]
fn reruns_overwrite_with_identical_bytes() {
    let root = scratch_root("rerun");
    let mut cfg = small_config();
    cfg.jobs = vec![ScreenshotJob::new("one.png", "Once More")];
    let driver = BatchDriver::new(cfg, &root).with_strategy(GradientStrategy::Batch);
    write_source(&driver.source_dir(), "one.png");

    let out = driver.output_dir().join("appstore_one.png");
    driver.run().unwrap();
    let first = std::fs::read(&out).unwrap();
    driver.run().unwrap();
    assert_eq!(first, std::fs::read(&out).unwrap());
}

#[test]
fn directory_in_place_of_source_is_fatal_not_skipped() {
    let root = scratch_root("dir_source");
    let mut cfg = small_config();
    cfg.jobs = vec![ScreenshotJob::new("folder.png", "Folder")];
    let driver = BatchDriver::new(cfg, &root);
    std::fs::create_dir_all(driver.source_dir().join("folder.png")).unwrap();

    assert!(driver.run().is_err());
    assert!(!driver.output_dir().join("appstore_folder.png").exists());
}
