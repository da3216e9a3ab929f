use super::*;

#[test]
fn default_is_the_reference_instance() {
    let cfg = ShotConfig::default();
    assert_eq!(cfg.canvas, CanvasSize::new(1320, 2868));
    assert_eq!(cfg.gradient.top, Rgb8::new(107, 22, 237));
    assert_eq!(cfg.gradient.bottom, Rgb8::new(90, 18, 199));
    assert_eq!(cfg.layout.screenshot_width, 1100);
    assert_eq!(cfg.jobs.len(), 4);
    assert_eq!(cfg.jobs[0].caption, "Your Cloud at a Glance");
    assert_eq!(cfg.font.style, FontStyle::Monospace);
    cfg.validate().unwrap();
}

#[test]
fn defaults_roundtrip_through_json() {
    let cfg = ShotConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    let back = ShotConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r##"{
        "canvas": { "width": 200, "height": 400 },
        "layout": { "screenshot_width": 120 },
        "gradient": { "top": "#000000" },
        "jobs": [ { "source": "a.png", "caption": "Hello" } ]
    }"##;
    let cfg = ShotConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.canvas, CanvasSize::new(200, 400));
    assert_eq!(cfg.layout.screenshot_width, 120);
    assert_eq!(cfg.layout.corner_radius, 44);
    assert_eq!(cfg.gradient.top, Rgb8::new(0, 0, 0));
    assert_eq!(cfg.gradient.bottom, GradientSpec::default().bottom);
    assert_eq!(cfg.jobs, vec![ScreenshotJob::new("a.png", "Hello")]);
    assert_eq!(cfg.paths, PathsConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let json = r#"{ "canvas": { "width": 1, "height": 1 }, "bogus": 1 }"#;
    let err = ShotConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn validate_rejects_zero_sizes_and_unsafe_names() {
    let mut cfg = ShotConfig::default();
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.layout.screenshot_width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.jobs.push(ScreenshotJob::new("../escape.png", "nope"));
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.paths.output_prefix = "sub/dir_".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.jobs.clear();
    cfg.paths.output_prefix.clear();
    cfg.validate().unwrap();
}

#[test]
fn output_name_prefixes_source() {
    let cfg = ShotConfig::default();
    assert_eq!(cfg.output_name(&cfg.jobs[1]), "appstore_deployments.png");
}

#[test]
fn candidates_follow_style() {
    let font = FontConfig::default();
    assert!(
        font.candidates(FontStyle::Monospace)[0]
            .to_string_lossy()
            .contains("SFMono")
    );
    assert!(
        font.candidates(FontStyle::SansSerif)[0]
            .to_string_lossy()
            .contains("SFNS")
    );
    assert!(FontConfig::builtin_only().monospace.is_empty());
}

#[test]
fn validate_bounds_pixel_dimensions() {
    let mut cfg = ShotConfig::default();
    cfg.layout.shadow_blur = u32::MAX - 1;
    assert!(matches!(cfg.validate(), Err(ShotError::Validation(_))));

    let mut cfg = ShotConfig::default();
    cfg.canvas.height = MAX_SIDE + 1;
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.layout.caption_font_size = u32::MAX;
    assert!(cfg.validate().is_err());

    let mut cfg = ShotConfig::default();
    cfg.layout.corner_radius = MAX_SIDE;
    cfg.layout.shadow_blur = MAX_SIDE;
    cfg.validate().unwrap();
}
