use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ShotError::font("x").to_string().contains("font error:"));
    assert!(
        ShotError::missing_source("docs/screenshots/a.png")
            .to_string()
            .contains("missing source: docs/screenshots/a.png")
    );
}

#[test]
fn decode_carries_path_and_source() {
    let source = image::ImageError::IoError(std::io::Error::other("truncated"));
    let err = ShotError::Decode {
        path: PathBuf::from("in/broken.png"),
        source,
    };
    let msg = err.to_string();
    assert!(msg.starts_with("decode error:"));
    assert!(msg.contains("in/broken.png"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
