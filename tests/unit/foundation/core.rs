use super::*;

#[test]
fn hex_parse_accepts_both_cases_and_optional_hash() {
    assert_eq!(Rgb8::parse_hex("#6B16ED").unwrap(), Rgb8::new(107, 22, 237));
    assert_eq!(Rgb8::parse_hex("5a12c7").unwrap(), Rgb8::new(90, 18, 199));
}

#[test]
fn hex_parse_rejects_bad_input() {
    assert!(Rgb8::parse_hex("#12345").is_err());
    assert!(Rgb8::parse_hex("#GG0000").is_err());
    assert!(Rgb8::parse_hex("#ééé").is_err());
}

#[test]
fn serde_accepts_hex_and_array() {
    let hex: Rgb8 = serde_json::from_str("\"#6B16ED\"").unwrap();
    let arr: Rgb8 = serde_json::from_str("[107, 22, 237]").unwrap();
    assert_eq!(hex, arr);
    assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#6B16ED\"");
}
