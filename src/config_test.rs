#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Granularity
// =============================================================

#[test]
fn granularity_default_is_whole() {
    assert_eq!(Granularity::default(), Granularity::Whole);
}

#[test]
fn granularity_from_flags_half_takes_priority() {
    assert_eq!(Granularity::from_flags(true, true), Granularity::Half);
    assert_eq!(Granularity::from_flags(true, false), Granularity::Half);
}

#[test]
fn granularity_from_flags_float_only() {
    assert_eq!(Granularity::from_flags(false, true), Granularity::Continuous);
}

#[test]
fn granularity_from_flags_none_is_whole() {
    assert_eq!(Granularity::from_flags(false, false), Granularity::Whole);
}

#[test]
fn granularity_is_fractional() {
    assert!(!Granularity::Whole.is_fractional());
    assert!(Granularity::Half.is_fractional());
    assert!(Granularity::Continuous.is_fractional());
}

#[test]
fn granularity_serializes_lowercase() {
    let s = serde_json::to_string(&Granularity::Continuous).expect("serialize");
    assert_eq!(s, "\"continuous\"");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn config_defaults() {
    let config = RatingConfig::default();
    assert_eq!(config.min_rating, 0);
    assert_eq!(config.max_rating, 5);
    assert_eq!(config.granularity, Granularity::Whole);
    assert_eq!(config.min_icon_size, Size::new(5.0, 5.0));
    assert!(config.editable);
    assert_eq!(config.icon_count(), 5);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let config = RatingConfig::from_json("{}").expect("config");
    assert_eq!(config, RatingConfig::default());
}

#[test]
fn from_json_reads_all_fields() {
    let config = RatingConfig::from_json(
        r#"{
            "min_rating": 1,
            "max_rating": 10,
            "granularity": "half",
            "min_icon_size": { "width": 12, "height": 14 },
            "editable": false
        }"#,
    )
    .expect("config");
    assert_eq!(config.min_rating, 1);
    assert_eq!(config.max_rating, 10);
    assert_eq!(config.granularity, Granularity::Half);
    assert_eq!(config.min_icon_size, Size::new(12.0, 14.0));
    assert!(!config.editable);
}

#[test]
fn from_json_malformed_is_parse_error() {
    let err = RatingConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_unknown_granularity_is_parse_error() {
    let err = RatingConfig::from_json(r#"{"granularity": "quarter"}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_negative_min_icon_size_rejected() {
    let err = RatingConfig::from_json(r#"{"min_icon_size": {"width": -1, "height": 5}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidMinIconSize { .. }));
    assert!(err.to_string().contains("-1x5"));
}

#[test]
fn from_json_normalizes_inverted_bounds() {
    let config = RatingConfig::from_json(r#"{"min_rating": 7, "max_rating": 3}"#).expect("config");
    assert_eq!(config.min_rating, 7);
    assert_eq!(config.max_rating, 7);
}

// =============================================================
// normalized / clamp
// =============================================================

#[test]
fn normalized_leaves_ordered_bounds_alone() {
    let config = RatingConfig { min_rating: 1, max_rating: 4, ..RatingConfig::default() };
    assert_eq!(config.normalized(), config);
}

#[test]
fn normalized_raises_max_to_min() {
    let config = RatingConfig { min_rating: 3, max_rating: 1, ..RatingConfig::default() }.normalized();
    assert_eq!(config.max_rating, 3);
}

#[test]
fn clamp_bounds_both_ends() {
    let config = RatingConfig { min_rating: 1, max_rating: 5, ..RatingConfig::default() };
    assert_eq!(config.clamp(0.2), 1.0);
    assert_eq!(config.clamp(3.7), 3.7);
    assert_eq!(config.clamp(9.0), 5.0);
}

#[test]
fn clamp_tolerates_unnormalized_bounds() {
    let config = RatingConfig { min_rating: 4, max_rating: 2, ..RatingConfig::default() };
    assert_eq!(config.clamp(0.0), 4.0);
    assert_eq!(config.clamp(10.0), 4.0);
}
