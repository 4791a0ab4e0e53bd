use super::*;
use crate::animation::ease::Ease;
use crate::morph::shape::FrameShape;

#[test]
fn default_config_validates_and_has_stock_clips() {
    let cfg = HeroConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.playlist.len(), 4);
    assert_eq!(cfg.transition.duration_secs, 1.0);
    assert_eq!(cfg.morph.to, FrameShape::skewed());
}

#[test]
fn minimal_json_fills_section_defaults() {
    let cfg = HeroConfig::from_reader(
        r#"{"playlist": [{"id": 7, "src": "a.mp4", "poster": "a.jpg"}]}"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.playlist.len(), 1);
    assert_eq!(cfg.transition, TransitionConfig::default());
    assert_eq!(cfg.morph, MorphConfig::default());
}

#[test]
fn partial_sections_merge_with_defaults() {
    let cfg = HeroConfig::from_reader(
        r#"{
            "playlist": [{"id": 1, "src": "a.mp4", "poster": "a.jpg"}],
            "transition": {"duration_secs": 0.5, "ease": "power1.inOut"},
            "morph": {"region": {"start": "top top", "end": "bottom top"}}
        }"#
        .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.transition.duration_secs, 0.5);
    assert_eq!(cfg.transition.ease, Ease::InOutQuad);
    assert_eq!(cfg.transition.rest_size_px, 256.0);
    assert_eq!(cfg.morph.region.start.element, 0.0);
    assert_eq!(cfg.morph.region.end.element, 1.0);
    assert_eq!(cfg.morph.from, FrameShape::full_rect());
}

#[test]
fn parse_errors_are_config_errors() {
    let err = HeroConfig::from_reader(r#"{"playlist": []}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("config error:"));
    assert!(err.to_string().contains("at least one clip"));

    let err = HeroConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open hero config"));
}

#[test]
fn validate_catches_bad_transition_values() {
    let mut cfg = HeroConfig::default();
    cfg.transition.duration_secs = -1.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn pretty_json_reparses_to_the_same_config() {
    let cfg = HeroConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    let back = HeroConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}
