use super::*;

#[test]
fn square_and_cover_constructors() {
    let rest = Footprint::square(256.0, 0.5);
    assert_eq!(rest.size, Size::new(256.0, 256.0));
    assert_eq!(rest.visual_size(), Size::new(128.0, 128.0));

    let full = Footprint::cover(Size::new(1920.0, 1080.0));
    assert_eq!(full.scale, 1.0);
    assert_eq!(full.visual_size(), Size::new(1920.0, 1080.0));
}

#[test]
fn footprint_lerp_is_componentwise() {
    let a = Footprint::square(200.0, 0.5);
    let b = Footprint::cover(Size::new(1000.0, 600.0));
    let mid = Footprint::lerp(&a, &b, 0.5);
    assert_eq!(mid.scale, 0.75);
    assert_eq!(mid.size, Size::new(600.0, 400.0));
}

#[test]
fn overlay_geometry_serializes_flat() {
    let g = OverlayGeometry {
        footprint: Footprint::square(256.0, 0.5),
        visible: false,
        playing: false,
    };
    let v = serde_json::to_value(g).unwrap();
    assert_eq!(v["scale"], 0.5);
    assert_eq!(v["size"]["width"], 256.0);
    assert_eq!(v["visible"], false);
}
