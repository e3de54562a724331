use super::*;

#[test]
fn viewport_rect_and_emptiness() {
    let vp = Viewport::new(1280, 720);
    assert!(!vp.is_empty());
    assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 1280.0, 720.0));
    assert_eq!(vp.pixel_len(), 1280 * 720);
    assert!(Viewport::new(0, 720).is_empty());
}

#[test]
fn aspect_ratio_rejects_degenerate_sides() {
    assert!(AspectRatio::new(0.0, 9.0).is_err());
    assert!(AspectRatio::new(16.0, f64::NAN).is_err());
    let r = AspectRatio::new(21.0, 9.0).unwrap();
    assert!(r.value() > AspectRatio::LANDSCAPE_16_9.value());
}

#[test]
fn white_premultiplies_alpha() {
    let c = Rgba8Premul::white(0.03);
    assert_eq!(c.a, 8);
    assert_eq!(c.r, 8);
    assert_eq!(Rgba8Premul::white(0.0), Rgba8Premul::transparent());
    assert_eq!(Rgba8Premul::white(1.0).to_array(), [255, 255, 255, 255]);
}
