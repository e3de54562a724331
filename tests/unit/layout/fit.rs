use super::*;

#[test]
fn portrait_box_covers_narrow_media() {
    let p = FitPolicy::for_container(AspectRatio::PORTRAIT_9_16);
    assert!(p.is_portrait());
    assert_eq!(p.decide(4.0, 3.0), Some(FitMode::Contain));
    assert_eq!(p.decide(2.0, 3.0), Some(FitMode::Contain));
    assert_eq!(p.decide(1.0, 2.0), Some(FitMode::Cover));
    assert_eq!(p.decide(9.0, 16.0), Some(FitMode::Contain));
}

#[test]
fn landscape_box_covers_wide_media() {
    let p = FitPolicy::for_container(AspectRatio::LANDSCAPE_16_9);
    assert_eq!(p.decide(21.0, 9.0), Some(FitMode::Cover));
    assert_eq!(p.decide(4.0, 3.0), Some(FitMode::Contain));
    assert_eq!(p.decide(1920.0, 1080.0), Some(FitMode::Contain));
}

#[test]
fn carousel_tile_covers_exact_ratio() {
    let p = FitPolicy::carousel_tile();
    assert_eq!(p.decide(1920.0, 1080.0), Some(FitMode::Cover));
    assert_eq!(p.decide(1080.0, 1080.0), Some(FitMode::Contain));
}

#[test]
fn degenerate_sizes_are_rejected() {
    let p = FitPolicy::for_container(AspectRatio::LANDSCAPE_16_9);
    assert_eq!(p.decide(0.0, 10.0), None);
    assert_eq!(p.decide(10.0, 0.0), None);
    assert_eq!(p.decide(f64::NAN, 10.0), None);
    assert_eq!(p.decide(f64::INFINITY, 10.0), None);
}

#[test]
fn media_fit_switches_on_load_and_keeps_default_on_error() {
    let policy = FitPolicy::for_container(AspectRatio::PORTRAIT_9_16);
    let mut fit = MediaFit::new(policy, FitMode::Cover);
    assert_eq!(fit.mode(), FitMode::Cover);
    assert!(!fit.is_loaded());

    assert_eq!(fit.on_loaded(1600.0, 1200.0), FitMode::Contain);
    assert!(fit.is_loaded());

    let mut failed = MediaFit::new(policy, FitMode::Cover);
    failed.on_error();
    assert_eq!(failed.mode(), FitMode::Cover);
    assert_eq!(failed.on_loaded(0.0, 0.0), FitMode::Cover);
    assert!(!failed.is_loaded());
}

#[test]
fn css_keywords() {
    assert_eq!(FitMode::Cover.as_css(), "cover");
    assert_eq!(FitMode::Contain.as_css(), "contain");
}
