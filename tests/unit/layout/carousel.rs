use super::*;

fn sources(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Assets/Gaming/{i}.png")).collect()
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in 0..50 {
        let mut rng = Rng64::new(seed);
        let mut v: Vec<u32> = (0..17).collect();
        shuffle(&mut rng, &mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..17).collect::<Vec<_>>());
    }
}

#[test]
fn shuffle_handles_tiny_inputs() {
    let mut rng = Rng64::new(1);
    let mut empty: [u8; 0] = [];
    shuffle(&mut rng, &mut empty);
    let mut one = [42];
    shuffle(&mut rng, &mut one);
    assert_eq!(one, [42]);
}

#[test]
fn shuffle_reaches_every_position() {
    let mut first_seen = [false; 4];
    for seed in 0..200 {
        let mut rng = Rng64::new(seed);
        let mut v = [0usize, 1, 2, 3];
        shuffle(&mut rng, &mut v);
        first_seen[v[0]] = true;
    }
    assert!(first_seen.iter().all(|&s| s));
}

#[test]
fn duplicated_strip_is_seamless() {
    let src = sources(16);
    let layout = CarouselLayout::generate(&src, &mut Rng64::new(99));
    let n = src.len();
    assert_eq!(layout.items.len(), 2 * n);
    assert_eq!(layout.unique_len(), n);
    for i in 0..n {
        assert_eq!(layout.items[i].source, layout.items[i + n].source);
    }
}

#[test]
fn slot_geometry_stays_in_bounds() {
    for seed in 0..20 {
        let layout = CarouselLayout::generate(&sources(10), &mut Rng64::new(seed));
        for item in &layout.items {
            assert!((280.0..360.0).contains(&item.width_px));
            assert!((2.0..4.0).contains(&item.spacing_rem));
        }
    }
}

#[test]
fn empty_sources_give_empty_strip() {
    let layout = CarouselLayout::generate::<String>(&[], &mut Rng64::new(0));
    assert!(layout.is_empty());
    assert_eq!(layout.strip_width(16.0), 0.0);
}

#[test]
fn strip_width_sums_slots_and_margins() {
    let layout = CarouselLayout {
        items: vec![
            CarouselItem {
                source: "a".into(),
                width_px: 300.0,
                spacing_rem: 2.0,
            },
            CarouselItem {
                source: "a".into(),
                width_px: 320.0,
                spacing_rem: 3.0,
            },
        ],
    };
    assert_eq!(layout.strip_width(16.0), 300.0 + 32.0 + 320.0 + 48.0);
    assert_eq!(layout.slot_offsets(16.0), vec![0.0, 332.0]);
}

#[test]
fn carousel_caches_by_source_list() {
    let mut carousel = Carousel::new(Rng64::new(5), CarouselMotion::IMAGES);
    let a = sources(6);
    let first = carousel.layout(&a).clone();
    let again = carousel.layout(&a.clone()).clone();
    assert_eq!(first, again);

    let mut b = a.clone();
    b.push("Assets/Posters/Quiz.png".into());
    let other = carousel.layout(&b).clone();
    assert_eq!(other.items.len(), 14);

    carousel.reset();
    assert!(carousel.cached().is_none());
}

#[test]
fn motion_directions_and_wrap() {
    let left = CarouselMotion::IMAGES;
    assert_eq!(left.translate_fraction(Duration::ZERO), 0.0);
    assert_eq!(left.translate_fraction(Duration::from_secs(60)), -0.25);
    assert_eq!(left.translate_fraction(Duration::from_secs(120)), 0.0);
    assert_eq!(left.translate_fraction(Duration::from_secs(180)), -0.25);

    let right = CarouselMotion::VIDEOS;
    assert_eq!(right.translate_fraction(Duration::ZERO), -0.5);
    assert_eq!(right.translate_fraction(Duration::from_secs(70)), -0.25);
    assert_eq!(right.translate_fraction(Duration::from_secs(140)), -0.5);
    assert_eq!(right.translate_px(Duration::from_secs(70), 1000.0), -250.0);
}

#[test]
fn zero_period_holds_start() {
    let m = CarouselMotion {
        direction: ScrollDirection::Right,
        period: Duration::ZERO,
    };
    assert_eq!(m.translate_fraction(Duration::from_secs(3)), -0.5);
}

#[test]
fn slots_switch_fit_once_media_loads() {
    let mut image = slot_fit(MediaKind::Image);
    assert_eq!(image.mode(), FitMode::Contain);
    assert_eq!(image.on_loaded(1600.0, 900.0), FitMode::Cover);

    let mut video = slot_fit(MediaKind::Video);
    assert_eq!(video.mode(), FitMode::Cover);
    assert_eq!(video.on_loaded(1440.0, 1080.0), FitMode::Contain);
    assert!(video.is_loaded());

    let mut wide = slot_fit(MediaKind::Video);
    assert_eq!(wide.on_loaded(2560.0, 1080.0), FitMode::Cover);
}

#[test]
fn every_slot_gets_its_own_fit() {
    let layout = CarouselLayout::generate(&sources(3), &mut Rng64::new(4));
    let mut fits = layout.slot_fits(MediaKind::Video);
    assert_eq!(fits.len(), 6);
    fits[2].on_loaded(4.0, 3.0);
    assert_eq!(fits[2].mode(), FitMode::Contain);
    assert!(fits.iter().enumerate().all(|(i, f)| i == 2 || f.mode() == FitMode::Cover));
}
