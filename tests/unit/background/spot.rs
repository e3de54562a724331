use super::*;

#[test]
fn generation_count_is_four_to_six() {
    let mut seen = [false; 7];
    for seed in 0..500 {
        let mut rng = Rng64::new(seed);
        let spots = generate_spots(&mut rng, Viewport::new(1920, 1080));
        assert!((4..=6).contains(&spots.len()), "got {}", spots.len());
        seen[spots.len()] = true;
    }
    assert!(seen[4] && seen[5] && seen[6]);
}

#[test]
fn spots_lie_inside_viewport_with_fixed_constants() {
    let mut rng = Rng64::new(42);
    let vp = Viewport::new(800, 600);
    for s in generate_spots(&mut rng, vp) {
        assert!((0.0..800.0).contains(&s.x));
        assert!((0.0..600.0).contains(&s.y));
        assert_eq!(s.size, 250.0);
        assert_eq!(s.opacity, 0.03);
        assert_eq!(s.grid_size, 60.0);
        assert_eq!(s.line_width, 1.0);
    }
}

#[test]
fn bounds_clamp_to_surface_edges() {
    let vp = Viewport::new(300, 200);
    let b = GridSpot::at(10.0, 190.0).clamped_bounds(vp);
    assert_eq!(b, Rect::new(0.0, 65.0, 135.0, 200.0));
}

#[test]
fn grid_lines_sit_on_multiples_within_bounds() {
    let vp = Viewport::new(1000, 1000);
    let spot = GridSpot::at(500.0, 500.0);
    // Bounds are [375, 625) on both axes: multiples 420, 480, 540, 600.
    let lines = spot.grid_lines(vp);
    let xs: Vec<f64> = lines
        .iter()
        .filter_map(|l| match *l {
            GridLine::Vertical { x, y0, y1 } => {
                assert_eq!((y0, y1), (375.0, 625.0));
                Some(x)
            }
            GridLine::Horizontal { .. } => None,
        })
        .collect();
    assert_eq!(xs, vec![420.0, 480.0, 540.0, 600.0]);
    assert_eq!(lines.len(), 8);
}

#[test]
fn clamped_spot_at_origin_includes_zero_line() {
    let lines = GridSpot::at(0.0, 0.0).grid_lines(Viewport::new(500, 500));
    assert!(lines.contains(&GridLine::Vertical {
        x: 0.0,
        y0: 0.0,
        y1: 125.0
    }));
}

#[test]
fn stroke_rect_is_centered_on_line() {
    let r = GridLine::Vertical {
        x: 60.0,
        y0: 0.0,
        y1: 10.0,
    }
    .stroke_rect(1.0);
    assert_eq!(r, Rect::new(59.5, 0.0, 60.5, 10.0));
}

#[test]
fn empty_viewport_produces_no_lines() {
    let spot = GridSpot::at(0.0, 0.0);
    assert!(spot.grid_lines(Viewport::new(0, 0)).is_empty());
}
