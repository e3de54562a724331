use super::*;
use crate::foundation::core::{Point, Rect};

fn backend(clear: Option<[u8; 4]>) -> CpuBackend {
    CpuBackend::new(RenderSettings { clear_rgba: clear })
}

#[test]
fn fill_rect_paints_inside_only() {
    let mut b = backend(Some([10, 10, 10, 255]));
    let mut plan = FramePlan::new(Viewport::new(16, 16));
    plan.push(DrawOp::FillRect {
        rect: Rect::new(4.0, 4.0, 8.0, 8.0),
        rgba: [255, 255, 255, 255],
    });

    let frame = b.render_plan(&plan).unwrap();
    assert_eq!((frame.width, frame.height), (16, 16));
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    assert_eq!(frame.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([10, 10, 10, 255]));
    assert_eq!(frame.pixel(12, 12), Some([10, 10, 10, 255]));
}

#[test]
fn translucent_ops_keep_an_opaque_clear_opaque() {
    let mut b = backend(Some([10, 10, 10, 255]));
    let mut plan = FramePlan::new(Viewport::new(32, 32));
    plan.push(DrawOp::FillRect {
        rect: Rect::new(3.5, 0.0, 4.5, 32.0),
        rgba: [5, 5, 5, 5],
    });
    plan.push(DrawOp::RadialGlow {
        center: Point::new(16.0, 16.0),
        radius: 12.0,
        inner_rgba: [5, 5, 5, 5],
    });
    let frame = b.render_plan(&plan).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    let line = frame.pixel(4, 2).unwrap();
    assert!(line[0] >= 10 && line[0] <= 15, "line {line:?}");
}

#[test]
fn frames_do_not_accumulate_between_renders() {
    let mut b = backend(None);
    let mut plan = FramePlan::new(Viewport::new(8, 8));
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 4.0, 4.0),
        rgba: [255, 255, 255, 255],
    });
    let first = b.render_plan(&plan).unwrap();
    assert_eq!(first.pixel(1, 1).map(|p| p[3]), Some(255));

    let empty = FramePlan::new(Viewport::new(8, 8));
    let second = b.render_plan(&empty).unwrap();
    assert!(second.data.iter().all(|&v| v == 0));
}

#[test]
fn glow_is_brightest_at_center_and_absent_far_away() {
    let mut b = backend(None);
    let mut plan = FramePlan::new(Viewport::new(64, 64));
    plan.push(DrawOp::RadialGlow {
        center: Point::new(32.0, 32.0),
        radius: 16.0,
        inner_rgba: [255, 255, 255, 255],
    });
    let frame = b.render_plan(&plan).unwrap();
    let center = frame.pixel(32, 32).unwrap()[3];
    let edge = frame.pixel(32, 45).unwrap()[3];
    assert!(center > 128, "center alpha {center}");
    assert!(edge < center);
    assert_eq!(frame.pixel(2, 2).unwrap()[3], 0);
}

#[test]
fn viewport_resize_reallocates_surface() {
    let mut b = backend(None);
    let a = b.render_plan(&FramePlan::new(Viewport::new(8, 4))).unwrap();
    let c = b.render_plan(&FramePlan::new(Viewport::new(3, 5))).unwrap();
    assert_eq!(a.data.len(), 8 * 4 * 4);
    assert_eq!(c.data.len(), 3 * 5 * 4);
}

#[test]
fn empty_viewport_yields_empty_frame() {
    let mut b = backend(None);
    let frame = b.render_plan(&FramePlan::new(Viewport::new(0, 10))).unwrap();
    assert!(frame.data.is_empty());
}

#[test]
fn oversized_viewport_is_rejected() {
    let mut b = backend(None);
    assert!(b.render_plan(&FramePlan::new(Viewport::new(70_000, 1))).is_err());
}

#[test]
fn radial_fade_sprite_is_symmetric_and_bounded() {
    let bytes = radial_fade_premul(20, 10.0, [255, 255, 255, 200]);
    let alpha = |x: usize, y: usize| bytes[(y * 20 + x) * 4 + 3];
    assert_eq!(alpha(9, 9), alpha(10, 10));
    assert_eq!(alpha(0, 0), 0);
    assert!(alpha(10, 10) <= 200);
    assert!(alpha(10, 10) > alpha(10, 15));
}
