use crate::{
    background::{config::GlowConfig, spot::GridSpot},
    foundation::core::{Point, Rgba8Premul, Viewport},
    render::plan::{DrawOp, FramePlan},
};

/// Build the draw list for one background frame: every spot's grid lines,
/// then the optional glow centered at `pointer`.
pub fn compile_background(
    viewport: Viewport,
    spots: &[GridSpot],
    glow: Option<(Point, GlowConfig)>,
) -> FramePlan {
    let mut plan = FramePlan::new(viewport);
    for spot in spots {
        let rgba = white_rgba(spot.opacity);
        for line in spot.grid_lines(viewport) {
            plan.push(DrawOp::FillRect {
                rect: line.stroke_rect(spot.line_width),
                rgba,
            });
        }
    }

    if let Some((center, glow)) = glow {
        plan.push(DrawOp::RadialGlow {
            center,
            radius: glow.radius,
            inner_rgba: white_rgba(glow.inner_opacity),
        });
    }
    plan
}

fn white_rgba(opacity: f64) -> [u8; 4] {
    [255, 255, 255, Rgba8Premul::white(opacity).a]
}
