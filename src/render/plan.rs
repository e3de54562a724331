use crate::foundation::core::{Point, Rect, Viewport};

/// Backend-agnostic description of one frame.
///
/// Colors are straight (non-premultiplied) RGBA8; backends premultiply on
/// their side. Ops are painted in order over a cleared surface.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub viewport: Viewport,
    pub ops: Vec<DrawOp>,
}

/// A single draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Solid axis-aligned rectangle.
    FillRect { rect: Rect, rgba: [u8; 4] },
    /// Radial fade from `inner_rgba` at `center` to fully transparent at
    /// `radius`, composited over the whole surface.
    RadialGlow {
        center: Point,
        radius: f64,
        inner_rgba: [u8; 4],
    },
}

impl FramePlan {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn fill_rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count()
    }

    pub fn glow(&self) -> Option<(Point, f64)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::RadialGlow { center, radius, .. } => Some((*center, *radius)),
            DrawOp::FillRect { .. } => None,
        })
    }
}
