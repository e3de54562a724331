use crate::foundation::{
    core::{Rect, Viewport},
    rng::Rng64,
};

/// Side length of a spot's square patch, in pixels.
pub const SPOT_SIZE: f64 = 250.0;
/// Stroke opacity of the grid lines.
pub const SPOT_OPACITY: f64 = 0.03;
/// Distance between grid lines, in pixels.
pub const SPOT_GRID_SIZE: f64 = 60.0;
/// Grid line thickness, in pixels.
pub const SPOT_LINE_WIDTH: f64 = 1.0;

/// Fewest spots a generation produces.
pub const MIN_SPOTS: usize = 4;
/// Number of distinct spot counts above [`MIN_SPOTS`] (so 4..=6).
pub const SPOT_COUNT_SPREAD: usize = 3;

/// A faint patch of grid lines at a fixed random position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSpot {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub grid_size: f64,
    pub line_width: f64,
}

/// One straight grid line, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridLine {
    Vertical { x: f64, y0: f64, y1: f64 },
    Horizontal { y: f64, x0: f64, x1: f64 },
}

impl GridLine {
    /// The filled rectangle a stroke of `width` covers.
    pub fn stroke_rect(self, width: f64) -> Rect {
        let h = width / 2.0;
        match self {
            Self::Vertical { x, y0, y1 } => Rect::new(x - h, y0, x + h, y1),
            Self::Horizontal { y, x0, x1 } => Rect::new(x0, y - h, x1, y + h),
        }
    }
}

impl GridSpot {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: SPOT_SIZE,
            opacity: SPOT_OPACITY,
            grid_size: SPOT_GRID_SIZE,
            line_width: SPOT_LINE_WIDTH,
        }
    }

    /// The spot's square clamped to the surface.
    pub fn clamped_bounds(&self, viewport: Viewport) -> Rect {
        let half = self.size / 2.0;
        let (w, h) = (f64::from(viewport.width), f64::from(viewport.height));
        Rect::new(
            (self.x - half).max(0.0),
            (self.y - half).max(0.0),
            (self.x + half).min(w),
            (self.y + half).min(h),
        )
    }

    /// Vertical lines first, then horizontal ones, at every multiple of
    /// `grid_size` inside the clamped bounds (`[start, end)` on each axis).
    pub fn grid_lines(&self, viewport: Viewport) -> Vec<GridLine> {
        let b = self.clamped_bounds(viewport);
        if self.grid_size <= 0.0 || b.width() <= 0.0 || b.height() <= 0.0 {
            return Vec::new();
        }

        let mut lines = Vec::new();
        for x in grid_multiples(b.x0, b.x1, self.grid_size) {
            lines.push(GridLine::Vertical {
                x,
                y0: b.y0,
                y1: b.y1,
            });
        }
        for y in grid_multiples(b.y0, b.y1, self.grid_size) {
            lines.push(GridLine::Horizontal {
                y,
                x0: b.x0,
                x1: b.x1,
            });
        }
        lines
    }
}

fn grid_multiples(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (start / step).ceil() as i64;
    (first..)
        .map(move |k| k as f64 * step)
        .take_while(move |&v| v < end)
}

/// Generate `4 + floor(r * 3)` spots uniformly inside `viewport`.
pub fn generate_spots(rng: &mut Rng64, viewport: Viewport) -> Vec<GridSpot> {
    let count = MIN_SPOTS + (rng.next_f64_01() * SPOT_COUNT_SPREAD as f64).floor() as usize;
    let (w, h) = (f64::from(viewport.width), f64::from(viewport.height));
    (0..count)
        .map(|_| {
            let x = rng.next_f64_01() * w;
            let y = rng.next_f64_01() * h;
            GridSpot::at(x, y)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/background/spot.rs"]
mod tests;
