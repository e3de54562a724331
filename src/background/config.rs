use std::time::Duration;

/// When the animation repaints its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedrawPolicy {
    /// Paint only when the surface is dirty (first frame, after a resize).
    /// The frame loop keeps running so the next dirty state is picked up.
    OnDirty,
    /// Paint on every frame.
    EveryFrame,
}

/// Pointer-following radial highlight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowConfig {
    /// Outer radius in pixels; the inner radius is always 0.
    pub radius: f64,
    /// White opacity at the pointer, fading linearly to 0 at `radius`.
    pub inner_opacity: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            radius: 150.0,
            inner_opacity: 0.02,
        }
    }
}

/// Tuning for a [`BackgroundAnimation`](crate::BackgroundAnimation).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundConfig {
    /// Collapse resize bursts into one update after this quiet period.
    /// `None` applies every resize immediately.
    pub resize_debounce: Option<Duration>,
    pub redraw: RedrawPolicy,
    /// Also track the pointer and draw a glow under it.
    pub glow: Option<GlowConfig>,
}

impl BackgroundConfig {
    pub const LANDING_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

    /// Landing screen: static grid, repainted only after (debounced) resizes.
    pub fn landing() -> Self {
        Self {
            resize_debounce: Some(Self::LANDING_RESIZE_DEBOUNCE),
            redraw: RedrawPolicy::OnDirty,
            glow: None,
        }
    }

    /// Portfolio screen: grid plus cursor glow, repainted every frame.
    pub fn main_view() -> Self {
        Self {
            resize_debounce: None,
            redraw: RedrawPolicy::EveryFrame,
            glow: Some(GlowConfig::default()),
        }
    }
}
