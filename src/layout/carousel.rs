use std::time::Duration;

use crate::{
    assets::media::MediaKind,
    foundation::{math::fingerprint_strs, rng::Rng64},
    layout::fit::{FitMode, FitPolicy, MediaFit},
};

/// Smallest tile width in pixels.
pub const TILE_WIDTH_MIN: f64 = 280.0;
/// Width range above [`TILE_WIDTH_MIN`] a tile can draw.
pub const TILE_WIDTH_SPREAD: f64 = 80.0;
/// Smallest trailing gap after a tile, in rem.
pub const TILE_SPACING_MIN_REM: f64 = 2.0;
pub const TILE_SPACING_SPREAD_REM: f64 = 2.0;

/// Fisher-Yates: `i` runs from the last index down to 1, swapping with a
/// uniform index in `0..=i`.
pub fn shuffle<T>(rng: &mut Rng64, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index_inclusive(i);
        items.swap(i, j);
    }
}

/// Fit state of a freshly mounted carousel slot. Images start letterboxed and
/// videos start cropped; both switch on the 16:9 rule once their natural size
/// is known.
pub fn slot_fit(kind: MediaKind) -> MediaFit {
    let default = match kind {
        MediaKind::Image => FitMode::Contain,
        MediaKind::Video => FitMode::Cover,
    };
    MediaFit::new(FitPolicy::carousel_tile(), default)
}

/// One slot of a carousel strip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselItem {
    pub source: String,
    /// In `[280, 360)`.
    pub width_px: f64,
    /// Right margin in rem, in `[2, 4)`.
    pub spacing_rem: f64,
}

impl CarouselItem {
    /// Horizontal room the slot takes, margin included.
    pub fn advance_px(&self, rem_px: f64) -> f64 {
        self.width_px + self.spacing_rem * rem_px
    }
}

/// A shuffled source list laid out twice back to back, so that translating
/// the strip by half its width lands on an identical sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselLayout {
    pub items: Vec<CarouselItem>,
}

impl CarouselLayout {
    /// Shuffle `sources` once, duplicate the order, then draw width and
    /// spacing independently for each of the `2N` slots.
    pub fn generate<S: AsRef<str>>(sources: &[S], rng: &mut Rng64) -> Self {
        let mut order: Vec<&str> = sources.iter().map(AsRef::as_ref).collect();
        shuffle(rng, &mut order);

        let items = order
            .iter()
            .chain(order.iter())
            .map(|&source| CarouselItem {
                source: source.to_owned(),
                width_px: rng.next_range(TILE_WIDTH_MIN, TILE_WIDTH_MIN + TILE_WIDTH_SPREAD),
                spacing_rem: rng.next_range(
                    TILE_SPACING_MIN_REM,
                    TILE_SPACING_MIN_REM + TILE_SPACING_SPREAD_REM,
                ),
            })
            .collect();
        Self { items }
    }

    /// Number of distinct sources (half the slots).
    pub fn unique_len(&self) -> usize {
        self.items.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One fresh fit state per slot.
    pub fn slot_fits(&self, kind: MediaKind) -> Vec<MediaFit> {
        vec![slot_fit(kind); self.items.len()]
    }

    pub fn strip_width(&self, rem_px: f64) -> f64 {
        self.items.iter().map(|i| i.advance_px(rem_px)).sum()
    }

    /// Left edge of every slot, relative to the strip start.
    pub fn slot_offsets(&self, rem_px: f64) -> Vec<f64> {
        let mut x = 0.0;
        self.items
            .iter()
            .map(|item| {
                let at = x;
                x += item.advance_px(rem_px);
                at
            })
            .collect()
    }
}

/// A carousel that keeps its layout until the source list changes.
#[derive(Clone, Debug)]
pub struct Carousel {
    rng: Rng64,
    motion: CarouselMotion,
    cached: Option<(u64, CarouselLayout)>,
}

impl Carousel {
    pub fn new(rng: Rng64, motion: CarouselMotion) -> Self {
        Self {
            rng,
            motion,
            cached: None,
        }
    }

    pub fn motion(&self) -> CarouselMotion {
        self.motion
    }

    /// Layout for `sources`, regenerated only when the list differs from the
    /// one the cached layout was built from.
    pub fn layout<S: AsRef<str>>(&mut self, sources: &[S]) -> &CarouselLayout {
        let key = fingerprint_strs(sources);
        let layout = match self.cached.take() {
            Some((k, layout)) if k == key => layout,
            _ => {
                let layout = CarouselLayout::generate(sources, &mut self.rng);
                tracing::debug!(slots = layout.items.len(), "generated carousel layout");
                layout
            }
        };
        &self.cached.insert((key, layout)).1
    }

    pub fn cached(&self) -> Option<&CarouselLayout> {
        self.cached.as_ref().map(|(_, l)| l)
    }

    /// Drop the cached layout.
    pub fn reset(&mut self) {
        self.cached = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Endless linear scroll of a duplicated strip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselMotion {
    pub direction: ScrollDirection,
    pub period: Duration,
}

impl CarouselMotion {
    pub const IMAGES: Self = Self {
        direction: ScrollDirection::Left,
        period: Duration::from_secs(120),
    };
    pub const VIDEOS: Self = Self {
        direction: ScrollDirection::Right,
        period: Duration::from_secs(140),
    };

    /// Strip translation as a fraction of the strip width.
    ///
    /// `Left` runs `0 -> -0.5`, `Right` runs `-0.5 -> 0`; both wrap at the
    /// period. A zero period holds the starting position.
    pub fn translate_fraction(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        let phase = if period > 0.0 {
            (elapsed.as_secs_f64() % period) / period
        } else {
            0.0
        };
        match self.direction {
            ScrollDirection::Left => -0.5 * phase,
            ScrollDirection::Right => -0.5 + 0.5 * phase,
        }
    }

    pub fn translate_px(&self, elapsed: Duration, strip_width: f64) -> f64 {
        self.translate_fraction(elapsed) * strip_width
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/carousel.rs"]
mod tests;
