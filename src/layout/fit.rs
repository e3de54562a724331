use crate::foundation::core::AspectRatio;

/// How media fills a fixed-ratio box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Fill the box, cropping overflow.
    Cover,
    /// Fit inside the box, letterboxing.
    Contain,
}

impl FitMode {
    /// CSS `object-fit` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
        }
    }
}

/// Chooses a [`FitMode`] from a media item's natural size.
///
/// Landscape boxes cover media that is wider than the box; portrait boxes
/// cover media that is narrower. Everything else is contained.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FitPolicy {
    pub container: AspectRatio,
    /// Whether a ratio exactly equal to a landscape box counts as wider.
    pub cover_on_equal: bool,
}

impl FitPolicy {
    pub fn for_container(container: AspectRatio) -> Self {
        Self {
            container,
            cover_on_equal: false,
        }
    }

    /// 16:9 carousel tile; an exact 16:9 image covers.
    pub fn carousel_tile() -> Self {
        Self {
            container: AspectRatio::LANDSCAPE_16_9,
            cover_on_equal: true,
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.container.value() < 1.0
    }

    /// `None` when the dimensions cannot describe a loaded image.
    pub fn decide(&self, natural_w: f64, natural_h: f64) -> Option<FitMode> {
        if !(natural_w.is_finite() && natural_h.is_finite()) || natural_w <= 0.0 || natural_h <= 0.0
        {
            return None;
        }
        let ratio = natural_w / natural_h;
        let target = self.container.value();
        let cover = if self.is_portrait() {
            ratio < target
        } else if self.cover_on_equal {
            ratio >= target
        } else {
            ratio > target
        };
        Some(if cover {
            FitMode::Cover
        } else {
            FitMode::Contain
        })
    }
}

/// Fit state of one media element: a default until it loads, then the
/// policy's decision.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MediaFit {
    policy: FitPolicy,
    mode: FitMode,
    loaded: bool,
}

impl MediaFit {
    pub fn new(policy: FitPolicy, default: FitMode) -> Self {
        Self {
            policy,
            mode: default,
            loaded: false,
        }
    }

    pub fn mode(&self) -> FitMode {
        self.mode
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn policy(&self) -> FitPolicy {
        self.policy
    }

    /// Apply the natural size reported by the media element.
    pub fn on_loaded(&mut self, natural_w: f64, natural_h: f64) -> FitMode {
        match self.policy.decide(natural_w, natural_h) {
            Some(mode) => {
                self.mode = mode;
                self.loaded = true;
            }
            None => self.on_error(),
        }
        self.mode
    }

    /// Loading failed; the default fit stays.
    pub fn on_error(&mut self) {
        tracing::debug!(fit = self.mode.as_css(), "media load failed; keeping default fit");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
