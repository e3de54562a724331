use crate::{foundation::core::AspectRatio, layout::fit::FitMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Gallery fit before the natural size is known. Images start cropped and
    /// videos start letterboxed.
    pub fn default_fit(self) -> FitMode {
        match self {
            Self::Image => FitMode::Cover,
            Self::Video => FitMode::Contain,
        }
    }
}

/// One piece of portfolio media, addressed by its resolved URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub source: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn video(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: MediaKind::Video,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Box ratio a gallery uses for its tiles.
pub fn container_ratio(poster: bool) -> AspectRatio {
    if poster {
        AspectRatio::PORTRAIT_9_16
    } else {
        AspectRatio::LANDSCAPE_16_9
    }
}
