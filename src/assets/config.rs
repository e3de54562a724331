use std::path::Path;

use anyhow::Context as _;

use crate::{
    assets::media::MediaItem,
    foundation::error::{VitrineError, VitrineResult},
};

/// Base URL used when the site is published under the GitHub Pages project path.
pub const GITHUB_PAGES_BASE_URL: &str = "/Portfolio_Design/";
/// Overrides every other base URL source.
pub const BASE_URL_ENV: &str = "VITRINE_BASE_URL";
pub const GITHUB_PAGES_ENV: &str = "GITHUB_PAGES";

const DEFAULT_GAMING: [&str; 8] = [
    "Assets/Gaming/1.png",
    "Assets/Gaming/CWL Base DesignNov_25 (1).png",
    "Assets/Gaming/CWL BAse Pack (1).png",
    "Assets/Gaming/LL Sub_Dec25.png",
    "Assets/Gaming/October 25 LL Sub.png",
    "Assets/Gaming/priceless.png",
    "Assets/Gaming/QL Sale Poster.png",
    "Assets/Gaming/Samantha Intro Design.png",
];

const DEFAULT_POSTERS: [&str; 8] = [
    "Assets/Posters/Canva Challenge.png",
    "Assets/Posters/Photography.png",
    "Assets/Posters/Pixel Premiere.png",
    "Assets/Posters/Quiz.png",
    "Assets/Posters/Taal.png",
    "Assets/Posters/Vogue Vista_1.png",
    "Assets/Posters/Vogue Vista.png",
    "Assets/Posters/Western_group_dance.png",
];

const DEFAULT_VIDEO_COUNT: usize = 10;

/// Static description of the portfolio's media.
///
/// Image lists hold paths relative to `base_url`. `video_urls` may hold
/// absolute `http(s)` URLs for externally hosted videos; any other entry
/// falls back to the bundled `Assets/Videos/{n}.mp4` file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub base_url: String,
    pub gaming: Vec<String>,
    pub posters: Vec<String>,
    pub video_urls: Vec<String>,
    pub video_count: usize,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_owned(),
            gaming: DEFAULT_GAMING.iter().map(|s| (*s).to_owned()).collect(),
            posters: DEFAULT_POSTERS.iter().map(|s| (*s).to_owned()).collect(),
            video_urls: (1..=DEFAULT_VIDEO_COUNT)
                .map(|n| format!("{GITHUB_PAGES_BASE_URL}Assets/Videos/{n}.mp4"))
                .collect(),
            video_count: DEFAULT_VIDEO_COUNT,
        }
    }
}

impl AssetConfig {
    /// Read a JSON config; missing fields take their defaults.
    pub fn load(path: &Path) -> VitrineResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read asset config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults with the base URL resolved from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_base_url(resolve_base_url(|k| std::env::var(k).ok()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> VitrineResult<()> {
        if !self.base_url.ends_with('/') {
            return Err(VitrineError::config(format!(
                "base_url must end with '/': '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn asset_path(&self, rel: &str) -> String {
        format!("{}{}", self.base_url, rel)
    }

    /// URL of the `index`-th video (0-based).
    pub fn video_path(&self, index: usize) -> String {
        match self.video_urls.get(index) {
            Some(url) if url.starts_with("http") => url.clone(),
            _ => format!("{}Assets/Videos/{}.mp4", self.base_url, index + 1),
        }
    }

    pub fn gaming_paths(&self) -> Vec<String> {
        self.gaming.iter().map(|p| self.asset_path(p)).collect()
    }

    pub fn poster_paths(&self) -> Vec<String> {
        self.posters.iter().map(|p| self.asset_path(p)).collect()
    }

    pub fn videos(&self) -> Vec<String> {
        (0..self.video_count).map(|i| self.video_path(i)).collect()
    }

    pub fn gaming_items(&self) -> Vec<MediaItem> {
        self.gaming_paths().into_iter().map(MediaItem::image).collect()
    }

    pub fn poster_items(&self) -> Vec<MediaItem> {
        self.poster_paths().into_iter().map(MediaItem::image).collect()
    }

    pub fn video_items(&self) -> Vec<MediaItem> {
        self.videos().into_iter().map(MediaItem::video).collect()
    }

    /// Posters followed by gaming art: the landing image carousel's source list.
    pub fn carousel_images(&self) -> Vec<String> {
        let mut out = self.poster_paths();
        out.extend(self.gaming_paths());
        out
    }
}

/// `VITRINE_BASE_URL` wins; otherwise `GITHUB_PAGES=true` selects the
/// project path and anything else serves from the root.
pub fn resolve_base_url(var: impl Fn(&str) -> Option<String>) -> String {
    if let Some(url) = var(BASE_URL_ENV).filter(|u| !u.is_empty()) {
        return url;
    }
    match var(GITHUB_PAGES_ENV).as_deref() {
        Some("true") => GITHUB_PAGES_BASE_URL.to_owned(),
        _ => "/".to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/config.rs"]
mod tests;
