//! Vitrine is a headless engine for a single-page media portfolio.
//!
//! It owns everything on the page that is state rather than markup:
//!
//! - the decorative [`BackgroundAnimation`] (grid spots and a cursor glow),
//!   rasterized on the CPU into [`FrameRGBA`] frames
//! - the endless [`Carousel`] strips of the landing screen
//! - [`Gallery`] grids with hover previews and the [`MediaViewer`] lightbox
//! - the [`App`] composition root that switches between them
//!
//! The environment (a browser shell, a test harness, the bundled CLI) plugs in
//! through the [`Host`] trait; [`VirtualHost`] is a deterministic in-process
//! implementation.
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod background;
pub mod gallery;
pub mod host;
pub mod layout;
pub mod render;
pub mod site;
pub mod viewer;

pub use crate::foundation::core::{AspectRatio, Point, Rect, Rgba8Premul, Vec2, Viewport};
pub use crate::foundation::error::{VitrineError, VitrineResult};
pub use crate::foundation::rng::Rng64;

pub use crate::assets::config::AssetConfig;
pub use crate::assets::media::{MediaItem, MediaKind};
pub use crate::background::config::{BackgroundConfig, GlowConfig, RedrawPolicy};
pub use crate::background::engine::{BackgroundAnimation, Dispatch};
pub use crate::background::spot::GridSpot;
pub use crate::gallery::preview::PreviewPlayer;
pub use crate::gallery::tiles::Gallery;
pub use crate::host::virtual_host::VirtualHost;
pub use crate::host::{EventKind, Host, HostEvent, HostSignal, Key};
pub use crate::layout::carousel::{
    Carousel, CarouselItem, CarouselLayout, CarouselMotion, ScrollDirection,
};
pub use crate::layout::fit::{FitMode, FitPolicy, MediaFit};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::site::app::{App, LandingCarousels, Routed, Screen, Section};
pub use crate::site::style::{CssColor, Theme};
pub use crate::viewer::modal::{CloseReason, MediaViewer, ViewerClick};
