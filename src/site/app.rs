use crate::{
    assets::{
        config::AssetConfig,
        media::{MediaItem, MediaKind},
    },
    background::{
        config::BackgroundConfig,
        engine::{BackgroundAnimation, Dispatch},
    },
    foundation::rng::Rng64,
    gallery::tiles::Gallery,
    host::{Host, HostSignal},
    layout::{
        carousel::{Carousel, CarouselLayout, CarouselMotion},
        fit::{FitMode, MediaFit},
    },
    render::backend::RenderBackend,
    site::style::Theme,
    viewer::modal::CloseReason,
};

/// Portfolio category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Gaming,
    Posters,
    Videos,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Gaming, Self::Posters, Self::Videos];

    pub fn title(self) -> &'static str {
        match self {
            Self::Gaming => "Gaming",
            Self::Posters => "Posters",
            Self::Videos => "Videos",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Portfolio(Section),
}

/// Both landing strips, as laid out for the current landing mount.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LandingCarousels {
    pub images: CarouselLayout,
    pub image_motion: CarouselMotion,
    pub image_fits: Vec<MediaFit>,
    pub videos: CarouselLayout,
    pub video_motion: CarouselMotion,
    pub video_fits: Vec<MediaFit>,
}

impl LandingCarousels {
    /// An image slot reported its natural size. `None` for an unknown slot.
    pub fn on_image_loaded(
        &mut self,
        slot: usize,
        natural_w: f64,
        natural_h: f64,
    ) -> Option<FitMode> {
        Some(self.image_fits.get_mut(slot)?.on_loaded(natural_w, natural_h))
    }

    /// A video slot reported its intrinsic size.
    pub fn on_video_loaded(
        &mut self,
        slot: usize,
        natural_w: f64,
        natural_h: f64,
    ) -> Option<FitMode> {
        Some(self.video_fits.get_mut(slot)?.on_loaded(natural_w, natural_h))
    }
}

/// Where [`App::dispatch`] delivered a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routed {
    Background(Dispatch),
    Viewer,
    Ignored,
}

/// Composition root of the site.
///
/// Exactly one background animation is alive at a time: the landing variant
/// on the landing screen, the glow variant on the portfolio.
pub struct App {
    config: AssetConfig,
    theme: Theme,
    global_css: String,
    rng: Rng64,
    screen: Screen,
    mounted: bool,
    background: BackgroundAnimation,
    image_carousel: Carousel,
    video_carousel: Carousel,
    landing: Option<LandingCarousels>,
    gallery: Option<Gallery>,
    scroll_reset: bool,
}

impl App {
    pub fn new(config: AssetConfig, theme: Theme, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let global_css = theme.global_css();
        let image_carousel = Carousel::new(rng.fork(), CarouselMotion::IMAGES);
        let video_carousel = Carousel::new(rng.fork(), CarouselMotion::VIDEOS);
        let background = BackgroundAnimation::new(BackgroundConfig::landing(), rng.fork());
        Self {
            config,
            theme,
            global_css,
            rng,
            screen: Screen::Landing,
            mounted: false,
            background,
            image_carousel,
            video_carousel,
            landing: None,
            gallery: None,
            scroll_reset: false,
        }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Reset stylesheet, rendered once at construction.
    pub fn global_css(&self) -> &str {
        &self.global_css
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn background(&self) -> &BackgroundAnimation {
        &self.background
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        self.gallery.as_mut()
    }

    pub fn landing_carousels(&self) -> Option<&LandingCarousels> {
        self.landing.as_ref()
    }

    pub fn landing_carousels_mut(&mut self) -> Option<&mut LandingCarousels> {
        self.landing.as_mut()
    }

    /// Start on whichever screen is current. Returns whether the background
    /// got a drawing surface.
    #[tracing::instrument(skip(self, host, backend))]
    pub fn mount(
        &mut self,
        host: &mut dyn Host,
        backend: Option<Box<dyn RenderBackend>>,
    ) -> bool {
        if self.mounted {
            return self.background.is_mounted();
        }
        self.mounted = true;
        if self.screen == Screen::Landing {
            self.layout_landing();
        }
        self.background.mount(host, backend)
    }

    pub fn enter_portfolio(&mut self, host: &mut dyn Host, section: Section) {
        if self.screen == Screen::Landing {
            self.swap_background(host, BackgroundConfig::main_view());
            self.landing = None;
        }
        self.show_section(host, section);
    }

    pub fn back_to_landing(&mut self, host: &mut dyn Host) {
        if self.screen == Screen::Landing {
            return;
        }
        self.drop_gallery(host);
        self.swap_background(host, BackgroundConfig::landing());
        self.screen = Screen::Landing;
        if self.mounted {
            self.layout_landing();
        }
        tracing::debug!("back to landing");
    }

    /// Switch the portfolio section; entering the portfolio first when on
    /// the landing screen.
    pub fn select_section(&mut self, host: &mut dyn Host, section: Section) {
        match self.screen {
            Screen::Landing => self.enter_portfolio(host, section),
            Screen::Portfolio(_) => self.show_section(host, section),
        }
    }

    /// Whether the view should scroll back to the top; clears the request.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    pub fn dispatch(&mut self, host: &mut dyn Host, signal: &HostSignal) -> Routed {
        match self.background.dispatch(host, signal) {
            Dispatch::Ignored => {}
            d => return Routed::Background(d),
        }
        if let Some(g) = self.gallery.as_mut()
            && g.dispatch(host, signal)
        {
            return Routed::Viewer;
        }
        Routed::Ignored
    }

    /// Tear down everything acquired from the host.
    pub fn unmount(&mut self, host: &mut dyn Host) {
        if let Some(g) = self.gallery.as_mut() {
            g.close_viewer(host, CloseReason::CloseButton);
        }
        self.background.unmount(host);
        self.mounted = false;
        tracing::debug!("app unmounted");
    }

    fn show_section(&mut self, host: &mut dyn Host, section: Section) {
        self.drop_gallery(host);
        self.gallery = Some(self.build_gallery(section));
        self.screen = Screen::Portfolio(section);
        self.scroll_reset = true;
        tracing::debug!(section = section.title(), "section shown");
    }

    fn build_gallery(&self, section: Section) -> Gallery {
        let (kind, items): (MediaKind, Vec<MediaItem>) = match section {
            Section::Gaming => (MediaKind::Image, self.config.gaming_items()),
            Section::Posters => (MediaKind::Image, self.config.poster_items()),
            Section::Videos => (MediaKind::Video, self.config.video_items()),
        };
        Gallery::new(section.title(), kind, items)
    }

    fn drop_gallery(&mut self, host: &mut dyn Host) {
        if let Some(mut g) = self.gallery.take() {
            g.close_viewer(host, CloseReason::CloseButton);
        }
    }

    /// Unmount the current background and mount a fresh one of `config` on
    /// the same drawing surface.
    fn swap_background(&mut self, host: &mut dyn Host, config: BackgroundConfig) {
        let backend = self.background.unmount(host);
        self.background = BackgroundAnimation::new(config, self.rng.fork());
        if self.mounted {
            self.background.mount(host, backend);
        }
    }

    fn layout_landing(&mut self) {
        self.image_carousel.reset();
        self.video_carousel.reset();
        let images = self
            .image_carousel
            .layout(&self.config.carousel_images())
            .clone();
        let videos = self.video_carousel.layout(&self.config.videos()).clone();
        self.landing = Some(LandingCarousels {
            image_fits: images.slot_fits(MediaKind::Image),
            images,
            image_motion: self.image_carousel.motion(),
            video_fits: videos.slot_fits(MediaKind::Video),
            videos,
            video_motion: self.video_carousel.motion(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/app.rs"]
mod tests;
