use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::core::Viewport,
    host::{EventKind, Key, virtual_host::VirtualHost},
};

#[derive(Debug, Default)]
struct PlayerLog {
    playing: bool,
    plays: u32,
    pauses: u32,
    rewinds: u32,
}

struct FakePlayer {
    refuse: bool,
    log: Rc<RefCell<PlayerLog>>,
}

impl PreviewPlayer for FakePlayer {
    fn play(&mut self) -> VitrineResult<()> {
        let mut log = self.log.borrow_mut();
        log.plays += 1;
        if self.refuse {
            return Err(VitrineError::validation("autoplay blocked"));
        }
        log.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut log = self.log.borrow_mut();
        log.playing = false;
        log.pauses += 1;
    }

    fn rewind(&mut self) {
        self.log.borrow_mut().rewinds += 1;
    }
}

fn player(refuse: bool) -> (Box<dyn PreviewPlayer>, Rc<RefCell<PlayerLog>>) {
    let log = Rc::new(RefCell::new(PlayerLog::default()));
    let p = FakePlayer {
        refuse,
        log: Rc::clone(&log),
    };
    (Box::new(p), log)
}

fn images(n: usize) -> Vec<MediaItem> {
    (0..n).map(|i| MediaItem::image(format!("/img/{i}.png"))).collect()
}

fn videos(n: usize) -> Vec<MediaItem> {
    (0..n).map(|i| MediaItem::video(format!("/v/{}.mp4", i + 1))).collect()
}

#[test]
fn poster_detection_is_case_insensitive() {
    assert!(Gallery::new("Posters", MediaKind::Image, images(2)).is_poster());
    assert!(Gallery::new("posters", MediaKind::Image, images(2)).is_poster());
    let gaming = Gallery::new("Gaming", MediaKind::Image, images(2));
    assert!(!gaming.is_poster());
    assert_eq!(gaming.container_ratio(), AspectRatio::LANDSCAPE_16_9);
}

#[test]
fn grid_track_minimum_depends_on_gallery() {
    let posters = Gallery::new("Posters", MediaKind::Image, images(8));
    let gaming = Gallery::new("Gaming", MediaKind::Image, images(8));
    assert_eq!(posters.grid_columns(1000.0), 4);
    assert_eq!(gaming.grid_columns(1000.0), 2);
    assert_eq!(gaming.grid_columns(200.0), 1);
    assert_eq!(gaming.track_width(1008.0), 320.0);
}

#[test]
fn activate_selects_and_close_clears() {
    let mut host = VirtualHost::new(Viewport::new(1280, 720));
    let mut g = Gallery::new("Gaming", MediaKind::Image, images(3));
    g.activate(&mut host, 1).unwrap();
    assert_eq!(g.selected(), Some(&MediaItem::image("/img/1.png")));
    g.activate(&mut host, 2).unwrap();
    assert_eq!(g.selected(), Some(&MediaItem::image("/img/2.png")));
    assert_eq!(host.live_subscriptions_of(EventKind::KeyDown), 1);

    assert!(g.close_viewer(&mut host, CloseReason::CloseButton));
    assert!(g.selected().is_none());
    assert_eq!(host.live_subscriptions(), 0);
    assert!(g.activate(&mut host, 9).is_err());
}

#[test]
fn escape_routes_through_gallery() {
    let mut host = VirtualHost::new(Viewport::new(1280, 720));
    let mut g = Gallery::new("Videos", MediaKind::Video, videos(2));
    g.activate(&mut host, 0).unwrap();
    let signals = host.key_down(Key::Escape);
    assert!(g.dispatch(&mut host, &signals[0]));
    assert!(g.selected().is_none());
    assert!(!g.viewer().scroll_locked());
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let mut host = VirtualHost::new(Viewport::new(1280, 720));
    let mut g = Gallery::new("Gaming", MediaKind::Image, images(1));
    g.activate(&mut host, 0).unwrap();
    assert!(!g.click_viewer(&mut host, ViewerClick::Content));
    assert!(g.selected().is_some());
    assert!(g.click_viewer(&mut host, ViewerClick::Backdrop));
    assert!(g.selected().is_none());
}

#[test]
fn hover_selects_style_variant() {
    let theme = Theme::default();
    let mut g = Gallery::new("Gaming", MediaKind::Image, images(3));
    g.hover(1);
    assert_eq!(g.tile_style(&theme, 1), theme.tile(true));
    assert_eq!(g.tile_style(&theme, 0), theme.tile(false));

    g.hover(2);
    assert_eq!(g.hovered(), Some(2));
    assert_eq!(g.tile_style(&theme, 1), theme.tile(false));

    g.leave(2);
    assert_eq!(g.hovered(), None);
    g.hover(42);
    assert_eq!(g.hovered(), None);
}

#[test]
fn video_preview_plays_then_pauses_and_rewinds() {
    let mut g = Gallery::new("Videos", MediaKind::Video, videos(2));
    let (p, log) = player(false);
    g.attach_player(0, p).unwrap();

    g.hover(0);
    assert!(g.is_previewing(0));
    assert!(log.borrow().playing);

    g.leave(0);
    assert!(!g.is_previewing(0));
    let log = log.borrow();
    assert!(!log.playing);
    assert_eq!((log.plays, log.pauses, log.rewinds), (1, 1, 1));
}

#[test]
fn rejected_autoplay_leaves_tile_paused() {
    let mut g = Gallery::new("Videos", MediaKind::Video, videos(1));
    let (p, log) = player(true);
    g.attach_player(0, p).unwrap();
    g.hover(0);
    assert_eq!(g.hovered(), Some(0));
    assert!(!g.is_previewing(0));
    assert_eq!(log.borrow().plays, 1);
    assert!(!log.borrow().playing);
}

#[test]
fn fit_follows_load_for_images_and_videos() {
    let mut posters = Gallery::new("Posters", MediaKind::Image, images(2));
    assert_eq!(posters.fit(0), Some(FitMode::Cover));
    assert_eq!(posters.on_item_loaded(0, 1600.0, 1200.0), Some(FitMode::Contain));
    assert_eq!(posters.on_item_loaded(1, 500.0, 1000.0), Some(FitMode::Cover));
    posters.on_item_error(1);
    assert_eq!(posters.fit(1), Some(FitMode::Cover));
    assert_eq!(posters.on_item_loaded(5, 1.0, 1.0), None);

    let mut vids = Gallery::new("Videos", MediaKind::Video, videos(1));
    assert_eq!(vids.fit(0), Some(FitMode::Contain));
    assert_eq!(vids.on_item_loaded(0, 2100.0, 900.0), Some(FitMode::Cover));
    assert_eq!(vids.fit(0), Some(FitMode::Cover));

    let mut vids = Gallery::new("Videos", MediaKind::Video, videos(2));
    assert_eq!(vids.on_item_loaded(1, 1440.0, 1080.0), Some(FitMode::Contain));
    assert_eq!(vids.on_item_loaded(0, 1920.0, 1080.0), Some(FitMode::Contain));
}
