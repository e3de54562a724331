use crate::{
    assets::media::{MediaItem, MediaKind, container_ratio},
    foundation::{
        core::AspectRatio,
        error::{VitrineError, VitrineResult},
    },
    gallery::preview::PreviewPlayer,
    host::{Host, HostSignal},
    layout::{
        fit::{FitMode, FitPolicy, MediaFit},
        grid::{
            DEFAULT_MIN_TRACK_PX, GRID_GAP_PX, POSTER_MIN_TRACK_PX, auto_fill_columns, track_width,
        },
    },
    site::style::{Theme, TileStyle},
    viewer::modal::{CloseReason, MediaViewer, ViewerClick},
};

struct Tile {
    item: MediaItem,
    fit: MediaFit,
    player: Option<Box<dyn PreviewPlayer>>,
    previewing: bool,
}

/// A titled grid of images or videos.
///
/// The gallery owns the selection: the item shown in its viewer is the only
/// selected media, and closing the viewer clears it.
pub struct Gallery {
    title: String,
    kind: MediaKind,
    poster: bool,
    tiles: Vec<Tile>,
    hovered: Option<usize>,
    viewer: MediaViewer,
}

impl Gallery {
    pub fn new(title: impl Into<String>, kind: MediaKind, items: Vec<MediaItem>) -> Self {
        let title = title.into();
        let poster = title.eq_ignore_ascii_case("posters");
        let policy = FitPolicy::for_container(container_ratio(poster));
        let tiles = items
            .into_iter()
            .map(|item| Tile {
                fit: MediaFit::new(policy, item.kind.default_fit()),
                item,
                player: None,
                previewing: false,
            })
            .collect();
        Self {
            title,
            kind,
            poster,
            tiles,
            hovered: None,
            viewer: MediaViewer::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_poster(&self) -> bool {
        self.poster
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.tiles.get(index).map(|t| &t.item)
    }

    pub fn items(&self) -> impl Iterator<Item = &MediaItem> {
        self.tiles.iter().map(|t| &t.item)
    }

    pub fn container_ratio(&self) -> AspectRatio {
        container_ratio(self.poster)
    }

    pub fn min_track_px(&self) -> f64 {
        if self.poster {
            POSTER_MIN_TRACK_PX
        } else {
            DEFAULT_MIN_TRACK_PX
        }
    }

    pub fn grid_columns(&self, container_width: f64) -> usize {
        auto_fill_columns(container_width, self.min_track_px(), GRID_GAP_PX)
    }

    pub fn track_width(&self, container_width: f64) -> f64 {
        track_width(
            container_width,
            self.grid_columns(container_width),
            GRID_GAP_PX,
        )
    }

    // Selection and viewer.

    pub fn selected(&self) -> Option<&MediaItem> {
        self.viewer.current()
    }

    pub fn viewer(&self) -> &MediaViewer {
        &self.viewer
    }

    /// Select the tile at `index` and show it in the viewer.
    pub fn activate(&mut self, host: &mut dyn Host, index: usize) -> VitrineResult<()> {
        let item = self
            .item(index)
            .cloned()
            .ok_or_else(|| VitrineError::validation(format!("no tile at index {index}")))?;
        self.viewer.open(host, item);
        Ok(())
    }

    pub fn close_viewer(&mut self, host: &mut dyn Host, reason: CloseReason) -> bool {
        self.viewer.close(host, reason)
    }

    pub fn click_viewer(&mut self, host: &mut dyn Host, target: ViewerClick) -> bool {
        self.viewer.click(host, target)
    }

    pub fn dispatch(&mut self, host: &mut dyn Host, signal: &HostSignal) -> bool {
        self.viewer.dispatch(host, signal)
    }

    // Hover.

    /// Attach the inline player of a video tile.
    pub fn attach_player(
        &mut self,
        index: usize,
        player: Box<dyn PreviewPlayer>,
    ) -> VitrineResult<()> {
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or_else(|| VitrineError::validation(format!("no tile at index {index}")))?;
        tile.player = Some(player);
        Ok(())
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_previewing(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(|t| t.previewing)
    }

    /// Pointer entered tile `index`; a video tile starts its preview.
    pub fn hover(&mut self, index: usize) {
        if index >= self.tiles.len() || self.hovered == Some(index) {
            return;
        }
        if let Some(prev) = self.hovered {
            self.leave(prev);
        }
        self.hovered = Some(index);

        let tile = &mut self.tiles[index];
        if !tile.item.is_video() {
            return;
        }
        if let Some(player) = tile.player.as_mut() {
            match player.play() {
                Ok(()) => tile.previewing = true,
                Err(err) => {
                    tracing::debug!(index, error = %err, "preview playback rejected");
                    tile.previewing = false;
                }
            }
        }
    }

    /// Pointer left tile `index`; a video tile pauses and rewinds.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        let Some(tile) = self.tiles.get_mut(index) else {
            return;
        };
        if let Some(player) = tile.player.as_mut() {
            player.pause();
            player.rewind();
        }
        tile.previewing = false;
    }

    pub fn tile_style(&self, theme: &Theme, index: usize) -> TileStyle {
        theme.tile(self.hovered == Some(index))
    }

    // Fit.

    pub fn fit(&self, index: usize) -> Option<FitMode> {
        self.tiles.get(index).map(|t| t.fit.mode())
    }

    /// Natural size of tile `index` became known: an image's pixel size or a
    /// video's intrinsic frame size.
    pub fn on_item_loaded(
        &mut self,
        index: usize,
        natural_w: f64,
        natural_h: f64,
    ) -> Option<FitMode> {
        let tile = self.tiles.get_mut(index)?;
        Some(tile.fit.on_loaded(natural_w, natural_h))
    }

    pub fn on_item_error(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.fit.on_error();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/tiles.rs"]
mod tests;
