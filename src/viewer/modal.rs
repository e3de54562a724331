use crate::{
    assets::media::MediaItem,
    host::{EventKind, Host, HostEvent, HostSignal, Key, Subscription},
    layout::fit::FitMode,
};

/// Why the viewer closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
}

/// Where a click inside the open viewer landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerClick {
    /// Dimmed area around the content; closes.
    Backdrop,
    /// The media panel itself; swallowed so it never reaches the backdrop.
    Content,
    CloseButton,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(MediaItem),
}

/// Modal overlay showing one item.
///
/// While open it listens for `Escape` and keeps page scrolling locked. Every
/// close path returns the key listener to the host.
#[derive(Debug, Default)]
pub struct MediaViewer {
    state: ViewerState,
    keys: Option<Subscription>,
}

impl MediaViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    pub fn current(&self) -> Option<&MediaItem> {
        match &self.state {
            ViewerState::Open(item) => Some(item),
            ViewerState::Closed => None,
        }
    }

    /// Page scrolling is suppressed exactly while the viewer is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Media in the viewer is always shown whole.
    pub fn content_fit(&self) -> FitMode {
        FitMode::Contain
    }

    /// Show `item`, replacing whatever is open.
    pub fn open(&mut self, host: &mut dyn Host, item: MediaItem) {
        if self.keys.is_none() {
            self.keys = Some(host.subscribe(EventKind::KeyDown));
        }
        tracing::debug!(source = %item.source, "viewer open");
        self.state = ViewerState::Open(item);
    }

    /// Returns whether the viewer was open.
    pub fn close(&mut self, host: &mut dyn Host, reason: CloseReason) -> bool {
        if let Some(keys) = self.keys.take() {
            host.unsubscribe(keys);
        }
        if std::mem::take(&mut self.state) == ViewerState::Closed {
            return false;
        }
        tracing::debug!(?reason, "viewer closed");
        true
    }

    /// Returns whether the click closed the viewer.
    pub fn click(&mut self, host: &mut dyn Host, target: ViewerClick) -> bool {
        match target {
            ViewerClick::Backdrop => self.close(host, CloseReason::Backdrop),
            ViewerClick::CloseButton => self.close(host, CloseReason::CloseButton),
            ViewerClick::Content => false,
        }
    }

    /// Handle a host signal; `true` when it was this viewer's key listener.
    pub fn dispatch(&mut self, host: &mut dyn Host, signal: &HostSignal) -> bool {
        let HostSignal::Event {
            subscription,
            event: HostEvent::KeyDown(key),
        } = signal
        else {
            return false;
        };
        if self.keys != Some(*subscription) {
            return false;
        }
        if *key == Key::Escape {
            self.close(host, CloseReason::Escape);
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/modal.rs"]
mod tests;
