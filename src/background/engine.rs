use crate::{
    background::{
        config::{BackgroundConfig, RedrawPolicy},
        draw::compile_background,
        spot::{GridSpot, generate_spots},
    },
    foundation::{
        core::{Point, Viewport},
        rng::Rng64,
    },
    host::{EventKind, FrameRequest, Host, HostEvent, HostSignal, Subscription, TimerHandle},
    render::{
        backend::{FrameRGBA, RenderBackend},
        plan::FramePlan,
    },
};

/// What a [`BackgroundAnimation::dispatch`] call did with a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A frame was painted.
    Drew,
    /// A frame fired but nothing was dirty; the loop was re-armed.
    Skipped,
    /// State changed (resize, pointer, debounce) without painting.
    Updated,
    /// The signal does not belong to this animation's current mount.
    Ignored,
}

/// Everything acquired from the host during one mount.
struct Mounted {
    backend: Box<dyn RenderBackend>,
    frame: Option<FrameRequest>,
    resize: Subscription,
    pointer: Option<Subscription>,
    debounce: Option<TimerHandle>,
}

enum Action {
    Frame,
    ResizeNow(Viewport),
    ArmDebounce,
    DebounceElapsed,
    Pointer(Point),
}

/// Decorative full-viewport background: fixed random grid spots plus an
/// optional cursor glow.
///
/// The animation owns its drawing surface exclusively. It is driven entirely
/// by host signals between [`mount`](Self::mount) and [`unmount`](Self::unmount);
/// outside that window it holds no host handles at all.
pub struct BackgroundAnimation {
    config: BackgroundConfig,
    rng: Rng64,
    viewport: Viewport,
    spots: Vec<GridSpot>,
    needs_redraw: bool,
    pointer: Point,
    mounted: Option<Mounted>,
    last_frame: Option<FrameRGBA>,
    frames_drawn: u64,
    spot_generations: u64,
}

impl BackgroundAnimation {
    pub fn new(config: BackgroundConfig, rng: Rng64) -> Self {
        Self {
            config,
            rng,
            viewport: Viewport::default(),
            spots: Vec::new(),
            needs_redraw: true,
            pointer: Point::ZERO,
            mounted: None,
            last_frame: None,
            frames_drawn: 0,
            spot_generations: 0,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spots(&self) -> &[GridSpot] {
        &self.spots
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// How many times a spot set has been generated.
    pub fn spot_generations(&self) -> u64 {
        self.spot_generations
    }

    /// Most recently painted frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Forget the current spots; the next resize generates a fresh set.
    pub fn clear_spots(&mut self) {
        self.spots.clear();
    }

    /// Draw list for the current state.
    pub fn plan(&self) -> FramePlan {
        let glow = self.config.glow.map(|g| (self.pointer, g));
        compile_background(self.viewport, &self.spots, glow)
    }

    /// Attach to the host and paint the first frame.
    ///
    /// `backend` is `None` when no drawing context could be obtained; the
    /// animation then stays inert and acquires nothing from the host.
    /// Returns whether the animation is running.
    ///
    /// Mounting twice keeps the first mount; the second backend is dropped.
    #[tracing::instrument(skip(self, host, backend))]
    pub fn mount(
        &mut self,
        host: &mut dyn Host,
        backend: Option<Box<dyn RenderBackend>>,
    ) -> bool {
        if self.mounted.is_some() {
            tracing::warn!(
                dropped_backend = backend.is_some(),
                "background already mounted; keeping the current surface"
            );
            return true;
        }
        let Some(backend) = backend else {
            tracing::debug!("no drawing context; background disabled");
            return false;
        };

        self.apply_resize(host.viewport());

        let resize = host.subscribe(EventKind::Resize);
        let pointer = self
            .config
            .glow
            .map(|_| host.subscribe(EventKind::PointerMove));
        self.mounted = Some(Mounted {
            backend,
            frame: None,
            resize,
            pointer,
            debounce: None,
        });

        self.paint();
        if let Some(m) = self.mounted.as_mut() {
            m.frame = Some(host.request_frame());
        }
        tracing::debug!(
            spots = self.spots.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            "background mounted"
        );
        true
    }

    /// Release every host handle: listeners, the debounce timer and the
    /// pending frame. Hands the drawing surface back so another animation can
    /// reuse it. Safe to call when not mounted.
    pub fn unmount(&mut self, host: &mut dyn Host) -> Option<Box<dyn RenderBackend>> {
        let m = self.mounted.take()?;
        host.unsubscribe(m.resize);
        if let Some(p) = m.pointer {
            host.unsubscribe(p);
        }
        if let Some(t) = m.debounce {
            host.clear_timer(t);
        }
        if let Some(f) = m.frame {
            host.cancel_frame(f);
        }
        tracing::debug!(frames = self.frames_drawn, "background unmounted");
        Some(m.backend)
    }

    /// Route one host signal.
    pub fn dispatch(&mut self, host: &mut dyn Host, signal: &HostSignal) -> Dispatch {
        let Some(action) = self.classify(signal) else {
            return Dispatch::Ignored;
        };

        match action {
            Action::Frame => {
                let out = self.paint();
                if let Some(m) = self.mounted.as_mut() {
                    m.frame = Some(host.request_frame());
                }
                out
            }
            Action::ResizeNow(viewport) => {
                self.apply_resize(viewport);
                Dispatch::Updated
            }
            Action::ArmDebounce => {
                let delay = self
                    .config
                    .resize_debounce
                    .unwrap_or(BackgroundConfig::LANDING_RESIZE_DEBOUNCE);
                if let Some(m) = self.mounted.as_mut() {
                    if let Some(t) = m.debounce.take() {
                        host.clear_timer(t);
                    }
                    m.debounce = Some(host.set_timer(delay));
                }
                Dispatch::Updated
            }
            Action::DebounceElapsed => {
                self.apply_resize(host.viewport());
                Dispatch::Updated
            }
            Action::Pointer(at) => {
                self.pointer = at;
                Dispatch::Updated
            }
        }
    }

    /// Match a signal against the handles of the current mount, consuming
    /// one-shot handles (frame, timer) that fired.
    fn classify(&mut self, signal: &HostSignal) -> Option<Action> {
        let debounced = self.config.resize_debounce.is_some();
        let m = self.mounted.as_mut()?;
        match signal {
            HostSignal::Frame { request, .. } if m.frame == Some(*request) => {
                m.frame = None;
                Some(Action::Frame)
            }
            HostSignal::Timer(t) if m.debounce == Some(*t) => {
                m.debounce = None;
                Some(Action::DebounceElapsed)
            }
            HostSignal::Event {
                subscription,
                event: HostEvent::Resize(viewport),
            } if *subscription == m.resize => {
                if debounced {
                    Some(Action::ArmDebounce)
                } else {
                    Some(Action::ResizeNow(*viewport))
                }
            }
            HostSignal::Event {
                subscription,
                event: HostEvent::PointerMove(at),
            } if m.pointer == Some(*subscription) => Some(Action::Pointer(*at)),
            _ => None,
        }
    }

    fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // A zero-sized surface would put every spot at the origin.
        if self.spots.is_empty() && !viewport.is_empty() {
            self.spots = generate_spots(&mut self.rng, viewport);
            self.spot_generations += 1;
            tracing::debug!(count = self.spots.len(), "generated grid spots");
        }
        self.needs_redraw = true;
    }

    fn paint(&mut self) -> Dispatch {
        let dirty = match self.config.redraw {
            RedrawPolicy::OnDirty => self.needs_redraw,
            RedrawPolicy::EveryFrame => true,
        };
        if !dirty {
            return Dispatch::Skipped;
        }

        let plan = self.plan();
        let Some(m) = self.mounted.as_mut() else {
            return Dispatch::Ignored;
        };
        match m.backend.render_plan(&plan) {
            Ok(frame) => {
                self.last_frame = Some(frame);
                self.frames_drawn += 1;
            }
            Err(err) => tracing::warn!(error = %err, "background frame failed"),
        }
        self.needs_redraw = false;
        Dispatch::Drew
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/engine.rs"]
mod tests;
