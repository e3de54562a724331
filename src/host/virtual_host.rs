use std::time::Duration;

use crate::{
    foundation::core::{Point, Viewport},
    host::{EventKind, FrameRequest, Host, HostEvent, HostSignal, Key, Subscription, TimerHandle},
};

/// Counters of every scheduling call a [`VirtualHost`] has served.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostStats {
    pub frames_requested: u64,
    pub frames_cancelled: u64,
    pub frames_fired: u64,
    pub timers_set: u64,
    pub timers_cleared: u64,
    pub timers_fired: u64,
    pub subscribed: u64,
    pub unsubscribed: u64,
}

/// Deterministic in-process [`Host`] driven by a virtual clock.
///
/// Nothing happens on its own: callers move time forward with
/// [`VirtualHost::advance`] (or inject events) and route the returned signals
/// to whichever component owns the handles.
#[derive(Debug)]
pub struct VirtualHost {
    viewport: Viewport,
    now: Duration,
    frame_interval: Duration,
    next_id: u64,
    frames: Vec<FrameRequest>,
    timers: Vec<(TimerHandle, Duration)>,
    subscriptions: Vec<(Subscription, EventKind)>,
    stats: HostStats,
}

impl VirtualHost {
    /// 60 Hz frame cadence.
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            now: Duration::ZERO,
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
            next_id: 1,
            frames: Vec::new(),
            timers: Vec::new(),
            subscriptions: Vec::new(),
            stats: HostStats::default(),
        }
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn live_subscriptions_of(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|(_, k)| *k == kind).count()
    }

    /// Move the clock forward by `dt`.
    ///
    /// Due timers fire first (in deadline order), then every frame request
    /// that was pending when the call started fires once.
    pub fn advance(&mut self, dt: Duration) -> Vec<HostSignal> {
        self.now += dt;

        let now = self.now;
        let mut due: Vec<(TimerHandle, Duration)> = Vec::new();
        self.timers.retain(|&(handle, deadline)| {
            if deadline <= now {
                due.push((handle, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(handle, deadline)| (deadline, handle));

        let mut out = Vec::with_capacity(due.len() + self.frames.len());
        for (handle, _) in due {
            self.stats.timers_fired += 1;
            out.push(HostSignal::Timer(handle));
        }
        for request in std::mem::take(&mut self.frames) {
            self.stats.frames_fired += 1;
            out.push(HostSignal::Frame {
                request,
                timestamp: now,
            });
        }
        out
    }

    /// Advance by one frame interval.
    pub fn next_frame(&mut self) -> Vec<HostSignal> {
        self.advance(self.frame_interval)
    }

    /// Change the viewport and notify resize listeners.
    pub fn resize(&mut self, viewport: Viewport) -> Vec<HostSignal> {
        self.viewport = viewport;
        self.emit(HostEvent::Resize(viewport))
    }

    pub fn pointer_move(&mut self, at: Point) -> Vec<HostSignal> {
        self.emit(HostEvent::PointerMove(at))
    }

    pub fn key_down(&mut self, key: Key) -> Vec<HostSignal> {
        self.emit(HostEvent::KeyDown(key))
    }

    fn emit(&mut self, event: HostEvent) -> Vec<HostSignal> {
        let kind = event.kind();
        self.subscriptions
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|&(subscription, _)| HostSignal::Event {
                subscription,
                event: event.clone(),
            })
            .collect()
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Host for VirtualHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.fresh_id());
        self.frames.push(request);
        self.stats.frames_requested += 1;
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let before = self.frames.len();
        self.frames.retain(|r| *r != request);
        if self.frames.len() != before {
            self.stats.frames_cancelled += 1;
        }
    }

    fn set_timer(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.fresh_id());
        self.timers.push((handle, self.now + delay));
        self.stats.timers_set += 1;
        handle
    }

    fn clear_timer(&mut self, timer: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|(h, _)| *h != timer);
        if self.timers.len() != before {
            self.stats.timers_cleared += 1;
        }
    }

    fn subscribe(&mut self, kind: EventKind) -> Subscription {
        let subscription = Subscription(self.fresh_id());
        self.subscriptions.push((subscription, kind));
        self.stats.subscribed += 1;
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|(s, _)| *s != subscription);
        if self.subscriptions.len() != before {
            self.stats.unsubscribed += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/virtual_host.rs"]
mod tests;
