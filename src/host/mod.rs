//! Host environment abstraction.
//!
//! A host owns the real scheduling primitives (frame callbacks, timers, event
//! listeners) and hands back opaque handles. Components keep the handles they
//! were given and must return every one of them on teardown; the host then
//! stops delivering signals for those handles.

use std::time::Duration;

use crate::foundation::core::{Point, Viewport};

pub mod virtual_host;

/// Handle for one pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

/// Handle for one pending one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Handle for one registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(pub u64);

/// Event families a component can listen to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    PointerMove,
    KeyDown,
}

/// Keyboard keys the engine cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

/// Payload of an event delivered to a listener.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Resize(Viewport),
    PointerMove(Point),
    KeyDown(Key),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Resize(_) => EventKind::Resize,
            Self::PointerMove(_) => EventKind::PointerMove,
            Self::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

/// Something the host delivers back to a component.
#[derive(Clone, Debug, PartialEq)]
pub enum HostSignal {
    Frame {
        request: FrameRequest,
        /// Host time at which the frame fires.
        timestamp: Duration,
    },
    Timer(TimerHandle),
    Event {
        subscription: Subscription,
        event: HostEvent,
    },
}

/// Scheduling primitives provided by the environment the engine runs in.
pub trait Host {
    /// Current viewport size in device pixels.
    fn viewport(&self) -> Viewport;

    /// Ask for a single frame callback.
    fn request_frame(&mut self) -> FrameRequest;

    /// Drop a pending frame callback. Unknown or already fired requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Arm a one-shot timer.
    fn set_timer(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a timer. Unknown or already fired timers are ignored.
    fn clear_timer(&mut self, timer: TimerHandle);

    /// Register a listener for an event family.
    fn subscribe(&mut self, kind: EventKind) -> Subscription;

    /// Remove a listener. Unknown subscriptions are ignored.
    fn unsubscribe(&mut self, subscription: Subscription);
}
