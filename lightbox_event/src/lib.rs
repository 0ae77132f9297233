// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Event: the pointer/touch event model shared by the Lightbox crates.
//!
//! This crate defines:
//! - [`EventKind`]: a closed enum of pointer and touch event kinds (no magic
//!   strings at call sites; [`EventKind::name`]/[`EventKind::from_name`] map to
//!   and from the conventional wire names of an embedding environment).
//! - [`PointerEvent`]: one input event — a kind, a position, and the
//!   propagation-control flags handlers may set
//!   ([`PointerEvent::stop_propagation`],
//!   [`PointerEvent::stop_immediate_propagation`],
//!   [`PointerEvent::prevent_default`]).
//! - [`Listeners`]: per-node listener storage, a map from [`EventKind`] to an
//!   ordered handler list, with [`Listeners::dispatch`] invoking the handlers
//!   registered for the event's kind in registration order.
//!
//! Propagation semantics are split across two flags:
//! - *Propagation stop* suppresses all further ancestor dispatch. It is only
//!   queried here; the tree walk in `lightbox_dispatch` checks it once per
//!   node before that node's handlers run.
//! - *Immediate-propagation stop* is scoped to a single node's handler list:
//!   the remaining handlers at that node are skipped, but ancestors still
//!   receive the event. [`Listeners::dispatch`] resets the flag on entry to
//!   give it that per-node scope.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use lightbox_event::{EventKind, Listeners, PointerEvent};
//!
//! let mut listeners = Listeners::new();
//! listeners.add(EventKind::Click, |ev| ev.stop_propagation());
//!
//! let mut ev = PointerEvent::new(EventKind::Click, Point::new(4.0, 2.0));
//! listeners.dispatch(&mut ev);
//! assert!(ev.is_propagation_stopped());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Kind of a pointer or touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary button (or touch contact) pressed.
    MouseDown,
    /// Primary button released.
    MouseUp,
    /// Press and release on the same spot.
    Click,
    /// Pointer moved.
    MouseMove,
    /// Touch contact started.
    TouchStart,
    /// Touch contact ended.
    TouchEnd,
    /// Touch contact moved.
    TouchMove,
    /// Touch contact canceled by the platform.
    TouchCancel,
}

impl EventKind {
    /// All event kinds, in a stable order. Useful when wiring every kind of an
    /// embedding environment to a single dispatch entry point.
    pub const ALL: [Self; 8] = [
        Self::MouseDown,
        Self::MouseUp,
        Self::Click,
        Self::MouseMove,
        Self::TouchStart,
        Self::TouchEnd,
        Self::TouchMove,
        Self::TouchCancel,
    ];

    /// Whether this kind belongs to the touch class.
    ///
    /// Touch-class events may trigger default platform gestures (scrolling,
    /// zooming); the dispatcher requests their suppression when the raw event
    /// targeted the drawing surface.
    pub const fn is_touch(self) -> bool {
        matches!(
            self,
            Self::TouchStart | Self::TouchEnd | Self::TouchMove | Self::TouchCancel
        )
    }

    /// The conventional wire name of this kind in an embedding environment.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::Click => "click",
            Self::MouseMove => "mousemove",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::TouchMove => "touchmove",
            Self::TouchCancel => "touchcancel",
        }
    }

    /// Parse a conventional wire name back into a kind.
    ///
    /// Returns `None` for names this engine does not route.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// One pointer or touch input event, carried mutably through a dispatch pass.
///
/// Handlers communicate back to the dispatcher (and to the embedder) purely
/// through the flags on the event; the dispatcher itself only ever queries
/// them.
#[derive(Debug)]
pub struct PointerEvent {
    /// What happened.
    pub kind: EventKind,
    /// Where it happened, in root-surface coordinates.
    pub position: Point,
    /// Whether the raw input targeted the drawing surface itself (as opposed
    /// to some other element of the embedding environment). Touch default
    /// suppression only applies to surface-targeted events.
    pub surface_target: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
    default_prevented: bool,
}

impl PointerEvent {
    /// Create an event targeting the drawing surface, with no flags set.
    pub const fn new(kind: EventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            surface_target: true,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Suppress all further ancestor dispatch for this event.
    ///
    /// Handlers already queued at the current node still run; the check happens
    /// once per node, before that node's handlers are invoked.
    pub const fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Skip the remaining handlers at the current node only.
    ///
    /// Ancestor dispatch still proceeds unless [`Self::stop_propagation`] was
    /// also called.
    pub const fn stop_immediate_propagation(&mut self) {
        self.immediate_propagation_stopped = true;
    }

    /// Ask the embedding environment not to run its default action (for touch
    /// events: platform gestures). Visible to the embedder only; dispatch is
    /// unaffected.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler requested a propagation stop.
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether a handler at the node currently being dispatched requested an
    /// immediate-propagation stop.
    pub const fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    /// Whether default-action suppression was requested.
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Reset the per-node immediate-propagation flag. Called on entry to each
    /// node's handler list so the flag cannot leak into ancestors.
    const fn begin_node(&mut self) {
        self.immediate_propagation_stopped = false;
    }
}

/// A registered event handler.
pub type Listener = Box<dyn FnMut(&mut PointerEvent)>;

/// Per-node listener storage: event kind → ordered handler list.
///
/// Every tree node carries one of these; registration lazily allocates the
/// per-kind list, so nodes without handlers stay cheap.
#[derive(Default)]
pub struct Listeners {
    map: HashMap<EventKind, SmallVec<[Listener; 1]>>,
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Listeners");
        for (kind, handlers) in &self.map {
            s.field(kind.name(), &handlers.len());
        }
        s.finish_non_exhaustive()
    }
}

impl Listeners {
    /// Create empty listener storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `kind`, after any already registered for it.
    pub fn add(&mut self, kind: EventKind, listener: impl FnMut(&mut PointerEvent) + 'static) {
        self.map.entry(kind).or_default().push(Box::new(listener));
    }

    /// Whether no handlers are registered for any kind.
    pub fn is_empty(&self) -> bool {
        self.map.values().all(|h| h.is_empty())
    }

    /// Number of handlers registered for `kind`.
    pub fn len(&self, kind: EventKind) -> usize {
        self.map.get(&kind).map_or(0, |handlers| handlers.len())
    }

    /// Invoke the handlers registered for the event's kind, in registration
    /// order.
    ///
    /// The immediate-propagation flag is reset on entry (it is scoped to one
    /// node's list) and checked before each handler, so a handler raising it
    /// skips the rest of this list but nothing beyond it.
    pub fn dispatch(&mut self, event: &mut PointerEvent) {
        event.begin_node();
        let Some(handlers) = self.map.get_mut(&event.kind) else {
            return;
        };
        for handler in handlers.iter_mut() {
            if event.is_immediate_propagation_stopped() {
                return;
            }
            handler(event);
        }
    }
}
